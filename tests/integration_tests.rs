//! Integration tests for language pack loading
//!
//! These tests drive `Translator::load` end to end: embedded resources,
//! a languages directory on disk, and configuration from the environment.

use serial_test::serial;
use std::fs;
use tempfile::TempDir;

use langpack::config::Config;
use langpack::i18n::{
    EmbeddedResources, LoadError, NoResources, Translator, DEFAULT_LANGUAGE_ID,
};

// ==================== Test Helpers ====================

const ENGLISH: &str = r#"{"lang_id":1033,"lang_name":"English","strings":{"ok":"OK"}}"#;
const FRENCH: &str = r#"{"lang_id":1036,"lang_name":"Français","strings":{"ok":"D'accord"}}"#;

/// One embedded English pack, as shipped in the binary
fn english_resources() -> Vec<(String, Vec<u8>)> {
    vec![("1033".to_string(), ENGLISH.as_bytes().to_vec())]
}

/// Create a languages directory containing the given files
fn languages_dir(files: &[(&str, &str)]) -> TempDir {
    let dir = TempDir::new().expect("Failed to create temp dir");
    for (name, contents) in files {
        fs::write(dir.path().join(name), contents).expect("Failed to write language file");
    }
    dir
}

// ==================== Selection and Fallback Tests ====================

#[test]
fn test_selected_external_language() {
    let dir = languages_dir(&[("fr.json", FRENCH)]);
    let translator =
        Translator::load(&english_resources(), &Config::new(dir.path(), 1036)).expect("load");

    assert_eq!(translator.translate("ok"), "D'accord");
    assert_eq!(translator.translate("missing"), "missing");
}

#[test]
fn test_unloaded_selection_falls_back_to_english() {
    let dir = languages_dir(&[("fr.json", FRENCH)]);
    let translator =
        Translator::load(&english_resources(), &Config::new(dir.path(), 9999)).expect("load");

    assert_eq!(translator.translate("ok"), "OK");
    assert_eq!(translator.translate("missing"), "missing");
}

#[test]
fn test_no_fallback_language_echoes_keys() {
    let dir = languages_dir(&[("fr.json", FRENCH)]);
    let translator =
        Translator::load(&NoResources, &Config::new(dir.path(), 1031)).expect("load");

    for key in ["ok", "missing", "", "menu.file.open"] {
        assert_eq!(translator.translate(key), key);
    }
}

// ==================== Merge Tests ====================

#[test]
fn test_directory_replaces_embedded_language() {
    let dir = languages_dir(&[(
        "english-override.json",
        r#"{"lang_id":1033,"lang_name":"English (custom)","strings":{"cancel":"Never mind"}}"#,
    )]);
    let translator =
        Translator::load(&english_resources(), &Config::new(dir.path(), 1033)).expect("load");

    let english = translator.language(1033).expect("English should be loaded");
    assert_eq!(english.name(), "English (custom)");
    assert_eq!(translator.translate("cancel"), "Never mind");
    // The embedded "ok" entry is gone with the replaced record
    assert_eq!(translator.translate("ok"), "ok");
}

#[test]
fn test_malformed_files_do_not_abort_load() {
    let dir = languages_dir(&[
        ("broken.json", r#"{"lang_id": 1033}"#),
        ("truncated.json", r#"{"lang_id": 1036, "lang_name": "Fr"#),
        ("fr.json", FRENCH),
        ("notes.txt", "not a language"),
    ]);
    let translator =
        Translator::load(&english_resources(), &Config::new(dir.path(), 1036)).expect("load");

    let mut codes: Vec<i32> = translator
        .available_languages()
        .iter()
        .map(|l| l.code())
        .collect();
    codes.sort();
    assert_eq!(codes, vec![1033, 1036]);
    // Embedded English survived the broken 1033 file
    assert_eq!(translator.language(1033).map(|l| l.name()), Some("English"));
}

// ==================== Builtin Pack Tests ====================

#[test]
fn test_builtin_packs_with_empty_directory() {
    let dir = languages_dir(&[]);
    let translator = Translator::load(&EmbeddedResources::builtin(), &Config::new(dir.path(), 1031))
        .expect("load");

    assert!(translator.language(DEFAULT_LANGUAGE_ID).is_some());
    assert_eq!(translator.translate("cancel"), "Abbrechen");
}

#[test]
fn test_builtin_packs_share_keys_with_english() {
    let dir = languages_dir(&[]);
    let translator = Translator::load(&EmbeddedResources::builtin(), &Config::new(dir.path(), 1033))
        .expect("load");

    let english = translator.language(DEFAULT_LANGUAGE_ID).expect("English");
    for lang in translator.available_languages() {
        for key in english.translations().keys() {
            assert!(
                lang.get(key).is_some(),
                "{} is missing key {}",
                lang.name(),
                key
            );
        }
    }
}

// ==================== Configuration Tests ====================

#[test]
fn test_json_named_file_and_repeated_keys_load() {
    let dir = languages_dir(&[(
        ".json",
        r#"{"lang_id":1036,"lang_name":"Fr","lang_name":"Français","strings":{"ok":"D'accord"}}"#,
    )]);
    let translator =
        Translator::load(&english_resources(), &Config::new(dir.path(), 1036)).expect("load");

    assert_eq!(translator.language(1036).map(|l| l.name()), Some("Français"));
    assert_eq!(translator.translate("ok"), "D'accord");
}

#[test]
fn test_missing_explicit_directory_is_fatal() {
    let dir = languages_dir(&[]);
    let config = Config::new(dir.path().join("nope"), 1033);

    let err = Translator::load(&english_resources(), &config).unwrap_err();
    assert!(matches!(err, LoadError::LanguagesDir { .. }));
    assert!(err.to_string().contains("nope"));
}

#[test]
#[serial]
fn test_config_from_env_drives_load() {
    let dir = languages_dir(&[("fr.json", FRENCH)]);
    std::env::set_var("LANGUAGES_PATH", dir.path());
    std::env::set_var("LANGUAGE_ID", "1036");

    let config = Config::from_env().expect("config");
    std::env::remove_var("LANGUAGES_PATH");
    std::env::remove_var("LANGUAGE_ID");

    let translator = Translator::load(&english_resources(), &config).expect("load");
    assert_eq!(translator.selected_language_id(), 1036);
    assert_eq!(translator.translate("ok"), "D'accord");
}

#[test]
#[serial]
fn test_default_directory_missing_uses_embedded() {
    std::env::remove_var("LANGUAGES_PATH");
    std::env::remove_var("LANGUAGE_ID");
    let from_env = Config::from_env().expect("config");
    assert!(!from_env.languages_path_explicit());

    // Same kind of default, pointed at a directory that does not exist
    let dir = languages_dir(&[]);
    let config =
        Config::with_default_path(dir.path().join("lang"), from_env.current_language_id());

    let translator = Translator::load(&english_resources(), &config).expect("load");
    assert_eq!(translator.translate("ok"), "OK");
}
