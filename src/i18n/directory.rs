//! Language packs dropped into the languages directory.

use std::fs;
use std::path::Path;
use tracing::{debug, warn};

use crate::i18n::{decode_language, LanguageTable, LoadError};

/// Decode every `*.json` file directly inside `dir` into `table`.
///
/// Only the top level is scanned and the extension must be exactly `json`
/// (a file named just `.json` counts).
/// Files override any language already in the table with the same code.
/// Unreadable or malformed files are logged and skipped; a directory that
/// cannot be listed is an error. Returns the number of languages inserted.
pub fn load_directory(dir: &Path, table: &mut LanguageTable) -> Result<usize, LoadError> {
    let entries = fs::read_dir(dir).map_err(|source| LoadError::LanguagesDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut loaded = 0;

    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping unreadable entry in {}: {}", dir.display(), e);
                continue;
            }
        };

        let path = entry.path();
        if !is_language_file(&path) {
            continue;
        }

        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!("Skipping unreadable language file {}: {}", path.display(), e);
                continue;
            }
        };

        match decode_language(&bytes) {
            Ok(lang) => {
                let code = lang.code();
                if let Some(previous) = table.insert(code, lang) {
                    debug!(
                        "{} overrides language {} ({})",
                        path.display(),
                        code,
                        previous.name()
                    );
                } else {
                    debug!("Loaded language {} from {}", code, path.display());
                }
                loaded += 1;
            }
            Err(e) => {
                warn!("Skipping language file {}: {}", path.display(), e);
            }
        }
    }

    Ok(loaded)
}

/// `*.json`, including a file named just `.json`, which `Path::extension`
/// treats as a stem with no extension.
fn is_language_file(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "json")
        || path.file_name().is_some_and(|name| name == ".json")
}
