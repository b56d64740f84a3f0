//! Language record: one decoded language pack.

use std::collections::{BTreeMap, HashMap};

use crate::i18n::{decode_language, DecodeError};

/// Loaded languages keyed by language code.
///
/// Later inserts for the same code replace earlier ones.
pub type LanguageTable = BTreeMap<i32, Language>;

/// A decoded language pack.
///
/// Immutable once created; identity is the numeric `code`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Language {
    /// Windows LCID (e.g., 1033 for English-US, 1036 for French)
    code: i32,

    /// Display name as written in the pack (e.g., "Français")
    name: String,

    /// Translation key → translated string
    translations: HashMap<String, String>,
}

impl Language {
    /// Create a language record from its parts.
    pub fn new(code: i32, name: impl Into<String>, translations: HashMap<String, String>) -> Self {
        Self {
            code,
            name: name.into(),
            translations,
        }
    }

    /// Decode a language pack from JSON text.
    ///
    /// # Example
    /// ```ignore
    /// let lang = Language::from_json(r#"{"lang_id":1033,"lang_name":"English","strings":{}}"#)?;
    /// ```
    pub fn from_json(json: &str) -> Result<Self, DecodeError> {
        decode_language(json.as_bytes())
    }

    pub fn code(&self) -> i32 {
        self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn translations(&self) -> &HashMap<String, String> {
        &self.translations
    }

    /// Look up a single key in this language.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.translations.get(key).map(String::as_str)
    }

    /// Number of translated strings in this pack.
    pub fn len(&self) -> usize {
        self.translations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.translations.is_empty()
    }
}
