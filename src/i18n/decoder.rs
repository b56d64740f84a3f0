//! JSON decoder for language pack documents.
//!
//! Document shape, shared by embedded resources and external files:
//!
//! ```json
//! { "lang_id": 1033, "lang_name": "English", "strings": { "key": "value" } }
//! ```

use serde::Deserialize;
use std::collections::HashMap;

use crate::i18n::{DecodeError, Language};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Wire shape of a language pack. Unknown fields are ignored.
#[derive(Debug, Deserialize)]
struct LanguageDocument {
    lang_id: i32,
    lang_name: String,
    strings: HashMap<String, String>,
}

/// Decode one language pack document.
///
/// Fails on invalid JSON, missing fields, wrong field types (including a
/// non-string value in `strings`) and a `lang_id` outside the `i32` range.
/// A leading UTF-8 byte-order mark is accepted. Repeated keys keep their
/// last value.
pub fn decode_language(bytes: &[u8]) -> Result<Language, DecodeError> {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    // Going through `Value` collapses repeated keys before the typed pass
    let value: serde_json::Value = serde_json::from_slice(bytes)?;
    let doc: LanguageDocument = serde_json::from_value(value)?;

    Ok(Language::new(doc.lang_id, doc.lang_name, doc.strings))
}
