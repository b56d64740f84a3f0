use std::path::PathBuf;
use thiserror::Error;

/// A document could not be turned into a `Language`.
///
/// Covers malformed JSON as well as schema mismatches (missing fields,
/// wrong types, out-of-range `lang_id`). Callers skip the document.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("not a language document: {0}")]
    Json(#[from] serde_json::Error),
}

/// Failures that abort `Translator::load`.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The languages directory is missing or cannot be listed.
    #[error("failed to read languages directory {path}: {source}")]
    LanguagesDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
