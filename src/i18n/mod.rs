//! Internationalization (i18n) module for language pack loading.
//!
//! Language packs come from two places: resources embedded in the binary and
//! `.json` files in the configured languages directory. Both share the same
//! document shape and are decoded by the same decoder.
//!
//! # Architecture
//!
//! - `language`: The `Language` record and the `LanguageTable` keyed by code
//! - `decoder`: JSON document → `Language`
//! - `resource`: Embedded language resources behind the `ResourceSource` trait
//! - `directory`: Scans the languages directory for `.json` packs
//! - `translator`: Merges both sources and resolves keys with fallback
//! - `error`: Decode and load errors
//!
//! # Example
//!
//! ```rust,ignore
//! use langpack::config::Config;
//! use langpack::i18n::{EmbeddedResources, Translator};
//!
//! let config = Config::from_env()?;
//! let translator = Translator::load(&EmbeddedResources::builtin(), &config)?;
//!
//! // Falls back to English (1033), then to the key itself
//! let label = translator.translate("menu_file");
//! ```

mod decoder;
mod directory;
mod error;
mod language;
mod resource;
mod translator;

pub use decoder::decode_language;
pub use directory::load_directory;
pub use error::{DecodeError, LoadError};
pub use language::{Language, LanguageTable};
pub use resource::{
    load_resources, EmbeddedResources, LanguageResource, NoResources, ResourceSource,
};
pub use translator::{Translator, DEFAULT_LANGUAGE_ID};
