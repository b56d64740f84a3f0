//! Language pack loading and key translation for the desktop client.
//!
//! Language packs are JSON documents compiled into the binary or dropped
//! into a languages directory. See [`i18n::Translator`] for the entry point.

pub mod config;
pub mod i18n;
