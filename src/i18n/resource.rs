//! Language packs embedded in the binary.
//!
//! Embedded packs sit behind the `ResourceSource` trait so that a target
//! without an embedded-resource concept can plug in `NoResources`, and tests
//! can feed in-memory documents.

use tracing::{debug, warn};

use crate::i18n::{decode_language, LanguageTable};

/// One embedded language resource: an identifier and its raw bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageResource<'a> {
    /// Resource name, used only for diagnostics
    pub id: &'a str,

    /// Undecoded JSON document
    pub data: &'a [u8],
}

/// Produces the embedded language resources available to this build.
pub trait ResourceSource {
    fn language_resources(&self) -> Vec<LanguageResource<'_>>;
}

/// Packs compiled into the binary with `include_str!`.
#[derive(Debug, Clone, Copy)]
pub struct EmbeddedResources {
    entries: &'static [(&'static str, &'static str)],
}

/// Packs shipped with the application. English (1033) is the fallback
/// language and must stay in this list.
const BUILTIN_PACKS: &[(&str, &str)] = &[
    ("1031", include_str!("../../resources/lang/1031.json")),
    ("1033", include_str!("../../resources/lang/1033.json")),
    ("1036", include_str!("../../resources/lang/1036.json")),
];

impl EmbeddedResources {
    /// Wrap a static `(id, json)` table.
    pub const fn new(entries: &'static [(&'static str, &'static str)]) -> Self {
        Self { entries }
    }

    /// The language packs shipped with the application.
    pub const fn builtin() -> Self {
        Self::new(BUILTIN_PACKS)
    }
}

impl ResourceSource for EmbeddedResources {
    fn language_resources(&self) -> Vec<LanguageResource<'_>> {
        self.entries
            .iter()
            .map(|&(id, json)| LanguageResource {
                id,
                data: json.as_bytes(),
            })
            .collect()
    }
}

/// Empty source for builds without embedded packs.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoResources;

impl ResourceSource for NoResources {
    fn language_resources(&self) -> Vec<LanguageResource<'_>> {
        Vec::new()
    }
}

/// Owned `(id, bytes)` pairs, e.g. packs assembled at runtime.
impl ResourceSource for Vec<(String, Vec<u8>)> {
    fn language_resources(&self) -> Vec<LanguageResource<'_>> {
        self.iter()
            .map(|(id, data)| LanguageResource {
                id: id.as_str(),
                data: data.as_slice(),
            })
            .collect()
    }
}

/// Decode every resource from `source` into `table`.
///
/// Resources that fail to decode are logged and skipped. On a code collision
/// the resource enumerated last wins. Returns the number of languages
/// inserted.
pub fn load_resources(source: &dyn ResourceSource, table: &mut LanguageTable) -> usize {
    let mut loaded = 0;

    for resource in source.language_resources() {
        match decode_language(resource.data) {
            Ok(lang) => {
                debug!(
                    "Loaded embedded language {} ({}) from resource {}",
                    lang.code(),
                    lang.name(),
                    resource.id
                );
                if let Some(previous) = table.insert(lang.code(), lang) {
                    debug!(
                        "Embedded resource {} replaced language {}",
                        resource.id,
                        previous.code()
                    );
                }
                loaded += 1;
            }
            Err(e) => {
                warn!("Skipping embedded language resource {}: {}", resource.id, e);
            }
        }
    }

    loaded
}
