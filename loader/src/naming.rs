//! Entity type and reference prefix derivation.
//!
//! The convention: take the loader's short name, strip a leading `Load`
//! token and a trailing `Data` token, and substitute the fixtures module
//! segment with the entities module segment in the qualified part.
//! `fixtures::LoadEventData` derives entity type `entities::Event` and
//! reference prefix `event_`.

use regex_lite::Regex;

use crate::error::{LoaderError, LoaderResult};

/// Default strip pattern for the loader-name prefix token.
pub const DEFAULT_PREFIX_PATTERN: &str = "^Load";
/// Default strip pattern for the loader-name suffix token.
pub const DEFAULT_SUFFIX_PATTERN: &str = "Data$";
/// Default fixtures-module segment replaced in qualified loader names.
pub const DEFAULT_FIXTURES_SEGMENT: &str = "fixtures";
/// Default entities-module segment substituted in.
pub const DEFAULT_ENTITIES_SEGMENT: &str = "entities";

/// The pluggable naming rule used when no explicit override is set.
#[derive(Debug, Clone)]
pub struct NamingConvention {
    strip_prefix: Regex,
    strip_suffix: Regex,
    fixtures_segment: String,
    entities_segment: String,
}

impl NamingConvention {
    /// The standard convention: strip `Load`/`Data`, substitute
    /// `fixtures` with `entities`.
    pub fn new() -> Self {
        Self::with_patterns(DEFAULT_PREFIX_PATTERN, DEFAULT_SUFFIX_PATTERN)
            .expect("default naming patterns are valid")
    }

    /// A convention with custom strip patterns.
    pub fn with_patterns(prefix: &str, suffix: &str) -> LoaderResult<Self> {
        let strip_prefix = Regex::new(prefix)
            .map_err(|e| LoaderError::invalid_naming_pattern(prefix, e))?;
        let strip_suffix = Regex::new(suffix)
            .map_err(|e| LoaderError::invalid_naming_pattern(suffix, e))?;

        Ok(Self {
            strip_prefix,
            strip_suffix,
            fixtures_segment: DEFAULT_FIXTURES_SEGMENT.to_string(),
            entities_segment: DEFAULT_ENTITIES_SEGMENT.to_string(),
        })
    }

    /// Change the module segments substituted in qualified loader names.
    pub fn with_segments(
        mut self,
        fixtures: impl Into<String>,
        entities: impl Into<String>,
    ) -> Self {
        self.fixtures_segment = fixtures.into();
        self.entities_segment = entities.into();
        self
    }

    /// Short (unqualified) name: the last `::` segment.
    pub fn short_name(path: &str) -> &str {
        path.rsplit("::").next().unwrap_or(path)
    }

    /// Stripped short entity name for a loader: `LoadEventData` -> `Event`.
    pub fn entity_short_name(&self, loader_name: &str) -> String {
        let short = Self::short_name(loader_name);
        let stripped = self.strip_prefix.replace(short, "");
        self.strip_suffix.replace(&stripped, "").into_owned()
    }

    /// Derived entity type name for a loader:
    /// `acme::fixtures::LoadEventData` -> `acme::entities::Event`.
    pub fn entity_type(&self, loader_name: &str) -> String {
        let short = self.entity_short_name(loader_name);
        match loader_name.rsplit_once("::") {
            Some((module, _)) => {
                let module = module
                    .split("::")
                    .map(|segment| {
                        if segment == self.fixtures_segment {
                            self.entities_segment.as_str()
                        } else {
                            segment
                        }
                    })
                    .collect::<Vec<_>>()
                    .join("::");
                format!("{}::{}", module, short)
            }
            None => short,
        }
    }

    /// Reference prefix for an entity name: `entities::Event` -> `event_`.
    pub fn reference_prefix(entity_name: &str) -> String {
        format!("{}_", Self::short_name(entity_name).to_lowercase())
    }
}

impl Default for NamingConvention {
    fn default() -> Self {
        Self::new()
    }
}
