use serde::Deserialize;
use std::path::PathBuf;

/// What to do with a member or compound whose `prot` is not `public`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisibilityPolicy {
    /// Fail the invocation.
    #[default]
    Reject,
    /// Render nothing for it.
    Skip,
}

/// Settings consumed by a `doxygenfile` invocation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Directory whose `xml/` subdirectory holds `index.xml` and the
    /// per-refid documents.
    pub doxygen_xml: Option<PathBuf>,
    pub non_public: VisibilityPolicy,
    /// Record a warning when no file compound matches the requested name.
    pub warn_unmatched: bool,
}

impl Config {
    pub fn with_doxygen_xml(mut self, path: impl Into<PathBuf>) -> Self {
        self.doxygen_xml = Some(path.into());
        self
    }

    pub fn with_non_public(mut self, policy: VisibilityPolicy) -> Self {
        self.non_public = policy;
        self
    }

    pub fn with_warn_unmatched(mut self, warn: bool) -> Self {
        self.warn_unmatched = warn;
        self
    }
}
