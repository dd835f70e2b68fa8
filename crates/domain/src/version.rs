//! Version reported by the service.

use serde::{Deserialize, Serialize};

/// Response body of the version endpoint.
///
/// An unknown version is serialized as `null` rather than omitted, so clients
/// can always rely on the `version` key being present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionInfo {
    /// Version string as configured, or `None` when nothing is configured.
    pub version: Option<String>,
}

impl VersionInfo {
    /// Wrap a possibly missing version string.
    #[must_use]
    pub fn new(version: Option<String>) -> Self {
        Self { version }
    }

    /// Build a [`VersionInfo`] with no version configured.
    #[must_use]
    pub fn unknown() -> Self {
        Self::default()
    }

    /// Whether a version is configured.
    #[must_use]
    pub fn is_known(&self) -> bool {
        self.version.is_some()
    }
}
