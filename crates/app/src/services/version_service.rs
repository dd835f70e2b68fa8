//! Version service: reports the version currently configured.

use verecho_domain::version::VersionInfo;

use crate::ports::VersionSource;

/// Application service answering "which version is this?".
pub struct VersionService<S> {
    source: S,
}

impl<S: VersionSource> VersionService<S> {
    /// Create a new service backed by the given source.
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Look the version up now. Nothing is cached between calls.
    pub fn current(&self) -> VersionInfo {
        let info = VersionInfo::new(self.source.version());
        if !info.is_known() {
            tracing::debug!("no version configured");
        }
        info
    }
}
