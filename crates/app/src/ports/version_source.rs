//! Version source port: where the reported version is looked up.

/// Provides the version the service reports.
///
/// Implementations are queried on every request, so a changed value is
/// picked up without a restart. Lookups must not block.
pub trait VersionSource {
    /// Return the current version, or `None` when none is configured.
    fn version(&self) -> Option<String>;
}

impl<T: VersionSource + ?Sized> VersionSource for std::sync::Arc<T> {
    fn version(&self) -> Option<String> {
        (**self).version()
    }
}
