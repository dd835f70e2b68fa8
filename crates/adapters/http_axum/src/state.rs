//! Shared application state for axum handlers.

use std::sync::Arc;

use verecho_app::ports::VersionSource;
use verecho_app::services::echo_service::EchoService;
use verecho_app::services::version_service::VersionService;

/// Application state shared across all axum handlers.
///
/// Generic over the version source to avoid dynamic dispatch.
/// `Clone` is implemented manually so the source itself does not need to be
/// `Clone`; only the `Arc` wrapper is cloned.
pub struct AppState<S> {
    /// Version lookup service.
    pub version_service: Arc<VersionService<S>>,
    /// Echo service.
    pub echo_service: EchoService,
}

impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            version_service: Arc::clone(&self.version_service),
            echo_service: self.echo_service,
        }
    }
}

impl<S> AppState<S>
where
    S: VersionSource + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(version_service: VersionService<S>, echo_service: EchoService) -> Self {
        Self {
            version_service: Arc::new(version_service),
            echo_service,
        }
    }

    /// Create a state whose services are built straight from a version source.
    pub fn from_source(source: S) -> Self {
        Self::new(VersionService::new(source), EchoService::new())
    }
}
