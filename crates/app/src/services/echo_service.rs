//! Echo service: hands a payload back untouched.

use verecho_domain::payload::Payload;

/// Application service for the echo use-case.
#[derive(Debug, Default, Clone, Copy)]
pub struct EchoService;

impl EchoService {
    /// Create a new echo service.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Return `payload` unchanged.
    #[must_use]
    pub fn echo(&self, payload: Payload) -> Payload {
        tracing::debug!(kind = payload.kind(), "echoing payload");
        payload
    }
}
