//! # verecho-adapter-env
//!
//! Driven adapter implementing [`VersionSource`] on top of the process
//! environment.
//!
//! The variable is read on every call rather than once at startup, so the
//! value seen by clients is whatever the environment holds when the request
//! is served.
//!
//! ## Dependency rule
//! Same as other adapters: depends on `verecho-app` for the port trait.

use verecho_app::ports::VersionSource;

/// Name of the variable read when none is configured.
pub const DEFAULT_VERSION_VAR: &str = "VERSION";

/// Reads the version from a named environment variable.
#[derive(Debug, Clone)]
pub struct EnvVersionSource {
    var: String,
}

impl Default for EnvVersionSource {
    fn default() -> Self {
        Self::new(DEFAULT_VERSION_VAR)
    }
}

impl EnvVersionSource {
    /// Create a source reading the variable called `var`.
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }

    /// Name of the variable this source reads.
    #[must_use]
    pub fn var(&self) -> &str {
        &self.var
    }
}

impl VersionSource for EnvVersionSource {
    fn version(&self) -> Option<String> {
        let raw = std::env::var_os(&self.var)?;
        match raw.into_string() {
            Ok(value) => Some(value),
            Err(raw) => {
                tracing::warn!(var = %self.var, "version variable is not valid unicode");
                Some(raw.to_string_lossy().into_owned())
            }
        }
    }
}
