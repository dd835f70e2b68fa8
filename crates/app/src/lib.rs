//! # verecho-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement:
//!   - `VersionSource`: where the reported version comes from
//! - Define **use-case services**:
//!   - `VersionService`: report the current version
//!   - `EchoService`: hand a payload back unchanged
//!
//! ## Dependency rule
//! Depends on `verecho-domain` only. Never imports adapter crates.
//! Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
