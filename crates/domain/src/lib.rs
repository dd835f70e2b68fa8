//! # verecho-domain
//!
//! Pure domain values for the verecho service.
//!
//! ## Responsibilities
//! - [`VersionInfo`](version::VersionInfo): the version reported by `GET /get`
//! - [`Payload`](payload::Payload): an arbitrary JSON document echoed by `POST /post`
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! Where the version comes from is expressed as a trait in the `app` crate (ports).

pub mod payload;
pub mod version;
