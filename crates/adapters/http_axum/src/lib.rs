//! # verecho-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve `GET /get`: the currently configured version as JSON
//! - Serve `POST /post`: echo a JSON request body back to the caller
//! - Answer every other method/path combination with `404`
//! - Map body-parsing failures into `400` JSON error responses
//!
//! ## Dependency rule
//! Depends on `verecho-app` (for the port trait and services) and
//! `verecho-domain` (for the request/response values). Never leaks axum types
//! into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
