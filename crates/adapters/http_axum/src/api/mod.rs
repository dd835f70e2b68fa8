//! JSON handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod echo;
pub mod version;

use axum::Router;
use axum::routing::{get, post};

use verecho_app::ports::VersionSource;

use crate::error::ApiError;
use crate::state::AppState;

/// Build the route table.
///
/// A known path hit with the wrong method falls through to [`not_found`]
/// instead of axum's default `405`.
pub fn routes<S>() -> Router<AppState<S>>
where
    S: VersionSource + Send + Sync + 'static,
{
    Router::new()
        .route("/get", get(version::get::<S>).fallback(not_found))
        .route("/post", post(echo::post::<S>).fallback(not_found))
        .fallback(not_found)
}

/// Fallback for anything no route matches.
pub async fn not_found() -> ApiError {
    ApiError::NotFound
}
