//! Echo handler.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::response::{IntoResponse, Response};

use verecho_app::ports::VersionSource;
use verecho_domain::payload::Payload;

use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the echo endpoint.
pub enum PostResponse {
    Ok(Json<Payload>),
}

impl IntoResponse for PostResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `POST /post`: answer with the request body.
pub async fn post<S>(
    State(state): State<AppState<S>>,
    body: Result<Json<Payload>, JsonRejection>,
) -> Result<PostResponse, ApiError>
where
    S: VersionSource + Send + Sync + 'static,
{
    let Json(payload) = body?;
    Ok(PostResponse::Ok(Json(state.echo_service.echo(payload))))
}
