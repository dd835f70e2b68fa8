//! Version handler.

use axum::Json;
use axum::extract::State;
use axum::response::{IntoResponse, Response};

use verecho_app::ports::VersionSource;
use verecho_domain::version::VersionInfo;

use crate::state::AppState;

/// Possible responses from the version endpoint.
pub enum GetResponse {
    Ok(Json<VersionInfo>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /get`
pub async fn get<S>(State(state): State<AppState<S>>) -> GetResponse
where
    S: VersionSource + Send + Sync + 'static,
{
    GetResponse::Ok(Json(state.version_service.current()))
}
