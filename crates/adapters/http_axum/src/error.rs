//! HTTP error response mapping.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// JSON error body returned by the endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Errors a handler can answer with.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request body could not be read as JSON.
    #[error("invalid JSON body")]
    InvalidBody(#[from] JsonRejection),
    /// No route matches the request's method and path.
    #[error("not found")]
    NotFound,
}

impl ApiError {
    /// Status code this error is answered with.
    ///
    /// Every body rejection is a `400`, whatever axum would pick on its own
    /// (e.g. `415` for a missing content type), except a body over the size
    /// limit which stays a `413`.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidBody(JsonRejection::BytesRejection(inner)) => inner.status(),
            Self::InvalidBody(_) => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            Self::InvalidBody(rejection) => {
                tracing::debug!(%status, reason = %rejection.body_text(), "rejected request body");
                rejection.body_text()
            }
            Self::NotFound => self.to_string(),
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_map_not_found_to_404() {
        let response = ApiError::NotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn should_display_not_found() {
        assert_eq!(ApiError::NotFound.to_string(), "not found");
    }
}
