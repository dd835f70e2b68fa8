//! Axum router assembly.

use axum::Router;
use axum::extract::DefaultBodyLimit;
use tower_http::trace::TraceLayer;

use verecho_app::ports::VersionSource;

use crate::state::AppState;

/// Largest request body accepted when no limit is configured (100 KiB).
pub const DEFAULT_BODY_LIMIT: usize = 100 * 1024;

/// Build the top-level axum [`Router`] with the default body limit.
pub fn build<S>(state: AppState<S>) -> Router
where
    S: VersionSource + Send + Sync + 'static,
{
    build_with_body_limit(state, DEFAULT_BODY_LIMIT)
}

/// Build the top-level axum [`Router`].
///
/// Bodies larger than `body_limit` bytes are rejected with `413`.
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build_with_body_limit<S>(state: AppState<S>, body_limit: usize) -> Router
where
    S: VersionSource + Send + Sync + 'static,
{
    crate::api::routes()
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Method, Request, StatusCode, header};
    use axum::response::Response;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    struct StubSource(Option<&'static str>);

    impl VersionSource for StubSource {
        fn version(&self) -> Option<String> {
            self.0.map(str::to_string)
        }
    }

    fn app(version: Option<&'static str>) -> Router {
        build(AppState::from_source(StubSource(version)))
    }

    fn request(method: Method, uri: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    fn json_post(body: impl Into<Body>) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri("/post")
            .header(header::CONTENT_TYPE, "application/json")
            .body(body.into())
            .unwrap()
    }

    async fn body_string(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn should_return_configured_version() {
        let response = app(Some("1.2.3"))
            .oneshot(request(Method::GET, "/get"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/json"
        );
        assert_eq!(body_string(response).await, r#"{"version":"1.2.3"}"#);
    }

    #[tokio::test]
    async fn should_return_null_version_when_unset() {
        let response = app(None)
            .oneshot(request(Method::GET, "/get"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, r#"{"version":null}"#);
    }

    #[tokio::test]
    async fn should_echo_any_json_value() {
        let values = [
            json!(null),
            json!(true),
            json!(42),
            json!(-0.5),
            json!("text"),
            json!([1, "two", [3], {"four": 4}]),
            json!({"nested": {"list": [], "empty": {}}, "unicode": "é✓"}),
        ];

        for value in values {
            let response = app(None)
                .oneshot(json_post(value.to_string()))
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::OK);
            let echoed: Value = serde_json::from_str(&body_string(response).await).unwrap();
            assert_eq!(echoed, value);
        }
    }

    #[tokio::test]
    async fn should_keep_object_key_order_when_echoing() {
        let body = r#"{"zeta":1,"alpha":{"b":2,"a":1},"mid":[3]}"#;
        let response = app(None).oneshot(json_post(body)).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, body);
    }

    #[tokio::test]
    async fn should_accept_json_suffix_content_type() {
        let request = Request::builder()
            .method(Method::POST)
            .uri("/post")
            .header(header::CONTENT_TYPE, "application/vnd.api+json")
            .body(Body::from(r#"{"ok":true}"#))
            .unwrap();
        let response = app(None).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, r#"{"ok":true}"#);
    }

    #[tokio::test]
    async fn should_reject_plain_text_body() {
        let request = Request::builder()
            .method(Method::POST)
            .uri("/post")
            .header(header::CONTENT_TYPE, "text/plain")
            .body(Body::from("hello"))
            .unwrap();
        let response = app(None).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn should_reject_body_without_content_type() {
        let request = Request::builder()
            .method(Method::POST)
            .uri("/post")
            .body(Body::from(r#"{"a":1}"#))
            .unwrap();
        let response = app(None).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn should_reject_malformed_json() {
        let response = app(None).oneshot(json_post("{not json")).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn should_reject_empty_body() {
        let response = app(None).oneshot(json_post(Body::empty())).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn should_reject_body_over_limit() {
        let app = build_with_body_limit(AppState::from_source(StubSource(None)), 16);
        let body = json!({"padding": "x".repeat(64)}).to_string();
        let response = app.oneshot(json_post(body)).await.unwrap();

        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[tokio::test]
    async fn should_return_not_found_for_get_on_post_route() {
        let response = app(None)
            .oneshot(request(Method::GET, "/post"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn should_return_not_found_for_post_on_get_route() {
        let response = app(Some("1.0.0"))
            .oneshot(json_post_to("/get", "{}"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn should_return_not_found_for_unknown_path() {
        let response = app(None)
            .oneshot(request(Method::GET, "/health"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_string(response).await, r#"{"error":"not found"}"#);
    }

    #[tokio::test]
    async fn should_match_paths_exactly() {
        for uri in ["/post/", "/POST", "/Post"] {
            let response = app(None).oneshot(json_post_to(uri, "{}")).await.unwrap();
            assert_eq!(response.status(), StatusCode::NOT_FOUND, "{uri}");
        }
    }

    fn json_post_to(uri: &str, body: &'static str) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap()
    }
}
