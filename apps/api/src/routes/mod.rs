pub mod health;

use axum::{
    body::Body,
    extract::DefaultBodyLimit,
    http::{Request, Uri},
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::errors::AppError;
use crate::matching::handlers;
use crate::middleware::request_id::{
    propagate_request_id_layer, set_request_id_layer, REQUEST_ID_HEADER,
};
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {uri}"))
}

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_body_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/match", post(handlers::handle_match))
        .route("/api/v1/keywords", post(handlers::handle_keywords))
        .fallback(not_found)
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}

/// Router plus the HTTP middleware stack: request IDs, access logging, CORS.
pub fn build_app(state: AppState) -> Router {
    let trace = TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
        let request_id = request
            .headers()
            .get(REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("-");
        tracing::info_span!(
            "http_request",
            method = %request.method(),
            uri = %request.uri(),
            request_id = %request_id,
        )
    });

    build_router(state)
        .layer(propagate_request_id_layer())
        .layer(trace)
        .layer(set_request_id_layer())
        .layer(CorsLayer::permissive())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::to_bytes,
        http::{header, Method, StatusCode},
        response::Response,
    };
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::ServiceExt;

    use crate::config::Config;
    use crate::errors::MISSING_TEXT_MESSAGE;
    use crate::matching::feedback::EXCELLENT_FIT;
    use crate::matching::handlers::KeywordsResponse;
    use crate::matching::scoring::{MatchReport, MatchScorer};

    fn test_state() -> AppState {
        let config = Config::from_lookup(|_| None).unwrap();
        AppState::new(config)
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn read_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let app = build_app(test_state());
        let response = app
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = read_json(response).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "matcher-api");
    }

    #[tokio::test]
    async fn test_match_returns_full_report() {
        let app = build_app(test_state());
        let response = app
            .oneshot(post_json(
                "/api/v1/match",
                json!({
                    "jd_text": "Looking for a Python developer with AWS experience",
                    "resume_text": "Experienced Python developer skilled in AWS and Docker"
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = read_json(response).await;
        let report: MatchReport = serde_json::from_value(body).unwrap();
        assert_eq!(report.overlap_pct, 60.0);
        assert_eq!(report.jd_skill_count, 5);
        assert!(!report.missing_skills.iter().any(|s| s == "python" || s == "aws"));
        assert_eq!(report.feedback.len(), 3);
    }

    #[tokio::test]
    async fn test_identical_texts_are_excellent() {
        let text = "Staff data engineer: Spark, Airflow, dbt, Snowflake, Python.";
        let app = build_app(test_state());
        let response = app
            .oneshot(post_json(
                "/api/v1/match",
                json!({ "jd_text": text, "resume_text": text }),
            ))
            .await
            .unwrap();
        let body = read_json(response).await;
        assert_eq!(body["semantic_similarity"], 1.0);
        assert_eq!(body["overlap_pct"], 100.0);
        assert_eq!(body["match_score"], 100.0);
        assert_eq!(body["missing_skills"], json!([]));
        assert_eq!(body["feedback"][0], EXCELLENT_FIT);
    }

    #[tokio::test]
    async fn test_empty_texts_are_rejected() {
        let app = build_app(test_state());
        let response = app
            .oneshot(post_json(
                "/api/v1/match",
                json!({ "jd_text": "", "resume_text": "" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = read_json(response).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(body["error"]["message"], MISSING_TEXT_MESSAGE);
    }

    #[tokio::test]
    async fn test_missing_field_is_rejected() {
        let app = build_app(test_state());
        let response = app
            .oneshot(post_json("/api/v1/match", json!({ "jd_text": "Rust" })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = read_json(response).await;
        assert_eq!(body["error"]["message"], MISSING_TEXT_MESSAGE);
    }

    #[tokio::test]
    async fn test_non_string_falsy_fields_are_rejected() {
        let bodies = [
            json!({ "jd_text": false, "resume_text": "rust" }),
            json!({ "jd_text": 0, "resume_text": "rust" }),
            json!({ "jd_text": "rust", "resume_text": null }),
            json!({ "jd_text": "rust", "resume_text": [] }),
            json!({ "jd_text": true, "resume_text": 42 }),
        ];
        for payload in bodies {
            let app = build_app(test_state());
            let response = app
                .oneshot(post_json("/api/v1/match", payload.clone()))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "body {payload}");
            let body = read_json(response).await;
            assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
            assert_eq!(body["error"]["message"], MISSING_TEXT_MESSAGE);
        }
    }

    #[tokio::test]
    async fn test_keywords_non_string_text_is_rejected() {
        for text in [json!(false), json!(0), json!(""), json!(null)] {
            let app = build_app(test_state());
            let response = app
                .oneshot(post_json("/api/v1/keywords", json!({ "text": text })))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
            let body = read_json(response).await;
            assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        }
    }

    struct PanickingScorer;

    impl MatchScorer for PanickingScorer {
        fn score(&self, _jd_text: &str, _resume_text: &str) -> MatchReport {
            panic!("scorer exploded")
        }
    }

    #[tokio::test]
    async fn test_scorer_panic_becomes_internal_error() {
        let mut state = test_state();
        state.scorer = Arc::new(PanickingScorer);
        let app = build_app(state);
        let response = app
            .oneshot(post_json(
                "/api/v1/match",
                json!({ "jd_text": "Rust", "resume_text": "Rust" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = read_json(response).await;
        assert_eq!(body["error"]["code"], "INTERNAL_ERROR");
        assert!(body["error"]["details"]
            .as_str()
            .unwrap()
            .contains("Match scoring failed"));
    }

    #[tokio::test]
    async fn test_keywords_preview() {
        let app = build_app(test_state());
        let response = app
            .oneshot(post_json(
                "/api/v1/keywords",
                json!({ "text": "Rust, Kafka and more Rust. Kafka! Go.", "top_k": 2 }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body: KeywordsResponse = serde_json::from_value(read_json(response).await).unwrap();
        assert_eq!(body.token_count, 5);
        assert_eq!(body.keywords, vec!["rust", "kafka"]);
    }

    #[tokio::test]
    async fn test_keywords_rejects_zero_top_k() {
        let app = build_app(test_state());
        let response = app
            .oneshot(post_json(
                "/api/v1/keywords",
                json!({ "text": "Rust", "top_k": 0 }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_request_id_is_generated_and_echoed() {
        let app = build_app(test_state());
        let response = app
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let id = response.headers().get(REQUEST_ID_HEADER).unwrap();
        assert_eq!(id.to_str().unwrap().len(), 36);
    }

    #[tokio::test]
    async fn test_caller_request_id_is_kept() {
        let app = build_app(test_state());
        let request = Request::get("/health")
            .header(REQUEST_ID_HEADER, "req-123")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.headers().get(REQUEST_ID_HEADER).unwrap(), "req-123");
    }

    #[tokio::test]
    async fn test_unknown_route_is_404() {
        let app = build_app(test_state());
        let response = app
            .oneshot(Request::get("/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = read_json(response).await;
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }
}
