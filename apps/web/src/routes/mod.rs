pub mod health;
pub mod page;

use axum::{
    http::Uri,
    routing::{get, post},
    Router,
};

use crate::editor::handlers;
use crate::errors::AppError;
use crate::export::handlers::handle_export;
use crate::preview::handlers::{handle_events, handle_get_preview};
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Pages and fragments
        .route("/", get(page::handle_index))
        .route("/editor", get(handlers::handle_get_editor))
        .route("/preview", get(handle_get_preview))
        .route("/export", get(handle_export))
        .route("/events", get(handle_events))
        // Document API
        .route("/api/v1/resume", get(handlers::handle_get_resume))
        .route("/api/v1/resume/ops", post(handlers::handle_apply_op))
        .fallback(not_found)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
        response::Response,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::config::Config;
    use crate::export::page::{page_config, PaperSize};
    use crate::store::DocumentStore;
    use crate::views::Views;

    fn test_state() -> AppState {
        AppState {
            store: Arc::new(DocumentStore::default()),
            views: Arc::new(Views::new(page_config(PaperSize::A4)).unwrap()),
            config: Config {
                host: "127.0.0.1".to_string(),
                port: 0,
                rust_log: "debug".to_string(),
                paper_size: PaperSize::A4,
            },
        }
    }

    async fn body_string(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    async fn get(state: &AppState, uri: &str) -> Response {
        build_router(state.clone())
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn post_op(state: &AppState, op: Value) -> (StatusCode, Value) {
        let response = build_router(state.clone())
            .oneshot(
                Request::post("/api/v1/resume/ops")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(op.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let body = body_string(response).await;
        (status, serde_json::from_str(&body).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let state = test_state();
        let response = get(&state, "/health").await;
        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body["status"], "ok");
        assert_eq!(body["paper_size"], "a4");
    }

    #[tokio::test]
    async fn test_index_renders_editor_and_preview() {
        let state = test_state();
        let response = get(&state, "/").await;
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_string(response).await;
        assert!(html.contains("Export PDF"));
        assert!(html.contains("window.print()"));
        assert!(html.contains("Personal Information"));
        assert!(html.contains("<h1>Your Name</h1>"));
    }

    #[tokio::test]
    async fn test_add_op_returns_editor_and_bumps_revision() {
        let state = test_state();
        let (status, body) = post_op(&state, json!({ "op": "add", "list": "work_experience" })).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["revision"], 1);
        assert_eq!(body["changed"], true);
        assert!(body["editor_html"]
            .as_str()
            .unwrap()
            .contains("data-op=\"update_work_experience\""));
        assert!(body["preview_html"]
            .as_str()
            .unwrap()
            .contains("<h2>Work Experience</h2>"));
        assert_eq!(state.store.current().resume.work_experience.len(), 1);
    }

    #[tokio::test]
    async fn test_text_edit_returns_preview_only() {
        let state = test_state();
        let (_, body) = post_op(
            &state,
            json!({ "op": "set_personal", "field": { "full_name": "Grace Hopper" } }),
        )
        .await;

        assert!(body["editor_html"].is_null());
        assert!(body["preview_html"]
            .as_str()
            .unwrap()
            .contains("<h1>Grace Hopper</h1>"));
    }

    #[tokio::test]
    async fn test_missing_id_is_accepted_as_noop() {
        let state = test_state();
        let (status, body) = post_op(
            &state,
            json!({
                "op": "remove",
                "list": "skills",
                "id": "00000000-0000-4000-8000-000000000000"
            }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["changed"], false);
        assert_eq!(body["revision"], 0);
    }

    #[tokio::test]
    async fn test_malformed_op_is_a_validation_error() {
        let state = test_state();
        let (status, body) = post_op(&state, json!({ "op": "add", "list": "hobbies" })).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_get_resume_snapshot() {
        let state = test_state();
        post_op(&state, json!({ "op": "add", "list": "skills" })).await;

        let response = get(&state, "/api/v1/resume").await;
        let body: Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body["revision"], 1);
        assert_eq!(body["resume"]["skills"].as_array().unwrap().len(), 1);
        assert!(body["updated_at"].is_string());
    }

    #[tokio::test]
    async fn test_export_page_contains_only_preview() {
        let state = test_state();
        let response = get(&state, "/export").await;
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_string(response).await;
        assert!(html.contains("id=\"resume-preview\""));
        assert!(html.contains("window.print()"));
        assert!(html.contains("size: A4"));
        assert!(!html.contains("Personal Information"));
    }

    #[tokio::test]
    async fn test_export_without_auto_print() {
        let state = test_state();
        let html = body_string(get(&state, "/export?print=false").await).await;
        assert!(!html.contains("window.print()"));
    }

    #[tokio::test]
    async fn test_fragments() {
        let state = test_state();
        let editor = body_string(get(&state, "/editor").await).await;
        assert!(editor.contains("Custom Sections"));
        let preview = body_string(get(&state, "/preview").await).await;
        assert!(preview.contains("<article id=\"resume-preview\""));
    }

    #[tokio::test]
    async fn test_unknown_route_is_json_404() {
        let state = test_state();
        let response = get(&state, "/nope").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body: Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }
}
