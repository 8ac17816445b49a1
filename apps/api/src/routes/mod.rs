pub mod health;

use axum::{
    routing::{get, patch, post, put},
    Router,
};

use crate::assist::handlers as assist;
use crate::editor::handlers as editor;
use crate::import::handlers as import;
use crate::render::handlers as render;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Session document
        .route(
            "/api/v1/resume",
            get(editor::handle_get_resume).put(editor::handle_put_resume),
        )
        .route("/api/v1/resume/template", put(editor::handle_set_template))
        .route("/api/v1/resume/personal", patch(editor::handle_patch_personal))
        .route("/api/v1/resume/:section", post(editor::handle_add_entry))
        .route(
            "/api/v1/resume/:section/:id",
            put(editor::handle_update_entry).delete(editor::handle_remove_entry),
        )
        .route("/api/v1/status", get(editor::handle_status))
        // Rendering
        .route("/api/v1/preview", get(render::handle_preview))
        .route("/api/v1/export/pdf", get(render::handle_export_pdf))
        .route("/api/v1/export/docx", get(render::handle_export_docx))
        .route("/api/v1/export/json", get(render::handle_export_json))
        // Import
        .route("/api/v1/import", post(import::handle_import_backup))
        .route("/api/v1/import/profile", post(import::handle_import_profile))
        // AI assistance
        .route("/api/v1/assist/improve", post(assist::handle_improve))
        .route("/api/v1/assist/summary", post(assist::handle_summary))
        .route("/api/v1/assist/skills", post(assist::handle_suggest_skills))
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
    use crate::assist::tests::{CannedAssistant, FailingAssistant};
    use crate::models::resume::{ResumeDocument, TemplateKind};
    use crate::state::Activity;

    fn state() -> AppState {
        AppState::new(ResumeDocument::seed(), Arc::new(FailingAssistant))
    }

    async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> Response {
        let mut request = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                request = request.header(header::CONTENT_TYPE, "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };
        app.clone().oneshot(request.body(body).unwrap()).await.unwrap()
    }

    async fn bytes(response: Response) -> Vec<u8> {
        to_bytes(response.into_body(), usize::MAX).await.unwrap().to_vec()
    }

    async fn json_body(response: Response) -> Value {
        serde_json::from_slice(&bytes(response).await).unwrap()
    }

    async fn current(app: &Router) -> ResumeDocument {
        serde_json::from_value(json_body(send(app, "GET", "/api/v1/resume", None).await).await)
            .unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let app = build_router(state());
        let response = send(&app, "GET", "/health", None).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["service"], "resumemind-api");
    }

    #[tokio::test]
    async fn test_template_and_personal_edits() {
        let app = build_router(state());
        let response = send(
            &app,
            "PUT",
            "/api/v1/resume/template",
            Some(json!({ "template": "alpine" })),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);

        let response = send(
            &app,
            "PATCH",
            "/api/v1/resume/personal",
            Some(json!({ "fullName": "Jordan Lee" })),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);

        let doc = current(&app).await;
        assert_eq!(doc.template, TemplateKind::Alpine);
        assert_eq!(doc.personal.full_name, "Jordan Lee");
        assert_eq!(doc.personal.email, "alex.sterling@example.com");
    }

    #[tokio::test]
    async fn test_list_entry_lifecycle() {
        let app = build_router(state());
        let response = send(
            &app,
            "POST",
            "/api/v1/resume/skills",
            Some(json!({ "name": "Rust", "level": "Expert" })),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
        let id = json_body(response).await["id"].as_str().unwrap().to_string();

        let uri = format!("/api/v1/resume/skills/{id}");
        let response = send(&app, "PUT", &uri, Some(json!({ "name": "Rust 2021" }))).await;
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        let doc = current(&app).await;
        assert_eq!(doc.skills[3].id, id);
        assert_eq!(doc.skills[3].name, "Rust 2021");

        let response = send(&app, "DELETE", &uri, None).await;
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        let response = send(&app, "DELETE", &uri, None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(current(&app).await.skills.len(), 3);
    }

    #[tokio::test]
    async fn test_unknown_section_is_not_found() {
        let app = build_router(state());
        let response = send(&app, "POST", "/api/v1/resume/hobbies", None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(json_body(response).await["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_malformed_import_leaves_document_unchanged() {
        let app = build_router(state());
        let before = current(&app).await;
        let response = send(
            &app,
            "POST",
            "/api/v1/import",
            Some(json!({ "experiences": [], "education": [] })),
        )
        .await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(json_body(response).await["error"]["code"], "MALFORMED_IMPORT");
        assert_eq!(current(&app).await, before);
    }

    #[tokio::test]
    async fn test_json_export_reimports_equal() {
        let app = build_router(state());
        let response = send(&app, "GET", "/api/v1/export/json", None).await;
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"resume-alex-sterling.json\""
        );
        let backup: Value = json_body(response).await;

        send(&app, "PUT", "/api/v1/resume/template", Some(json!({ "template": "balanced" }))).await;
        let response = send(&app, "POST", "/api/v1/import", Some(backup)).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(current(&app).await, ResumeDocument::seed());
    }

    #[tokio::test]
    async fn test_pdf_export() {
        let app = build_router(state());
        let response = send(&app, "GET", "/api/v1/export/pdf", None).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "application/pdf");
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"resume-alex-sterling.pdf\""
        );
        assert!(response.headers().get(render::FALLBACK_HEADER).is_none());
        assert!(bytes(response).await.starts_with(b"%PDF-"));
    }

    #[tokio::test]
    async fn test_docx_export() {
        let app = build_router(state());
        let response = send(&app, "GET", "/api/v1/export/docx", None).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"resume-alex-sterling.docx\""
        );
        assert!(bytes(response).await.starts_with(b"PK"));
    }

    #[tokio::test]
    async fn test_download_name_with_quotes_stays_well_formed() {
        let app = build_router(state());
        send(
            &app,
            "PATCH",
            "/api/v1/resume/personal",
            Some(json!({ "fullName": "Alex \"Ace\" Sterling\u{1}" })),
        )
        .await;
        for ext in ["pdf", "docx", "json"] {
            let response = send(&app, "GET", &format!("/api/v1/export/{ext}"), None).await;
            assert_eq!(response.status(), StatusCode::OK);
            assert_eq!(
                response.headers()[header::CONTENT_DISPOSITION],
                format!("attachment; filename=\"resume-alex-ace-sterling.{ext}\"").as_str()
            );
        }
    }

    #[tokio::test]
    async fn test_export_in_progress_is_conflict_for_its_class_only() {
        let state = state();
        let app = build_router(state.clone());
        let _held = state.activity.begin(Activity::SnapshotExport).unwrap();

        let response = send(&app, "GET", "/api/v1/export/pdf", None).await;
        assert_eq!(response.status(), StatusCode::CONFLICT);
        let response = send(&app, "GET", "/api/v1/export/docx", None).await;
        assert_eq!(response.status(), StatusCode::OK);

        let status = json_body(send(&app, "GET", "/api/v1/status", None).await).await;
        assert_eq!(
            status,
            json!({ "snapshotExport": true, "documentExport": false, "assist": false })
        );
    }

    #[tokio::test]
    async fn test_preview_page() {
        let app = build_router(state());
        let response = send(&app, "GET", "/api/v1/preview", None).await;
        assert_eq!(response.status(), StatusCode::OK);
        let html = String::from_utf8(bytes(response).await).unwrap();
        assert!(html.contains("id=\"resume-preview\""));
        assert!(html.contains("ALEX STERLING"));
    }

    #[tokio::test]
    async fn test_assist_falls_back_when_collaborator_fails() {
        let app = build_router(state());
        let response = send(
            &app,
            "POST",
            "/api/v1/assist/improve",
            Some(json!({ "text": "Did things", "context": "Job Experience Description" })),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["text"], "Did things");

        let response = send(&app, "POST", "/api/v1/assist/skills", None).await;
        assert_eq!(json_body(response).await["skills"], json!([]));

        let response = send(&app, "POST", "/api/v1/assist/summary", None).await;
        assert_eq!(
            json_body(response).await["text"],
            ResumeDocument::seed().personal.summary
        );
    }

    #[tokio::test]
    async fn test_profile_import_failure_surfaces_and_keeps_document() {
        let app = build_router(state());
        let before = current(&app).await;
        let response = send(
            &app,
            "POST",
            "/api/v1/import/profile",
            Some(json!({ "text": "Jordan Lee, Go developer" })),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(current(&app).await, before);
    }

    #[tokio::test]
    async fn test_profile_import_merges_fragment() {
        let state = AppState::new(ResumeDocument::seed(), Arc::new(CannedAssistant));
        let app = build_router(state);
        let response = send(
            &app,
            "POST",
            "/api/v1/import/profile",
            Some(json!({ "text": "Jordan Lee, Go developer" })),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let doc = current(&app).await;
        assert_eq!(doc.personal.full_name, "Jordan Lee");
        assert_eq!(doc.experiences, ResumeDocument::seed().experiences);
        assert_eq!(doc.skills.len(), 1);
        assert_eq!(doc.skills[0].name, "Go");
        assert_eq!(doc.template, TemplateKind::Modern);
    }
}
