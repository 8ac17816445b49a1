//! Axum route handlers for the preview and the three downloads.

use axum::{
    extract::State,
    http::{header, HeaderValue},
    response::{Html, IntoResponse, Response},
};
use bytes::Bytes;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::layout::format::export_filename;
use crate::models::resume::ResumeDocument;
use crate::render::docx::DocxExporter;
use crate::render::preview::preview_page;
use crate::render::snapshot::{SnapshotExporter, SnapshotOutcome};
use crate::render::Exporter;
use crate::state::{Activity, AppState};

/// Marks a snapshot response that degraded to the print page.
pub const FALLBACK_HEADER: &str = "x-export-fallback";

fn attachment(filename: &str, content_type: &'static str, body: impl Into<Bytes>) -> Response {
    let disposition = format!("attachment; filename=\"{filename}\"");
    let body: Bytes = body.into();
    let mut response = body.into_response();
    let headers = response.headers_mut();
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(content_type));
    let value = HeaderValue::from_str(&disposition).unwrap_or_else(|_| {
        warn!(filename, "Download name is not a valid header value");
        HeaderValue::from_static("attachment")
    });
    headers.insert(header::CONTENT_DISPOSITION, value);
    response
}

/// Runs CPU-bound rendering off the async workers.
async fn blocking<T, F>(job: F) -> Result<T, AppError>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(job)
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("render task failed: {e}")))
}

/// GET /api/v1/preview
pub async fn handle_preview(State(state): State<AppState>) -> Html<String> {
    let doc = state.snapshot().await;
    Html(preview_page(&doc))
}

/// GET /api/v1/export/pdf
///
/// Serves the paginated PDF, or the print-ready page with
/// `X-Export-Fallback: print` when the snapshot could not be produced.
pub async fn handle_export_pdf(State(state): State<AppState>) -> Result<Response, AppError> {
    let _guard = state.activity.begin(Activity::SnapshotExport)?;
    let doc = state.snapshot().await;
    let exporter = SnapshotExporter::default();
    let filename = exporter.filename(&doc);

    let outcome = blocking(move || exporter.export_or_print(&doc)).await?;
    Ok(match outcome {
        SnapshotOutcome::Pdf(bytes) => {
            info!(bytes = bytes.len(), "Snapshot export complete");
            attachment(&filename, "application/pdf", bytes)
        }
        SnapshotOutcome::PrintFallback(html) => {
            let mut response = Html(html).into_response();
            response
                .headers_mut()
                .insert(FALLBACK_HEADER, HeaderValue::from_static("print"));
            response
        }
    })
}

/// GET /api/v1/export/docx
pub async fn handle_export_docx(State(state): State<AppState>) -> Result<Response, AppError> {
    let _guard = state.activity.begin(Activity::DocumentExport)?;
    let doc = state.snapshot().await;
    let filename = DocxExporter.filename(&doc);

    let bytes = blocking(move || DocxExporter.export(&doc)).await??;
    info!(bytes = bytes.len(), "Document export complete");
    Ok(attachment(&filename, DocxExporter.content_type(), bytes))
}

/// GET /api/v1/export/json
///
/// The backup file the import endpoint accepts.
pub async fn handle_export_json(State(state): State<AppState>) -> Result<Response, AppError> {
    let doc: ResumeDocument = state.snapshot().await;
    let body = serde_json::to_vec_pretty(&doc)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("serialising backup: {e}")))?;
    Ok(attachment(
        &export_filename(&doc.personal.full_name, "json"),
        "application/json",
        body,
    ))
}
