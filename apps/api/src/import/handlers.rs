//! Axum route handlers for the Import Normalizer.

use axum::{extract::State, Json};
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::import::parse_backup_str;
use crate::models::resume::ResumeDocument;
use crate::state::{Activity, AppState};

#[derive(Debug, Deserialize)]
pub struct ProfileImportRequest {
    pub text: String,
}

/// POST /api/v1/import
///
/// The body is the raw backup file. Rejected payloads leave the document
/// untouched; accepted ones replace it wholesale.
pub async fn handle_import_backup(
    State(state): State<AppState>,
    body: String,
) -> Result<Json<ResumeDocument>, AppError> {
    let imported = parse_backup_str(&body)?;
    let mut doc = state.document.write().await;
    *doc = imported;
    info!(template = doc.template.as_str(), "Imported backup");
    Ok(Json(doc.clone()))
}

/// POST /api/v1/import/profile
///
/// Sends raw profile text to the assistant and merges the parsed fragment.
/// Parser failures surface as errors; the document is only written after a
/// successful parse.
pub async fn handle_import_profile(
    State(state): State<AppState>,
    Json(request): Json<ProfileImportRequest>,
) -> Result<Json<ResumeDocument>, AppError> {
    if request.text.trim().is_empty() {
        return Err(AppError::Validation("text cannot be empty".to_string()));
    }
    let _guard = state.activity.begin(Activity::Assist)?;
    let patch = state.assistant.parse_profile(&request.text).await?;

    let mut doc = state.document.write().await;
    patch.apply(&mut doc);
    info!("Merged parsed profile fragment");
    Ok(Json(doc.clone()))
}
