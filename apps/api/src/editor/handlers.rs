//! Axum route handlers for editing the session document.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::editor::{add_entry, parse_section, remove_entry, replace_entry};
use crate::errors::AppError;
use crate::import::parse_backup;
use crate::import::patch::PersonalPatch;
use crate::models::resume::{ResumeDocument, TemplateKind};
use crate::state::{ActivityStatus, AppState};

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct TemplateRequest {
    pub template: TemplateKind,
}

#[derive(Debug, Serialize)]
pub struct CreatedEntry {
    pub id: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/resume
pub async fn handle_get_resume(State(state): State<AppState>) -> Json<ResumeDocument> {
    Json(state.snapshot().await)
}

/// PUT /api/v1/resume
///
/// Full replacement. Runs the same structural checks as a backup import.
pub async fn handle_put_resume(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<ResumeDocument>, AppError> {
    let replacement = parse_backup(body)?;
    let mut doc = state.document.write().await;
    *doc = replacement;
    Ok(Json(doc.clone()))
}

/// PUT /api/v1/resume/template
pub async fn handle_set_template(
    State(state): State<AppState>,
    Json(request): Json<TemplateRequest>,
) -> Json<ResumeDocument> {
    let mut doc = state.document.write().await;
    doc.template = request.template;
    debug!(template = doc.template.as_str(), "Template changed");
    Json(doc.clone())
}

/// PATCH /api/v1/resume/personal
///
/// Only keys present in the body are assigned.
pub async fn handle_patch_personal(
    State(state): State<AppState>,
    Json(patch): Json<PersonalPatch>,
) -> Json<ResumeDocument> {
    let mut doc = state.document.write().await;
    patch.apply(&mut doc.personal);
    Json(doc.clone())
}

/// POST /api/v1/resume/:section
///
/// An empty body adds a blank entry.
pub async fn handle_add_entry(
    State(state): State<AppState>,
    Path(section): Path<String>,
    body: Option<Json<Value>>,
) -> Result<(StatusCode, Json<CreatedEntry>), AppError> {
    let section = parse_section(&section)?;
    let mut doc = state.document.write().await;
    let id = add_entry(&mut doc, section, body.map(|Json(v)| v))?;
    Ok((StatusCode::CREATED, Json(CreatedEntry { id })))
}

/// PUT /api/v1/resume/:section/:id
pub async fn handle_update_entry(
    State(state): State<AppState>,
    Path((section, id)): Path<(String, String)>,
    Json(body): Json<Value>,
) -> Result<StatusCode, AppError> {
    let section = parse_section(&section)?;
    let mut doc = state.document.write().await;
    replace_entry(&mut doc, section, &id, body)?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/v1/resume/:section/:id
pub async fn handle_remove_entry(
    State(state): State<AppState>,
    Path((section, id)): Path<(String, String)>,
) -> Result<StatusCode, AppError> {
    let section = parse_section(&section)?;
    let mut doc = state.document.write().await;
    remove_entry(&mut doc, section, &id)?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/status
pub async fn handle_status(State(state): State<AppState>) -> Json<ActivityStatus> {
    Json(state.activity.status())
}
