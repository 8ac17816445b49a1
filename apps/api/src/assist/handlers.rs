//! Axum route handlers for AI assistance. Suggestions are returned, never
//! written into the document; the editor applies them.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::assist::{improve_or_keep, suggest_or_empty, summarize_or_keep};
use crate::errors::AppError;
use crate::state::{Activity, AppState};

#[derive(Debug, Deserialize)]
pub struct ImproveRequest {
    pub text: String,
    /// Where the text lives, e.g. "Job Experience Description".
    #[serde(default)]
    pub context: String,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct TextResponse {
    pub text: String,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct SkillsResponse {
    pub skills: Vec<String>,
}

/// POST /api/v1/assist/improve
pub async fn handle_improve(
    State(state): State<AppState>,
    Json(request): Json<ImproveRequest>,
) -> Result<Json<TextResponse>, AppError> {
    if request.text.trim().is_empty() {
        return Err(AppError::Validation("text cannot be empty".to_string()));
    }
    let _guard = state.activity.begin(Activity::Assist)?;
    let text = improve_or_keep(state.assistant.as_ref(), &request.text, &request.context).await;
    Ok(Json(TextResponse { text }))
}

/// POST /api/v1/assist/summary
///
/// Builds the prompt input from the current document.
pub async fn handle_summary(
    State(state): State<AppState>,
) -> Result<Json<TextResponse>, AppError> {
    let _guard = state.activity.begin(Activity::Assist)?;
    let doc = state.snapshot().await;
    let text = summarize_or_keep(state.assistant.as_ref(), &doc).await;
    Ok(Json(TextResponse { text }))
}

/// POST /api/v1/assist/skills
pub async fn handle_suggest_skills(
    State(state): State<AppState>,
) -> Result<Json<SkillsResponse>, AppError> {
    let _guard = state.activity.begin(Activity::Assist)?;
    let doc = state.snapshot().await;
    let skills = suggest_or_empty(state.assistant.as_ref(), &doc).await;
    Ok(Json(SkillsResponse { skills }))
}
