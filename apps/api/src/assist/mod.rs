//! AI-assisted text operations.
//!
//! The collaborator may fail at any time. Improve, summarise and suggest fall
//! back to the pre-call value; only profile parsing surfaces its error.

pub mod handlers;
pub mod prompts;

use async_trait::async_trait;
use tracing::warn;

use crate::import::patch::ProfilePatch;
use crate::llm_client::prompts::{JSON_ONLY_SYSTEM, RESUME_WRITER_SYSTEM};
use crate::llm_client::{LlmClient, LlmError};
use crate::models::resume::ResumeDocument;

/// The AI collaborator. Implement this to swap backends without touching
/// the handlers.
///
/// Carried in `AppState` as `Arc<dyn ResumeAssistant>`.
#[async_trait]
pub trait ResumeAssistant: Send + Sync {
    async fn improve(&self, text: &str, context: &str) -> Result<String, LlmError>;

    async fn summarize(&self, profile_details: &str) -> Result<String, LlmError>;

    async fn suggest_skills(&self, experience_text: &str) -> Result<Vec<String>, LlmError>;

    async fn parse_profile(&self, raw_text: &str) -> Result<ProfilePatch, LlmError>;
}

#[async_trait]
impl ResumeAssistant for LlmClient {
    async fn improve(&self, text: &str, context: &str) -> Result<String, LlmError> {
        self.call_text(&prompts::improve_prompt(text, context), RESUME_WRITER_SYSTEM)
            .await
    }

    async fn summarize(&self, profile_details: &str) -> Result<String, LlmError> {
        self.call_text(&prompts::summary_prompt(profile_details), RESUME_WRITER_SYSTEM)
            .await
    }

    async fn suggest_skills(&self, experience_text: &str) -> Result<Vec<String>, LlmError> {
        let text = self
            .call_text(&prompts::skills_prompt(experience_text), RESUME_WRITER_SYSTEM)
            .await?;
        Ok(split_keywords(&text))
    }

    async fn parse_profile(&self, raw_text: &str) -> Result<ProfilePatch, LlmError> {
        self.call_json(&prompts::parse_profile_prompt(raw_text), JSON_ONLY_SYSTEM)
            .await
    }
}

/// Splits a comma separated keyword answer, dropping blanks.
pub fn split_keywords(text: &str) -> Vec<String> {
    text.split([',', '\n'])
        .map(|s| s.trim().trim_start_matches(['-', '•', '*']).trim())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Inputs derived from the document
// ────────────────────────────────────────────────────────────────────────────

/// "Experience: <position> at <company>, …. Skills: <names>".
pub fn profile_details(doc: &ResumeDocument) -> String {
    let experience = doc
        .experiences
        .iter()
        .map(|e| format!("{} at {}", e.position.trim(), e.company.trim()))
        .collect::<Vec<_>>()
        .join(", ");
    let skills = doc
        .skills
        .iter()
        .map(|s| s.name.trim())
        .collect::<Vec<_>>()
        .join(", ");
    format!("Experience: {experience}. Skills: {skills}")
}

/// "<position>: <description>; …".
pub fn experience_text(doc: &ResumeDocument) -> String {
    doc.experiences
        .iter()
        .map(|e| format!("{}: {}", e.position.trim(), e.description.trim()))
        .collect::<Vec<_>>()
        .join("; ")
}

// ────────────────────────────────────────────────────────────────────────────
// Fallback policy
// ────────────────────────────────────────────────────────────────────────────

/// Improved text, or `text` unchanged when the collaborator fails.
pub async fn improve_or_keep(assistant: &dyn ResumeAssistant, text: &str, context: &str) -> String {
    match assistant.improve(text, context).await {
        Ok(improved) if !improved.trim().is_empty() => improved,
        Ok(_) => text.to_string(),
        Err(e) => {
            warn!(error = %e, "Improve failed, keeping original text");
            text.to_string()
        }
    }
}

/// Generated summary, or the document's current summary on failure.
pub async fn summarize_or_keep(assistant: &dyn ResumeAssistant, doc: &ResumeDocument) -> String {
    match assistant.summarize(&profile_details(doc)).await {
        Ok(summary) if !summary.trim().is_empty() => summary,
        Ok(_) => doc.personal.summary.clone(),
        Err(e) => {
            warn!(error = %e, "Summary generation failed, keeping current summary");
            doc.personal.summary.clone()
        }
    }
}

/// Suggested skill names, or none on failure.
pub async fn suggest_or_empty(assistant: &dyn ResumeAssistant, doc: &ResumeDocument) -> Vec<String> {
    match assistant.suggest_skills(&experience_text(doc)).await {
        Ok(skills) => skills,
        Err(e) => {
            warn!(error = %e, "Skill suggestion failed");
            Vec::new()
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Always fails, as an assistant without an API key would.
    pub struct FailingAssistant;

    #[async_trait]
    impl ResumeAssistant for FailingAssistant {
        async fn improve(&self, _: &str, _: &str) -> Result<String, LlmError> {
            Err(LlmError::MissingApiKey)
        }
        async fn summarize(&self, _: &str) -> Result<String, LlmError> {
            Err(LlmError::MissingApiKey)
        }
        async fn suggest_skills(&self, _: &str) -> Result<Vec<String>, LlmError> {
            Err(LlmError::MissingApiKey)
        }
        async fn parse_profile(&self, _: &str) -> Result<ProfilePatch, LlmError> {
            Err(LlmError::MissingApiKey)
        }
    }

    /// Returns canned answers.
    pub struct CannedAssistant;

    #[async_trait]
    impl ResumeAssistant for CannedAssistant {
        async fn improve(&self, text: &str, _: &str) -> Result<String, LlmError> {
            Ok(format!("Improved: {text}"))
        }
        async fn summarize(&self, _: &str) -> Result<String, LlmError> {
            Ok("   ".to_string())
        }
        async fn suggest_skills(&self, _: &str) -> Result<Vec<String>, LlmError> {
            Ok(vec!["Go".to_string(), "Kafka".to_string()])
        }
        async fn parse_profile(&self, _: &str) -> Result<ProfilePatch, LlmError> {
            Ok(serde_json::from_str(
                r#"{ "personal": { "fullName": "Jordan Lee" }, "skills": [{ "name": "Go" }] }"#,
            )?)
        }
    }

    #[tokio::test]
    async fn test_failures_fall_back_to_pre_call_values() {
        let doc = ResumeDocument::seed();
        assert_eq!(
            improve_or_keep(&FailingAssistant, "Did things", "Job Experience Description").await,
            "Did things"
        );
        assert_eq!(summarize_or_keep(&FailingAssistant, &doc).await, doc.personal.summary);
        assert!(suggest_or_empty(&FailingAssistant, &doc).await.is_empty());
    }

    #[tokio::test]
    async fn test_blank_answer_keeps_current_summary() {
        let doc = ResumeDocument::seed();
        assert_eq!(summarize_or_keep(&CannedAssistant, &doc).await, doc.personal.summary);
        assert_eq!(
            improve_or_keep(&CannedAssistant, "x", "ctx").await,
            "Improved: x"
        );
    }

    #[test]
    fn test_profile_details_shape() {
        let details = profile_details(&ResumeDocument::seed());
        assert_eq!(
            details,
            "Experience: Senior Frontend Architect at TechNova Solutions. \
             Skills: React / Next.js, TypeScript, Cloud Infrastructure (AWS/GCP)"
        );
    }

    #[test]
    fn test_split_keywords() {
        assert_eq!(
            split_keywords("Rust, Go ,\n- Kubernetes,, "),
            vec!["Rust", "Go", "Kubernetes"]
        );
    }
}
