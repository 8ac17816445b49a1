//! Import Normalizer.
//!
//! Two entry points: a full backup file, validated structurally before it is
//! trusted, and a partial profile fragment (see [`patch`]) merged into the
//! current document. Neither touches the document until parsing succeeded.

pub mod handlers;
pub mod patch;

use std::path::Path;

use anyhow::Context;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::models::resume::{Proficiency, ResumeDocument, SkillLevel, TemplateKind};

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("file is not valid JSON: {0}")]
    InvalidJson(serde_json::Error),

    #[error("expected a JSON object at the top level")]
    NotAnObject,

    #[error("'{0}' must be present and be an object")]
    MissingField(&'static str),

    #[error("'{0}' must be an array")]
    NotAnArray(&'static str),

    #[error("file does not match the resume format: {0}")]
    Schema(serde_json::Error),
}

/// Parses raw backup bytes. See [`parse_backup`].
pub fn parse_backup_str(raw: &str) -> Result<ResumeDocument, ImportError> {
    let value: Value = serde_json::from_str(raw).map_err(ImportError::InvalidJson)?;
    parse_backup(value)
}

/// Accepts a full document only when `personal` is an object and
/// `experiences`/`education` are arrays. Optional lists default to empty,
/// a missing or unknown template to Modern, and unknown level labels to
/// Intermediate. Ids already present are kept unless empty or repeated.
pub fn parse_backup(mut value: Value) -> Result<ResumeDocument, ImportError> {
    let obj = value.as_object_mut().ok_or(ImportError::NotAnObject)?;

    if !obj.get("personal").is_some_and(Value::is_object) {
        return Err(ImportError::MissingField("personal"));
    }
    for key in ["experiences", "education"] {
        if !obj.get(key).is_some_and(Value::is_array) {
            return Err(ImportError::NotAnArray(key));
        }
    }
    for key in ["skills", "languages", "projects"] {
        match obj.get(key) {
            None | Some(Value::Null) => {
                obj.remove(key);
            }
            Some(Value::Array(_)) => {}
            Some(_) => return Err(ImportError::NotAnArray(key)),
        }
    }

    let template = obj.get("template").and_then(Value::as_str).map(str::to_string);
    if !matches!(
        template.as_deref(),
        Some("elite" | "modern" | "balanced" | "alpine")
    ) {
        if let Some(unknown) = template {
            warn!(template = %unknown, "Unknown template in backup, using default");
        }
        obj.insert(
            "template".to_string(),
            Value::String(TemplateKind::default().as_str().to_string()),
        );
    }

    relabel(obj.get_mut("skills"), "level", |l| {
        SkillLevel::from_label_lenient(l).label()
    });
    relabel(obj.get_mut("languages"), "proficiency", |l| {
        Proficiency::from_label_lenient(l).label()
    });

    let mut doc: ResumeDocument = serde_json::from_value(value).map_err(ImportError::Schema)?;
    let reissued = doc.normalize_ids();
    if reissued > 0 {
        debug!(reissued, "Re-issued empty or duplicate entry ids");
    }
    Ok(doc)
}

/// The session's starting document: the backup at `path` when given, run
/// through the same checks as an upload, otherwise the built-in seed.
pub fn load_initial_document(path: Option<&Path>) -> anyhow::Result<ResumeDocument> {
    let Some(path) = path else {
        return Ok(ResumeDocument::seed());
    };
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading seed file {}", path.display()))?;
    let doc = parse_backup_str(&raw)
        .with_context(|| format!("seed file {} is not a valid backup", path.display()))?;
    info!(path = %path.display(), "Loaded seed document");
    Ok(doc)
}

/// Rewrites `field` on every entry of a list through `canonical`.
fn relabel(list: Option<&mut Value>, field: &str, canonical: impl Fn(&str) -> &'static str) {
    let Some(Value::Array(items)) = list else {
        return;
    };
    for item in items.iter_mut().filter_map(Value::as_object_mut) {
        let label = item.get(field).and_then(Value::as_str).unwrap_or_default();
        let fixed = canonical(label);
        item.insert(field.to_string(), Value::String(fixed.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_backup_round_trip_is_deep_equal() {
        let original = ResumeDocument::seed();
        let raw = serde_json::to_string_pretty(&original).unwrap();
        assert_eq!(parse_backup_str(&raw).unwrap(), original);
    }

    #[test]
    fn test_round_trip_for_every_template() {
        for template in TemplateKind::ALL {
            let mut original = ResumeDocument::seed();
            original.template = template;
            let value = serde_json::to_value(&original).unwrap();
            assert_eq!(parse_backup(value).unwrap(), original);
        }
    }

    #[test]
    fn test_missing_personal_is_rejected() {
        let err = parse_backup(json!({ "experiences": [], "education": [] })).unwrap_err();
        assert!(matches!(err, ImportError::MissingField("personal")));
    }

    #[test]
    fn test_personal_must_be_object() {
        let err = parse_backup(json!({ "personal": "Alex", "experiences": [], "education": [] }))
            .unwrap_err();
        assert!(matches!(err, ImportError::MissingField("personal")));
    }

    #[test]
    fn test_experiences_must_be_array() {
        let err = parse_backup(json!({ "personal": {}, "experiences": {}, "education": [] }))
            .unwrap_err();
        assert!(matches!(err, ImportError::NotAnArray("experiences")));
        let err = parse_backup(json!({ "personal": {}, "experiences": [] })).unwrap_err();
        assert!(matches!(err, ImportError::NotAnArray("education")));
    }

    #[test]
    fn test_invalid_json_is_rejected() {
        assert!(matches!(
            parse_backup_str("{not json").unwrap_err(),
            ImportError::InvalidJson(_)
        ));
        assert!(matches!(parse_backup_str("[]").unwrap_err(), ImportError::NotAnObject));
    }

    #[test]
    fn test_minimal_backup_fills_defaults() {
        let doc = parse_backup(json!({
            "personal": { "fullName": "Ada" },
            "experiences": [],
            "education": [],
            "skills": null
        }))
        .unwrap();
        assert_eq!(doc.template, TemplateKind::Modern);
        assert_eq!(doc.personal.full_name, "Ada");
        assert_eq!(doc.personal.email, "");
        assert!(doc.skills.is_empty());
        assert!(doc.projects.is_empty());
    }

    #[test]
    fn test_labels_and_template_degrade() {
        let doc = parse_backup(json!({
            "template": "brutalist",
            "personal": {},
            "experiences": [],
            "education": [],
            "skills": [{ "id": "s", "name": "Go", "level": "guru" }, { "id": "t", "name": "C", "level": "expert" }],
            "languages": [{ "id": "l", "name": "French" }]
        }))
        .unwrap();
        assert_eq!(doc.template, TemplateKind::Modern);
        assert_eq!(doc.skills[0].level, SkillLevel::Intermediate);
        assert_eq!(doc.skills[1].level, SkillLevel::Expert);
        assert_eq!(doc.languages[0].proficiency, Proficiency::Intermediate);
    }

    #[test]
    fn test_seed_file_is_loaded_through_import() {
        let mut original = ResumeDocument::seed();
        original.template = TemplateKind::Balanced;
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(file.path(), serde_json::to_vec(&original).unwrap()).unwrap();
        assert_eq!(load_initial_document(Some(file.path())).unwrap(), original);

        std::fs::write(file.path(), b"{\"experiences\": []}").unwrap();
        assert!(load_initial_document(Some(file.path())).is_err());
        assert_eq!(load_initial_document(None).unwrap(), ResumeDocument::seed());
    }

    #[test]
    fn test_only_duplicate_ids_are_reissued() {
        let doc = parse_backup(json!({
            "personal": {},
            "experiences": [
                { "id": "a", "position": "One" },
                { "id": "a", "position": "Two" },
                { "position": "Three" }
            ],
            "education": [{ "id": "edu1" }]
        }))
        .unwrap();
        assert_eq!(doc.experiences[0].id, "a");
        assert_ne!(doc.experiences[1].id, "a");
        assert!(!doc.experiences[2].id.is_empty());
        assert_eq!(doc.education[0].id, "edu1");
    }
}
