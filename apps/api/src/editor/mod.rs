//! Field-level edits from the editing collaborator: list entry add, update
//! and remove by section name, addressed by opaque id.

pub mod handlers;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::errors::AppError;
use crate::models::resume::{
    push_entry, update_entry, Entry, ListSection, ResumeDocument,
};

/// Resolves a section path segment.
pub fn parse_section(name: &str) -> Result<ListSection, AppError> {
    ListSection::parse(name).ok_or_else(|| AppError::NotFound(format!("Unknown section '{name}'")))
}

fn typed<T: DeserializeOwned>(section: ListSection, body: Value) -> Result<T, AppError> {
    serde_json::from_value(body)
        .map_err(|e| AppError::Validation(format!("Invalid {section:?} entry: {e}")))
}

fn push_typed<T: Entry + DeserializeOwned>(
    list: &mut Vec<T>,
    section: ListSection,
    body: Value,
) -> Result<String, AppError> {
    let entry = typed(section, body)?;
    Ok(push_entry(list, entry))
}

fn update_typed<T: Entry + DeserializeOwned>(
    list: &mut [T],
    section: ListSection,
    id: &str,
    body: Value,
) -> Result<(), AppError> {
    let entry = typed(section, body)?;
    if update_entry(list, id, entry) {
        Ok(())
    } else {
        Err(AppError::NotFound(format!("No {section:?} entry with id '{id}'")))
    }
}

/// Appends an entry, blank when `body` is `None`, under a fresh id.
/// Any id in the body is ignored.
pub fn add_entry(
    doc: &mut ResumeDocument,
    section: ListSection,
    body: Option<Value>,
) -> Result<String, AppError> {
    let Some(body) = body else {
        return Ok(doc.add_blank(section));
    };
    match section {
        ListSection::Experiences => push_typed(&mut doc.experiences, section, body),
        ListSection::Education => push_typed(&mut doc.education, section, body),
        ListSection::Skills => push_typed(&mut doc.skills, section, body),
        ListSection::Languages => push_typed(&mut doc.languages, section, body),
        ListSection::Projects => push_typed(&mut doc.projects, section, body),
    }
}

/// Replaces the entry with `id`, keeping the id. Validation happens before
/// anything is written.
pub fn replace_entry(
    doc: &mut ResumeDocument,
    section: ListSection,
    id: &str,
    body: Value,
) -> Result<(), AppError> {
    match section {
        ListSection::Experiences => update_typed(&mut doc.experiences, section, id, body),
        ListSection::Education => update_typed(&mut doc.education, section, id, body),
        ListSection::Skills => update_typed(&mut doc.skills, section, id, body),
        ListSection::Languages => update_typed(&mut doc.languages, section, id, body),
        ListSection::Projects => update_typed(&mut doc.projects, section, id, body),
    }
}

pub fn remove_entry(doc: &mut ResumeDocument, section: ListSection, id: &str) -> Result<(), AppError> {
    if doc.remove(section, id) {
        Ok(())
    } else {
        Err(AppError::NotFound(format!("No {section:?} entry with id '{id}'")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::SkillLevel;
    use serde_json::json;

    #[test]
    fn test_add_blank_and_typed() {
        let mut doc = ResumeDocument::seed();
        let id = add_entry(&mut doc, ListSection::Skills, None).unwrap();
        assert_eq!(doc.skills.last().unwrap().id, id);
        assert_eq!(doc.skills.last().unwrap().level, SkillLevel::Intermediate);

        let id = add_entry(
            &mut doc,
            ListSection::Experiences,
            Some(json!({ "id": "1", "position": "CTO", "current": true })),
        )
        .unwrap();
        assert_ne!(id, "1");
        assert_eq!(doc.experiences.len(), 2);
        assert_eq!(doc.experiences[1].position, "CTO");
    }

    #[test]
    fn test_update_keeps_id() {
        let mut doc = ResumeDocument::seed();
        replace_entry(
            &mut doc,
            ListSection::Education,
            "edu1",
            json!({ "id": "other", "institution": "MIT" }),
        )
        .unwrap();
        assert_eq!(doc.education[0].id, "edu1");
        assert_eq!(doc.education[0].institution, "MIT");
        assert_eq!(doc.education[0].degree, "");
    }

    #[test]
    fn test_unknown_id_is_not_found_and_unchanged() {
        let mut doc = ResumeDocument::seed();
        let before = doc.clone();
        assert!(matches!(
            replace_entry(&mut doc, ListSection::Projects, "nope", json!({})),
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            remove_entry(&mut doc, ListSection::Languages, "nope"),
            Err(AppError::NotFound(_))
        ));
        assert_eq!(doc, before);
    }

    #[test]
    fn test_invalid_body_is_rejected_before_write() {
        let mut doc = ResumeDocument::seed();
        let before = doc.clone();
        let err = replace_entry(&mut doc, ListSection::Skills, "s1", json!({ "level": "Guru" }));
        assert!(matches!(err, Err(AppError::Validation(_))));
        assert_eq!(doc, before);
    }

    #[test]
    fn test_remove() {
        let mut doc = ResumeDocument::seed();
        remove_entry(&mut doc, ListSection::Languages, "l1").unwrap();
        assert_eq!(doc.languages.len(), 1);
        assert_eq!(doc.languages[0].id, "l2");
        assert!(parse_section("hobbies").is_err());
    }
}
