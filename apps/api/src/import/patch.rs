//! Partial profile fragments, as produced by the AI profile parser.
//!
//! Every field tracks presence explicitly. Personal fields override only when
//! present. Lists are replaced wholesale when the fragment carries them,
//! including with an empty list or `null`, and preserved when absent.

use serde::{Deserialize, Deserializer};

use crate::models::resume::{
    new_entry_id, Education, Entry, Experience, Language, PersonalDetails, Proficiency, Project,
    ResumeDocument, Skill, SkillLevel,
};

/// Presence-aware list field.
#[derive(Debug, Clone, PartialEq)]
pub enum ListPatch<T> {
    /// Key missing: keep the current list.
    Absent,
    /// Explicit `null`: replace with an empty list.
    Cleared,
    Set(Vec<T>),
}

impl<T> Default for ListPatch<T> {
    fn default() -> Self {
        ListPatch::Absent
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for ListPatch<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Only reached when the key is present; `#[serde(default)]` covers absence.
        Ok(match Option::<Vec<T>>::deserialize(deserializer)? {
            None => ListPatch::Cleared,
            Some(items) => ListPatch::Set(items),
        })
    }
}

impl<T> ListPatch<T> {
    /// Applies the patch to `list`, converting each item and issuing fresh
    /// ids regardless of any id the fragment carried.
    fn apply_to<M: Entry + From<T>>(self, list: &mut Vec<M>) {
        match self {
            ListPatch::Absent => {}
            ListPatch::Cleared => list.clear(),
            ListPatch::Set(items) => {
                *list = items
                    .into_iter()
                    .map(|item| {
                        let mut entry = M::from(item);
                        entry.set_id(new_entry_id());
                        entry
                    })
                    .collect();
            }
        }
    }
}

/// Personal fields, each overriding only when present. Also the body of the
/// personal-details editing endpoint.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalPatch {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub website: Option<String>,
    pub summary: Option<String>,
}

impl PersonalPatch {
    pub fn apply(self, personal: &mut PersonalDetails) {
        let fields = [
            (self.full_name, &mut personal.full_name),
            (self.email, &mut personal.email),
            (self.phone, &mut personal.phone),
            (self.location, &mut personal.location),
            (self.website, &mut personal.website),
            (self.summary, &mut personal.summary),
        ];
        for (value, slot) in fields {
            if let Some(value) = value {
                *slot = value;
            }
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Entry fragments
// ────────────────────────────────────────────────────────────────────────────
//
// Parser output is untrusted: any field may be missing or `null`, and either
// way it lands as the model default. Ids are dropped on conversion.

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExperienceFragment {
    pub company: Option<String>,
    pub position: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub description: Option<String>,
    pub current: Option<bool>,
}

impl From<ExperienceFragment> for Experience {
    fn from(f: ExperienceFragment) -> Self {
        Experience {
            id: String::new(),
            company: f.company.unwrap_or_default(),
            position: f.position.unwrap_or_default(),
            start_date: f.start_date.unwrap_or_default(),
            end_date: f.end_date.unwrap_or_default(),
            description: f.description.unwrap_or_default(),
            current: f.current.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EducationFragment {
    pub institution: Option<String>,
    pub degree: Option<String>,
    pub field: Option<String>,
    pub grad_date: Option<String>,
}

impl From<EducationFragment> for Education {
    fn from(f: EducationFragment) -> Self {
        Education {
            id: String::new(),
            institution: f.institution.unwrap_or_default(),
            degree: f.degree.unwrap_or_default(),
            field: f.field.unwrap_or_default(),
            grad_date: f.grad_date.unwrap_or_default(),
        }
    }
}

/// The level is free text, mapped leniently.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SkillFragment {
    pub name: Option<String>,
    pub level: Option<String>,
}

impl From<SkillFragment> for Skill {
    fn from(f: SkillFragment) -> Self {
        Skill {
            id: String::new(),
            name: f.name.unwrap_or_default(),
            level: SkillLevel::from_label_lenient(f.level.as_deref().unwrap_or_default()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct LanguageFragment {
    pub name: Option<String>,
    pub proficiency: Option<String>,
}

impl From<LanguageFragment> for Language {
    fn from(f: LanguageFragment) -> Self {
        Language {
            id: String::new(),
            name: f.name.unwrap_or_default(),
            proficiency: Proficiency::from_label_lenient(
                f.proficiency.as_deref().unwrap_or_default(),
            ),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ProjectFragment {
    pub title: Option<String>,
    pub description: Option<String>,
    pub link: Option<String>,
}

impl From<ProjectFragment> for Project {
    fn from(f: ProjectFragment) -> Self {
        Project {
            id: String::new(),
            title: f.title.unwrap_or_default(),
            description: f.description.unwrap_or_default(),
            link: f.link.unwrap_or_default(),
        }
    }
}

/// A partial document. There is deliberately no template field: a fragment
/// never switches the layout.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfilePatch {
    pub personal: Option<PersonalPatch>,
    pub experiences: ListPatch<ExperienceFragment>,
    pub education: ListPatch<EducationFragment>,
    pub skills: ListPatch<SkillFragment>,
    pub languages: ListPatch<LanguageFragment>,
    pub projects: ListPatch<ProjectFragment>,
}

impl ProfilePatch {
    /// Merges the fragment into `doc`. Infallible: parsing already happened.
    pub fn apply(self, doc: &mut ResumeDocument) {
        if let Some(personal) = self.personal {
            personal.apply(&mut doc.personal);
        }
        self.experiences.apply_to(&mut doc.experiences);
        self.education.apply_to(&mut doc.education);
        self.skills.apply_to(&mut doc.skills);
        self.languages.apply_to(&mut doc.languages);
        self.projects.apply_to(&mut doc.projects);
    }
}
