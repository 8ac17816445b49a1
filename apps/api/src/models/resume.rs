//! The canonical resume document and its list operations.
//!
//! Every renderer takes a `&ResumeDocument` and nothing else. Field names on
//! the wire are camelCase so a backup written by one client is readable by
//! any other.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ────────────────────────────────────────────────────────────────────────────
// Enumerations
// ────────────────────────────────────────────────────────────────────────────

/// The three layout families. `Modern` is persisted as `elite`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TemplateKind {
    #[default]
    #[serde(rename = "elite", alias = "modern")]
    Modern,
    #[serde(rename = "balanced")]
    Balanced,
    #[serde(rename = "alpine")]
    Alpine,
}

impl TemplateKind {
    pub const ALL: [TemplateKind; 3] = [
        TemplateKind::Modern,
        TemplateKind::Balanced,
        TemplateKind::Alpine,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateKind::Modern => "elite",
            TemplateKind::Balanced => "balanced",
            TemplateKind::Alpine => "alpine",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SkillLevel {
    Beginner,
    #[default]
    Intermediate,
    Expert,
}

impl SkillLevel {
    pub fn label(&self) -> &'static str {
        match self {
            SkillLevel::Beginner => "Beginner",
            SkillLevel::Intermediate => "Intermediate",
            SkillLevel::Expert => "Expert",
        }
    }

    /// Case-insensitive parse; unknown labels degrade to `Intermediate`.
    pub fn from_label_lenient(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "beginner" => SkillLevel::Beginner,
            "expert" => SkillLevel::Expert,
            _ => SkillLevel::Intermediate,
        }
    }

    /// Fill fraction of the sidebar skill bar, in percent.
    pub fn bar_percent(&self) -> u8 {
        match self {
            SkillLevel::Expert => 100,
            SkillLevel::Intermediate => 65,
            SkillLevel::Beginner => 35,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Proficiency {
    Native,
    Fluent,
    Professional,
    #[default]
    Intermediate,
    Basic,
}

impl Proficiency {
    pub fn label(&self) -> &'static str {
        match self {
            Proficiency::Native => "Native",
            Proficiency::Fluent => "Fluent",
            Proficiency::Professional => "Professional",
            Proficiency::Intermediate => "Intermediate",
            Proficiency::Basic => "Basic",
        }
    }

    /// Case-insensitive parse; unknown labels degrade to `Intermediate`.
    pub fn from_label_lenient(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "native" => Proficiency::Native,
            "fluent" => Proficiency::Fluent,
            "professional" => Proficiency::Professional,
            "basic" => Proficiency::Basic,
            _ => Proficiency::Intermediate,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Entities
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalDetails {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub website: String,
    pub summary: String,
}

impl PersonalDetails {
    /// Contact fields in display order, blanks included.
    pub fn contact_fields(&self) -> [&str; 4] {
        [
            self.email.as_str(),
            self.phone.as_str(),
            self.location.as_str(),
            self.website.as_str(),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Experience {
    pub id: String,
    pub company: String,
    pub position: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
    pub current: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Education {
    pub id: String,
    pub institution: String,
    pub degree: String,
    pub field: String,
    pub grad_date: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Skill {
    pub id: String,
    pub name: String,
    pub level: SkillLevel,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Language {
    pub id: String,
    pub name: String,
    pub proficiency: Proficiency,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Empty when the project has no link.
    pub link: String,
}

/// The whole resume. `personal`, `experiences` and `education` are required
/// on import; the remaining lists default to empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeDocument {
    #[serde(default)]
    pub template: TemplateKind,
    pub personal: PersonalDetails,
    pub experiences: Vec<Experience>,
    pub education: Vec<Education>,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub languages: Vec<Language>,
    #[serde(default)]
    pub projects: Vec<Project>,
}

/// Generates a fresh opaque entry id.
pub fn new_entry_id() -> String {
    Uuid::new_v4().simple().to_string()
}

// ────────────────────────────────────────────────────────────────────────────
// List sections
// ────────────────────────────────────────────────────────────────────────────

/// The five id-bearing lists, addressable by their wire name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListSection {
    Experiences,
    Education,
    Skills,
    Languages,
    Projects,
}

impl ListSection {
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "experiences" => Some(ListSection::Experiences),
            "education" => Some(ListSection::Education),
            "skills" => Some(ListSection::Skills),
            "languages" => Some(ListSection::Languages),
            "projects" => Some(ListSection::Projects),
            _ => None,
        }
    }
}

/// Gives list operations uniform access to an entry's id.
pub trait Entry {
    fn id(&self) -> &str;
    fn set_id(&mut self, id: String);
}

macro_rules! impl_entry {
    ($($ty:ty),*) => {
        $(impl Entry for $ty {
            fn id(&self) -> &str {
                &self.id
            }
            fn set_id(&mut self, id: String) {
                self.id = id;
            }
        })*
    };
}

impl_entry!(Experience, Education, Skill, Language, Project);

/// Appends `entry` under a fresh id and returns that id.
pub fn push_entry<T: Entry>(list: &mut Vec<T>, mut entry: T) -> String {
    let id = new_entry_id();
    entry.set_id(id.clone());
    list.push(entry);
    id
}

/// Replaces the entry whose id matches, keeping the stored id. Returns false
/// when no entry matches.
pub fn update_entry<T: Entry>(list: &mut [T], id: &str, mut entry: T) -> bool {
    match list.iter_mut().find(|e| e.id() == id) {
        Some(slot) => {
            entry.set_id(id.to_string());
            *slot = entry;
            true
        }
        None => false,
    }
}

/// Removes the entry whose id matches. Returns false when no entry matches.
pub fn remove_entry<T: Entry>(list: &mut Vec<T>, id: &str) -> bool {
    let before = list.len();
    list.retain(|e| e.id() != id);
    list.len() != before
}

/// Re-issues ids that are empty or repeat an earlier id in the same list.
/// Returns how many ids were replaced.
pub fn ensure_unique_ids<T: Entry>(list: &mut [T]) -> usize {
    let mut seen = std::collections::HashSet::new();
    let mut replaced = 0;
    for entry in list.iter_mut() {
        if entry.id().is_empty() || !seen.insert(entry.id().to_string()) {
            let id = new_entry_id();
            seen.insert(id.clone());
            entry.set_id(id);
            replaced += 1;
        }
    }
    replaced
}

impl ResumeDocument {
    /// A document with every field blank and every list empty.
    pub fn empty(template: TemplateKind) -> Self {
        ResumeDocument {
            template,
            personal: PersonalDetails::default(),
            experiences: vec![],
            education: vec![],
            skills: vec![],
            languages: vec![],
            projects: vec![],
        }
    }

    /// The profile a fresh session starts from.
    pub fn seed() -> Self {
        ResumeDocument {
            template: TemplateKind::Modern,
            personal: PersonalDetails {
                full_name: "Alex Sterling".to_string(),
                email: "alex.sterling@example.com".to_string(),
                phone: "+1 (555) 012-3456".to_string(),
                location: "San Francisco, CA".to_string(),
                website: "linkedin.com/in/alexsterling".to_string(),
                summary: "Dynamic Senior Software Engineer with 8+ years of experience building \
                          scalable cloud architectures and leading cross-functional teams. Expert \
                          in React, Node.js, and Distributed Systems."
                    .to_string(),
            },
            experiences: vec![Experience {
                id: "1".to_string(),
                company: "TechNova Solutions".to_string(),
                position: "Senior Frontend Architect".to_string(),
                start_date: "2020-03".to_string(),
                end_date: "Present".to_string(),
                description: "Led the migration of a legacy monolithic dashboard to a modern \
                              micro-frontend architecture using React and GraphQL. Improved page \
                              load times by 45%. Managed a team of 12 developers across 3 time zones."
                    .to_string(),
                current: true,
            }],
            education: vec![Education {
                id: "edu1".to_string(),
                institution: "Stanford University".to_string(),
                degree: "Bachelor of Science".to_string(),
                field: "Computer Science".to_string(),
                grad_date: "2015-05".to_string(),
            }],
            skills: vec![
                Skill {
                    id: "s1".to_string(),
                    name: "React / Next.js".to_string(),
                    level: SkillLevel::Expert,
                },
                Skill {
                    id: "s2".to_string(),
                    name: "TypeScript".to_string(),
                    level: SkillLevel::Expert,
                },
                Skill {
                    id: "s3".to_string(),
                    name: "Cloud Infrastructure (AWS/GCP)".to_string(),
                    level: SkillLevel::Intermediate,
                },
            ],
            languages: vec![
                Language {
                    id: "l1".to_string(),
                    name: "English".to_string(),
                    proficiency: Proficiency::Native,
                },
                Language {
                    id: "l2".to_string(),
                    name: "German".to_string(),
                    proficiency: Proficiency::Professional,
                },
            ],
            projects: vec![Project {
                id: "p1".to_string(),
                title: "OpenSource Dashboard Library".to_string(),
                description: "A comprehensive UI kit built for large-scale data visualization, \
                              currently used by 5,000+ developers."
                    .to_string(),
                link: "github.com/alex/dashboard-kit".to_string(),
            }],
        }
    }

    /// Adds a blank entry to `section` and returns its id.
    pub fn add_blank(&mut self, section: ListSection) -> String {
        match section {
            ListSection::Experiences => push_entry(&mut self.experiences, Experience::default()),
            ListSection::Education => push_entry(&mut self.education, Education::default()),
            ListSection::Skills => push_entry(&mut self.skills, Skill::default()),
            ListSection::Languages => push_entry(&mut self.languages, Language::default()),
            ListSection::Projects => push_entry(&mut self.projects, Project::default()),
        }
    }

    pub fn remove(&mut self, section: ListSection, id: &str) -> bool {
        match section {
            ListSection::Experiences => remove_entry(&mut self.experiences, id),
            ListSection::Education => remove_entry(&mut self.education, id),
            ListSection::Skills => remove_entry(&mut self.skills, id),
            ListSection::Languages => remove_entry(&mut self.languages, id),
            ListSection::Projects => remove_entry(&mut self.projects, id),
        }
    }

    /// Applies `ensure_unique_ids` to every list.
    pub fn normalize_ids(&mut self) -> usize {
        ensure_unique_ids(&mut self.experiences)
            + ensure_unique_ids(&mut self.education)
            + ensure_unique_ids(&mut self.skills)
            + ensure_unique_ids(&mut self.languages)
            + ensure_unique_ids(&mut self.projects)
    }
}
