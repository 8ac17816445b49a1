//! Declarative per-template layout rules.
//!
//! This table is the only place that knows section order, headings and
//! grouping. The preview, snapshot and native-document renderers all read it
//! through [`super::plan::LayoutPlan`]; none of them encodes ordering itself.

use serde::Serialize;

use crate::models::resume::TemplateKind;

/// A named content block with its own visibility predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Summary,
    /// Stacked contact lines; only the Alpine sidebar uses it as a section.
    Contact,
    Experience,
    Education,
    Skills,
    Languages,
    Projects,
}

/// Visual weight of a section heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Emphasis {
    /// Full-width heading with a rule underneath.
    Major,
    /// Small grey label used inside two-column groups.
    Minor,
    /// Dark-background sidebar label.
    Sidebar,
    /// Coloured caps label in the Alpine main column.
    Accent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SectionRule {
    pub kind: SectionKind,
    /// `None` renders the section body without a heading.
    pub heading: Option<&'static str>,
    pub emphasis: Emphasis,
}

const fn section(kind: SectionKind, heading: &'static str, emphasis: Emphasis) -> SectionRule {
    SectionRule {
        kind,
        heading: Some(heading),
        emphasis,
    }
}

const fn bare(kind: SectionKind, emphasis: Emphasis) -> SectionRule {
    SectionRule {
        kind,
        heading: None,
        emphasis,
    }
}

/// One step in a template's body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockRule {
    Section(SectionRule),
    /// Side-by-side columns, each a vertical run of sections.
    Columns(&'static [&'static [SectionRule]]),
    /// Fixed-width sidebar beside a flexible main column.
    Split {
        sidebar: &'static [SectionRule],
        main: &'static [SectionRule],
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NamePlacement {
    Top,
    Sidebar,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactStyle {
    /// Single line joined with the given separator.
    Inline(&'static str),
    /// One line per field inside the Contact section.
    Stacked,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderRule {
    pub placement: NamePlacement,
    pub uppercase_name: bool,
    pub contact: ContactStyle,
    /// Shows the first experience's position (or this default) under the name.
    pub role_hint: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateRules {
    pub template: TemplateKind,
    pub header: HeaderRule,
    /// Shown instead of an end date for current roles.
    pub present_label: &'static str,
    pub body: &'static [BlockRule],
}

/// Shown in place of a blank full name.
pub const NAME_PLACEHOLDER: &str = "Your Name";

use Emphasis::{Accent, Major, Minor, Sidebar};
use SectionKind::{Contact, Education, Experience, Languages, Projects, Skills, Summary};

static MODERN: TemplateRules = TemplateRules {
    template: TemplateKind::Modern,
    header: HeaderRule {
        placement: NamePlacement::Top,
        uppercase_name: true,
        contact: ContactStyle::Inline("  •  "),
        role_hint: None,
    },
    present_label: "Present",
    body: &[
        BlockRule::Section(bare(Summary, Major)),
        BlockRule::Section(section(Experience, "Professional Experience", Major)),
        BlockRule::Section(section(Education, "Education", Major)),
        BlockRule::Columns(&[
            &[
                section(Skills, "Core Competencies", Major),
                section(Languages, "Languages", Major),
            ],
            &[section(Projects, "Key Projects", Major)],
        ]),
    ],
};

static BALANCED: TemplateRules = TemplateRules {
    template: TemplateKind::Balanced,
    header: HeaderRule {
        placement: NamePlacement::Top,
        uppercase_name: false,
        contact: ContactStyle::Inline("  |  "),
        role_hint: None,
    },
    present_label: "Now",
    body: &[
        BlockRule::Section(bare(Summary, Major)),
        BlockRule::Section(section(Projects, "Open-Source Projects", Major)),
        BlockRule::Section(section(Experience, "Experience", Major)),
        BlockRule::Columns(&[
            &[section(Education, "Education", Minor)],
            &[
                section(Skills, "Professional Skills", Minor),
                section(Languages, "Languages", Minor),
            ],
        ]),
    ],
};

static ALPINE: TemplateRules = TemplateRules {
    template: TemplateKind::Alpine,
    header: HeaderRule {
        placement: NamePlacement::Sidebar,
        uppercase_name: false,
        contact: ContactStyle::Stacked,
        role_hint: Some("Professional"),
    },
    present_label: "Present",
    body: &[BlockRule::Split {
        sidebar: &[
            section(Contact, "Contact", Sidebar),
            section(Education, "Education", Sidebar),
            section(Skills, "Key Expertise", Sidebar),
            section(Languages, "Languages", Sidebar),
        ],
        main: &[
            section(Summary, "Profile", Accent),
            section(Experience, "Career History", Accent),
            section(Projects, "Featured Projects", Accent),
        ],
    }],
};

/// Returns the rule set for `template`. Exactly one set applies per document.
pub fn rules_for(template: TemplateKind) -> &'static TemplateRules {
    match template {
        TemplateKind::Modern => &MODERN,
        TemplateKind::Balanced => &BALANCED,
        TemplateKind::Alpine => &ALPINE,
    }
}

impl TemplateRules {
    /// Every section rule in reading order, columns flattened left to right.
    pub fn sections_in_order(&self) -> Vec<SectionRule> {
        let mut out = Vec::new();
        for block in self.body {
            match block {
                BlockRule::Section(rule) => out.push(*rule),
                BlockRule::Columns(cols) => out.extend(cols.iter().flat_map(|c| c.iter().copied())),
                BlockRule::Split { sidebar, main } => {
                    out.extend(sidebar.iter().copied());
                    out.extend(main.iter().copied());
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(template: TemplateKind) -> Vec<SectionKind> {
        rules_for(template)
            .sections_in_order()
            .into_iter()
            .map(|r| r.kind)
            .collect()
    }

    #[test]
    fn test_modern_order() {
        assert_eq!(
            kinds(TemplateKind::Modern),
            vec![Summary, Experience, Education, Skills, Languages, Projects]
        );
    }

    #[test]
    fn test_balanced_order() {
        assert_eq!(
            kinds(TemplateKind::Balanced),
            vec![Summary, Projects, Experience, Education, Skills, Languages]
        );
    }

    #[test]
    fn test_alpine_sidebar_then_main() {
        assert_eq!(
            kinds(TemplateKind::Alpine),
            vec![Contact, Education, Skills, Languages, Summary, Experience, Projects]
        );
    }

    #[test]
    fn test_each_template_covers_every_content_section_once() {
        for template in TemplateKind::ALL {
            let ks = kinds(template);
            for kind in [Summary, Experience, Education, Skills, Languages, Projects] {
                assert_eq!(
                    ks.iter().filter(|k| **k == kind).count(),
                    1,
                    "{template:?} must place {kind:?} exactly once"
                );
            }
        }
    }

    #[test]
    fn test_present_labels() {
        assert_eq!(rules_for(TemplateKind::Modern).present_label, "Present");
        assert_eq!(rules_for(TemplateKind::Balanced).present_label, "Now");
        assert_eq!(rules_for(TemplateKind::Alpine).present_label, "Present");
    }
}
