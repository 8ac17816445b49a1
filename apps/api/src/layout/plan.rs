//! Resolves a template's rules against a document: applies visibility once
//! so every renderer walks the same list of blocks.

use crate::layout::rules::{
    rules_for, BlockRule, ContactStyle, HeaderRule, SectionKind, SectionRule, TemplateRules,
    NAME_PLACEHOLDER,
};
use crate::models::resume::ResumeDocument;

/// True when `kind` has something to show. Strings count after trimming.
pub fn section_visible(doc: &ResumeDocument, kind: SectionKind) -> bool {
    match kind {
        SectionKind::Summary => !doc.personal.summary.trim().is_empty(),
        SectionKind::Contact => doc
            .personal
            .contact_fields()
            .iter()
            .any(|f| !f.trim().is_empty()),
        SectionKind::Experience => !doc.experiences.is_empty(),
        SectionKind::Education => !doc.education.is_empty(),
        SectionKind::Skills => !doc.skills.is_empty(),
        SectionKind::Languages => !doc.languages.is_empty(),
        SectionKind::Projects => !doc.projects.is_empty(),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PlannedBlock {
    Section(SectionRule),
    /// Only non-empty columns survive; never empty itself.
    Columns(Vec<Vec<SectionRule>>),
    /// Always present for templates that split: the sidebar carries the name.
    Split {
        sidebar: Vec<SectionRule>,
        main: Vec<SectionRule>,
    },
}

/// The visible structure of one document under one template.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutPlan {
    pub rules: &'static TemplateRules,
    /// Display name: placeholder when blank, uppercased when the rule says so.
    pub display_name: String,
    /// Inline contact summary; empty for stacked-contact templates.
    pub contact_line: String,
    pub role_hint: Option<String>,
    pub blocks: Vec<PlannedBlock>,
}

impl LayoutPlan {
    pub fn resolve(doc: &ResumeDocument) -> Self {
        let rules = rules_for(doc.template);
        let header = &rules.header;

        let visible = |list: &[SectionRule]| -> Vec<SectionRule> {
            list.iter()
                .copied()
                .filter(|r| section_visible(doc, r.kind))
                .collect()
        };

        let blocks = rules
            .body
            .iter()
            .filter_map(|block| match block {
                BlockRule::Section(rule) => {
                    section_visible(doc, rule.kind).then_some(PlannedBlock::Section(*rule))
                }
                BlockRule::Columns(cols) => {
                    let cols: Vec<Vec<SectionRule>> = cols
                        .iter()
                        .map(|c| visible(c))
                        .filter(|c| !c.is_empty())
                        .collect();
                    (!cols.is_empty()).then_some(PlannedBlock::Columns(cols))
                }
                BlockRule::Split { sidebar, main } => Some(PlannedBlock::Split {
                    sidebar: visible(sidebar),
                    main: visible(main),
                }),
            })
            .collect();

        LayoutPlan {
            rules,
            display_name: display_name(&doc.personal.full_name, header),
            contact_line: match header.contact {
                ContactStyle::Inline(sep) => crate::layout::format::contact_line(&doc.personal, sep),
                ContactStyle::Stacked => String::new(),
            },
            role_hint: header.role_hint.map(|default| {
                doc.experiences
                    .first()
                    .map(|e| e.position.trim())
                    .filter(|p| !p.is_empty())
                    .unwrap_or(default)
                    .to_string()
            }),
            blocks,
        }
    }

    pub fn present_label(&self) -> &'static str {
        self.rules.present_label
    }

    /// Visible sections in reading order.
    pub fn visible_sections(&self) -> Vec<SectionRule> {
        let mut out = Vec::new();
        for block in &self.blocks {
            match block {
                PlannedBlock::Section(rule) => out.push(*rule),
                PlannedBlock::Columns(cols) => out.extend(cols.iter().flatten().copied()),
                PlannedBlock::Split { sidebar, main } => {
                    out.extend(sidebar.iter().copied());
                    out.extend(main.iter().copied());
                }
            }
        }
        out
    }

    /// Heading texts that will be rendered, in reading order.
    pub fn headings(&self) -> Vec<&'static str> {
        self.visible_sections()
            .into_iter()
            .filter_map(|r| r.heading)
            .collect()
    }
}

fn display_name(full_name: &str, header: &HeaderRule) -> String {
    let name = full_name.trim();
    let name = if name.is_empty() { NAME_PLACEHOLDER } else { name };
    if header.uppercase_name {
        name.to_uppercase()
    } else {
        name.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{Skill, TemplateKind};

    #[test]
    fn test_empty_document_has_no_headings() {
        for template in TemplateKind::ALL {
            let plan = LayoutPlan::resolve(&ResumeDocument::empty(template));
            assert!(plan.headings().is_empty(), "{template:?}: {:?}", plan.headings());
        }
    }

    #[test]
    fn test_empty_modern_drops_column_group() {
        let plan = LayoutPlan::resolve(&ResumeDocument::empty(TemplateKind::Modern));
        assert!(plan.blocks.is_empty());
        assert_eq!(plan.display_name, "YOUR NAME");
    }

    #[test]
    fn test_empty_alpine_keeps_split_for_name() {
        let plan = LayoutPlan::resolve(&ResumeDocument::empty(TemplateKind::Alpine));
        assert_eq!(
            plan.blocks,
            vec![PlannedBlock::Split {
                sidebar: vec![],
                main: vec![]
            }]
        );
        assert_eq!(plan.display_name, "Your Name");
        assert_eq!(plan.role_hint.as_deref(), Some("Professional"));
    }

    #[test]
    fn test_whitespace_summary_is_hidden() {
        let mut doc = ResumeDocument::empty(TemplateKind::Balanced);
        doc.personal.summary = "   \n ".into();
        assert!(!section_visible(&doc, SectionKind::Summary));
    }

    #[test]
    fn test_columns_drop_empty_column() {
        let mut doc = ResumeDocument::empty(TemplateKind::Modern);
        doc.skills.push(Skill {
            id: "s".into(),
            name: "Go".into(),
            ..Default::default()
        });
        let plan = LayoutPlan::resolve(&doc);
        match &plan.blocks[..] {
            [PlannedBlock::Columns(cols)] => {
                assert_eq!(cols.len(), 1);
                assert_eq!(cols[0][0].kind, SectionKind::Skills);
            }
            other => panic!("unexpected blocks {other:?}"),
        }
    }

    #[test]
    fn test_seed_headings_per_template() {
        let mut doc = ResumeDocument::seed();
        doc.template = TemplateKind::Balanced;
        assert_eq!(
            LayoutPlan::resolve(&doc).headings(),
            vec![
                "Open-Source Projects",
                "Experience",
                "Education",
                "Professional Skills",
                "Languages"
            ]
        );
        doc.template = TemplateKind::Alpine;
        let plan = LayoutPlan::resolve(&doc);
        assert_eq!(plan.headings()[0], "Contact");
        assert_eq!(plan.role_hint.as_deref(), Some("Senior Frontend Architect"));
    }

    #[test]
    fn test_modern_contact_line_and_uppercase_name() {
        let plan = LayoutPlan::resolve(&ResumeDocument::seed());
        assert_eq!(plan.display_name, "ALEX STERLING");
        assert!(plan.contact_line.starts_with("alex.sterling@example.com  •  +1"));
    }
}
