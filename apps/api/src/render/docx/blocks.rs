//! Paragraph builders for each section kind, shared by all three layouts.

use crate::layout::format::{
    bulleted, degree_line, description_lines, experience_range, format_month_year,
    present_contacts,
};
use crate::layout::{Emphasis, LayoutPlan, SectionKind, SectionRule};
use crate::models::resume::{ResumeDocument, TemplateKind};
use crate::render::docx::model::{Border, Justify, Paragraph, Run};

pub const SLATE_900: &str = "0F172A";
pub const SLATE_800: &str = "1E293B";
pub const SLATE_500: &str = "64748B";
pub const SLATE_200: &str = "E2E8F0";
pub const WHITE: &str = "FFFFFF";
pub const INDIGO_400: &str = "818CF8";
pub const INDIGO_600: &str = "4F46E5";
pub const BORDER_DARK: &str = "334155";

/// Where a block is being written.
#[derive(Debug, Clone, Copy)]
pub struct Frame {
    pub template: TemplateKind,
    /// Usable text width in twips; the right tab stop sits here.
    pub width: u32,
    /// Dark sidebar cell: light text colours.
    pub sidebar: bool,
}

impl Frame {
    fn title_color(&self) -> &'static str {
        if self.sidebar {
            WHITE
        } else {
            SLATE_900
        }
    }

    fn body_color(&self) -> &'static str {
        if self.sidebar {
            SLATE_200
        } else {
            SLATE_800
        }
    }

    fn accent_color(&self) -> &'static str {
        if self.sidebar {
            INDIGO_400
        } else {
            INDIGO_600
        }
    }

    /// Separator between inline skill and language pairs.
    fn pair_separator(&self) -> &'static str {
        match self.template {
            TemplateKind::Balanced => "  |  ",
            TemplateKind::Modern => "  •  ",
            TemplateKind::Alpine => "\n",
        }
    }
}

/// Heading paragraph for a visible section; `None` when the rule has none.
pub fn heading(rule: &SectionRule, frame: Frame) -> Option<Paragraph> {
    let text = rule.heading?;
    let p = Paragraph::new().keep_next();
    let p = match rule.emphasis {
        Emphasis::Major => {
            let color = if frame.template == TemplateKind::Balanced {
                INDIGO_600
            } else {
                SLATE_900
            };
            p.spacing(400, 100)
                .border_bottom(Border {
                    color,
                    size: 6,
                    space: 1,
                })
                .run(Run::new(text, 20).bold().caps().color(color))
        }
        Emphasis::Minor => p
            .spacing(300, 80)
            .run(Run::new(text, 16).bold().caps().color(SLATE_500)),
        Emphasis::Sidebar => p
            .spacing(300, 150)
            .border_bottom(Border {
                color: BORDER_DARK,
                size: 2,
                space: 1,
            })
            .run(Run::new(text, 16).bold().caps().color(SLATE_500)),
        Emphasis::Accent => p
            .spacing(300, 150)
            .run(Run::new(text, 18).bold().caps().color(INDIGO_600)),
    };
    Some(p)
}

/// Heading plus body for one visible section.
pub fn section(
    doc: &ResumeDocument,
    plan: &LayoutPlan,
    rule: &SectionRule,
    frame: Frame,
) -> Vec<Paragraph> {
    let mut out: Vec<Paragraph> = heading(rule, frame).into_iter().collect();
    match rule.kind {
        SectionKind::Summary => out.push(summary(doc, frame)),
        SectionKind::Contact => out.extend(present_contacts(&doc.personal).into_iter().map(|c| {
            Paragraph::new()
                .spacing(0, 80)
                .run(Run::new(c, 17).color(frame.body_color()))
        })),
        SectionKind::Experience => {
            for exp in &doc.experiences {
                out.push(title_with_date(
                    &exp.position,
                    &experience_range(exp, plan.present_label()),
                    frame,
                ));
                if !exp.company.trim().is_empty() {
                    out.push(
                        Paragraph::new().spacing(0, 100).run(
                            Run::new(exp.company.trim(), 20)
                                .bold()
                                .italic()
                                .color(frame.accent_color()),
                        ),
                    );
                }
                out.extend(description_lines(&exp.description).into_iter().map(|line| {
                    Paragraph::new()
                        .spacing(0, 80)
                        .indent(240)
                        .run(Run::new(bulleted(line), 21).color(frame.body_color()))
                }));
            }
        }
        SectionKind::Education => {
            for edu in &doc.education {
                out.push(title_with_date(
                    &edu.institution,
                    &format_month_year(&edu.grad_date),
                    frame,
                ));
                let degree = degree_line(&edu.degree, &edu.field);
                if !degree.is_empty() {
                    out.push(
                        Paragraph::new()
                            .spacing(0, 120)
                            .run(Run::new(degree, 20).italic().color(frame.accent_color())),
                    );
                }
            }
        }
        SectionKind::Skills => out.push(pairs(
            doc.skills.iter().map(|s| (s.name.as_str(), s.level.label())),
            frame,
        )),
        SectionKind::Languages => out.push(pairs(
            doc.languages
                .iter()
                .map(|l| (l.name.as_str(), l.proficiency.label())),
            frame,
        )),
        SectionKind::Projects => {
            for project in &doc.projects {
                out.push(
                    Paragraph::new().spacing(200, 40).keep_next().run(
                        Run::new(project.title.trim(), 22)
                            .bold()
                            .color(frame.title_color()),
                    ),
                );
                if !project.link.trim().is_empty() {
                    out.push(
                        Paragraph::new()
                            .spacing(0, 40)
                            .run(Run::new(project.link.trim(), 16).color(frame.accent_color())),
                    );
                }
                if !project.description.trim().is_empty() {
                    out.push(
                        Paragraph::new()
                            .spacing(0, 120)
                            .run(Run::new(project.description.trim(), 20).color(SLATE_500)),
                    );
                }
            }
        }
    }
    out
}

fn summary(doc: &ResumeDocument, frame: Frame) -> Paragraph {
    let text = doc.personal.summary.trim();
    match frame.template {
        TemplateKind::Modern => Paragraph::new()
            .spacing(200, 400)
            .justify(Justify::Both)
            .run(Run::new(text, 22).italic()),
        TemplateKind::Balanced => Paragraph::new()
            .spacing(200, 300)
            .justify(Justify::Both)
            .run(Run::new(text, 21).italic().color(SLATE_800)),
        TemplateKind::Alpine => Paragraph::new()
            .spacing(0, 400)
            .run(Run::new(text, 21).italic().color(SLATE_800)),
    }
}

/// Title on the left, date pushed to the right margin by one right tab stop.
pub fn title_with_date(title: &str, date: &str, frame: Frame) -> Paragraph {
    let before = if frame.template == TemplateKind::Alpine { 240 } else { 200 };
    let (title_size, date_size) = if frame.sidebar { (18, 14) } else { (24, 18) };
    Paragraph::new()
        .spacing(before, 40)
        .keep_next()
        .right_tab(frame.width)
        .run(Run::new(title.trim(), title_size).bold().color(frame.title_color()))
        .run(Run::new(format!("\t{date}"), date_size).bold().color(SLATE_500))
}

/// One paragraph joining every `name (level)` pair.
fn pairs<'a>(items: impl Iterator<Item = (&'a str, &'static str)>, frame: Frame) -> Paragraph {
    let joined = items
        .map(|(name, level)| format!("{} ({level})", name.trim()))
        .collect::<Vec<_>>()
        .join(frame.pair_separator());
    Paragraph::new()
        .spacing(120, 200)
        .run(Run::new(joined, if frame.sidebar { 17 } else { 21 }).color(frame.body_color()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{Experience, Skill, SkillLevel};

    fn frame(template: TemplateKind) -> Frame {
        Frame {
            template,
            width: 10466,
            sidebar: false,
        }
    }

    fn rule(kind: SectionKind) -> SectionRule {
        crate::layout::rules_for(TemplateKind::Modern)
            .sections_in_order()
            .into_iter()
            .find(|r| r.kind == kind)
            .unwrap()
    }

    #[test]
    fn test_experience_block_shape() {
        let mut doc = ResumeDocument::seed();
        doc.experiences = vec![Experience {
            id: "x".into(),
            company: "Acme".into(),
            position: "Lead".into(),
            start_date: "2020-03".into(),
            end_date: "2021-01".into(),
            description: "Built things\n\n• Already bulleted".into(),
            current: true,
        }];
        let plan = LayoutPlan::resolve(&doc);
        let paras = section(&doc, &plan, &rule(SectionKind::Experience), frame(TemplateKind::Modern));
        let texts: Vec<String> = paras.iter().map(Paragraph::text).collect();
        assert_eq!(
            texts,
            vec![
                "Professional Experience",
                "Lead\tMar 2020 — Present",
                "Acme",
                "• Built things",
                "• Already bulleted",
            ]
        );
        assert_eq!(paras[1].right_tab, Some(10466));
        assert!(!texts.iter().any(|t| t.contains("Jan 2021")));
    }

    #[test]
    fn test_skills_are_one_paragraph() {
        let mut doc = ResumeDocument::seed();
        doc.skills.push(Skill {
            id: "s4".into(),
            name: "Rust".into(),
            level: SkillLevel::Beginner,
        });
        let plan = LayoutPlan::resolve(&doc);
        let paras = section(&doc, &plan, &rule(SectionKind::Skills), frame(TemplateKind::Modern));
        assert_eq!(paras.len(), 2);
        assert_eq!(
            paras[1].text(),
            "React / Next.js (Expert)  •  TypeScript (Expert)  •  \
             Cloud Infrastructure (AWS/GCP) (Intermediate)  •  Rust (Beginner)"
        );
    }

    #[test]
    fn test_balanced_pairs_use_pipe() {
        let doc = ResumeDocument::seed();
        let plan = LayoutPlan::resolve(&doc);
        let paras = section(&doc, &plan, &rule(SectionKind::Languages), frame(TemplateKind::Balanced));
        assert_eq!(paras[1].text(), "English (Native)  |  German (Professional)");
    }

    #[test]
    fn test_heading_uses_caps_not_uppercased_text() {
        let p = heading(&rule(SectionKind::Education), frame(TemplateKind::Modern)).unwrap();
        assert_eq!(p.text(), "Education");
        assert!(p.runs[0].caps);
        assert!(p.border_bottom.is_some());
    }

    #[test]
    fn test_project_without_link_has_two_paragraphs() {
        let mut doc = ResumeDocument::seed();
        doc.projects[0].link = "  ".into();
        let plan = LayoutPlan::resolve(&doc);
        let paras = section(&doc, &plan, &rule(SectionKind::Projects), frame(TemplateKind::Modern));
        assert_eq!(paras.len(), 3);
        assert_eq!(paras[1].text(), "OpenSource Dashboard Library");
    }
}
