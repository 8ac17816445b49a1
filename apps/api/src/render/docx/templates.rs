//! The three document layouts, each walking the resolved layout plan.

use crate::layout::rules::NamePlacement;
use crate::layout::{LayoutPlan, PlannedBlock, SectionRule};
use crate::models::resume::{ResumeDocument, TemplateKind};
use crate::render::docx::blocks::{
    section, Frame, INDIGO_400, INDIGO_600, SLATE_500, SLATE_900, WHITE,
};
use crate::render::docx::model::{Block, Border, Cell, Justify, Paragraph, Run, Table};

/// A4 width minus 0.5in margins on both sides, in twips.
pub const CONTENT_WIDTH: u32 = 11906 - 2 * 720;

const SIDEBAR_WIDTH: u32 = CONTENT_WIDTH * 3 / 10;
const SIDEBAR_MARGINS: [u32; 4] = [400, 300, 400, 300];
const MAIN_MARGINS: [u32; 4] = [400, 400, 400, 400];

/// Builds the document body for `doc` under its template.
pub fn build_body(doc: &ResumeDocument, plan: &LayoutPlan) -> Vec<Block> {
    match plan.rules.header.placement {
        NamePlacement::Top => single_column(doc, plan),
        NamePlacement::Sidebar => split_table(doc, plan),
    }
}

fn single_column(doc: &ResumeDocument, plan: &LayoutPlan) -> Vec<Block> {
    let frame = Frame {
        template: doc.template,
        width: CONTENT_WIDTH,
        sidebar: false,
    };
    let mut out: Vec<Paragraph> = header(doc.template, plan);
    for block in &plan.blocks {
        match block {
            PlannedBlock::Section(rule) => out.extend(section(doc, plan, rule, frame)),
            // Word has no side-by-side flow outside tables; columns read left then right.
            PlannedBlock::Columns(cols) => {
                for rule in cols.iter().flatten() {
                    out.extend(section(doc, plan, rule, frame));
                }
            }
            PlannedBlock::Split { sidebar, main } => {
                for rule in sidebar.iter().chain(main) {
                    out.extend(section(doc, plan, rule, frame));
                }
            }
        }
    }
    out.into_iter().map(Block::Paragraph).collect()
}

fn header(template: TemplateKind, plan: &LayoutPlan) -> Vec<Paragraph> {
    let mut out = Vec::new();
    match template {
        TemplateKind::Balanced => {
            out.push(
                Paragraph::new()
                    .indent(200)
                    .border_left(Border {
                        color: INDIGO_600,
                        size: 40,
                        space: 10,
                    })
                    .run(Run::new(&plan.display_name, 48).bold().color(SLATE_900)),
            );
            if !plan.contact_line.is_empty() {
                out.push(
                    Paragraph::new()
                        .spacing(100, 300)
                        .indent(200)
                        .run(Run::new(&plan.contact_line, 18).bold().color(INDIGO_600)),
                );
            }
        }
        TemplateKind::Modern | TemplateKind::Alpine => {
            out.push(
                Paragraph::new()
                    .justify(Justify::Center)
                    .run(Run::new(&plan.display_name, 52).bold().color(SLATE_900)),
            );
            if !plan.contact_line.is_empty() {
                out.push(
                    Paragraph::new()
                        .justify(Justify::Center)
                        .spacing(0, 400)
                        .run(Run::new(&plan.contact_line, 18).color(SLATE_500)),
                );
            }
        }
    }
    out
}

fn split_table(doc: &ResumeDocument, plan: &LayoutPlan) -> Vec<Block> {
    let sidebar_frame = Frame {
        template: doc.template,
        width: SIDEBAR_WIDTH - SIDEBAR_MARGINS[1] - SIDEBAR_MARGINS[3],
        sidebar: true,
    };
    let main_frame = Frame {
        template: doc.template,
        width: CONTENT_WIDTH - SIDEBAR_WIDTH - MAIN_MARGINS[1] - MAIN_MARGINS[3],
        sidebar: false,
    };

    let mut left = vec![Paragraph::new()
        .spacing(100, 100)
        .run(Run::new(&plan.display_name, 36).bold().color(WHITE))];
    if let Some(role) = &plan.role_hint {
        left.push(
            Paragraph::new()
                .spacing(0, 300)
                .run(Run::new(role, 14).bold().caps().color(INDIGO_400)),
        );
    }
    let mut right = Vec::new();

    let sections = |rules: &[SectionRule], frame: Frame, into: &mut Vec<Paragraph>| {
        for rule in rules {
            into.extend(section(doc, plan, rule, frame));
        }
    };
    for block in &plan.blocks {
        match block {
            PlannedBlock::Split { sidebar, main } => {
                sections(sidebar, sidebar_frame, &mut left);
                sections(main, main_frame, &mut right);
            }
            PlannedBlock::Section(rule) => sections(std::slice::from_ref(rule), main_frame, &mut right),
            PlannedBlock::Columns(cols) => {
                for col in cols {
                    sections(col, main_frame, &mut right);
                }
            }
        }
    }

    vec![
        Block::Table(Table {
            cells: vec![
                Cell {
                    width: SIDEBAR_WIDTH,
                    shading: Some(SLATE_900),
                    margins: SIDEBAR_MARGINS,
                    paragraphs: left,
                },
                Cell {
                    width: CONTENT_WIDTH - SIDEBAR_WIDTH,
                    shading: None,
                    margins: MAIN_MARGINS,
                    paragraphs: right,
                },
            ],
        }),
        // Word expects a paragraph after a trailing table.
        Block::Paragraph(Paragraph::new()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paragraph_texts(blocks: &[Block]) -> Vec<String> {
        blocks
            .iter()
            .flat_map(|b| match b {
                Block::Paragraph(p) => vec![p.text()],
                Block::Table(t) => t
                    .cells
                    .iter()
                    .flat_map(|c| c.paragraphs.iter().map(Paragraph::text))
                    .collect(),
            })
            .collect()
    }

    fn body(template: TemplateKind) -> Vec<Block> {
        let mut doc = ResumeDocument::seed();
        doc.template = template;
        build_body(&doc, &LayoutPlan::resolve(&doc))
    }

    #[test]
    fn test_modern_order_follows_plan() {
        let texts = paragraph_texts(&body(TemplateKind::Modern));
        assert_eq!(texts[0], "ALEX STERLING");
        let pos = |needle: &str| texts.iter().position(|t| t == needle).unwrap();
        assert!(pos("Professional Experience") < pos("Education"));
        assert!(pos("Education") < pos("Core Competencies"));
        assert!(pos("Core Competencies") < pos("Languages"));
        assert!(pos("Languages") < pos("Key Projects"));
    }

    #[test]
    fn test_balanced_keeps_name_as_entered() {
        let texts = paragraph_texts(&body(TemplateKind::Balanced));
        assert_eq!(texts[0], "Alex Sterling");
        assert!(texts[1].contains("  |  "));
        let pos = |needle: &str| texts.iter().position(|t| t == needle).unwrap();
        assert!(pos("Open-Source Projects") < pos("Experience"));
    }

    #[test]
    fn test_alpine_is_one_shaded_two_cell_table() {
        let blocks = body(TemplateKind::Alpine);
        let Block::Table(table) = &blocks[0] else {
            panic!("expected table first");
        };
        assert_eq!(table.cells.len(), 2);
        assert_eq!(table.cells[0].shading, Some(SLATE_900));
        assert_eq!(table.cells[1].shading, None);
        let left: Vec<String> = table.cells[0].paragraphs.iter().map(Paragraph::text).collect();
        assert_eq!(left[0], "Alex Sterling");
        assert_eq!(left[1], "Senior Frontend Architect");
        assert!(left.contains(&"Key Expertise".to_string()));
        let right: Vec<String> = table.cells[1].paragraphs.iter().map(Paragraph::text).collect();
        assert_eq!(right[0], "Profile");
        assert!(right.contains(&"Career History".to_string()));
        assert!(right.contains(&"Featured Projects".to_string()));
    }

    #[test]
    fn test_empty_alpine_has_placeholder_and_default_role() {
        let doc = ResumeDocument::empty(TemplateKind::Alpine);
        let blocks = build_body(&doc, &LayoutPlan::resolve(&doc));
        let texts = paragraph_texts(&blocks);
        assert_eq!(texts[0], "Your Name");
        assert_eq!(texts[1], "Professional");
    }
}
