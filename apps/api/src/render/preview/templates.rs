//! Builds the preview tree for each template from the resolved layout plan.
//!
//! Class names are the contract with the snapshot exporter: atomic units
//! carry `experience-item`, `education-item`, `project-item`, `skill-group`,
//! `alpine-sidebar` or `alpine-main`; text roles carry the classes its style
//! table understands.

use crate::layout::format::{
    degree_line, experience_range, format_month_year, present_contacts,
};
use crate::layout::rules::{NamePlacement, SectionKind};
use crate::layout::{Emphasis, LayoutPlan, PlannedBlock, SectionRule};
use crate::models::resume::{ResumeDocument, TemplateKind};
use crate::render::preview::node::Element;
use crate::render::preview::PREVIEW_BLOCK_ID;

pub fn build_tree(doc: &ResumeDocument, plan: &LayoutPlan) -> Element {
    let root = Element::new("div")
        .id(PREVIEW_BLOCK_ID)
        .class("resume")
        .class(template_class(doc.template));

    match plan.rules.header.placement {
        NamePlacement::Top => root
            .class("padded")
            .child(top_header(plan))
            .children(plan.blocks.iter().map(|b| block(doc, plan, b))),
        NamePlacement::Sidebar => root.children(plan.blocks.iter().map(|b| block(doc, plan, b))),
    }
}

fn template_class(template: TemplateKind) -> &'static str {
    match template {
        TemplateKind::Modern => "template-elite",
        TemplateKind::Balanced => "template-balanced",
        TemplateKind::Alpine => "template-alpine",
    }
}

fn top_header(plan: &LayoutPlan) -> Element {
    let header = Element::new("header")
        .class("resume-header")
        .child(Element::new("h1").class("resume-name").text(&plan.display_name));
    if plan.contact_line.is_empty() {
        header
    } else {
        header.child(Element::new("p").class("contact-line").text(&plan.contact_line))
    }
}

fn block(doc: &ResumeDocument, plan: &LayoutPlan, block: &PlannedBlock) -> Element {
    match block {
        PlannedBlock::Section(rule) => section(doc, plan, rule),
        PlannedBlock::Columns(cols) => Element::new("div")
            .class(if cols.len() > 1 { "grid-2" } else { "grid-1" })
            .children(cols.iter().map(|col| column(doc, plan, col))),
        PlannedBlock::Split { sidebar, main } => {
            let mut aside = Element::new("aside")
                .class("alpine-sidebar")
                .child(Element::new("h1").class("resume-name").text(&plan.display_name));
            if let Some(role) = &plan.role_hint {
                aside = aside.child(Element::new("p").class("role-hint").text(role));
            }
            Element::new("div")
                .class("alpine-layout")
                .child(aside.children(sidebar.iter().map(|r| section(doc, plan, r))))
                .child(
                    Element::new("main")
                        .class("alpine-main")
                        .children(main.iter().map(|r| section(doc, plan, r))),
                )
        }
    }
}

fn column(doc: &ResumeDocument, plan: &LayoutPlan, rules: &[SectionRule]) -> Element {
    let col = Element::new("div").class("column");
    let skills_only = rules
        .iter()
        .all(|r| matches!(r.kind, SectionKind::Skills | SectionKind::Languages));
    let col = if skills_only { col.class("skill-group") } else { col };
    col.children(rules.iter().map(|r| section(doc, plan, r)))
}

fn heading_class(emphasis: Emphasis) -> &'static str {
    match emphasis {
        Emphasis::Major => "heading-major",
        Emphasis::Minor => "heading-minor",
        Emphasis::Sidebar => "heading-sidebar",
        Emphasis::Accent => "heading-accent",
    }
}

fn kind_class(kind: SectionKind) -> &'static str {
    match kind {
        SectionKind::Summary => "section-summary",
        SectionKind::Contact => "section-contact",
        SectionKind::Experience => "section-experience",
        SectionKind::Education => "section-education",
        SectionKind::Skills => "section-skills",
        SectionKind::Languages => "section-languages",
        SectionKind::Projects => "section-projects",
    }
}

fn section(doc: &ResumeDocument, plan: &LayoutPlan, rule: &SectionRule) -> Element {
    let mut el = Element::new("section")
        .class("section")
        .class(kind_class(rule.kind));
    if let Some(heading) = rule.heading {
        el = el.child(
            Element::new("h2")
                .class("section-heading")
                .class(heading_class(rule.emphasis))
                .text(heading),
        );
    }
    let alpine = doc.template == TemplateKind::Alpine;
    if alpine && rule.kind == SectionKind::Skills {
        el = el.class("skill-group");
    }
    match rule.kind {
        SectionKind::Summary => el.child(Element::new("p").class("summary").text(doc.personal.summary.trim())),
        SectionKind::Contact => el.children(
            present_contacts(&doc.personal)
                .into_iter()
                .map(|c| Element::new("p").class("contact-item").text(c)),
        ),
        SectionKind::Experience => el.children(doc.experiences.iter().map(|exp| {
            Element::new("div")
                .class("experience-item")
                .child(title_row(&exp.position, &experience_range(exp, plan.present_label())))
                .child(Element::new("div").class("item-subtitle").text(&exp.company))
                .child(Element::new("p").class("item-body").text(&exp.description))
        })),
        SectionKind::Education => el.children(doc.education.iter().map(|edu| {
            Element::new("div")
                .class("education-item")
                .child(title_row(&edu.institution, &format_month_year(&edu.grad_date)))
                .child(
                    Element::new("div")
                        .class("item-subtitle")
                        .text(degree_line(&edu.degree, &edu.field)),
                )
        })),
        SectionKind::Skills if alpine => el.children(doc.skills.iter().map(|skill| {
            Element::new("div")
                .class("skill-row")
                .child(label_row(&skill.name, skill.level.label()))
                .child(
                    Element::new("div")
                        .class("skill-bar")
                        .attr("data-fill", skill.level.bar_percent().to_string())
                        .attr("style", format!("--fill: {}%", skill.level.bar_percent())),
                )
        })),
        SectionKind::Skills => {
            let with_level = doc.template == TemplateKind::Modern;
            el.child(Element::new("div").class("chip-list").children(doc.skills.iter().map(|s| {
                chip(&s.name, with_level.then(|| s.level.label()))
            })))
        }
        SectionKind::Languages if alpine => el.children(
            doc.languages
                .iter()
                .map(|l| label_row(&l.name, l.proficiency.label()).class("language-row")),
        ),
        SectionKind::Languages => el.child(
            Element::new("div")
                .class("chip-list")
                .children(doc.languages.iter().map(|l| chip(&l.name, Some(l.proficiency.label())))),
        ),
        SectionKind::Projects => el.children(doc.projects.iter().map(|p| {
            let mut item = Element::new("div")
                .class("project-item")
                .child(Element::new("div").class("item-title").text(&p.title));
            if !p.link.trim().is_empty() {
                item = item.child(Element::new("div").class("item-link").text(p.link.trim()));
            }
            item.child(Element::new("p").class("item-body").text(&p.description))
        })),
    }
}

/// Title on the left, date on the right of the same line.
fn title_row(title: &str, date: &str) -> Element {
    Element::new("div")
        .class("row-between")
        .child(Element::new("h3").class("item-title").text(title))
        .child(Element::new("span").class("item-date").text(date))
}

fn label_row(label: &str, level: &str) -> Element {
    Element::new("div")
        .class("row-between")
        .child(Element::new("span").class("row-label").text(label))
        .child(Element::new("span").class("row-level").text(level))
}

fn chip(label: &str, level: Option<&str>) -> Element {
    let chip = Element::new("span")
        .class("chip")
        .child(Element::new("span").class("chip-label").text(label));
    match level {
        Some(level) => chip.child(Element::new("span").class("chip-level").text(level)),
        None => chip,
    }
}
