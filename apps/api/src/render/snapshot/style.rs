//! Maps the preview's role classes to page text styles, per template.

use crate::layout::font_metrics::FontFace;
use crate::models::resume::TemplateKind;
use crate::render::preview::node::Element;

// ────────────────────────────────────────────────────────────────────────────
// Palette
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Components in the 0..=1 range PDF colour operators expect.
    pub fn components(&self) -> [f32; 3] {
        [
            self.0 as f32 / 255.0,
            self.1 as f32 / 255.0,
            self.2 as f32 / 255.0,
        ]
    }
}

pub const WHITE: Rgb = Rgb(0xFF, 0xFF, 0xFF);
pub const SLATE_900: Rgb = Rgb(0x0F, 0x17, 0x2A);
pub const SLATE_800: Rgb = Rgb(0x1E, 0x29, 0x3B);
pub const SLATE_700: Rgb = Rgb(0x33, 0x41, 0x55);
pub const SLATE_600: Rgb = Rgb(0x47, 0x55, 0x69);
pub const SLATE_500: Rgb = Rgb(0x64, 0x74, 0x8B);
pub const SLATE_400: Rgb = Rgb(0x94, 0xA3, 0xB8);
pub const SLATE_300: Rgb = Rgb(0xCB, 0xD5, 0xE1);
pub const SLATE_200: Rgb = Rgb(0xE2, 0xE8, 0xF0);
pub const INDIGO_400: Rgb = Rgb(0x81, 0x8C, 0xF8);
pub const INDIGO_500: Rgb = Rgb(0x63, 0x66, 0xF1);
pub const INDIGO_600: Rgb = Rgb(0x4F, 0x46, 0xE5);
pub const INDIGO_700: Rgb = Rgb(0x43, 0x38, 0xCA);

// ────────────────────────────────────────────────────────────────────────────
// Text styles
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub face: FontFace,
    pub size: f32,
    pub color: Rgb,
    pub uppercase: bool,
    pub align: Align,
    pub space_before: f32,
    pub space_after: f32,
}

impl TextStyle {
    const fn new(face: FontFace, size: f32, color: Rgb) -> Self {
        TextStyle {
            face,
            size,
            color,
            uppercase: false,
            align: Align::Left,
            space_before: 0.0,
            space_after: 0.0,
        }
    }

    const fn upper(mut self) -> Self {
        self.uppercase = true;
        self
    }

    const fn centered(mut self) -> Self {
        self.align = Align::Center;
        self
    }

    const fn spaced(mut self, before: f32, after: f32) -> Self {
        self.space_before = before;
        self.space_after = after;
        self
    }

    /// Applies the style's casing to `text`.
    pub fn transform(&self, text: &str) -> String {
        if self.uppercase {
            text.to_uppercase()
        } else {
            text.to_string()
        }
    }
}

/// Every class that names a text role, in lookup priority order.
const ROLES: &[&str] = &[
    "resume-name",
    "role-hint",
    "contact-line",
    "contact-item",
    "heading-major",
    "heading-minor",
    "heading-sidebar",
    "heading-accent",
    "summary",
    "item-title",
    "item-date",
    "item-subtitle",
    "item-body",
    "item-link",
    "row-label",
    "row-level",
    "chip-label",
    "chip-level",
];

/// The first role class carried by `el`.
pub fn role_of(el: &Element) -> Option<&'static str> {
    ROLES.iter().copied().find(|r| el.has_class(r))
}

use FontFace::{Bold, BoldOblique, Oblique, Regular};

/// Style for `role` under `template`. Sidebar text is light on dark.
pub fn text_style(template: TemplateKind, role: &str, in_sidebar: bool) -> TextStyle {
    if in_sidebar {
        return sidebar_style(role);
    }
    match (template, role) {
        (TemplateKind::Modern, "resume-name") => {
            TextStyle::new(Bold, 26.0, SLATE_900).upper().centered().spaced(0.0, 6.0)
        }
        (TemplateKind::Modern, "contact-line") => {
            TextStyle::new(Regular, 9.5, SLATE_600).centered().spaced(0.0, 14.0)
        }
        (TemplateKind::Modern, "summary") => TextStyle::new(Oblique, 11.0, SLATE_900),
        (TemplateKind::Modern, "heading-major") => {
            TextStyle::new(Bold, 11.5, SLATE_900).upper().spaced(0.0, 2.0)
        }
        (TemplateKind::Modern, "item-subtitle") => TextStyle::new(Regular, 10.5, SLATE_700).spaced(0.0, 3.0),

        (TemplateKind::Balanced, "resume-name") => TextStyle::new(Bold, 26.0, SLATE_900).spaced(0.0, 4.0),
        (TemplateKind::Balanced, "contact-line") => {
            TextStyle::new(Bold, 8.5, SLATE_500).upper().spaced(0.0, 16.0)
        }
        (TemplateKind::Balanced, "summary") => TextStyle::new(Oblique, 10.5, SLATE_700),
        (TemplateKind::Balanced, "heading-major") => {
            TextStyle::new(Bold, 11.5, SLATE_900).upper().spaced(0.0, 8.0)
        }
        (TemplateKind::Balanced, "heading-minor") => {
            TextStyle::new(Bold, 8.5, SLATE_400).upper().spaced(0.0, 6.0)
        }
        (TemplateKind::Balanced, "item-subtitle") => TextStyle::new(Bold, 10.0, INDIGO_700).spaced(0.0, 3.0),

        (TemplateKind::Alpine, "summary") => TextStyle::new(Oblique, 11.0, SLATE_700),
        (TemplateKind::Alpine, "heading-accent") => {
            TextStyle::new(Bold, 9.0, INDIGO_600).upper().spaced(0.0, 8.0)
        }
        (TemplateKind::Alpine, "item-subtitle") => TextStyle::new(Bold, 10.0, INDIGO_600).spaced(0.0, 3.0),

        (_, "item-title") => TextStyle::new(Bold, 11.5, SLATE_900),
        (_, "item-date") => TextStyle::new(Bold, 8.5, SLATE_500),
        (_, "item-body") => TextStyle::new(Regular, 10.0, SLATE_700),
        (_, "item-link") => TextStyle::new(Regular, 8.0, INDIGO_700).spaced(0.0, 2.0),
        (_, "chip-label") => TextStyle::new(Bold, 9.0, SLATE_900),
        (_, "chip-level") => TextStyle::new(Regular, 6.5, SLATE_500).upper(),
        (_, "row-label") => TextStyle::new(Bold, 9.0, SLATE_900),
        (_, "row-level") => TextStyle::new(Regular, 7.0, SLATE_500).upper(),
        _ => TextStyle::new(Regular, 10.0, SLATE_900),
    }
}

fn sidebar_style(role: &str) -> TextStyle {
    match role {
        "resume-name" => TextStyle::new(Bold, 20.0, WHITE).spaced(0.0, 4.0),
        "role-hint" => TextStyle::new(Bold, 8.0, INDIGO_400).upper().spaced(0.0, 22.0),
        "heading-sidebar" => TextStyle::new(Bold, 8.0, SLATE_400).upper().spaced(0.0, 2.0),
        "contact-item" => TextStyle::new(Regular, 8.5, SLATE_200).spaced(0.0, 4.0),
        "item-title" => TextStyle::new(Bold, 9.5, WHITE),
        "item-date" => TextStyle::new(Regular, 7.5, SLATE_400),
        "item-subtitle" => TextStyle::new(Regular, 8.0, SLATE_400).spaced(0.0, 2.0),
        "row-label" => TextStyle::new(Regular, 8.5, SLATE_200),
        "row-level" => TextStyle::new(BoldOblique, 6.5, INDIGO_400).upper(),
        _ => TextStyle::new(Regular, 8.5, SLATE_200),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Block decoration
// ────────────────────────────────────────────────────────────────────────────

/// Vertical gap after a container, by its class.
pub fn block_gap(el: &Element) -> f32 {
    if el.has_class("resume-header") {
        20.0
    } else if el.has_class("section") {
        16.0
    } else if el.has_class("experience-item") {
        12.0
    } else if el.has_class("education-item") || el.has_class("project-item") {
        9.0
    } else if el.has_class("language-row") {
        5.0
    } else {
        0.0
    }
}

/// A horizontal rule drawn under a heading or container, if any.
pub fn rule_after(template: TemplateKind, el: &Element) -> Option<(Rgb, f32)> {
    match template {
        TemplateKind::Modern if el.has_class("resume-header") => Some((SLATE_900, 1.5)),
        TemplateKind::Modern if el.has_class("heading-major") => Some((SLATE_300, 0.75)),
        TemplateKind::Alpine if el.has_class("heading-sidebar") => Some((SLATE_700, 0.75)),
        _ => None,
    }
}

/// Content padding for the page body and each split column.
pub struct Padding {
    pub page_x: f32,
    pub page_y: f32,
    pub sidebar_x: f32,
    pub main_x: f32,
}

pub fn padding(template: TemplateKind) -> Padding {
    match template {
        TemplateKind::Alpine => Padding {
            page_x: 0.0,
            page_y: 30.0,
            sidebar_x: 22.0,
            main_x: 30.0,
        },
        TemplateKind::Modern | TemplateKind::Balanced => Padding {
            page_x: 36.0,
            page_y: 36.0,
            sidebar_x: 0.0,
            main_x: 0.0,
        },
    }
}
