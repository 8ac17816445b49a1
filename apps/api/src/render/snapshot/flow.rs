//! Turns the rendered preview block into a vertical flow of measured lines.
//!
//! Positions are absolute on the x axis and relative to the line top on the
//! y axis; the paginator decides which page and offset each line lands on.

use crate::layout::font_metrics::{get_metrics, FontFace};
use crate::models::resume::TemplateKind;
use crate::render::preview::node::Element;
use crate::render::snapshot::style::{
    block_gap, padding, role_of, rule_after, text_style, Align, Rgb, TextStyle, INDIGO_500,
    SLATE_200, SLATE_800, SLATE_900,
};

/// Classes whose element must never be split across pages when it fits on one.
pub const ATOMIC_CLASSES: &[&str] = &[
    "experience-item",
    "education-item",
    "project-item",
    "skill-group",
    "alpine-sidebar",
    "alpine-main",
];

const GRID_GAP: f32 = 28.0;
const CHIP_GAP: f32 = 6.0;
const CHIP_PAD_X: f32 = 7.0;
const CHIP_HEIGHT: f32 = 17.0;
const DATE_GAP: f32 = 10.0;

// ────────────────────────────────────────────────────────────────────────────
// Flow items
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum Mark {
    Text {
        x: f32,
        baseline: f32,
        text: String,
        face: FontFace,
        size: f32,
        color: Rgb,
    },
    Fill {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: Rgb,
    },
    Stroke {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: Rgb,
    },
}

/// An unbreakable horizontal strip.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub height: f32,
    pub marks: Vec<Mark>,
}

/// Background painted behind a column on every page it spans.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Backdrop {
    pub x: f32,
    pub width: f32,
    pub color: Rgb,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub backdrop: Option<Backdrop>,
    pub items: Vec<FlowItem>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FlowItem {
    Line(Line),
    Space(f32),
    /// `keep` groups move to a fresh page rather than split, when they fit.
    Group { keep: bool, items: Vec<FlowItem> },
    /// Side-by-side runs that paginate independently from a common start.
    Columns(Vec<Column>),
}

impl FlowItem {
    pub fn height(&self) -> f32 {
        match self {
            FlowItem::Line(line) => line.height,
            FlowItem::Space(h) => *h,
            FlowItem::Group { items, .. } => items.iter().map(FlowItem::height).sum(),
            FlowItem::Columns(cols) => cols
                .iter()
                .map(|c| c.items.iter().map(FlowItem::height).sum::<f32>())
                .fold(0.0, f32::max),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Flow {
    pub items: Vec<FlowItem>,
    /// Blank band kept at the top and bottom of every page.
    pub padding_y: f32,
}

// ────────────────────────────────────────────────────────────────────────────
// Builder
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy)]
struct Frame {
    x: f32,
    width: f32,
    sidebar: bool,
}

struct FlowBuilder {
    template: TemplateKind,
    line_height: f32,
}

/// Builds the flow for `block` laid out across a page `page_width` wide.
pub fn build_flow(
    block: &Element,
    template: TemplateKind,
    page_width: f32,
    line_height: f32,
) -> Flow {
    let pad = padding(template);
    let builder = FlowBuilder {
        template,
        line_height,
    };
    let frame = Frame {
        x: pad.page_x,
        width: page_width - 2.0 * pad.page_x,
        sidebar: false,
    };
    let mut items = Vec::new();
    for child in block.child_elements() {
        builder.element(child, frame, &mut items);
    }
    Flow {
        items,
        padding_y: pad.page_y,
    }
}

fn is_atomic(el: &Element) -> bool {
    ATOMIC_CLASSES.iter().any(|c| el.has_class(c))
}

impl FlowBuilder {
    fn element(&self, el: &Element, frame: Frame, out: &mut Vec<FlowItem>) {
        if el.has_class("alpine-layout") {
            out.push(self.split(el, frame));
        } else if el.has_class("grid-2") || el.has_class("grid-1") {
            out.push(self.grid(el, frame));
        } else if el.has_class("row-between") {
            out.extend(self.row(el, frame));
        } else if el.has_class("chip-list") {
            out.extend(self.chips(el, frame));
        } else if el.has_class("skill-bar") {
            out.push(self.bar(el, frame));
        } else if el.is_text_leaf() {
            out.extend(self.text_block(el, frame));
        } else {
            self.container(el, frame, out);
        }
    }

    fn container(&self, el: &Element, frame: Frame, out: &mut Vec<FlowItem>) {
        let mut items = Vec::new();
        let mut children = el.child_elements().peekable();

        // A section heading travels with the first entry beneath it.
        if el.has_class("section") {
            if let Some(heading) = children.next_if(|c| c.has_class("section-heading")) {
                let mut lead = Vec::new();
                self.element(heading, frame, &mut lead);
                if let Some(first) = children.next() {
                    self.element(first, frame, &mut lead);
                }
                items.push(FlowItem::Group {
                    keep: true,
                    items: lead,
                });
            }
        }
        for child in children {
            self.element(child, frame, &mut items);
        }
        if let Some((color, thickness)) = rule_after(self.template, el) {
            items.push(rule(frame, color, thickness));
            items.push(FlowItem::Space(6.0));
        }
        if items.is_empty() {
            return;
        }
        out.push(FlowItem::Group {
            keep: is_atomic(el),
            items,
        });
        let gap = block_gap(el);
        if gap > 0.0 {
            out.push(FlowItem::Space(gap));
        }
    }

    fn split(&self, el: &Element, frame: Frame) -> FlowItem {
        let pad = padding(self.template);
        let sidebar_width = frame.width / 3.0;
        let columns = el
            .child_elements()
            .map(|child| {
                let sidebar = child.has_class("alpine-sidebar");
                let (x, width, inset) = if sidebar {
                    (frame.x, sidebar_width, pad.sidebar_x)
                } else {
                    (frame.x + sidebar_width, frame.width - sidebar_width, pad.main_x)
                };
                let inner = Frame {
                    x: x + inset,
                    width: width - 2.0 * inset,
                    sidebar,
                };
                let mut items = Vec::new();
                for grandchild in child.child_elements() {
                    self.element(grandchild, inner, &mut items);
                }
                Column {
                    backdrop: sidebar.then_some(Backdrop {
                        x,
                        width,
                        color: SLATE_900,
                    }),
                    items: vec![FlowItem::Group {
                        keep: is_atomic(child),
                        items,
                    }],
                }
            })
            .collect();
        FlowItem::Columns(columns)
    }

    fn grid(&self, el: &Element, frame: Frame) -> FlowItem {
        let count = el.child_elements().count().max(1) as f32;
        let width = (frame.width - GRID_GAP * (count - 1.0)) / count;
        let columns = el
            .child_elements()
            .enumerate()
            .map(|(i, child)| {
                let inner = Frame {
                    x: frame.x + i as f32 * (width + GRID_GAP),
                    width,
                    sidebar: frame.sidebar,
                };
                let mut items = Vec::new();
                self.element(child, inner, &mut items);
                Column {
                    backdrop: None,
                    items,
                }
            })
            .collect();
        FlowItem::Columns(columns)
    }

    fn style(&self, el: &Element, frame: Frame) -> TextStyle {
        text_style(self.template, role_of(el).unwrap_or(""), frame.sidebar)
    }

    fn line_box(&self, size: f32) -> (f32, f32) {
        let height = size * self.line_height;
        (height, (height - size) / 2.0 + size * 0.8)
    }

    /// Wrapped paragraph lines for a text-only element. Explicit newlines
    /// start a new line, as in the preview's pre-wrap bodies.
    fn text_block(&self, el: &Element, frame: Frame) -> Vec<FlowItem> {
        let style = self.style(el, frame);
        let text = style.transform(el.text_content().trim());
        if text.is_empty() {
            return Vec::new();
        }
        let metrics = get_metrics(style.face);
        let (height, baseline) = self.line_box(style.size);

        let mut out = Vec::new();
        if style.space_before > 0.0 {
            out.push(FlowItem::Space(style.space_before));
        }
        for paragraph in text.lines() {
            for line in metrics.wrap(paragraph, style.size, frame.width) {
                let x = match style.align {
                    Align::Left => frame.x,
                    Align::Center => {
                        frame.x + (frame.width - metrics.measure_pt(&line, style.size)).max(0.0) / 2.0
                    }
                };
                out.push(FlowItem::Line(Line {
                    height,
                    marks: vec![text_mark(x, baseline, line, &style)],
                }));
            }
        }
        if let Some((color, thickness)) = rule_after(self.template, el) {
            out.push(rule(frame, color, thickness));
        }
        if style.space_after > 0.0 {
            out.push(FlowItem::Space(style.space_after));
        }
        out
    }

    /// Title on the left (wrapping), date right-aligned on the first line.
    fn row(&self, el: &Element, frame: Frame) -> Vec<FlowItem> {
        let mut parts = el.child_elements();
        let (Some(left_el), right_el) = (parts.next(), parts.next()) else {
            return Vec::new();
        };
        let left_style = self.style(left_el, frame);
        let left_text = left_style.transform(left_el.text_content().trim());
        let (right_style, right_text) = match right_el {
            Some(r) => {
                let style = self.style(r, frame);
                let text = style.transform(r.text_content().trim());
                (style, text)
            }
            None => (left_style, String::new()),
        };
        if left_text.is_empty() && right_text.is_empty() {
            return Vec::new();
        }

        let right_width = get_metrics(right_style.face).measure_pt(&right_text, right_style.size);
        let left_width = (frame.width - right_width - DATE_GAP).max(frame.width / 3.0);
        let left_lines = get_metrics(left_style.face).wrap(&left_text, left_style.size, left_width);
        let (left_height, left_baseline) = self.line_box(left_style.size);
        let (right_height, right_baseline) = self.line_box(right_style.size);

        let mut out = Vec::new();
        let first_height = left_height.max(right_height);
        let mut first = Line {
            height: first_height,
            marks: Vec::new(),
        };
        let mut rest = left_lines.into_iter();
        if let Some(line) = rest.next() {
            first.marks.push(text_mark(
                frame.x,
                left_baseline + (first_height - left_height) / 2.0,
                line,
                &left_style,
            ));
        }
        if !right_text.is_empty() {
            first.marks.push(text_mark(
                frame.x + frame.width - right_width,
                right_baseline + (first_height - right_height) / 2.0,
                right_text,
                &right_style,
            ));
        }
        out.push(FlowItem::Line(first));
        for line in rest {
            out.push(FlowItem::Line(Line {
                height: left_height,
                marks: vec![text_mark(frame.x, left_baseline, line, &left_style)],
            }));
        }
        out.push(FlowItem::Space(2.0));
        out
    }

    /// Bordered chips laid out left to right, wrapping by whole chip.
    fn chips(&self, el: &Element, frame: Frame) -> Vec<FlowItem> {
        let mut lines = Vec::new();
        let mut current = Line {
            height: CHIP_HEIGHT + CHIP_GAP,
            marks: Vec::new(),
        };
        let mut x = frame.x;

        for chip in el.child_elements() {
            let parts: Vec<(TextStyle, String)> = chip
                .child_elements()
                .map(|part| {
                    let style = self.style(part, frame);
                    let text = style.transform(part.text_content().trim());
                    (style, text)
                })
                .filter(|(_, text)| !text.is_empty())
                .collect();
            if parts.is_empty() {
                continue;
            }
            let widths: Vec<f32> = parts
                .iter()
                .map(|(s, t)| get_metrics(s.face).measure_pt(t, s.size))
                .collect();
            let inner: f32 = widths.iter().sum::<f32>() + 4.0 * (parts.len() - 1) as f32;
            let chip_width = inner + 2.0 * CHIP_PAD_X;

            if x > frame.x && x + chip_width > frame.x + frame.width {
                lines.push(FlowItem::Line(std::mem::replace(
                    &mut current,
                    Line {
                        height: CHIP_HEIGHT + CHIP_GAP,
                        marks: Vec::new(),
                    },
                )));
                x = frame.x;
            }

            current.marks.push(Mark::Stroke {
                x,
                y: 0.0,
                width: chip_width,
                height: CHIP_HEIGHT,
                color: SLATE_200,
            });
            let mut text_x = x + CHIP_PAD_X;
            for ((style, text), width) in parts.into_iter().zip(widths) {
                let baseline = (CHIP_HEIGHT - style.size) / 2.0 + style.size * 0.8;
                current.marks.push(text_mark(text_x, baseline, text, &style));
                text_x += width + 4.0;
            }
            x += chip_width + CHIP_GAP;
        }
        if !current.marks.is_empty() {
            lines.push(FlowItem::Line(current));
        }
        lines
    }

    fn bar(&self, el: &Element, frame: Frame) -> FlowItem {
        let percent = el
            .attr_value("data-fill")
            .and_then(|v| v.parse::<f32>().ok())
            .unwrap_or(0.0)
            .clamp(0.0, 100.0);
        FlowItem::Line(Line {
            height: 10.0,
            marks: vec![
                Mark::Fill {
                    x: frame.x,
                    y: 2.0,
                    width: frame.width,
                    height: 3.0,
                    color: SLATE_800,
                },
                Mark::Fill {
                    x: frame.x,
                    y: 2.0,
                    width: frame.width * percent / 100.0,
                    height: 3.0,
                    color: INDIGO_500,
                },
            ],
        })
    }
}

fn text_mark(x: f32, baseline: f32, text: String, style: &TextStyle) -> Mark {
    Mark::Text {
        x,
        baseline,
        text,
        face: style.face,
        size: style.size,
        color: style.color,
    }
}

fn rule(frame: Frame, color: Rgb, thickness: f32) -> FlowItem {
    FlowItem::Line(Line {
        height: thickness + 3.0,
        marks: vec![Mark::Fill {
            x: frame.x,
            y: 1.5,
            width: frame.width,
            height: thickness,
            color,
        }],
    })
}
