//! Places a flow onto fixed-height pages.
//!
//! Keep groups that do not fit the remaining space move to a fresh page when
//! they fit on one; taller groups split at line boundaries while their own
//! nested keep groups are still honoured. Column sets paginate each column
//! from the same start and resume the flow below the longest one.

use crate::layout::font_metrics::{FontFace, PageGeometry};
use crate::render::snapshot::flow::{Column, Flow, FlowItem, Line, Mark};
use crate::render::snapshot::style::Rgb;

/// A drawing command in page coordinates, y measured down from the top edge.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
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

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    /// Painted first: column backgrounds.
    pub backdrop: Vec<DrawOp>,
    pub ops: Vec<DrawOp>,
}

impl Page {
    /// Text drawn on this page, in placement order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Cursor {
    page: usize,
    y: f32,
}

impl Cursor {
    fn is_after(&self, other: &Cursor) -> bool {
        self.page > other.page || (self.page == other.page && self.y > other.y)
    }
}

struct Paginator {
    top: f32,
    bottom: f32,
    page_height: f32,
    pages: Vec<Page>,
}

/// Lays `flow` out on pages of `geometry`. Always yields at least one page.
pub fn paginate(flow: &Flow, geometry: &PageGeometry) -> Vec<Page> {
    let top = geometry.content_top() + flow.padding_y;
    let bottom = geometry.content_bottom() - flow.padding_y;
    let mut paginator = Paginator {
        top,
        bottom: bottom.max(top + 1.0),
        page_height: geometry.height_pt,
        pages: vec![Page::default()],
    };
    paginator.place_all(&flow.items, Cursor { page: 0, y: top });
    paginator.pages
}

impl Paginator {
    fn capacity(&self) -> f32 {
        self.bottom - self.top
    }

    fn at_top(&self, cur: Cursor) -> bool {
        cur.y <= self.top + f32::EPSILON
    }

    fn next_page(&mut self, cur: Cursor) -> Cursor {
        let page = cur.page + 1;
        while self.pages.len() <= page {
            self.pages.push(Page::default());
        }
        Cursor { page, y: self.top }
    }

    fn place_all(&mut self, items: &[FlowItem], mut cur: Cursor) -> Cursor {
        for item in items {
            cur = self.place(item, cur);
        }
        cur
    }

    fn place(&mut self, item: &FlowItem, cur: Cursor) -> Cursor {
        match item {
            FlowItem::Space(h) => {
                if self.at_top(cur) {
                    cur
                } else if cur.y + h > self.bottom {
                    self.next_page(cur)
                } else {
                    Cursor {
                        y: cur.y + h,
                        ..cur
                    }
                }
            }
            FlowItem::Line(line) => {
                let cur = if cur.y + line.height > self.bottom && !self.at_top(cur) {
                    self.next_page(cur)
                } else {
                    cur
                };
                self.draw_line(line, cur);
                Cursor {
                    y: cur.y + line.height,
                    ..cur
                }
            }
            FlowItem::Group { keep, items } => {
                let height = item.height();
                let cur = if *keep
                    && cur.y + height > self.bottom
                    && !self.at_top(cur)
                    && height <= self.capacity()
                {
                    self.next_page(cur)
                } else {
                    cur
                };
                self.place_all(items, cur)
            }
            FlowItem::Columns(cols) => self.place_columns(cols, cur),
        }
    }

    fn place_columns(&mut self, cols: &[Column], start: Cursor) -> Cursor {
        let mut end = start;
        for col in cols {
            let col_end = self.place_all(&col.items, start);
            if col_end.is_after(&end) {
                end = col_end;
            }
        }
        let from_page_top = self.at_top(start);
        for col in cols {
            let Some(backdrop) = col.backdrop else {
                continue;
            };
            for page in start.page..=end.page {
                let y = if page == start.page && !from_page_top {
                    start.y
                } else {
                    0.0
                };
                self.pages[page].backdrop.push(DrawOp::Fill {
                    x: backdrop.x,
                    y,
                    width: backdrop.width,
                    height: self.page_height - y,
                    color: backdrop.color,
                });
            }
        }
        end
    }

    fn draw_line(&mut self, line: &Line, cur: Cursor) {
        let ops = &mut self.pages[cur.page].ops;
        for mark in &line.marks {
            ops.push(match mark {
                Mark::Text {
                    x,
                    baseline,
                    text,
                    face,
                    size,
                    color,
                } => DrawOp::Text {
                    x: *x,
                    baseline: cur.y + baseline,
                    text: text.clone(),
                    face: *face,
                    size: *size,
                    color: *color,
                },
                Mark::Fill {
                    x,
                    y,
                    width,
                    height,
                    color,
                } => DrawOp::Fill {
                    x: *x,
                    y: cur.y + y,
                    width: *width,
                    height: *height,
                    color: *color,
                },
                Mark::Stroke {
                    x,
                    y,
                    width,
                    height,
                    color,
                } => DrawOp::Stroke {
                    x: *x,
                    y: cur.y + y,
                    width: *width,
                    height: *height,
                    color: *color,
                },
            });
        }
    }
}
