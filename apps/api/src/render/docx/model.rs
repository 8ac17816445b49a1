//! A small WordprocessingML object model: paragraphs of runs, and one-row
//! tables of shaded cells. Serialises itself to `word/document.xml` markup.

use std::fmt::Write;

/// Body font for every run.
pub const FONT: &str = "Calibri";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Run {
    pub text: String,
    pub bold: bool,
    pub italic: bool,
    /// Displayed in capitals; the stored text is left as entered.
    pub caps: bool,
    /// Font size in half-points.
    pub size: u32,
    pub color: Option<&'static str>,
}

impl Run {
    pub fn new(text: impl Into<String>, size: u32) -> Self {
        Run {
            text: text.into(),
            size,
            ..Default::default()
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    pub fn caps(mut self) -> Self {
        self.caps = true;
        self
    }

    pub fn color(mut self, color: &'static str) -> Self {
        self.color = Some(color);
        self
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Justify {
    #[default]
    Left,
    Center,
    Both,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Border {
    pub color: &'static str,
    /// Line width in eighths of a point.
    pub size: u32,
    /// Gap to the text in points.
    pub space: u32,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Paragraph {
    pub runs: Vec<Run>,
    pub justify: Justify,
    /// Spacing in twips.
    pub before: u32,
    pub after: u32,
    pub indent_left: u32,
    /// Position of a single right-aligned tab stop, in twips.
    pub right_tab: Option<u32>,
    pub border_bottom: Option<Border>,
    pub border_left: Option<Border>,
    pub keep_next: bool,
}

impl Paragraph {
    pub fn new() -> Self {
        Paragraph::default()
    }

    pub fn run(mut self, run: Run) -> Self {
        self.runs.push(run);
        self
    }

    pub fn spacing(mut self, before: u32, after: u32) -> Self {
        self.before = before;
        self.after = after;
        self
    }

    pub fn justify(mut self, justify: Justify) -> Self {
        self.justify = justify;
        self
    }

    pub fn indent(mut self, left: u32) -> Self {
        self.indent_left = left;
        self
    }

    pub fn right_tab(mut self, position: u32) -> Self {
        self.right_tab = Some(position);
        self
    }

    pub fn border_bottom(mut self, border: Border) -> Self {
        self.border_bottom = Some(border);
        self
    }

    pub fn border_left(mut self, border: Border) -> Self {
        self.border_left = Some(border);
        self
    }

    pub fn keep_next(mut self) -> Self {
        self.keep_next = true;
        self
    }

    /// Concatenated run text, tabs and breaks included.
    pub fn text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    /// Width in twips.
    pub width: u32,
    pub shading: Option<&'static str>,
    /// Top, right, bottom, left inner margins in twips.
    pub margins: [u32; 4],
    pub paragraphs: Vec<Paragraph>,
}

/// A borderless single-row table.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub cells: Vec<Cell>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Paragraph(Paragraph),
    Table(Table),
}

// ────────────────────────────────────────────────────────────────────────────
// Serialisation
// ────────────────────────────────────────────────────────────────────────────

pub fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            // Control characters are not allowed in XML 1.0.
            c if (c as u32) < 0x20 => {}
            c => out.push(c),
        }
    }
    out
}

impl Run {
    fn write_xml(&self, out: &mut String) {
        out.push_str("<w:r><w:rPr>");
        let _ = write!(
            out,
            "<w:rFonts w:ascii=\"{FONT}\" w:hAnsi=\"{FONT}\" w:cs=\"{FONT}\"/>"
        );
        if self.bold {
            out.push_str("<w:b/><w:bCs/>");
        }
        if self.italic {
            out.push_str("<w:i/><w:iCs/>");
        }
        if self.caps {
            out.push_str("<w:caps/>");
        }
        if let Some(color) = self.color {
            let _ = write!(out, "<w:color w:val=\"{color}\"/>");
        }
        if self.size > 0 {
            let _ = write!(out, "<w:sz w:val=\"{0}\"/><w:szCs w:val=\"{0}\"/>", self.size);
        }
        out.push_str("</w:rPr>");

        // Tabs and line breaks are elements of their own, not text.
        let mut first_line = true;
        for line in self.text.split('\n') {
            if !first_line {
                out.push_str("<w:br/>");
            }
            first_line = false;
            let mut first_cell = true;
            for piece in line.split('\t') {
                if !first_cell {
                    out.push_str("<w:tab/>");
                }
                first_cell = false;
                if !piece.is_empty() {
                    let _ = write!(
                        out,
                        "<w:t xml:space=\"preserve\">{}</w:t>",
                        escape_xml(piece)
                    );
                }
            }
        }
        out.push_str("</w:r>");
    }
}

fn write_border(out: &mut String, side: &str, border: &Border) {
    let _ = write!(
        out,
        "<w:{side} w:val=\"single\" w:sz=\"{}\" w:space=\"{}\" w:color=\"{}\"/>",
        border.size, border.space, border.color
    );
}

impl Paragraph {
    pub fn write_xml(&self, out: &mut String) {
        out.push_str("<w:p><w:pPr>");
        if self.keep_next {
            out.push_str("<w:keepNext/>");
        }
        if self.border_left.is_some() || self.border_bottom.is_some() {
            out.push_str("<w:pBdr>");
            if let Some(b) = &self.border_left {
                write_border(out, "left", b);
            }
            if let Some(b) = &self.border_bottom {
                write_border(out, "bottom", b);
            }
            out.push_str("</w:pBdr>");
        }
        if let Some(pos) = self.right_tab {
            let _ = write!(out, "<w:tabs><w:tab w:val=\"right\" w:pos=\"{pos}\"/></w:tabs>");
        }
        let _ = write!(
            out,
            "<w:spacing w:before=\"{}\" w:after=\"{}\"/>",
            self.before, self.after
        );
        if self.indent_left > 0 {
            let _ = write!(out, "<w:ind w:left=\"{}\"/>", self.indent_left);
        }
        match self.justify {
            Justify::Left => {}
            Justify::Center => out.push_str("<w:jc w:val=\"center\"/>"),
            Justify::Both => out.push_str("<w:jc w:val=\"both\"/>"),
        }
        out.push_str("</w:pPr>");
        for run in &self.runs {
            run.write_xml(out);
        }
        out.push_str("</w:p>");
    }
}

impl Table {
    pub fn write_xml(&self, out: &mut String) {
        out.push_str("<w:tbl><w:tblPr><w:tblW w:w=\"5000\" w:type=\"pct\"/><w:tblBorders>");
        for side in ["top", "left", "bottom", "right", "insideH", "insideV"] {
            let _ = write!(out, "<w:{side} w:val=\"nil\"/>");
        }
        out.push_str("</w:tblBorders><w:tblLayout w:type=\"fixed\"/></w:tblPr><w:tblGrid>");
        for cell in &self.cells {
            let _ = write!(out, "<w:gridCol w:w=\"{}\"/>", cell.width);
        }
        out.push_str("</w:tblGrid><w:tr>");
        for cell in &self.cells {
            let _ = write!(out, "<w:tc><w:tcPr><w:tcW w:w=\"{}\" w:type=\"dxa\"/>", cell.width);
            if let Some(fill) = cell.shading {
                let _ = write!(out, "<w:shd w:val=\"clear\" w:color=\"auto\" w:fill=\"{fill}\"/>");
            }
            let [top, right, bottom, left] = cell.margins;
            let _ = write!(
                out,
                "<w:tcMar><w:top w:w=\"{top}\" w:type=\"dxa\"/><w:left w:w=\"{left}\" w:type=\"dxa\"/>\
                 <w:bottom w:w=\"{bottom}\" w:type=\"dxa\"/><w:right w:w=\"{right}\" w:type=\"dxa\"/></w:tcMar>"
            );
            out.push_str("<w:vAlign w:val=\"top\"/></w:tcPr>");
            // A cell must end with a paragraph.
            if cell.paragraphs.is_empty() {
                Paragraph::new().write_xml(out);
            }
            for p in &cell.paragraphs {
                p.write_xml(out);
            }
            out.push_str("</w:tc>");
        }
        out.push_str("</w:tr></w:tbl>");
    }
}

impl Block {
    pub fn write_xml(&self, out: &mut String) {
        match self {
            Block::Paragraph(p) => p.write_xml(out),
            Block::Table(t) => t.write_xml(out),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn xml(p: &Paragraph) -> String {
        let mut out = String::new();
        p.write_xml(&mut out);
        out
    }

    #[test]
    fn test_run_tab_becomes_element() {
        let p = Paragraph::new()
            .right_tab(10466)
            .run(Run::new("Engineer\tMar 2020", 24).bold());
        let out = xml(&p);
        assert!(out.contains("<w:tab w:val=\"right\" w:pos=\"10466\"/>"));
        assert!(out.contains(">Engineer</w:t><w:tab/><w:t xml:space=\"preserve\">Mar 2020<"));
        assert!(out.contains("<w:b/>"));
    }

    #[test]
    fn test_newline_becomes_break() {
        let out = xml(&Paragraph::new().run(Run::new("a\nb", 20)));
        assert!(out.contains("a</w:t><w:br/><w:t xml:space=\"preserve\">b"));
    }

    #[test]
    fn test_text_is_escaped() {
        let out = xml(&Paragraph::new().run(Run::new("R&D <lead>", 20)));
        assert!(out.contains("R&amp;D &lt;lead&gt;"));
    }

    #[test]
    fn test_caps_keeps_text() {
        let out = xml(&Paragraph::new().run(Run::new("Education", 20).caps()));
        assert!(out.contains("<w:caps/>"));
        assert!(out.contains(">Education<"));
    }

    #[test]
    fn test_empty_cell_still_has_paragraph() {
        let table = Table {
            cells: vec![Cell {
                width: 100,
                shading: Some("0F172A"),
                margins: [1, 2, 3, 4],
                paragraphs: vec![],
            }],
        };
        let mut out = String::new();
        table.write_xml(&mut out);
        assert!(out.contains("w:fill=\"0F172A\""));
        assert!(out.contains("<w:tc><w:tcPr>"));
        assert!(out.contains("<w:p>"));
    }
}
