//! Snapshot Exporter: captures the rendered preview block and lays it onto
//! fixed-size pages as a vector PDF.
//!
//! The pipeline is `render_preview` → find [`PREVIEW_BLOCK_ID`] → flow →
//! paginate → lopdf. When any step fails the caller gets the print-ready
//! preview page instead.

pub mod flow;
pub mod paginate;
pub mod pdf;
pub mod style;

use tracing::warn;

use crate::layout::font_metrics::{a4_portrait, PageGeometry};
use crate::models::resume::ResumeDocument;
use crate::render::preview::{print_page, render_preview, PREVIEW_BLOCK_ID};
use crate::render::{Exporter, RenderError};

pub struct SnapshotExporter {
    pub geometry: PageGeometry,
}

impl Default for SnapshotExporter {
    fn default() -> Self {
        SnapshotExporter {
            geometry: a4_portrait(),
        }
    }
}

/// Result of a snapshot request: the paginated file, or the print fallback.
#[derive(Debug, Clone, PartialEq)]
pub enum SnapshotOutcome {
    Pdf(Vec<u8>),
    /// Standalone HTML that opens the print dialog on load.
    PrintFallback(String),
}

impl SnapshotExporter {
    /// Lays the document out and returns its pages without encoding them.
    pub fn paginate(&self, doc: &ResumeDocument) -> Result<Vec<paginate::Page>, RenderError> {
        let tree = render_preview(doc);
        let block = tree
            .find_by_id(PREVIEW_BLOCK_ID)
            .ok_or(RenderError::MissingBlock(PREVIEW_BLOCK_ID))?;
        let flow = flow::build_flow(
            block,
            doc.template,
            self.geometry.width_pt - 2.0 * self.geometry.margin_pt,
            self.geometry.line_height,
        );
        Ok(paginate::paginate(&flow, &self.geometry))
    }

    /// Runs the export and degrades to the print page on failure.
    pub fn export_or_print(&self, doc: &ResumeDocument) -> SnapshotOutcome {
        match self.export(doc) {
            Ok(bytes) => SnapshotOutcome::Pdf(bytes),
            Err(e) => {
                warn!(error = %e, "Snapshot export failed, serving print fallback");
                SnapshotOutcome::PrintFallback(print_page(doc))
            }
        }
    }
}

impl Exporter for SnapshotExporter {
    fn extension(&self) -> &'static str {
        "pdf"
    }

    fn content_type(&self) -> &'static str {
        "application/pdf"
    }

    fn export(&self, doc: &ResumeDocument) -> Result<Vec<u8>, RenderError> {
        if self.geometry.width_pt <= 0.0 || self.geometry.height_pt <= 0.0 {
            return Err(RenderError::Layout(format!(
                "page size {}x{} is not drawable",
                self.geometry.width_pt, self.geometry.height_pt
            )));
        }
        let pages = self.paginate(doc)?;
        pdf::write_pdf(&pages, &self.geometry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{Experience, TemplateKind};
    use lopdf::Document;

    fn page_text(bytes: &[u8]) -> Vec<String> {
        let doc = Document::load_mem(bytes).unwrap();
        doc.get_pages()
            .values()
            .map(|id| String::from_utf8_lossy(&doc.get_page_content(*id).unwrap()).into_owned())
            .collect()
    }

    fn long_experience(i: usize) -> Experience {
        Experience {
            id: format!("e{i}"),
            company: format!("Company {i}"),
            position: format!("Role {i}"),
            start_date: "2019-01".into(),
            end_date: "2020-01".into(),
            description: format!("{} end{i}", "shipped reliable features for customers ".repeat(12)),
            current: false,
        }
    }

    #[test]
    fn test_seed_exports_single_loadable_page_per_template() {
        for template in TemplateKind::ALL {
            let mut doc = ResumeDocument::seed();
            doc.template = template;
            let bytes = SnapshotExporter::default().export(&doc).unwrap();
            let texts = page_text(&bytes);
            assert_eq!(texts.len(), 1, "{template:?}");
            let label = if template == TemplateKind::Balanced { "Now" } else { "Present" };
            assert!(texts[0].contains(label), "{template:?}");
            if template == TemplateKind::Balanced {
                assert!(!texts[0].contains("Present"));
            }
        }
    }

    #[test]
    fn test_current_role_hides_stored_end_date() {
        for template in TemplateKind::ALL {
            let mut doc = ResumeDocument::seed();
            doc.template = template;
            assert!(doc.experiences[0].current);
            doc.experiences[0].end_date = "2019-11".into();
            let bytes = SnapshotExporter::default().export(&doc).unwrap();
            let texts = page_text(&bytes);
            let label = if template == TemplateKind::Balanced { "Now" } else { "Present" };
            assert!(texts.iter().any(|t| t.contains(label)), "{template:?}");
            assert!(texts.iter().all(|t| !t.contains("Nov 2019")), "{template:?}");
        }
    }

    #[test]
    fn test_empty_document_exports_one_page_with_placeholder() {
        for template in TemplateKind::ALL {
            let bytes = SnapshotExporter::default()
                .export(&ResumeDocument::empty(template))
                .unwrap();
            let texts = page_text(&bytes);
            assert_eq!(texts.len(), 1);
            assert!(texts[0].to_lowercase().contains("your name"));
        }
    }

    #[test]
    fn test_long_document_paginates_without_splitting_entries() {
        let mut doc = ResumeDocument::seed();
        doc.experiences = (0..14).map(long_experience).collect();
        let exporter = SnapshotExporter::default();
        let pages = exporter.paginate(&doc).unwrap();
        assert!(pages.len() >= 2, "expected overflow, got {} page(s)", pages.len());

        for i in 0..14 {
            let title = format!("Role {i}");
            let marker = format!("end{i}");
            let title_page = pages.iter().position(|p| p.texts().any(|t| t == title));
            let end_page = pages.iter().position(|p| p.texts().any(|t| t.ends_with(&marker)));
            assert!(title_page.is_some());
            assert_eq!(title_page, end_page, "experience {i} was split across pages");
        }

        let bytes = exporter.export(&doc).unwrap();
        assert_eq!(page_text(&bytes).len(), pages.len());
    }

    #[test]
    fn test_alpine_sidebar_painted_on_every_page() {
        let mut doc = ResumeDocument::seed();
        doc.template = TemplateKind::Alpine;
        doc.experiences = (0..14).map(long_experience).collect();
        let pages = SnapshotExporter::default().paginate(&doc).unwrap();
        assert!(pages.len() >= 2);
        for page in &pages {
            assert!(!page.backdrop.is_empty());
        }
    }

    #[test]
    fn test_export_is_deterministic() {
        let doc = ResumeDocument::seed();
        let exporter = SnapshotExporter::default();
        assert_eq!(exporter.export(&doc).unwrap(), exporter.export(&doc).unwrap());
    }

    #[test]
    fn test_failure_degrades_to_print_page() {
        let mut exporter = SnapshotExporter::default();
        exporter.geometry.width_pt = 0.0;
        match exporter.export_or_print(&ResumeDocument::seed()) {
            SnapshotOutcome::PrintFallback(html) => {
                assert!(html.contains("window.print()"));
                assert!(html.contains("resume-preview"));
            }
            SnapshotOutcome::Pdf(_) => panic!("expected print fallback"),
        }
    }
}
