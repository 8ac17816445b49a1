//! Native-Document Exporter: re-derives the template layout from the layout
//! plan as Word paragraphs, runs and tables. Never reads the preview tree.

pub mod blocks;
pub mod model;
pub mod package;
pub mod templates;

use crate::layout::LayoutPlan;
use crate::models::resume::ResumeDocument;
use crate::render::{Exporter, RenderError};

pub struct DocxExporter;

impl Exporter for DocxExporter {
    fn extension(&self) -> &'static str {
        "docx"
    }

    fn content_type(&self) -> &'static str {
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
    }

    fn export(&self, doc: &ResumeDocument) -> Result<Vec<u8>, RenderError> {
        let plan = LayoutPlan::resolve(doc);
        let body = templates::build_body(doc, &plan);
        package::write_package(&body)
    }
}
