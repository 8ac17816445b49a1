// Rendering backends. Each one is a pure function of the document: the
// preview builds a markup tree, the snapshot paginates that tree onto fixed
// pages, and the native document re-derives structure from the layout plan.

pub mod docx;
pub mod handlers;
pub mod preview;
pub mod snapshot;

use thiserror::Error;

use crate::layout::format::export_filename;
use crate::models::resume::ResumeDocument;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Rendered tree has no element with id '{0}'")]
    MissingBlock(&'static str),

    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),

    #[error("Archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Layout error: {0}")]
    Layout(String),
}

/// A backend that turns a document into a downloadable binary file.
pub trait Exporter {
    /// File extension, without the dot.
    fn extension(&self) -> &'static str;

    fn content_type(&self) -> &'static str;

    fn export(&self, doc: &ResumeDocument) -> Result<Vec<u8>, RenderError>;

    /// Download name derived from the person's full name.
    fn filename(&self, doc: &ResumeDocument) -> String {
        export_filename(&doc.personal.full_name, self.extension())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::docx::DocxExporter;
    use crate::render::snapshot::SnapshotExporter;

    #[test]
    fn test_filenames_share_name_derivation() {
        let doc = ResumeDocument::seed();
        assert_eq!(SnapshotExporter::default().filename(&doc), "resume-alex-sterling.pdf");
        assert_eq!(DocxExporter.filename(&doc), "resume-alex-sterling.docx");
    }
}
