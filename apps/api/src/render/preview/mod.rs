//! Preview Renderer: document → styled markup tree.
//!
//! Pure and idempotent. The whole resume is one element with id
//! [`PREVIEW_BLOCK_ID`] so the snapshot exporter can find and capture it.

pub mod node;
pub mod styles;
mod templates;

use crate::layout::LayoutPlan;
use crate::models::resume::ResumeDocument;
use node::{escape_html, Element};

/// Id of the addressable rendered block.
pub const PREVIEW_BLOCK_ID: &str = "resume-preview";

/// Renders the addressable resume block.
pub fn render_preview(doc: &ResumeDocument) -> Element {
    let plan = LayoutPlan::resolve(doc);
    templates::build_tree(doc, &plan)
}

/// A standalone HTML page hosting the preview block.
pub fn preview_page(doc: &ResumeDocument) -> String {
    html_page(doc, "", "")
}

/// The preview page with a print stylesheet that opens the host's print
/// dialog on load.
pub fn print_page(doc: &ResumeDocument) -> String {
    html_page(
        doc,
        styles::PRINT_CSS,
        "<script>window.addEventListener('load', function () { window.print(); });</script>",
    )
}

fn html_page(doc: &ResumeDocument, extra_css: &str, extra_body: &str) -> String {
    let block = render_preview(doc);
    let title = if doc.personal.full_name.trim().is_empty() {
        "Resume".to_string()
    } else {
        format!("Resume — {}", doc.personal.full_name.trim())
    };
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n<style>{}{}{}{}{}</style>\n</head>\n<body>\n{}\n{}\n</body>\n</html>\n",
        escape_html(&title),
        styles::BASE_CSS,
        styles::MODERN_CSS,
        styles::BALANCED_CSS,
        styles::ALPINE_CSS,
        extra_css,
        block.to_html(),
        extra_body,
    )
}
