//! Writes paginated draw operations as a PDF with lopdf.

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Dictionary, Document, Object, Stream, StringFormat};

use crate::layout::font_metrics::{FontFace, PageGeometry};
use crate::render::snapshot::paginate::{DrawOp, Page};
use crate::render::snapshot::style::Rgb;
use crate::render::RenderError;

/// Serialises `pages` into a complete PDF file.
pub fn write_pdf(pages: &[Page], geometry: &PageGeometry) -> Result<Vec<u8>, RenderError> {
    let mut doc = Document::with_version("1.7");
    let pages_id = doc.new_object_id();

    let mut fonts = Dictionary::new();
    for face in FontFace::ALL {
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => face.base_font(),
            "Encoding" => "WinAnsiEncoding",
        });
        fonts.set(face.resource_name(), font_id);
    }
    let resources_id = doc.add_object(dictionary! { "Font" => fonts });

    let mut kids: Vec<Object> = Vec::with_capacity(pages.len());
    for page in pages {
        let content = page_content(page, geometry.height_pt);
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => vec![0.into(), 0.into(), geometry.width_pt.into(), geometry.height_pt.into()],
            "Contents" => content_id,
            "Resources" => resources_id,
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
        }),
    );
    let catalog_id = doc.add_object(dictionary! { "Type" => "Catalog", "Pages" => pages_id });
    doc.trailer.set("Root", catalog_id);

    let mut out = Vec::new();
    doc.save_to(&mut out)?;
    Ok(out)
}

fn page_content(page: &Page, page_height: f32) -> Content {
    let mut ops = Vec::new();
    for op in page.backdrop.iter().chain(&page.ops) {
        match op {
            DrawOp::Fill {
                x,
                y,
                width,
                height,
                color,
            } => {
                ops.push(color_op("rg", color));
                ops.push(Operation::new(
                    "re",
                    vec![
                        (*x).into(),
                        (page_height - y - height).into(),
                        (*width).into(),
                        (*height).into(),
                    ],
                ));
                ops.push(Operation::new("f", vec![]));
            }
            DrawOp::Stroke {
                x,
                y,
                width,
                height,
                color,
            } => {
                ops.push(Operation::new("w", vec![0.75_f32.into()]));
                ops.push(color_op("RG", color));
                ops.push(Operation::new(
                    "re",
                    vec![
                        (*x).into(),
                        (page_height - y - height).into(),
                        (*width).into(),
                        (*height).into(),
                    ],
                ));
                ops.push(Operation::new("S", vec![]));
            }
            DrawOp::Text {
                x,
                baseline,
                text,
                face,
                size,
                color,
            } => {
                ops.push(Operation::new("BT", vec![]));
                ops.push(Operation::new(
                    "Tf",
                    vec![Object::Name(face.resource_name().as_bytes().to_vec()), (*size).into()],
                ));
                ops.push(color_op("rg", color));
                ops.push(Operation::new("Td", vec![(*x).into(), (page_height - baseline).into()]));
                ops.push(Operation::new(
                    "Tj",
                    vec![Object::String(to_win_ansi(text), StringFormat::Literal)],
                ));
                ops.push(Operation::new("ET", vec![]));
            }
        }
    }
    Content { operations: ops }
}

fn color_op(operator: &str, color: &Rgb) -> Operation {
    let [r, g, b] = color.components();
    Operation::new(operator, vec![r.into(), g.into(), b.into()])
}

/// Encodes `s` for the standard fonts' WinAnsi encoding. Characters outside
/// it become `?`.
pub fn to_win_ansi(s: &str) -> Vec<u8> {
    s.chars()
        .map(|c| match c {
            '€' => 0x80,
            '…' => 0x85,
            '‘' => 0x91,
            '’' => 0x92,
            '“' => 0x93,
            '”' => 0x94,
            '•' => 0x95,
            '–' => 0x96,
            '—' => 0x97,
            c if (c as u32) < 0x80 || (0xA0..=0xFF).contains(&(c as u32)) => c as u8,
            _ => b'?',
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::font_metrics::a4_portrait;
    use crate::render::snapshot::style::SLATE_900;

    #[test]
    fn test_win_ansi_maps_typographic_glyphs() {
        assert_eq!(to_win_ansi("a — b"), vec![b'a', b' ', 0x97, b' ', b'b']);
        assert_eq!(to_win_ansi("•"), vec![0x95]);
        assert_eq!(to_win_ansi("é"), vec![0xE9]);
        assert_eq!(to_win_ansi("日"), vec![b'?']);
    }

    #[test]
    fn test_written_pdf_loads_with_every_page() {
        let page = Page {
            backdrop: vec![DrawOp::Fill {
                x: 0.0,
                y: 0.0,
                width: 100.0,
                height: 841.89,
                color: SLATE_900,
            }],
            ops: vec![DrawOp::Text {
                x: 10.0,
                baseline: 30.0,
                text: "Hello".to_string(),
                face: FontFace::Bold,
                size: 12.0,
                color: SLATE_900,
            }],
        };
        let bytes = write_pdf(&[page.clone(), page], &a4_portrait()).unwrap();
        assert!(bytes.starts_with(b"%PDF-1.7"));
        let doc = Document::load_mem(&bytes).unwrap();
        let pages = doc.get_pages();
        assert_eq!(pages.len(), 2);
        let content = doc.get_page_content(*pages.get(&1).unwrap()).unwrap();
        assert!(String::from_utf8_lossy(&content).contains("(Hello)"));
    }
}
