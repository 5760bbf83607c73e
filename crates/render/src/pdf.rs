//! PDF emission: replays finished layout pages through `printpdf`.

use std::io::BufWriter;

use printpdf::{BuiltinFont, IndirectFontRef, Line, Mm, PdfDocument, PdfLayerReference, Point};

use facturo_layout::{DrawOp, Page, PageStyle};

use crate::error::RenderError;

/// Assemble the finished byte stream ("application/pdf") from layout pages.
///
/// The draw-op model carries no backend types, so this is a mechanical
/// replay: text onto the builtin Helvetica faces, rules as one-segment
/// lines. The PDF container embeds a creation timestamp; everything else is
/// a pure function of the pages.
pub fn pages_to_pdf(title: &str, style: &PageStyle, pages: &[Page]) -> Result<Vec<u8>, RenderError> {
    let (doc, first_page, first_layer) =
        PdfDocument::new(title, Mm(style.width), Mm(style.height), "Layer 1");

    let regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| RenderError::Pdf(e.to_string()))?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| RenderError::Pdf(e.to_string()))?;

    for (index, page) in pages.iter().enumerate() {
        let layer = if index == 0 {
            doc.get_page(first_page).get_layer(first_layer)
        } else {
            let (page_index, layer_index) =
                doc.add_page(Mm(style.width), Mm(style.height), "Layer 1");
            doc.get_page(page_index).get_layer(layer_index)
        };
        replay_page(&layer, page, &regular, &bold);
    }

    let writer = BufWriter::new(Vec::<u8>::new());
    let mut writer = writer;
    doc.save(&mut writer)
        .map_err(|e| RenderError::Pdf(e.to_string()))?;
    writer
        .into_inner()
        .map_err(|e| RenderError::Pdf(e.to_string()))
}

fn replay_page(
    layer: &PdfLayerReference,
    page: &Page,
    regular: &IndirectFontRef,
    bold: &IndirectFontRef,
) {
    for op in &page.ops {
        match op {
            DrawOp::Text {
                x,
                y,
                style,
                content,
            } => {
                let font = if style.bold { bold } else { regular };
                layer.use_text(content.clone(), style.size, Mm(*x), Mm(*y), font);
            }
            DrawOp::Rule { x1, x2, y } => {
                layer.add_line(Line {
                    points: vec![
                        (Point::new(Mm(*x1), Mm(*y)), false),
                        (Point::new(Mm(*x2), Mm(*y)), false),
                    ],
                    is_closed: false,
                });
            }
        }
    }
}
