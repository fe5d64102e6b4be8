//! Word (.docx) rendering of a `ReportDocument`.
//!
//! Sizes are converted to Word units here: run sizes in half-points, picture
//! extents in EMU.

use std::io::Cursor;

use docx_rs::{AlignmentType, BreakType, Docx, Pic, Run, RunFonts, Style, StyleType};

use crate::error::ExportError;
use crate::report::document::{Alignment, BODY_FONT, Logo, Paragraph, ReportDocument, TextRun};

const EMU_PER_IN: f32 = 914_400.0;
const TITLE_STYLE: &str = "Title";
const TITLE_SIZE_PT: f32 = 26.0;

/// Packs the document into .docx bytes.
pub fn render_docx(doc: &ReportDocument) -> Result<Vec<u8>, ExportError> {
    let mut buf = Cursor::new(Vec::new());
    build_docx(doc)
        .build()
        .pack(&mut buf)
        .map_err(|e| ExportError::Render(e.to_string()))?;
    Ok(buf.into_inner())
}

fn build_docx(doc: &ReportDocument) -> Docx {
    let title_style = Style::new(TITLE_STYLE, StyleType::Paragraph)
        .name(TITLE_STYLE)
        .size(half_points(TITLE_SIZE_PT))
        .bold();

    let mut docx = Docx::new().add_style(title_style);

    if let Some(logo) = &doc.logo {
        docx = docx.add_paragraph(docx_rs::Paragraph::new().add_run(logo_run(logo)));
    }

    docx = docx
        .add_paragraph(
            docx_rs::Paragraph::new()
                .add_run(Run::new().add_text(doc.title.as_str()))
                .style(TITLE_STYLE)
                .align(AlignmentType::Center),
        )
        .add_paragraph(docx_rs::Paragraph::new());

    for paragraph in &doc.paragraphs {
        docx = docx.add_paragraph(docx_paragraph(paragraph));
    }

    docx.add_paragraph(docx_rs::Paragraph::new())
        .add_paragraph(docx_paragraph(&doc.footer))
}

fn logo_run(logo: &Logo) -> Run {
    let pic = Pic::new(&logo.bytes).size(
        (logo.width_in * EMU_PER_IN) as u32,
        (logo.height_in() * EMU_PER_IN) as u32,
    );
    Run::new().add_image(pic)
}

/// Runs of one paragraph are separated by line breaks, not new paragraphs.
fn docx_paragraph(paragraph: &Paragraph) -> docx_rs::Paragraph {
    let alignment = match paragraph.alignment {
        Alignment::Left => AlignmentType::Left,
        Alignment::Right => AlignmentType::Right,
    };

    let last = paragraph.runs.len().saturating_sub(1);
    paragraph
        .runs
        .iter()
        .enumerate()
        .fold(docx_rs::Paragraph::new().align(alignment), |p, (i, run)| {
            let docx_run = docx_run(run);
            if i < last {
                p.add_run(docx_run.add_break(BreakType::TextWrapping))
            } else {
                p.add_run(docx_run)
            }
        })
}

fn docx_run(run: &TextRun) -> Run {
    let docx_run = Run::new()
        .add_text(run.text.as_str())
        .size(half_points(run.size_pt))
        .color(run.color.hex())
        .fonts(RunFonts::new().ascii(BODY_FONT).hi_ansi(BODY_FONT).cs(BODY_FONT));
    if run.bold { docx_run.bold() } else { docx_run }
}

fn half_points(size_pt: f32) -> usize {
    (size_pt * 2.0).round() as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{SensorParameter, evaluate};
    use crate::report::document::LOGO_WIDTH_IN;
    use std::io::Read;

    fn sample_doc(logo: Option<Logo>) -> ReportDocument {
        let results = vec![
            evaluate(SensorParameter::Temperature, 40.0),
            evaluate(SensorParameter::Ph, 6.0),
        ];
        ReportDocument::build(&results, "07-Mar-2025 03:04 PM", logo).unwrap()
    }

    fn document_xml(bytes: Vec<u8>) -> String {
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        let mut xml = String::new();
        archive
            .by_name("word/document.xml")
            .unwrap()
            .read_to_string(&mut xml)
            .unwrap();
        xml
    }

    fn tiny_png(width: u32, height: u32) -> Vec<u8> {
        let mut buf = Cursor::new(Vec::new());
        image::DynamicImage::ImageRgb8(image::RgbImage::new(width, height))
            .write_to(&mut buf, image::ImageFormat::Png)
            .unwrap();
        buf.into_inner()
    }

    #[test]
    fn packs_a_word_document() {
        let bytes = render_docx(&sample_doc(None)).unwrap();
        assert_eq!(&bytes[..2], b"PK");

        let xml = document_xml(bytes);
        assert!(xml.contains("🌾 Smart Rice Crop Report"));
        assert!(xml.contains("⚠️ Temperature is HIGH (40.0)"));
        assert!(xml.contains("💡 Suggestion: Install shade net"));
        assert!(xml.contains("✅ pH is OK (6.0)"));
        assert!(xml.contains("🕒 Report generated on: 07-Mar-2025 03:04 PM"));
        assert!(!xml.contains("<w:drawing"));
    }

    #[test]
    fn runs_carry_status_color_font_and_size() {
        let xml = document_xml(render_docx(&sample_doc(None)).unwrap());
        assert!(xml.contains("w:val=\"f57c00\""));
        assert!(xml.contains("w:val=\"2e7d32\""));
        assert!(xml.contains("w:val=\"646464\""));
        assert!(xml.contains("w:ascii=\"Calibri\""));
        assert!(xml.contains("w:val=\"24\"")); // 12pt body
        assert!(xml.contains("w:val=\"20\"")); // 10pt footer
        assert!(xml.contains("w:val=\"center\""));
        assert!(xml.contains("w:val=\"right\""));
    }

    #[test]
    fn logo_becomes_a_picture() {
        let logo = Logo {
            bytes: tiny_png(4, 2),
            width_px: 4,
            height_px: 2,
            width_in: LOGO_WIDTH_IN,
        };
        let xml = document_xml(render_docx(&sample_doc(Some(logo))).unwrap());
        assert!(xml.contains("<w:drawing"));
        assert!(xml.contains("cx=\"2286000\""));
        assert!(xml.contains("cy=\"1143000\""));
    }

    #[test]
    fn half_point_conversion() {
        assert_eq!(half_points(12.0), 24);
        assert_eq!(half_points(10.0), 20);
    }
}
