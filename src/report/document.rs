use crate::config::{Rgb, STATUS_PALETTE};
use crate::domain::{EvaluationResult, Status};
use crate::error::ExportError;

pub const REPORT_TITLE: &str = "🌾 Smart Rice Crop Report";
pub const BODY_FONT: &str = "Calibri";
pub const BODY_SIZE_PT: f32 = 12.0;
pub const FOOTER_SIZE_PT: f32 = 10.0;
pub const LOGO_WIDTH_IN: f32 = 2.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Right,
}

/// A span of text sharing one style.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub text: String,
    pub color: Rgb,
    pub bold: bool,
    pub size_pt: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Paragraph {
    pub runs: Vec<TextRun>,
    pub alignment: Alignment,
    /// Set for result paragraphs, `None` for the footer
    pub status: Option<Status>,
}

impl Paragraph {
    pub fn text(&self) -> String {
        self.runs
            .iter()
            .map(|run| run.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Image placed above the title, scaled to `width_in` with its aspect ratio kept.
#[derive(Debug, Clone, PartialEq)]
pub struct Logo {
    pub bytes: Vec<u8>,
    pub width_px: u32,
    pub height_px: u32,
    pub width_in: f32,
}

impl Logo {
    pub fn height_in(&self) -> f32 {
        if self.width_px == 0 {
            return 0.0;
        }
        self.width_in * self.height_px as f32 / self.width_px as f32
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReportDocument {
    pub logo: Option<Logo>,
    pub title: String,
    pub paragraphs: Vec<Paragraph>,
    pub footer: Paragraph,
}

impl ReportDocument {
    /// One paragraph per result, colored by status. Each paragraph holds the
    /// status line and, for out-of-range readings, the suggestion line.
    pub fn build(
        results: &[EvaluationResult],
        generated_at: &str,
        logo: Option<Logo>,
    ) -> Result<Self, ExportError> {
        if results.is_empty() {
            return Err(ExportError::NothingToExport);
        }

        let paragraphs = results.iter().map(result_paragraph).collect();

        let footer = Paragraph {
            runs: vec![TextRun {
                text: format!("🕒 Report generated on: {}", generated_at),
                color: STATUS_PALETTE.footer,
                bold: false,
                size_pt: FOOTER_SIZE_PT,
            }],
            alignment: Alignment::Right,
            status: None,
        };

        Ok(Self {
            logo,
            title: REPORT_TITLE.to_string(),
            paragraphs,
            footer,
        })
    }
}

fn result_paragraph(result: &EvaluationResult) -> Paragraph {
    let color = STATUS_PALETTE.color_for(result.status);
    Paragraph {
        runs: result
            .lines()
            .into_iter()
            .map(|text| TextRun {
                text,
                color,
                bold: true,
                size_pt: BODY_SIZE_PT,
            })
            .collect(),
        alignment: Alignment::Left,
        status: Some(result.status),
    }
}
