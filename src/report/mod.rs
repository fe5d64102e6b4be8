//! Report rendering and export.
//!
//! `document` builds a format-independent model of the report from the
//! evaluation results, `docx` turns that model into a Word document and
//! `export` handles the filesystem side (logo lookup, overwrite, errors).

pub mod document;
pub mod docx;
pub mod export;

pub use document::{Alignment, Logo, Paragraph, ReportDocument, TextRun};
pub use docx::render_docx;
pub use export::{ExportTarget, export_report, load_logo, write_report};
