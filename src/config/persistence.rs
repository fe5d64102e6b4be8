//! File locations for the exported report and its optional logo.
//!
//! Both are relative to the working directory. The report is overwritten on
//! every export.

/// Default filename of the exported report
pub const REPORT_FILENAME: &str = "rice_report_2025.docx";

/// Image embedded at the top of the report when present
pub const LOGO_FILENAME: &str = "logo.png";
