// Core modules
pub mod config;
pub mod domain;
pub mod error;
pub mod report;
pub mod ui;
pub mod utils;

use std::path::PathBuf;

// Re-export commonly used types
pub use domain::{EvaluationResult, ReadingInputs, SensorParameter, Status, ThresholdRule};
pub use error::{AdvisorError, ExportError};
pub use report::{ExportTarget, export_report};
pub use ui::CropAdvisorApp;

// CLI argument parsing
use clap::{Args, Parser};

use crate::config::{LOGO_FILENAME, REPORT_FILENAME};

/// Report file locations, shared by both binaries
#[derive(Args, Debug, Clone)]
pub struct ExportArgs {
    /// Where the exported report is written (overwritten on every export)
    #[arg(long, default_value = REPORT_FILENAME)]
    pub output: PathBuf,

    /// Image embedded at the top of the report, skipped if missing
    #[arg(long, default_value = LOGO_FILENAME)]
    pub logo: PathBuf,
}

impl ExportArgs {
    pub fn export_target(&self) -> ExportTarget {
        ExportTarget::new(self.output.clone(), self.logo.clone())
    }
}

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub files: ExportArgs,
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(
    cc: &eframe::CreationContext,
    export_target: ExportTarget,
) -> Box<dyn eframe::App> {
    let app = ui::CropAdvisorApp::new(cc, export_target);
    Box::new(app)
}
