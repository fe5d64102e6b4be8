//! Error types shared by the evaluator, the report exporter and the UI.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::domain::SensorParameter;

/// Errors surfaced to the user by the Analyze and Export actions.
#[derive(Debug, Error)]
pub enum AdvisorError {
    /// A form field could not be parsed as a finite floating point number
    #[error("invalid value {input:?} for {parameter}")]
    InvalidInput {
        parameter: SensorParameter,
        input: String,
    },

    /// Name lookup against the threshold table failed
    #[error("no threshold rule for parameter: {0}")]
    UnknownParameter(String),

    #[error(transparent)]
    Export(#[from] ExportError),
}

/// Reasons a report could not be written.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("no results to export")]
    NothingToExport,

    /// The document could not be assembled (zip packaging of the .docx)
    #[error("failed to build report document: {0}")]
    Render(String),

    #[error("failed to write report to {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type AdvisorResult<T> = Result<T, AdvisorError>;
