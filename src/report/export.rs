use std::fs::File;
use std::io::{BufWriter, Cursor, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use image::{ImageFormat, ImageReader};

use crate::config::{LOGO_FILENAME, REPORT_FILENAME};
use crate::domain::EvaluationResult;
use crate::error::ExportError;
use crate::report::docx::render_docx;
use crate::report::document::{LOGO_WIDTH_IN, Logo, ReportDocument};
use crate::utils::time_utils::report_timestamp_now;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

/// Where the report goes and which logo it picks up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportTarget {
    pub output: PathBuf,
    pub logo: PathBuf,
}

impl Default for ExportTarget {
    fn default() -> Self {
        Self {
            output: PathBuf::from(REPORT_FILENAME),
            logo: PathBuf::from(LOGO_FILENAME),
        }
    }
}

impl ExportTarget {
    pub fn new(output: impl Into<PathBuf>, logo: impl Into<PathBuf>) -> Self {
        Self {
            output: output.into(),
            logo: logo.into(),
        }
    }

    /// Filename shown in the success dialog
    pub fn display_name(&self) -> String {
        self.output
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.output.display().to_string())
    }
}

/// Builds and writes the report for `results`, overwriting any previous file.
///
/// Nothing is written when `results` is empty.
pub fn export_report(
    results: &[EvaluationResult],
    target: &ExportTarget,
) -> Result<PathBuf, ExportError> {
    if results.is_empty() {
        return Err(ExportError::NothingToExport);
    }

    let logo = load_logo(&target.logo);
    let doc = ReportDocument::build(results, &report_timestamp_now(), logo)?;
    write_report(&doc, &target.output)?;

    log::info!(
        "Report with {} results saved to {}",
        results.len(),
        target.output.display()
    );
    Ok(target.output.clone())
}

pub fn write_report(doc: &ReportDocument, path: &Path) -> Result<(), ExportError> {
    let bytes = render_docx(doc)?;

    #[cfg(debug_assertions)]
    if DEBUG_FLAGS.print_report_details {
        log::info!(
            "Rendering report: {} paragraphs, logo {} bytes, {} bytes of docx",
            doc.paragraphs.len(),
            doc.logo.as_ref().map(|l| l.bytes.len()).unwrap_or(0),
            bytes.len()
        );
    }

    let to_export_error = |source| ExportError::Write {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(to_export_error)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(&bytes).map_err(to_export_error)?;
    writer.flush().map_err(to_export_error)
}

/// Reads the logo if there is one. A missing file is not an error; an
/// unreadable or undecodable one is logged and skipped.
pub fn load_logo(path: &Path) -> Option<Logo> {
    if !path.exists() {
        return None;
    }

    match read_logo(path) {
        Ok(logo) => Some(logo),
        Err(e) => {
            log::warn!("Logo error ({}): {:#}", path.display(), e);
            None
        }
    }
}

fn read_logo(path: &Path) -> anyhow::Result<Logo> {
    let bytes = std::fs::read(path).context("Failed to read logo")?;
    let reader = ImageReader::new(Cursor::new(bytes.as_slice()))
        .with_guessed_format()
        .context("Failed to inspect logo")?;

    match reader.format() {
        Some(ImageFormat::Png | ImageFormat::Jpeg | ImageFormat::Gif | ImageFormat::Bmp) => {}
        other => bail!("unsupported image format: {:?}", other),
    }

    // Full decode so a truncated file is rejected here, not while packing.
    let image = reader.decode().context("Failed to decode logo")?;
    Ok(Logo {
        width_px: image.width(),
        height_px: image.height(),
        bytes,
        width_in: LOGO_WIDTH_IN,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{SensorParameter, evaluate};
    use std::io::Read;
    use tempfile::TempDir;

    fn all_results() -> Vec<EvaluationResult> {
        vec![
            evaluate(SensorParameter::Temperature, 15.0),
            evaluate(SensorParameter::Moisture, 70.0),
            evaluate(SensorParameter::Humidity, 95.0),
            evaluate(SensorParameter::Ph, 6.0),
        ]
    }

    fn target_in(dir: &TempDir) -> ExportTarget {
        ExportTarget::new(dir.path().join("report.docx"), dir.path().join("logo.png"))
    }

    fn document_xml(path: &Path) -> String {
        let file = File::open(path).unwrap();
        let mut archive = zip::ZipArchive::new(file).unwrap();
        let mut xml = String::new();
        archive
            .by_name("word/document.xml")
            .unwrap()
            .read_to_string(&mut xml)
            .unwrap();
        xml
    }

    fn write_png(path: &Path, width: u32, height: u32) {
        image::RgbImage::new(width, height).save(path).unwrap();
    }

    #[test]
    fn empty_results_write_nothing() {
        let dir = TempDir::new().unwrap();
        let target = target_in(&dir);

        let err = export_report(&[], &target).unwrap_err();
        assert!(matches!(err, ExportError::NothingToExport));
        assert!(!target.output.exists());
    }

    #[test]
    fn writes_one_paragraph_per_parameter_colored_by_status() {
        let dir = TempDir::new().unwrap();
        let target = target_in(&dir);

        let path = export_report(&all_results(), &target).unwrap();
        assert_eq!(path, target.output);

        let xml = document_xml(&path);
        assert!(xml.contains("w:val=\"c62828\""));
        assert!(xml.contains("w:val=\"f57c00\""));
        assert!(xml.contains("w:val=\"2e7d32\""));
        for line in [
            "⚠️ Temperature is LOW (15.0)",
            "✅ Moisture is OK (70.0)",
            "⚠️ Humidity is HIGH (95.0)",
            "✅ pH is OK (6.0)",
        ] {
            assert_eq!(xml.matches(line).count(), 1, "{}", line);
        }
        assert!(xml.contains("Report generated on:"));
    }

    #[test]
    fn overwrites_previous_report() {
        let dir = TempDir::new().unwrap();
        let target = target_in(&dir);
        std::fs::write(&target.output, "stale contents").unwrap();

        export_report(&all_results(), &target).unwrap();
        let bytes = std::fs::read(&target.output).unwrap();
        assert_eq!(&bytes[..2], b"PK");
    }

    #[test]
    fn unwritable_path_is_a_write_error() {
        let dir = TempDir::new().unwrap();
        let target = ExportTarget::new(
            dir.path().join("missing_dir").join("report.docx"),
            dir.path().join("logo.png"),
        );

        match export_report(&all_results(), &target) {
            Err(ExportError::Write { path, .. }) => assert_eq!(path, target.output),
            other => panic!("expected write error, got {:?}", other),
        }
    }

    #[test]
    fn logo_is_embedded_when_present() {
        let dir = TempDir::new().unwrap();
        let target = target_in(&dir);
        write_png(&target.logo, 8, 4);

        let logo = load_logo(&target.logo).unwrap();
        assert_eq!((logo.width_px, logo.height_px), (8, 4));

        export_report(&all_results(), &target).unwrap();
        assert!(document_xml(&target.output).contains("<w:drawing"));
    }

    #[test]
    fn missing_logo_is_tolerated() {
        let dir = TempDir::new().unwrap();
        assert!(load_logo(&dir.path().join("nope.png")).is_none());
    }

    #[test]
    fn corrupt_logo_is_skipped_and_export_still_succeeds() {
        let dir = TempDir::new().unwrap();
        let target = target_in(&dir);
        std::fs::write(&target.logo, [0x89, b'P', b'N', b'G']).unwrap();

        assert!(load_logo(&target.logo).is_none());
        export_report(&all_results(), &target).unwrap();
        assert!(!document_xml(&target.output).contains("<w:drawing"));
    }

    #[test]
    fn default_target_uses_fixed_filenames() {
        let target = ExportTarget::default();
        assert_eq!(target.output, PathBuf::from("rice_report_2025.docx"));
        assert_eq!(target.logo, PathBuf::from("logo.png"));
        assert_eq!(target.display_name(), "rice_report_2025.docx");
    }
}
