//! Headless advisor: evaluate four readings from the command line, print the
//! advisory lines and optionally write the same report the GUI exports.

use anyhow::{Context, Result};
use clap::Parser;
use rice_crop_advisor::domain::evaluate_inputs;
use rice_crop_advisor::{ExportArgs, ReadingInputs, export_report};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None, allow_negative_numbers = true)]
struct ReportCli {
    /// Temperature in °C
    temperature: String,
    /// Soil moisture in %
    moisture: String,
    /// Relative humidity in %
    humidity: String,
    /// Soil pH
    ph: String,

    /// Print results as JSON instead of advisory lines
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Also write the report
    #[arg(long, default_value_t = false)]
    export: bool,

    #[command(flatten)]
    files: ExportArgs,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = ReportCli::parse();

    let inputs = ReadingInputs::new(cli.temperature, cli.moisture, cli.humidity, cli.ph);
    let results =
        evaluate_inputs(&inputs).context("Please enter valid numeric values only")?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        for result in &results {
            for line in result.lines() {
                println!("{}", line);
            }
            println!();
        }
    }

    if cli.export {
        let target = cli.files.export_target();
        let path = export_report(&results, &target)
            .with_context(|| format!("Failed to export report to {}", target.output.display()))?;
        println!("✅ Report saved as '{}'", path.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rice_crop_advisor::{SensorParameter, Status};
    use std::path::PathBuf;

    #[test]
    fn negative_readings_are_positional_values() {
        let cli = ReportCli::parse_from(["crop_report", "-3", "70", "-0.5", "6.5"]);
        assert_eq!(cli.temperature, "-3");
        assert_eq!(cli.humidity, "-0.5");
        assert!(!cli.json);
        assert!(!cli.export);

        let inputs = ReadingInputs::new(cli.temperature, cli.moisture, cli.humidity, cli.ph);
        let results = evaluate_inputs(&inputs).unwrap();
        assert_eq!(results[0].parameter, SensorParameter::Temperature);
        assert_eq!(results[0].status, Status::Low);
        assert_eq!(results[2].status, Status::Low);
    }

    #[test]
    fn flags_and_paths_parse_after_readings() {
        let cli = ReportCli::parse_from([
            "crop_report",
            "25",
            "70",
            "80",
            "6",
            "--json",
            "--export",
            "--output",
            "field_a.docx",
        ]);
        assert!(cli.json);
        assert!(cli.export);
        assert_eq!(cli.files.output, PathBuf::from("field_a.docx"));
        assert_eq!(cli.files.logo, PathBuf::from("logo.png"));
    }

    #[test]
    fn all_four_readings_are_required() {
        assert!(ReportCli::try_parse_from(["crop_report", "25", "70", "80"]).is_err());
    }
}
