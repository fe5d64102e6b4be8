//! Threshold evaluation: parse the raw form text, compare each reading
//! against its rule and build the advisory lines shown to the user.

use std::str::FromStr;

use serde::Serialize;
use strum::IntoEnumIterator;

use crate::domain::SensorParameter;
use crate::error::{AdvisorError, AdvisorResult};

/// Outcome of comparing one reading against its rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Status {
    Low,
    High,
    Ok,
}

impl Status {
    pub fn label(self) -> &'static str {
        match self {
            Status::Low => "LOW",
            Status::High => "HIGH",
            Status::Ok => "OK",
        }
    }

    /// Severity tag used to pick display and report colors
    pub fn severity_tag(self) -> &'static str {
        match self {
            Status::Low => "red",
            Status::High => "orange",
            Status::Ok => "green",
        }
    }

    pub fn is_out_of_range(self) -> bool {
        self != Status::Ok
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluationResult {
    #[serde(rename = "parameter_name")]
    pub parameter: SensorParameter,
    pub value: f64,
    pub status: Status,
    /// Advisory text; `None` when the reading is in range
    pub message: Option<&'static str>,
}

impl EvaluationResult {
    pub fn parameter_name(&self) -> &'static str {
        self.parameter.key()
    }

    /// e.g. "⚠️ Temperature is LOW (15.0)"
    pub fn status_line(&self) -> String {
        let marker = if self.status.is_out_of_range() {
            "⚠️"
        } else {
            "✅"
        };
        format!(
            "{} {} is {} ({})",
            marker,
            self.parameter.display_name(),
            self.status.label(),
            format_reading(self.value)
        )
    }

    pub fn suggestion_line(&self) -> Option<String> {
        self.message
            .map(|advice| format!("💡 Suggestion: {}", advice))
    }

    /// Status line followed by the suggestion line, if any
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![self.status_line()];
        lines.extend(self.suggestion_line());
        lines
    }
}

/// Raw text of the four form fields, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReadingInputs {
    pub temperature: String,
    pub moisture: String,
    pub humidity: String,
    pub ph: String,
}

impl ReadingInputs {
    pub fn new(
        temperature: impl Into<String>,
        moisture: impl Into<String>,
        humidity: impl Into<String>,
        ph: impl Into<String>,
    ) -> Self {
        Self {
            temperature: temperature.into(),
            moisture: moisture.into(),
            humidity: humidity.into(),
            ph: ph.into(),
        }
    }

    pub fn get(&self, parameter: SensorParameter) -> &str {
        match parameter {
            SensorParameter::Temperature => &self.temperature,
            SensorParameter::Moisture => &self.moisture,
            SensorParameter::Humidity => &self.humidity,
            SensorParameter::Ph => &self.ph,
        }
    }

    pub fn get_mut(&mut self, parameter: SensorParameter) -> &mut String {
        match parameter {
            SensorParameter::Temperature => &mut self.temperature,
            SensorParameter::Moisture => &mut self.moisture,
            SensorParameter::Humidity => &mut self.humidity,
            SensorParameter::Ph => &mut self.ph,
        }
    }
}

/// Whole numbers keep one decimal place ("15.0"), anything else prints as-is ("6.25").
/// Magnitudes from 1e16 up, and below 1e-4, switch to exponent form ("1e+20", "1.5e-05").
pub fn format_reading(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let magnitude = value.abs();
    if magnitude >= 1e16 || (magnitude != 0.0 && magnitude < 1e-4) {
        exponent_form(value)
    } else if value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}

/// "1e20" -> "1e+20", "1.5e-5" -> "1.5e-05": signed exponent, at least two digits
fn exponent_form(value: f64) -> String {
    let formatted = format!("{:e}", value);
    match formatted.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => formatted,
    }
}

pub fn parse_reading(parameter: SensorParameter, text: &str) -> AdvisorResult<f64> {
    let invalid = || AdvisorError::InvalidInput {
        parameter,
        input: text.to_string(),
    };
    text.trim().parse().map_err(|_| invalid())
}

pub fn evaluate(parameter: SensorParameter, value: f64) -> EvaluationResult {
    let rule = parameter.rule();
    let status = rule.classify(value);
    EvaluationResult {
        parameter,
        value,
        status,
        message: rule.advice_for(status),
    }
}

/// Evaluates by table key (any ASCII case). Unknown names are an error rather than a panic.
pub fn evaluate_named(name: &str, value: f64) -> AdvisorResult<EvaluationResult> {
    let parameter = SensorParameter::from_str(name.trim())
        .map_err(|_| AdvisorError::UnknownParameter(name.to_string()))?;
    Ok(evaluate(parameter, value))
}

/// Parses every field before evaluating any, so a single bad field yields
/// an error and no results.
pub fn evaluate_inputs(inputs: &ReadingInputs) -> AdvisorResult<Vec<EvaluationResult>> {
    let values = SensorParameter::iter()
        .map(|param| parse_reading(param, inputs.get(param)).map(|value| (param, value)))
        .collect::<AdvisorResult<Vec<_>>>()?;

    Ok(values
        .into_iter()
        .map(|(param, value)| evaluate(param, value))
        .collect())
}
