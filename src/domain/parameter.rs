use serde::Serialize;
use strum_macros::{EnumIter, EnumString};

use crate::config::RICE_THRESHOLDS;
use crate::domain::ThresholdRule;

/// The four sensor readings the advisor accepts, in form order.
///
/// Parsing accepts the threshold table key in any ASCII case
/// (`"temperature"`, `"PH"`, ...).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, EnumIter, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum SensorParameter {
    #[strum(serialize = "temperature")]
    Temperature,
    #[strum(serialize = "moisture")]
    Moisture,
    #[strum(serialize = "humidity")]
    Humidity,
    #[serde(rename = "pH")]
    #[strum(serialize = "pH")]
    Ph,
}

impl SensorParameter {
    /// Position in the form and in `RICE_THRESHOLDS`
    pub const fn index(self) -> usize {
        match self {
            Self::Temperature => 0,
            Self::Moisture => 1,
            Self::Humidity => 2,
            Self::Ph => 3,
        }
    }

    pub fn rule(self) -> &'static ThresholdRule {
        &RICE_THRESHOLDS[self.index()]
    }

    /// Key used in the threshold table
    pub fn key(self) -> &'static str {
        self.rule().parameter_name
    }

    /// Capitalised name used in advisory lines
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Temperature => "Temperature",
            Self::Moisture => "Moisture",
            Self::Humidity => "Humidity",
            Self::Ph => "pH",
        }
    }

    pub fn unit(self) -> Option<&'static str> {
        match self {
            Self::Temperature => Some("°C"),
            Self::Moisture | Self::Humidity => Some("%"),
            Self::Ph => None,
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Temperature => "🌡",
            Self::Moisture => "💧",
            Self::Humidity => "💨",
            Self::Ph => "⚗",
        }
    }

    /// Form label, e.g. "🌡 Temperature (°C) [20–38]:" or "⚗ pH Level [5.5–7.0]:"
    pub fn input_label(self) -> String {
        let range = self.rule().range_label();
        match self.unit() {
            Some(unit) => format!(
                "{} {} ({}) [{}]:",
                self.icon(),
                self.display_name(),
                unit,
                range
            ),
            None => format!("{} {} Level [{}]:", self.icon(), self.display_name(), range),
        }
    }
}

impl std::fmt::Display for SensorParameter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn table_order_matches_enum_order() {
        for param in SensorParameter::iter() {
            assert_eq!(RICE_THRESHOLDS[param.index()].parameter_name, param.key());
        }
        assert_eq!(SensorParameter::iter().count(), RICE_THRESHOLDS.len());
    }

    #[test]
    fn parses_table_keys_case_insensitively() {
        assert_eq!(
            SensorParameter::from_str("temperature").ok(),
            Some(SensorParameter::Temperature)
        );
        assert_eq!(SensorParameter::from_str("pH").ok(), Some(SensorParameter::Ph));
        assert_eq!(SensorParameter::from_str("PH").ok(), Some(SensorParameter::Ph));
        assert!(SensorParameter::from_str("salinity").is_err());
    }

    #[test]
    fn input_labels_carry_unit_and_range() {
        assert_eq!(
            SensorParameter::Temperature.input_label(),
            "🌡 Temperature (°C) [20–38]:"
        );
        assert_eq!(SensorParameter::Moisture.input_label(), "💧 Moisture (%) [60–80]:");
        assert_eq!(SensorParameter::Ph.input_label(), "⚗ pH Level [5.5–7.0]:");
    }
}
