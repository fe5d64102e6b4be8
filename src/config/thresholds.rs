//! Rice crop threshold table.
//!
//! One rule per sensor parameter, in the same order as the input form.
//! These are fixed at compile time and cannot be changed while running.

use crate::domain::ThresholdRule;

pub static RICE_THRESHOLDS: [ThresholdRule; 4] = [
    ThresholdRule {
        parameter_name: "temperature",
        low: 20.0,
        high: 38.0,
        low_advice: "Apply mulch or reduce watering",
        high_advice: "Install shade net",
    },
    ThresholdRule {
        parameter_name: "moisture",
        low: 60.0,
        high: 80.0,
        low_advice: "Increase watering",
        high_advice: "Improve soil drainage",
    },
    ThresholdRule {
        parameter_name: "humidity",
        low: 70.0,
        high: 90.0,
        low_advice: "Use sprinkler system",
        high_advice: "Increase ventilation",
    },
    ThresholdRule {
        parameter_name: "pH",
        low: 5.5,
        high: 7.0,
        low_advice: "Add lime to raise pH",
        high_advice: "Use sulfur or compost to lower pH",
    },
];
