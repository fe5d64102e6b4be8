// Domain types and value objects
pub mod evaluation;
pub mod parameter;
pub mod threshold;

// Re-export commonly used types
pub use evaluation::{
    EvaluationResult, ReadingInputs, Status, evaluate, evaluate_inputs, evaluate_named,
    format_reading, parse_reading,
};
pub use parameter::SensorParameter;
pub use threshold::ThresholdRule;
