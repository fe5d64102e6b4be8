use crate::domain::Status;

/// Static range and advisory pair for one sensor parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThresholdRule {
    pub parameter_name: &'static str,
    pub low: f64,
    pub high: f64,
    pub low_advice: &'static str,
    pub high_advice: &'static str,
}

impl ThresholdRule {
    /// Bounds are inclusive: only values strictly outside are LOW or HIGH.
    pub fn classify(&self, value: f64) -> Status {
        if value < self.low {
            Status::Low
        } else if value > self.high {
            Status::High
        } else {
            Status::Ok
        }
    }

    pub fn advice_for(&self, status: Status) -> Option<&'static str> {
        match status {
            Status::Low => Some(self.low_advice),
            Status::High => Some(self.high_advice),
            Status::Ok => None,
        }
    }

    /// "20–38" for whole-number bounds, "5.5–7.0" when either bound is fractional
    pub fn range_label(&self) -> String {
        if self.low.fract() == 0.0 && self.high.fract() == 0.0 {
            format!("{:.0}–{:.0}", self.low, self.high)
        } else {
            format!("{:.1}–{:.1}", self.low, self.high)
        }
    }
}
