//! Status colors shared by the results display and the exported report.

use crate::domain::Status;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Hex digits as Word expects them, e.g. "c62828"
    pub fn hex(&self) -> String {
        format!("{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

pub struct StatusPalette {
    pub low: Rgb,
    pub high: Rgb,
    pub ok: Rgb,
    pub footer: Rgb,
}

impl StatusPalette {
    pub fn color_for(&self, status: Status) -> Rgb {
        match status {
            Status::Low => self.low,
            Status::High => self.high,
            Status::Ok => self.ok,
        }
    }
}

pub const STATUS_PALETTE: StatusPalette = StatusPalette {
    low: Rgb::new(198, 40, 40),   // Red
    high: Rgb::new(245, 124, 0),  // Orange
    ok: Rgb::new(46, 125, 50),    // Green
    footer: Rgb::new(100, 100, 100),
};
