//! Configuration module for the crop advisor.

pub mod palette;
pub mod thresholds;

mod debug; // Private: files use crate::config::DEBUG_FLAGS rather than crate::config::debug::DEBUG_FLAGS
pub use debug::DEBUG_FLAGS;

pub mod persistence;

// Re-export commonly used items
pub use persistence::{LOGO_FILENAME, REPORT_FILENAME};
pub use palette::{Rgb, STATUS_PALETTE};
pub use thresholds::RICE_THRESHOLDS;
