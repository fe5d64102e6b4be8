use eframe::egui::Color32;

use crate::config::{Rgb, STATUS_PALETTE};
use crate::domain::Status;

pub use crate::ui::ui_text::{UI_TEXT, UiText};

/// UI Colors for consistent theming
#[derive(Clone, Copy)]
pub struct UiColors {
    pub background: Color32,
    pub heading: Color32,
    pub label: Color32,
    pub results_fill: Color32,
    pub analyze_button: Color32,
    pub export_button: Color32,
    pub exit_button: Color32,
    pub button_text: Color32,
    pub low: Color32,
    pub high: Color32,
    pub ok: Color32,
}

impl UiColors {
    pub fn for_status(&self, status: Status) -> Color32 {
        match status {
            Status::Low => self.low,
            Status::High => self.high,
            Status::Ok => self.ok,
        }
    }
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
    pub title_size: f32,
    pub heading_size: f32,
    pub label_size: f32,
    pub input_size: f32,
    pub results_size: f32,
    pub button_size: f32,
    pub input_width: f32,
    pub results_min_height: f32,
}

const fn color32(rgb: Rgb) -> Color32 {
    Color32::from_rgb(rgb.r, rgb.g, rgb.b)
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        background: Color32::from_rgb(0xee, 0xfa, 0xf7),
        heading: Color32::from_rgb(0x00, 0x4d, 0x40),
        label: Color32::from_rgb(30, 30, 30),
        results_fill: Color32::WHITE,
        analyze_button: Color32::from_rgb(0x00, 0x7f, 0x5f),
        export_button: Color32::from_rgb(0x00, 0x80, 0xff),
        exit_button: Color32::from_rgb(0xff, 0x4d, 0x4d),
        button_text: Color32::WHITE,
        low: color32(STATUS_PALETTE.low),
        high: color32(STATUS_PALETTE.high),
        ok: color32(STATUS_PALETTE.ok),
    },
    title_size: 30.0,
    heading_size: 20.0,
    label_size: 14.0,
    input_size: 14.0,
    results_size: 14.0,
    button_size: 16.0,
    input_width: 420.0,
    results_min_height: 320.0,
};
