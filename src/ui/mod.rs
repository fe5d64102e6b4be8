// User interface components
pub mod app;
pub mod app_state;
pub mod config;
pub mod styles;
pub mod ui_panels;
pub mod ui_render;
pub mod ui_text;
pub mod utils;

// Re-export main app
pub use app::CropAdvisorApp;
pub use config::{UI_CONFIG, UI_TEXT};
