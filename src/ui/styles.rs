use eframe::egui::{Button, Color32, Response, RichText, Ui, Vec2};

use crate::domain::EvaluationResult;
use crate::ui::config::UI_CONFIG;

/// Extension trait to add semantic styling methods directly to `egui::Ui`.
pub trait UiStyleExt {
    /// Renders the big application title.
    fn label_title(&mut self, text: impl Into<String>);

    /// Renders a section header using the configured global color.
    fn label_header(&mut self, text: impl Into<String>);

    /// Renders a bold form label.
    fn label_field(&mut self, text: impl Into<String>);

    /// Renders the advisory lines of one result in its status color.
    fn result_lines(&mut self, result: &EvaluationResult);

    /// Large filled button with white text.
    fn action_button(&mut self, text: &str, fill: Color32) -> Response;
}

impl UiStyleExt for Ui {
    fn label_title(&mut self, text: impl Into<String>) {
        self.label(
            RichText::new(text)
                .size(UI_CONFIG.title_size)
                .strong()
                .color(UI_CONFIG.colors.heading),
        );
    }

    fn label_header(&mut self, text: impl Into<String>) {
        self.label(
            RichText::new(text)
                .size(UI_CONFIG.heading_size)
                .strong()
                .color(UI_CONFIG.colors.heading),
        );
    }

    fn label_field(&mut self, text: impl Into<String>) {
        self.label(
            RichText::new(text)
                .size(UI_CONFIG.label_size)
                .strong()
                .color(UI_CONFIG.colors.label),
        );
    }

    fn result_lines(&mut self, result: &EvaluationResult) {
        let color = UI_CONFIG.colors.for_status(result.status);
        for line in result.lines() {
            self.label(
                RichText::new(line)
                    .monospace()
                    .strong()
                    .size(UI_CONFIG.results_size)
                    .color(color),
            );
        }
        self.add_space(UI_CONFIG.results_size); // blank line between results
    }

    fn action_button(&mut self, text: &str, fill: Color32) -> Response {
        let label = RichText::new(text)
            .size(UI_CONFIG.button_size)
            .strong()
            .color(UI_CONFIG.colors.button_text);
        self.add(Button::new(label).fill(fill).min_size(Vec2::new(0.0, 44.0)))
    }
}
