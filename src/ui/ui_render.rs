use eframe::egui::{
    Align2, CentralPanel, Color32, Context, Frame, Key, RichText, ScrollArea, Ui, Vec2, Window,
};

use crate::domain::EvaluationResult;
use crate::ui::app_state::DialogKind;
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::styles::UiStyleExt;
use crate::ui::ui_panels::{ActionBar, FormAction, InputPanel, Panel};
use crate::ui::utils::spaced_separator;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

use super::app::CropAdvisorApp;

impl CropAdvisorApp {
    pub(super) fn render_central_panel(&mut self, ctx: &Context) -> Vec<FormAction> {
        let mut actions = Vec::new();
        let central_panel_frame = Frame::new()
            .fill(UI_CONFIG.colors.background)
            .inner_margin(30.0);
        let blocked = self.state.is_blocked();
        let state = &mut self.state;

        CentralPanel::default()
            .frame(central_panel_frame)
            .show(ctx, |ui| {
                ScrollArea::vertical().show(ui, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.label_title(UI_TEXT.app_heading);
                        ui.add_space(20.0);

                        // Dialogs are blocking
                        ui.add_enabled_ui(!blocked, |ui| {
                            actions.extend(InputPanel::new(&mut state.inputs).render(ui));
                            spaced_separator(ui);

                            ui.label_header(UI_TEXT.results_heading);
                            ui.add_space(5.0);
                            render_results(ui, &state.results);
                            ui.add_space(20.0);

                            actions.extend(ActionBar.render(ui));
                        });
                    });
                });
            });

        actions
    }

    /// `keyboard_dismiss` is false on the frame that opened the dialog, so the
    /// Enter press that triggered Analyze does not also close it.
    pub(super) fn render_dialog(&mut self, ctx: &Context, keyboard_dismiss: bool) {
        let Some(dialog) = self.state.dialog.clone() else {
            return;
        };

        let accent = match dialog.kind {
            DialogKind::Error => UI_CONFIG.colors.low,
            DialogKind::Warning => UI_CONFIG.colors.high,
            DialogKind::Info => UI_CONFIG.colors.ok,
        };

        let mut dismissed = false;
        Window::new(dialog.title.as_str())
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, Vec2::ZERO)
            .show(ctx, |ui| {
                ui.add_space(10.0);
                ui.label(RichText::new(&dialog.message).size(16.0).color(accent));
                ui.add_space(10.0);
                ui.vertical_centered(|ui| {
                    if ui.button(UI_TEXT.dialog_ok_button).clicked() {
                        dismissed = true;
                    }
                });
            });

        if keyboard_dismiss
            && ctx.input(|i| i.key_pressed(Key::Enter) || i.key_pressed(Key::Escape))
        {
            dismissed = true;
        }

        if dismissed {
            #[cfg(debug_assertions)]
            if DEBUG_FLAGS.print_ui_interactions {
                log::info!("Dismissed dialog: {}", dialog.title);
            }
            self.state.dismiss_dialog();
        }
    }
}

fn render_results(ui: &mut Ui, results: &[EvaluationResult]) {
    Frame::group(ui.style())
        .fill(UI_CONFIG.colors.results_fill)
        .inner_margin(12.0)
        .show(ui, |ui| {
            ui.set_min_height(UI_CONFIG.results_min_height);
            ui.set_width(ui.available_width().min(900.0));
            ScrollArea::vertical()
                .id_salt("results_display")
                .show(ui, |ui| {
                    if results.is_empty() {
                        ui.label(
                            RichText::new(UI_TEXT.results_placeholder)
                                .italics()
                                .color(Color32::GRAY),
                        );
                    }
                    for result in results {
                        ui.result_lines(result);
                    }
                });
        });
}
