use eframe::{Frame, egui};

use crate::report::ExportTarget;
use crate::ui::app_state::{AdvisorState, handle_analyze, handle_export};
use crate::ui::ui_panels::FormAction;
use crate::ui::utils::setup_custom_visuals;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

/// The desktop form. Owns the state; the handlers in `app_state` do the work.
pub struct CropAdvisorApp {
    pub(super) state: AdvisorState,
    pub(super) export_target: ExportTarget,
}

impl CropAdvisorApp {
    pub fn new(cc: &eframe::CreationContext<'_>, export_target: ExportTarget) -> Self {
        setup_custom_visuals(&cc.egui_ctx);
        Self {
            state: AdvisorState::default(),
            export_target,
        }
    }

    pub(super) fn dispatch(&mut self, ctx: &egui::Context, action: FormAction) {
        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_ui_interactions {
            log::info!("Form action: {:?}", action);
        }

        match action {
            FormAction::Analyze => handle_analyze(&mut self.state),
            FormAction::Export => handle_export(&mut self.state, &self.export_target),
            FormAction::Exit => ctx.send_viewport_cmd(egui::ViewportCommand::Close),
        }
    }
}

impl eframe::App for CropAdvisorApp {
    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_shutdown {
            log::info!("Application shutdown complete.");
        }
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        let dialog_was_open = self.state.is_blocked();

        let actions = self.render_central_panel(ctx);
        for action in actions {
            self.dispatch(ctx, action);
        }
        self.render_dialog(ctx, dialog_was_open);
    }
}
