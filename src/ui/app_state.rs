//! Application state and the handlers behind the Analyze and Export buttons.
//!
//! Nothing here touches egui: the handlers take the state by reference and
//! record their outcome as a pending `Dialog`, which the render pass shows.

use crate::domain::{EvaluationResult, ReadingInputs, evaluate_inputs};
use crate::error::{AdvisorError, ExportError};
use crate::report::{ExportTarget, export_report};
use crate::ui::config::UI_TEXT;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogKind {
    Error,
    Warning,
    Info,
}

/// A modal message box. While one is open the form is disabled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dialog {
    pub kind: DialogKind,
    pub title: String,
    pub message: String,
}

impl Dialog {
    pub fn new(kind: DialogKind, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct AdvisorState {
    pub inputs: ReadingInputs,
    /// Results of the last successful Analyze; this is what Export writes
    pub results: Vec<EvaluationResult>,
    pub dialog: Option<Dialog>,
}

impl AdvisorState {
    pub fn is_blocked(&self) -> bool {
        self.dialog.is_some()
    }

    pub fn dismiss_dialog(&mut self) {
        self.dialog = None;
    }
}

/// Evaluates all four fields. Any unparseable field opens the input error
/// dialog and leaves the previous results untouched.
pub fn handle_analyze(state: &mut AdvisorState) {
    match evaluate_inputs(&state.inputs) {
        Ok(results) => {
            #[cfg(debug_assertions)]
            if DEBUG_FLAGS.print_evaluations {
                for result in &results {
                    log::info!("{}", result.status_line());
                }
            }
            state.results = results;
        }
        Err(e) => {
            log::warn!("Analyze rejected: {}", e);
            state.dialog = Some(Dialog::new(
                DialogKind::Error,
                UI_TEXT.input_error_title,
                UI_TEXT.input_error_message,
            ));
        }
    }
}

/// Writes the current results. Failures become a warning dialog; the
/// underlying error is only logged.
pub fn handle_export(state: &mut AdvisorState, target: &ExportTarget) {
    let dialog = match export_report(&state.results, target) {
        Ok(_) => Dialog::new(
            DialogKind::Info,
            UI_TEXT.export_success_title,
            format!(
                "{} '{}'!",
                UI_TEXT.export_success_message_prefix,
                target.display_name()
            ),
        ),
        Err(ExportError::NothingToExport) => Dialog::new(
            DialogKind::Warning,
            UI_TEXT.export_failed_title,
            UI_TEXT.export_nothing_message,
        ),
        Err(e) => {
            log::error!("{}", AdvisorError::from(e));
            Dialog::new(
                DialogKind::Warning,
                UI_TEXT.export_failed_title,
                format!(
                    "{} '{}'.",
                    UI_TEXT.export_write_failed_message_prefix,
                    target.display_name()
                ),
            )
        }
    };
    state.dialog = Some(dialog);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{SensorParameter, Status};
    use tempfile::TempDir;

    fn state_with(inputs: ReadingInputs) -> AdvisorState {
        AdvisorState {
            inputs,
            ..Default::default()
        }
    }

    fn target_in(dir: &TempDir) -> ExportTarget {
        ExportTarget::new(dir.path().join("out.docx"), dir.path().join("logo.png"))
    }

    #[test]
    fn analyze_fills_results_in_form_order() {
        let mut state = state_with(ReadingInputs::new("15", "65", "92", "7.0"));
        handle_analyze(&mut state);

        assert!(state.dialog.is_none());
        let statuses: Vec<_> = state.results.iter().map(|r| r.status).collect();
        assert_eq!(statuses, vec![Status::Low, Status::Ok, Status::High, Status::Ok]);
        assert_eq!(state.results[3].parameter, SensorParameter::Ph);
    }

    #[test]
    fn invalid_input_keeps_previous_results() {
        let mut state = state_with(ReadingInputs::new("25", "70", "80", "6"));
        handle_analyze(&mut state);
        let before = state.results.clone();
        assert_eq!(before.len(), 4);

        *state.inputs.get_mut(SensorParameter::Humidity) = "humid".to_string();
        handle_analyze(&mut state);

        assert_eq!(state.results, before);
        let dialog = state.dialog.as_ref().unwrap();
        assert_eq!(dialog.kind, DialogKind::Error);
        assert_eq!(dialog.title, UI_TEXT.input_error_title);
        assert!(state.is_blocked());

        state.dismiss_dialog();
        assert!(!state.is_blocked());
    }

    #[test]
    fn export_without_results_warns_and_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let target = target_in(&dir);
        let mut state = AdvisorState::default();

        handle_export(&mut state, &target);

        let dialog = state.dialog.unwrap();
        assert_eq!(dialog.kind, DialogKind::Warning);
        assert_eq!(dialog.message, UI_TEXT.export_nothing_message);
        assert!(!target.output.exists());
    }

    #[test]
    fn export_after_analyze_reports_success() {
        let dir = TempDir::new().unwrap();
        let target = target_in(&dir);
        let mut state = state_with(ReadingInputs::new("40", "50", "75", "5"));

        handle_analyze(&mut state);
        handle_export(&mut state, &target);

        let dialog = state.dialog.unwrap();
        assert_eq!(dialog.kind, DialogKind::Info);
        assert!(dialog.message.contains("'out.docx'"));
        assert!(target.output.exists());
    }

    #[test]
    fn export_write_failure_is_a_warning() {
        let dir = TempDir::new().unwrap();
        let target = ExportTarget::new(
            dir.path().join("no_such_dir").join("out.docx"),
            dir.path().join("logo.png"),
        );
        let mut state = state_with(ReadingInputs::new("25", "70", "80", "6"));

        handle_analyze(&mut state);
        handle_export(&mut state, &target);

        let dialog = state.dialog.unwrap();
        assert_eq!(dialog.kind, DialogKind::Warning);
        assert_eq!(dialog.title, UI_TEXT.export_failed_title);
    }
}
