use eframe::egui::{FontId, Key, TextEdit, Ui};
use strum::IntoEnumIterator;

use crate::domain::{ReadingInputs, SensorParameter};
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::styles::UiStyleExt;

/// Trait for UI panels that can be rendered
pub trait Panel {
    type Event;
    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    Analyze,
    Export,
    Exit,
}

/// The four reading fields, edited in place.
pub struct InputPanel<'a> {
    inputs: &'a mut ReadingInputs,
}

impl<'a> InputPanel<'a> {
    pub fn new(inputs: &'a mut ReadingInputs) -> Self {
        Self { inputs }
    }
}

impl<'a> Panel for InputPanel<'a> {
    type Event = FormAction;

    /// Pressing Enter in any field counts as Analyze.
    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        let mut events = Vec::new();

        for param in SensorParameter::iter() {
            ui.label_field(param.input_label());
            let response = ui.add(
                TextEdit::singleline(self.inputs.get_mut(param))
                    .font(FontId::proportional(UI_CONFIG.input_size))
                    .desired_width(UI_CONFIG.input_width),
            );
            if response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter)) {
                events.push(FormAction::Analyze);
            }
            ui.add_space(5.0);
        }

        events
    }
}

pub struct ActionBar;

impl Panel for ActionBar {
    type Event = FormAction;

    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        let mut events = Vec::new();
        let colors = &UI_CONFIG.colors;

        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 20.0;
            if ui
                .action_button(UI_TEXT.analyze_button, colors.analyze_button)
                .clicked()
            {
                events.push(FormAction::Analyze);
            }
            if ui
                .action_button(UI_TEXT.export_button, colors.export_button)
                .clicked()
            {
                events.push(FormAction::Export);
            }
            if ui
                .action_button(UI_TEXT.exit_button, colors.exit_button)
                .clicked()
            {
                events.push(FormAction::Exit);
            }
        });

        events
    }
}
