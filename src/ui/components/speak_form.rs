//! The speak form
//!
//! Title card, text input, language and voice dropdowns, and the speak
//! button.

use crate::selection::{LANGUAGE_LABELS, VOICE_LABELS};
use crate::ui::components::Dropdown;
use crate::ui::state::AppState;
use crate::ui::theme::Theme;
use egui::{self, RichText, Vec2};

/// Accessibility label of the text input
pub const TEXT_INPUT_LABEL: &str = "Text to speak";

/// Caption and accessibility label of the submit button
pub const SPEAK_BUTTON_LABEL: &str = "Speak";

/// Accessibility label of the language dropdown
pub const LANGUAGE_DROPDOWN_LABEL: &str = "Language";

/// Accessibility label of the voice dropdown
pub const VOICE_DROPDOWN_LABEL: &str = "Voice";

pub struct SpeakForm<'a> {
    state: &'a mut AppState,
    theme: &'a Theme,
}

impl<'a> SpeakForm<'a> {
    pub fn new(state: &'a mut AppState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }

    pub fn show(mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            self.show_title(ui);
            ui.add_space(self.theme.spacing_lg);

            self.show_text_input(ui);
            ui.add_space(self.theme.spacing);

            self.show_selectors(ui);
            ui.add_space(self.theme.spacing_sm);

            self.show_speak_button(ui);
        });
    }

    fn show_title(&self, ui: &mut egui::Ui) {
        egui::Frame::none()
            .fill(self.theme.bg_card)
            .stroke(egui::Stroke::new(2.0, self.theme.primary))
            .rounding(self.theme.card_rounding)
            .inner_margin(egui::Margin::symmetric(self.theme.spacing, self.theme.spacing_sm))
            .show(ui, |ui| {
                ui.label(
                    RichText::new("Megaphone")
                        .size(24.0)
                        .strong()
                        .color(self.theme.primary),
                );
            });
    }

    fn show_text_input(&mut self, ui: &mut egui::Ui) {
        let text_edit = egui::TextEdit::singleline(&mut self.state.form.state_mut().text)
            .hint_text(RichText::new("Enter the text to say").color(self.theme.text_muted))
            .desired_width(ui.available_width())
            .text_color(self.theme.text_primary)
            .margin(egui::Margin::symmetric(12.0, 8.0));

        let response = ui.add(text_edit);
        response.widget_info(|| {
            egui::WidgetInfo::labeled(egui::WidgetType::TextEdit, true, TEXT_INPUT_LABEL)
        });
    }

    fn show_selectors(&mut self, ui: &mut egui::Ui) {
        let theme = self.theme;

        ui.columns(2, |columns| {
            Self::caption(&mut columns[0], "Select a language:", theme);
            let language = self.state.form.state().language.label();
            if let Some(label) =
                Dropdown::new(LANGUAGE_DROPDOWN_LABEL, &LANGUAGE_LABELS, language, theme)
                    .show(&mut columns[0])
            {
                self.state.form.select_language(label);
            }

            Self::caption(&mut columns[1], "Select a voice:", theme);
            let voice = self.state.form.state().voice.label();
            if let Some(label) =
                Dropdown::new(VOICE_DROPDOWN_LABEL, &VOICE_LABELS, voice, theme)
                    .show(&mut columns[1])
            {
                self.state.form.select_voice(label);
            }
        });
    }

    fn caption(ui: &mut egui::Ui, text: &str, theme: &Theme) {
        egui::Frame::none()
            .fill(theme.bg_card)
            .stroke(egui::Stroke::new(2.0, egui::Color32::LIGHT_GRAY))
            .rounding(theme.button_rounding)
            .inner_margin(egui::Margin::symmetric(theme.spacing, theme.spacing_sm))
            .show(ui, |ui| {
                ui.label(RichText::new(text).color(theme.text_primary));
            });
    }

    fn show_speak_button(&mut self, ui: &mut egui::Ui) {
        let button = egui::Button::new(
            RichText::new(SPEAK_BUTTON_LABEL).color(self.theme.text_on_accent),
        )
        .min_size(Vec2::new(ui.available_width(), 40.0))
        .rounding(self.theme.button_rounding)
        .fill(self.theme.action);

        if ui.add(button).clicked() {
            self.state.submit();
        }
    }
}
