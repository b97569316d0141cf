//! Single-select dropdown over a fixed label list

use crate::ui::theme::Theme;
use egui::{self, RichText};

/// Shown while nothing is selected
const PLACEHOLDER: &str = "Select";

/// Dropdown that renders a fixed label list and reports the label picked
pub struct Dropdown<'a> {
    /// Id salt and accessibility label
    label: &'a str,
    items: &'a [&'static str],
    selected: Option<&'a str>,
    theme: &'a Theme,
}

impl<'a> Dropdown<'a> {
    pub fn new(
        label: &'a str,
        items: &'a [&'static str],
        selected: Option<&'a str>,
        theme: &'a Theme,
    ) -> Self {
        Self {
            label,
            items,
            selected,
            theme,
        }
    }

    /// Show the dropdown; returns the label chosen this frame, if any
    pub fn show(self, ui: &mut egui::Ui) -> Option<&'static str> {
        let mut chosen = None;

        let selected_text = RichText::new(self.selected.unwrap_or(PLACEHOLDER))
            .color(self.theme.text_on_accent);

        let response = egui::ComboBox::from_id_salt(self.label)
            .selected_text(selected_text)
            .width(ui.available_width())
            .show_ui(ui, |ui| {
                for &item in self.items {
                    let is_selected = self.selected == Some(item);
                    if ui.selectable_label(is_selected, item).clicked() {
                        chosen = Some(item);
                    }
                }
            })
            .response;

        let label = self.label;
        response.widget_info(|| {
            egui::WidgetInfo::labeled(egui::WidgetType::ComboBox, true, label)
        });

        chosen
    }
}
