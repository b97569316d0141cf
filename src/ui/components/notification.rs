//! Transient notice shown after a rejected submit

use crate::ui::state::Notification;
use crate::ui::theme::Theme;
use egui::{self, RichText};

pub struct NotificationArea<'a> {
    notification: Option<&'a Notification>,
    theme: &'a Theme,
}

impl<'a> NotificationArea<'a> {
    pub fn new(notification: Option<&'a Notification>, theme: &'a Theme) -> Self {
        Self {
            notification,
            theme,
        }
    }

    pub fn show(self, ui: &mut egui::Ui) {
        let Some(notification) = self.notification else {
            return;
        };

        egui::Frame::none()
            .fill(self.theme.warning)
            .rounding(self.theme.card_rounding)
            .inner_margin(egui::Margin::symmetric(self.theme.spacing, self.theme.spacing_sm))
            .show(ui, |ui| {
                ui.label(
                    RichText::new(&notification.message)
                        .color(self.theme.text_on_accent)
                        .size(14.0),
                );
            });
    }
}
