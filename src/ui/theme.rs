//! Theme and styling for the Megaphone UI

use egui::{Color32, FontFamily, FontId, Rounding, Stroke, Vec2, Visuals};

/// Application theme configuration
#[derive(Clone, Debug)]
pub struct Theme {
    /// Accent color for the title card, dropdown buttons and focus rings
    pub primary: Color32,
    /// Fill of the speak button
    pub action: Color32,
    /// Notice background
    pub warning: Color32,

    /// Background colors
    pub bg_primary: Color32,
    pub bg_card: Color32,

    /// Text colors
    pub text_primary: Color32,
    pub text_on_accent: Color32,
    pub text_muted: Color32,

    /// Border radius for buttons
    pub button_rounding: Rounding,
    /// Border radius for cards/panels
    pub card_rounding: Rounding,

    /// Standard spacing
    pub spacing: f32,
    /// Large spacing
    pub spacing_lg: f32,
    /// Small spacing
    pub spacing_sm: f32,
}

impl Default for Theme {
    fn default() -> Self {
        Self::green()
    }
}

impl Theme {
    /// Light theme with a green accent
    pub fn green() -> Self {
        Self {
            primary: Color32::from_rgb(76, 175, 80), // Material green 500
            action: Color32::DARK_GRAY,
            warning: Color32::from_rgb(50, 50, 50),

            bg_primary: Color32::from_rgb(232, 245, 233), // Green 50
            bg_card: Color32::WHITE,

            text_primary: Color32::BLACK,
            text_on_accent: Color32::WHITE,
            text_muted: Color32::from_rgb(117, 117, 117),

            button_rounding: Rounding::same(5.0),
            card_rounding: Rounding::same(12.0),

            spacing: 16.0,
            spacing_lg: 30.0,
            spacing_sm: 7.0,
        }
    }

    /// Apply this theme to egui
    pub fn apply(&self, ctx: &egui::Context) {
        let mut visuals = Visuals::light();

        visuals.panel_fill = self.bg_primary;
        visuals.window_fill = self.bg_card;
        visuals.extreme_bg_color = self.bg_card;

        visuals.widgets.inactive.weak_bg_fill = self.primary;
        visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, self.text_on_accent);
        visuals.widgets.hovered.weak_bg_fill = self.primary.gamma_multiply(0.9);
        visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, self.text_on_accent);

        visuals.selection.bg_fill = self.primary.gamma_multiply(0.3);
        visuals.selection.stroke = Stroke::new(1.0, self.primary);
        visuals.text_cursor.stroke = Stroke::new(2.0, self.primary);

        visuals.window_rounding = self.card_rounding;

        ctx.set_visuals(visuals);

        let mut style = (*ctx.style()).clone();
        style.spacing.item_spacing = Vec2::splat(self.spacing_sm);
        style.spacing.button_padding = Vec2::new(self.spacing, self.spacing_sm);
        style.text_styles.insert(
            egui::TextStyle::Heading,
            FontId::new(24.0, FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Body,
            FontId::new(16.0, FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Button,
            FontId::new(16.0, FontFamily::Proportional),
        );

        ctx.set_style(style);
    }
}
