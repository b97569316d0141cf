//! Main application struct and eframe integration
//!
//! This module contains the MegaphoneApp that implements eframe::App.

use crate::config::MegaphoneConfig;
use crate::speech::{self, SessionState, SpeechSession};
use crate::ui::components::{NotificationArea, SpeakForm};
use crate::ui::state::AppState;
use crate::ui::theme::Theme;
use crate::Result;
use egui::{self, CentralPanel, RichText, TopBottomPanel};
use std::time::{Duration, Instant};
use tracing::info;

/// Repaint cadence while waiting on the engine or a notice
const REPAINT_INTERVAL: Duration = Duration::from_millis(100);

/// Main Megaphone application
pub struct MegaphoneApp {
    /// Application state
    state: AppState,
    /// Visual theme
    theme: Theme,
}

impl MegaphoneApp {
    /// Create the app and start bringing up the platform speech engine
    pub fn new(cc: &eframe::CreationContext<'_>, config: &MegaphoneConfig) -> Result<Self> {
        let session = SpeechSession::start(speech::default_engine)?;
        Ok(Self::with_session(&cc.egui_ctx, session, config))
    }

    /// Create the app around an existing speech session
    pub fn with_session(
        ctx: &egui::Context,
        session: SpeechSession,
        config: &MegaphoneConfig,
    ) -> Self {
        let theme = Theme::green();
        theme.apply(ctx);

        Self {
            state: AppState::new(session, config.notification_duration()),
            theme,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut AppState {
        &mut self.state
    }

    /// Draw one frame
    pub fn show(&mut self, ctx: &egui::Context) {
        self.state.tick(Instant::now());

        self.show_status_bar(ctx);
        self.show_content(ctx);

        if self.state.session.state() == SessionState::Uninitialized
            || self.state.notification.is_some()
        {
            ctx.request_repaint_after(REPAINT_INTERVAL);
        }
    }

    /// Show the engine status along the bottom edge
    fn show_status_bar(&self, ctx: &egui::Context) {
        TopBottomPanel::bottom("status")
            .frame(egui::Frame::none().fill(self.theme.primary).inner_margin(6.0))
            .show(ctx, |ui| {
                ui.label(
                    RichText::new(self.state.engine_status())
                        .size(12.0)
                        .color(self.theme.text_on_accent),
                );
            });
    }

    /// Show the form and any notice
    fn show_content(&mut self, ctx: &egui::Context) {
        CentralPanel::default()
            .frame(
                egui::Frame::none()
                    .fill(self.theme.bg_primary)
                    .inner_margin(self.theme.spacing_lg),
            )
            .show(ctx, |ui| {
                SpeakForm::new(&mut self.state, &self.theme).show(ui);

                ui.add_space(self.theme.spacing);
                ui.vertical_centered(|ui| {
                    NotificationArea::new(self.state.notification.as_ref(), &self.theme).show(ui);
                });
            });
    }
}

impl eframe::App for MegaphoneApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.show(ctx);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        info!("Megaphone shutting down");
        self.state.shutdown();
    }
}
