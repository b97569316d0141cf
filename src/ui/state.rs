//! Application state management
//!
//! This module provides the central state for the Megaphone UI: the form, the
//! speech session and the transient notification.

use crate::config::MAX_NOTIFICATION_SECS;
use crate::form::{FormController, SubmitOutcome, UtteranceReport, ValidationError};
use crate::speech::session::{SessionState, SpeechSession};
use std::time::{Duration, Instant};
use tracing::debug;

/// A short-lived message shown over the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub expires_at: Instant,
}

impl Notification {
    pub fn new(message: impl Into<String>, duration: Duration) -> Self {
        let now = Instant::now();
        let duration = duration.min(Duration::from_secs_f32(MAX_NOTIFICATION_SECS));
        Self {
            message: message.into(),
            expires_at: now.checked_add(duration).unwrap_or(now),
        }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

/// Central application state
pub struct AppState {
    /// Text and dropdown choices
    pub form: FormController,

    /// Speech engine handle and its lifecycle
    pub session: SpeechSession,

    /// Notice currently on screen
    pub notification: Option<Notification>,

    /// How long notices stay on screen
    pub notification_duration: Duration,

    /// Most recent utterance handed to the engine
    pub last_utterance: Option<UtteranceReport>,
}

impl AppState {
    /// Create a new application state around a speech session
    pub fn new(session: SpeechSession, notification_duration: Duration) -> Self {
        Self {
            form: FormController::new(),
            session,
            notification: None,
            notification_duration,
            last_utterance: None,
        }
    }

    /// Advance the session and expire old notices; called once per frame
    pub fn tick(&mut self, now: Instant) {
        self.session.poll();

        if self
            .notification
            .as_ref()
            .is_some_and(|n| n.is_expired(now))
        {
            self.notification = None;
        }
    }

    /// Handle a press of the speak button
    pub fn submit(&mut self) -> SubmitOutcome {
        let outcome = self.form.submit(&mut self.session);

        match &outcome {
            SubmitOutcome::Rejected(e) => self.notify(*e),
            SubmitOutcome::Dropped => {}
            SubmitOutcome::Spoken(report) => {
                self.last_utterance = Some(report.clone());
            }
        }

        outcome
    }

    /// Show a validation notice, replacing any notice already shown
    pub fn notify(&mut self, error: ValidationError) {
        debug!("Notice: {}", error);
        self.notification = Some(Notification::new(
            error.to_string(),
            self.notification_duration,
        ));
    }

    /// Label for the engine status line
    pub fn engine_status(&self) -> String {
        match self.session.state() {
            SessionState::Uninitialized => "Speech engine starting…".to_string(),
            SessionState::Ready => "Speech engine ready".to_string(),
            SessionState::Released => match self.session.failure() {
                Some(e) => e.user_message(),
                None => "Speech engine unavailable".to_string(),
            },
        }
    }

    /// Stop speech and release the engine
    pub fn shutdown(&mut self) {
        self.session.release();
    }
}
