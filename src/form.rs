//! Form state and the submit sequence
//!
//! A submit validates the form, resolves the selection, configures the
//! engine and speaks. Validation failures come back as [`ValidationError`]
//! for the UI to show; everything after validation degrades silently.

use crate::selection::{map_selection, LanguageChoice, VoiceChoice, VoiceRequest};
use crate::speech::catalog::VoiceCatalog;
use crate::speech::engine::{QueueMode, SpeechEngine};
use crate::speech::session::SpeechSession;
use thiserror::Error;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Everything the user has entered
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub text: String,
    pub language: LanguageChoice,
    pub voice: VoiceChoice,
}

/// Why a submit was refused
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("no text entered")]
    NoText,

    #[error("language and voice required")]
    SelectionRequired,
}

/// What a speak request did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UtteranceReport {
    pub utterance_id: Uuid,
    pub request: VoiceRequest,
    /// Name of the voice that was activated, if the lookup hit
    pub voice_matched: Option<String>,
}

/// Result of one submit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The form was invalid; nothing reached the engine
    Rejected(ValidationError),
    /// The form was valid but no engine was ready
    Dropped,
    /// The engine accepted the utterance
    Spoken(UtteranceReport),
}

impl FormState {
    /// Check the form in submit order: text first, then both choices
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.text.trim().is_empty() {
            return Err(ValidationError::NoText);
        }

        if !self.language.is_set() || !self.voice.is_set() {
            return Err(ValidationError::SelectionRequired);
        }

        Ok(())
    }
}

/// Owner of the form state; runs the submit sequence
#[derive(Debug, Default)]
pub struct FormController {
    state: FormState,
}

impl FormController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state(state: FormState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut FormState {
        &mut self.state
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.state.text = text.into();
    }

    /// Apply a label reported by the language dropdown
    pub fn select_language(&mut self, label: &str) {
        self.state.language = LanguageChoice::from_label(label);
    }

    /// Apply a label reported by the voice dropdown
    pub fn select_voice(&mut self, label: &str) {
        self.state.voice = VoiceChoice::from_label(label);
    }

    /// Validate the form and, if an engine is ready, speak the text
    pub fn submit(&self, session: &mut SpeechSession) -> SubmitOutcome {
        if let Err(e) = self.state.validate() {
            debug!("Submit rejected: {}", e);
            return SubmitOutcome::Rejected(e);
        }

        let Some(engine) = session.engine_mut() else {
            debug!("Submit dropped: speech session is {:?}", session.state());
            return SubmitOutcome::Dropped;
        };

        let request = map_selection(self.state.language, self.state.voice);
        SubmitOutcome::Spoken(speak_request(engine, &self.state.text, request))
    }
}

/// Configure the engine for `request` and speak `text`, replacing any
/// utterance in progress
///
/// Locale and voice failures are logged and skipped; the text is spoken with
/// whatever configuration the engine is left in.
pub fn speak_request(
    engine: &mut dyn SpeechEngine,
    text: &str,
    request: VoiceRequest,
) -> UtteranceReport {
    let utterance_id = Uuid::new_v4();

    if let Err(e) = engine.set_locale(&request.locale) {
        warn!("Could not apply locale {}: {}", request.locale, e);
    }

    let catalog = VoiceCatalog::load(engine);
    let voice_matched = match catalog.find(&request.voice_fragment) {
        Some(voice) => match engine.set_voice(voice) {
            Ok(()) => Some(voice.name.clone()),
            Err(e) => {
                warn!("Could not activate voice {}: {}", voice.name, e);
                None
            }
        },
        None => {
            debug!(
                "No voice matches '{}'; keeping the active voice",
                request.voice_fragment
            );
            None
        }
    };

    info!(
        "Utterance {} ({}, voice {:?}): {} chars",
        utterance_id,
        request.locale,
        voice_matched,
        text.chars().count()
    );

    if let Err(e) = engine.speak(text, QueueMode::Flush) {
        warn!("Speech engine rejected utterance {}: {}", utterance_id, e);
    }

    UtteranceReport {
        utterance_id,
        request,
        voice_matched,
    }
}
