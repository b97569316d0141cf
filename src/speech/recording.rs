//! In-memory speech engine
//!
//! Records every call instead of producing audio. Backs headless builds
//! (no `system-tts` feature) and the test suites, which inspect the call log
//! through an [`EngineLog`] handle after the engine has moved into a session.

use crate::speech::engine::{Locale, PlatformVoice, QueueMode, SpeechEngine};
use crate::{MegaphoneError, Result};
use parking_lot::Mutex;
use std::sync::Arc;
use tracing::info;

/// One call received by a [`RecordingEngine`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineCall {
    SetLocale(Locale),
    ListVoices,
    /// Voice name
    SetVoice(String),
    Speak { text: String, mode: QueueMode },
    Stop,
    /// The engine handle was dropped
    Release,
}

#[derive(Debug, Default)]
struct Shared {
    calls: Vec<EngineCall>,
    fail_voice_listing: bool,
    fail_locale: bool,
}

/// Speech engine that logs instead of speaking
pub struct RecordingEngine {
    voices: Vec<PlatformVoice>,
    shared: Arc<Mutex<Shared>>,
}

impl RecordingEngine {
    /// Create an engine advertising `voices`, plus a handle to its call log
    pub fn new(voices: Vec<PlatformVoice>) -> (Self, EngineLog) {
        let shared = Arc::new(Mutex::new(Shared::default()));
        let log = EngineLog {
            shared: Arc::clone(&shared),
        };
        (Self { voices, shared }, log)
    }

    /// Make subsequent `voices()` calls fail
    pub fn fail_voice_listing(&self) {
        self.shared.lock().fail_voice_listing = true;
    }

    fn record(&self, call: EngineCall) {
        self.shared.lock().calls.push(call);
    }
}

impl SpeechEngine for RecordingEngine {
    fn name(&self) -> &str {
        "recording"
    }

    fn set_locale(&mut self, locale: &Locale) -> Result<()> {
        self.record(EngineCall::SetLocale(locale.clone()));
        if self.shared.lock().fail_locale {
            return Err(MegaphoneError::EngineError(format!(
                "locale {} not supported",
                locale
            )));
        }
        Ok(())
    }

    fn voices(&self) -> Result<Vec<PlatformVoice>> {
        self.record(EngineCall::ListVoices);
        if self.shared.lock().fail_voice_listing {
            return Err(MegaphoneError::EngineError("voice listing failed".into()));
        }
        Ok(self.voices.clone())
    }

    fn set_voice(&mut self, voice: &PlatformVoice) -> Result<()> {
        self.record(EngineCall::SetVoice(voice.name.clone()));
        Ok(())
    }

    fn speak(&mut self, text: &str, mode: QueueMode) -> Result<()> {
        info!("Speaking ({:?}): {}", mode, text);
        self.record(EngineCall::Speak {
            text: text.to_string(),
            mode,
        });
        Ok(())
    }

    fn stop(&mut self) -> Result<()> {
        self.record(EngineCall::Stop);
        Ok(())
    }
}

impl Drop for RecordingEngine {
    fn drop(&mut self) {
        self.record(EngineCall::Release);
    }
}

/// Read handle on a [`RecordingEngine`]'s call log
#[derive(Debug, Clone)]
pub struct EngineLog {
    shared: Arc<Mutex<Shared>>,
}

impl EngineLog {
    /// All calls so far, oldest first
    pub fn calls(&self) -> Vec<EngineCall> {
        self.shared.lock().calls.clone()
    }

    /// Text and queue mode of every speak call
    pub fn utterances(&self) -> Vec<(String, QueueMode)> {
        self.shared
            .lock()
            .calls
            .iter()
            .filter_map(|call| match call {
                EngineCall::Speak { text, mode } => Some((text.clone(), *mode)),
                _ => None,
            })
            .collect()
    }

    /// Locales applied so far
    pub fn locales(&self) -> Vec<Locale> {
        self.shared
            .lock()
            .calls
            .iter()
            .filter_map(|call| match call {
                EngineCall::SetLocale(locale) => Some(locale.clone()),
                _ => None,
            })
            .collect()
    }

    /// Number of calls equal to `call`
    pub fn count(&self, call: &EngineCall) -> usize {
        self.shared.lock().calls.iter().filter(|c| *c == call).count()
    }

    pub fn is_empty(&self) -> bool {
        self.shared.lock().calls.is_empty()
    }

    /// Make subsequent `set_locale()` calls fail
    pub fn fail_locale(&self) {
        self.shared.lock().fail_locale = true;
    }

    pub fn fail_voice_listing(&self) {
        self.shared.lock().fail_voice_listing = true;
    }
}
