//! Operating system speech engine via the `tts` crate
//!
//! Speech Dispatcher on Linux, WinRT/SAPI on Windows, AVFoundation on macOS
//! and iOS, `android.speech.tts` on Android.

use crate::speech::catalog::voice_for_locale;
use crate::speech::engine::{Locale, PlatformVoice, QueueMode, SpeechEngine};
use crate::{MegaphoneError, Result};
use tracing::{debug, info, warn};
use tts::Tts;

/// Speech engine backed by the platform's default `tts` backend
pub struct SystemEngine {
    tts: Tts,
}

impl SystemEngine {
    /// Connect to the platform's default speech backend
    pub fn new() -> Result<Self> {
        let tts = Tts::default()
            .map_err(|e| MegaphoneError::EngineUnavailable(e.to_string()))?;

        let features = tts.supported_features();
        info!(
            "System speech engine ready (voices: {}, stop: {})",
            features.voice, features.stop
        );

        Ok(Self { tts })
    }

    fn can_switch_voices(&self) -> bool {
        self.tts.supported_features().voice
    }
}

impl SpeechEngine for SystemEngine {
    fn name(&self) -> &str {
        "system"
    }

    /// The `tts` backends expose no locale switch, so the locale is applied
    /// by activating the best installed voice for it.
    fn set_locale(&mut self, locale: &Locale) -> Result<()> {
        if !self.can_switch_voices() {
            debug!("Backend cannot switch voices; ignoring locale {}", locale);
            return Ok(());
        }

        let voices = self.voices()?;
        match voice_for_locale(&voices, locale) {
            Some(voice) => {
                debug!("Locale {} -> voice {}", locale, voice.name);
                self.set_voice(voice)
            }
            None => {
                warn!("No installed voice for locale {}", locale);
                Ok(())
            }
        }
    }

    fn voices(&self) -> Result<Vec<PlatformVoice>> {
        if !self.can_switch_voices() {
            return Ok(Vec::new());
        }

        let voices = self
            .tts
            .voices()?
            .into_iter()
            .map(|voice| PlatformVoice::new(voice.id(), voice.name(), voice.language().to_string()))
            .collect();
        Ok(voices)
    }

    fn set_voice(&mut self, voice: &PlatformVoice) -> Result<()> {
        let native = self
            .tts
            .voices()?
            .into_iter()
            .find(|v| v.id() == voice.id)
            .ok_or_else(|| {
                MegaphoneError::EngineError(format!("Voice no longer installed: {}", voice.name))
            })?;

        self.tts.set_voice(&native)?;
        Ok(())
    }

    fn speak(&mut self, text: &str, mode: QueueMode) -> Result<()> {
        let interrupt = mode == QueueMode::Flush;
        let utterance = self.tts.speak(text, interrupt)?;
        debug!("Utterance accepted: {:?}", utterance);
        Ok(())
    }

    fn stop(&mut self) -> Result<()> {
        if self.tts.supported_features().stop {
            self.tts.stop()?;
        }
        Ok(())
    }
}
