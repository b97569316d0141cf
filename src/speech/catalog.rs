//! Voice catalog lookups
//!
//! Voices are identified by a fragment of their name rather than an exact id,
//! because engines decorate names with variant suffixes
//! (`es-es-x-ana-local`, `es-es-x-ana-network`).

use crate::speech::engine::{Locale, PlatformVoice, SpeechEngine};
use tracing::{debug, warn};

/// First voice, in catalog order, whose name contains `fragment`
///
/// An empty fragment names no voice and always returns `None`.
pub fn find_voice<'a>(voices: &'a [PlatformVoice], fragment: &str) -> Option<&'a PlatformVoice> {
    if fragment.is_empty() {
        return None;
    }

    voices.iter().find(|voice| voice.name.contains(fragment))
}

/// Best voice to stand in for `locale`
///
/// Prefers an exact language/region match, then any voice with the same
/// primary language.
pub fn voice_for_locale<'a>(
    voices: &'a [PlatformVoice],
    locale: &Locale,
) -> Option<&'a PlatformVoice> {
    voices
        .iter()
        .find(|voice| locale.matches_tag(&voice.language))
        .or_else(|| voices.iter().find(|voice| locale.shares_language(&voice.language)))
}

/// Snapshot of the voices installed in an engine
#[derive(Debug, Clone, Default)]
pub struct VoiceCatalog {
    voices: Vec<PlatformVoice>,
}

impl VoiceCatalog {
    /// Query the engine for its installed voices
    ///
    /// A failed query yields an empty catalog; lookups then miss and speech
    /// continues with whatever voice is active.
    pub fn load(engine: &dyn SpeechEngine) -> Self {
        match engine.voices() {
            Ok(voices) => {
                debug!("{} voices available from {}", voices.len(), engine.name());
                for voice in &voices {
                    debug!("Available voice: {} ({})", voice.name, voice.language);
                }
                Self { voices }
            }
            Err(e) => {
                warn!("Could not list voices from {}: {}", engine.name(), e);
                Self::default()
            }
        }
    }

    pub fn from_voices(voices: Vec<PlatformVoice>) -> Self {
        Self { voices }
    }

    /// Look up a voice by name fragment
    pub fn find(&self, fragment: &str) -> Option<&PlatformVoice> {
        find_voice(&self.voices, fragment)
    }

    pub fn voices(&self) -> &[PlatformVoice] {
        &self.voices
    }

    pub fn len(&self) -> usize {
        self.voices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.voices.is_empty()
    }
}
