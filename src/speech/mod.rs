//! Speech output through the platform engine
//!
//! This module provides:
//! - The [`SpeechEngine`] seam and its value types
//! - Voice catalog lookups
//! - The lifecycle-scoped [`SpeechSession`] owning the engine handle

pub mod catalog;
pub mod engine;
pub mod recording;
pub mod session;
#[cfg(feature = "system-tts")]
pub mod system;

// Re-export commonly used types
pub use catalog::{find_voice, voice_for_locale, VoiceCatalog};
pub use engine::{Locale, PlatformVoice, QueueMode, SpeechEngine};
pub use recording::{EngineCall, EngineLog, RecordingEngine};
pub use session::{SessionState, SpeechSession};
#[cfg(feature = "system-tts")]
pub use system::SystemEngine;

use crate::Result;

/// Build the engine this binary was compiled for
///
/// With the `system-tts` feature this connects to the operating system's
/// speech engine. Without it, speech is written to the log.
pub fn default_engine() -> Result<Box<dyn SpeechEngine>> {
    #[cfg(feature = "system-tts")]
    {
        Ok(Box::new(SystemEngine::new()?))
    }

    #[cfg(not(feature = "system-tts"))]
    {
        tracing::warn!("Built without system-tts; speech will be logged, not played");
        let (engine, _log) = RecordingEngine::new(Vec::new());
        Ok(Box::new(engine))
    }
}
