//! Platform speech engine seam
//!
//! Everything the application asks of the operating system's speech engine
//! goes through [`SpeechEngine`]. The engine owns synthesis, the voice catalog
//! and audio output; this crate only configures it and hands it text.

use crate::Result;
use std::fmt;

/// How a new utterance interacts with speech already playing or queued
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueMode {
    /// Discard anything playing or queued and speak immediately
    Flush,
    /// Speak after everything already queued
    Add,
}

/// A (language, region) pair controlling pronunciation defaults
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Locale {
    /// Lowercase ISO 639 language code, e.g. `es`
    pub language: String,
    /// Uppercase ISO 3166 region code, e.g. `ES`. May be empty.
    pub region: String,
}

/// Used when the process locale cannot be determined
const FALLBACK_LOCALE: (&str, &str) = ("en", "US");

impl Locale {
    pub fn new(language: impl Into<String>, region: impl Into<String>) -> Self {
        Self {
            language: language.into().to_ascii_lowercase(),
            region: region.into().to_ascii_uppercase(),
        }
    }

    /// The locale of the running process
    ///
    /// Reads `LC_ALL`, `LC_MESSAGES` and `LANG` in that order and takes the
    /// first one that parses; falls back to `en-US`.
    pub fn platform_default() -> Self {
        ["LC_ALL", "LC_MESSAGES", "LANG"]
            .iter()
            .filter_map(|var| std::env::var(var).ok())
            .find_map(|value| Self::from_posix(&value))
            .unwrap_or_else(|| Self::new(FALLBACK_LOCALE.0, FALLBACK_LOCALE.1))
    }

    /// Parse a POSIX locale string such as `es_ES.UTF-8@euro`
    ///
    /// BCP 47 style tags (`en-US`) are accepted too. `C` and `POSIX` carry no
    /// language and yield `None`.
    pub fn from_posix(value: &str) -> Option<Self> {
        let base = value
            .split(['.', '@'])
            .next()
            .unwrap_or_default()
            .trim();

        if base.is_empty() || base == "C" || base == "POSIX" {
            return None;
        }

        let mut parts = base.split(['_', '-']);
        let language = parts.next()?;
        if !(2..=3).contains(&language.len()) || !language.chars().all(|c| c.is_ascii_alphabetic())
        {
            return None;
        }

        let region = parts
            .next()
            .filter(|r| !r.is_empty() && r.chars().all(|c| c.is_ascii_alphanumeric()))
            .unwrap_or_default();

        Some(Self::new(language, region))
    }

    /// BCP 47 style tag, e.g. `es-ES`
    pub fn tag(&self) -> String {
        if self.region.is_empty() {
            self.language.clone()
        } else {
            format!("{}-{}", self.language, self.region)
        }
    }

    /// Whether a voice language tag names exactly this locale
    ///
    /// Comparison ignores case and treats `_` like `-`.
    pub fn matches_tag(&self, tag: &str) -> bool {
        normalize_tag(tag) == normalize_tag(&self.tag())
    }

    /// Whether a voice language tag shares this locale's primary language
    pub fn shares_language(&self, tag: &str) -> bool {
        normalize_tag(tag)
            .split('-')
            .next()
            .is_some_and(|primary| primary == self.language)
    }
}

fn normalize_tag(tag: &str) -> String {
    tag.trim().replace('_', "-").to_ascii_lowercase()
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tag())
    }
}

/// Snapshot of one voice installed in the platform engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformVoice {
    /// Engine-specific identifier used to select the voice again
    pub id: String,
    /// Human-readable name; voice lookups match against this
    pub name: String,
    /// Language tag reported by the engine, e.g. `es-ES`
    pub language: String,
}

impl PlatformVoice {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        language: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            language: language.into(),
        }
    }
}

/// Operations consumed from the platform speech engine
///
/// Locale and voice configuration is process-wide state of the engine handle;
/// the last call wins.
pub trait SpeechEngine: Send {
    /// Short backend name for logs
    fn name(&self) -> &str;

    /// Make `locale` the active pronunciation locale
    fn set_locale(&mut self, locale: &Locale) -> Result<()>;

    /// Installed voices, in the engine's catalog order
    fn voices(&self) -> Result<Vec<PlatformVoice>>;

    /// Make `voice` the active voice
    fn set_voice(&mut self, voice: &PlatformVoice) -> Result<()>;

    /// Queue or play `text`; returns once the engine has accepted it
    fn speak(&mut self, text: &str, mode: QueueMode) -> Result<()>;

    /// Interrupt the current utterance and drop anything queued
    fn stop(&mut self) -> Result<()>;
}
