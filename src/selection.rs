//! Language and voice selection
//!
//! Maps the two dropdown choices onto a locale and a voice name fragment.

use crate::speech::engine::Locale;

/// Language dropdown labels, in display order
pub const LANGUAGE_LABELS: [&str; 2] = ["Spanish", "English"];

/// Voice dropdown labels, in display order
pub const VOICE_LABELS: [&str; 2] = ["ES", "EN"];

/// Name fragment of the Spanish (Spain) voice
pub const SPANISH_VOICE_FRAGMENT: &str = "es-es-x-ana";

/// Name fragment of the English (US) voice
pub const ENGLISH_VOICE_FRAGMENT: &str = "en-us-x-iol";

/// Choice made in the language dropdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LanguageChoice {
    Spanish,
    English,
    #[default]
    Unset,
}

impl LanguageChoice {
    /// Map a dropdown label; unknown labels leave the choice unset
    pub fn from_label(label: &str) -> Self {
        match label {
            "Spanish" => Self::Spanish,
            "English" => Self::English,
            _ => Self::Unset,
        }
    }

    pub fn label(self) -> Option<&'static str> {
        match self {
            Self::Spanish => Some("Spanish"),
            Self::English => Some("English"),
            Self::Unset => None,
        }
    }

    pub fn is_set(self) -> bool {
        self != Self::Unset
    }
}

/// Choice made in the voice dropdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VoiceChoice {
    ES,
    EN,
    #[default]
    Unset,
}

impl VoiceChoice {
    /// Map a dropdown label; unknown labels leave the choice unset
    pub fn from_label(label: &str) -> Self {
        match label {
            "ES" => Self::ES,
            "EN" => Self::EN,
            _ => Self::Unset,
        }
    }

    pub fn label(self) -> Option<&'static str> {
        match self {
            Self::ES => Some("ES"),
            Self::EN => Some("EN"),
            Self::Unset => None,
        }
    }

    pub fn is_set(self) -> bool {
        self != Self::Unset
    }
}

/// Locale and voice to apply before speaking
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoiceRequest {
    pub locale: Locale,
    /// Substring of the wanted voice's name; empty matches no voice
    pub voice_fragment: String,
}

/// Resolve the dropdown choices to a [`VoiceRequest`]
///
/// Only the voice choice decides the outcome; the language choice is
/// accepted but every language maps a given voice the same way. An unset
/// voice falls back to the platform locale with no voice override.
pub fn map_selection(_language: LanguageChoice, voice: VoiceChoice) -> VoiceRequest {
    match voice {
        VoiceChoice::ES => VoiceRequest {
            locale: Locale::new("es", "ES"),
            voice_fragment: SPANISH_VOICE_FRAGMENT.to_string(),
        },
        VoiceChoice::EN => VoiceRequest {
            locale: Locale::new("en", "US"),
            voice_fragment: ENGLISH_VOICE_FRAGMENT.to_string(),
        },
        VoiceChoice::Unset => VoiceRequest {
            locale: Locale::platform_default(),
            voice_fragment: String::new(),
        },
    }
}
