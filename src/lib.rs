pub mod config;
pub mod form;
pub mod selection;
pub mod speech;
pub mod ui;

use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum MegaphoneError {
    #[error("Speech engine error: {0}")]
    EngineError(String),

    #[error("Speech engine unavailable: {0}")]
    EngineUnavailable(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IOError(String),
}

impl From<std::io::Error> for MegaphoneError {
    fn from(e: std::io::Error) -> Self {
        MegaphoneError::IOError(e.to_string())
    }
}

#[cfg(feature = "system-tts")]
impl From<tts::Error> for MegaphoneError {
    fn from(e: tts::Error) -> Self {
        MegaphoneError::EngineError(e.to_string())
    }
}

impl MegaphoneError {
    /// Get a user-friendly description
    pub fn user_message(&self) -> String {
        match self {
            MegaphoneError::EngineError(_) => {
                "The speech engine rejected the request. Please try again.".to_string()
            }
            MegaphoneError::EngineUnavailable(_) => {
                "No speech engine is available on this system.".to_string()
            }
            MegaphoneError::ConfigError(_) => {
                "Configuration error. Please check settings.".to_string()
            }
            MegaphoneError::IOError(_) => "File system error occurred.".to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, MegaphoneError>;
