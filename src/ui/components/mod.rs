//! UI components module
//!
//! This module provides the widgets the Megaphone screen is built from.

pub mod dropdown;
pub mod notification;
pub mod speak_form;

pub use dropdown::Dropdown;
pub use notification::NotificationArea;
pub use speak_form::{
    SpeakForm, LANGUAGE_DROPDOWN_LABEL, SPEAK_BUTTON_LABEL, TEXT_INPUT_LABEL,
    VOICE_DROPDOWN_LABEL,
};
