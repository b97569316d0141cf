//! UI components and application module
//!
//! This module provides the egui/eframe-based user interface for Megaphone.

mod app;
pub mod components;
mod state;
mod theme;

pub use app::MegaphoneApp;
pub use components::{Dropdown, NotificationArea, SpeakForm};
pub use state::{AppState, Notification};
pub use theme::Theme;
