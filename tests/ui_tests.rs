//! UI automation tests using egui_kittest and AccessKit
//!
//! These tests drive the speak form through the accessibility tree and check
//! what reaches the speech engine.

use egui_kittest::kittest::Queryable;
use egui_kittest::Harness;
use megaphone::form::SubmitOutcome;
use megaphone::speech::{EngineLog, PlatformVoice, QueueMode, RecordingEngine, SpeechSession};
use megaphone::selection::{LanguageChoice, VoiceChoice};
use megaphone::ui::components::{
    LANGUAGE_DROPDOWN_LABEL, SPEAK_BUTTON_LABEL, TEXT_INPUT_LABEL, VOICE_DROPDOWN_LABEL,
};
use megaphone::ui::{AppState, NotificationArea, SpeakForm, Theme};
use std::time::Duration;

/// Application state wrapper for testing
struct TestApp {
    state: AppState,
    theme: Theme,
}

impl TestApp {
    fn new() -> (Self, EngineLog) {
        let (engine, log) = RecordingEngine::new(vec![
            PlatformVoice::new("1", "es-es-x-ana-local", "es-ES"),
            PlatformVoice::new("2", "en-us-x-iol-local", "en-US"),
        ]);
        let session = SpeechSession::ready(Box::new(engine));
        let app = Self {
            state: AppState::new(session, Duration::from_secs(60)),
            theme: Theme::green(),
        };
        (app, log)
    }

    fn with_selection(mut self, language: &str, voice: &str) -> Self {
        self.state.form.select_language(language);
        self.state.form.select_voice(voice);
        self
    }
}

/// Render the speak screen for testing
fn render(app: &mut TestApp, ui: &mut egui::Ui) {
    SpeakForm::new(&mut app.state, &app.theme).show(ui);
    NotificationArea::new(app.state.notification.as_ref(), &app.theme).show(ui);
}

fn harness(app: TestApp) -> Harness<'static, TestApp> {
    Harness::builder()
        .with_size(egui::Vec2::new(420.0, 640.0))
        .build_state(
            |ctx, app: &mut TestApp| {
                egui::CentralPanel::default().show(ctx, |ui| {
                    render(app, ui);
                });
            },
            app,
        )
}

/// Test that the form controls exist and are accessible
#[test]
fn test_form_controls_exist() {
    let (app, _log) = TestApp::new();
    let mut harness = harness(app);

    harness.run();

    let _input = harness.get_by_label(TEXT_INPUT_LABEL);
    let _button = harness.get_by_label(SPEAK_BUTTON_LABEL);
    let _title = harness.get_by_label("Megaphone");
    let _language = harness.get_by_label("Select a language:");
    let _voice = harness.get_by_label("Select a voice:");
    let _language_dropdown = harness.get_by_label(LANGUAGE_DROPDOWN_LABEL);
    let _voice_dropdown = harness.get_by_label(VOICE_DROPDOWN_LABEL);
}

/// Test that typing text into the input updates the form
#[test]
fn test_type_text_into_input() {
    let (app, _log) = TestApp::new();
    let mut harness = harness(app);

    harness.run();

    harness.get_by_label(TEXT_INPUT_LABEL).focus();
    harness.run();

    harness.get_by_label(TEXT_INPUT_LABEL).type_text("Hello, world!");
    harness.run();

    assert_eq!(harness.state().state.form.state().text, "Hello, world!");
}

/// Test that speaking with no text shows the notice and stays silent
#[test]
fn test_speak_without_text_shows_notice() {
    let (app, log) = TestApp::new();
    let mut harness = harness(app.with_selection("English", "EN"));

    harness.run();

    harness.get_by_label(SPEAK_BUTTON_LABEL).click();
    harness.run();

    let _notice = harness.get_by_label("no text entered");
    assert!(log.utterances().is_empty());
}

/// Test that speaking without a selection shows the notice and stays silent
#[test]
fn test_speak_without_selection_shows_notice() {
    let (app, log) = TestApp::new();
    let mut harness = harness(app);

    harness.run();

    harness.get_by_label(TEXT_INPUT_LABEL).focus();
    harness.run();
    harness.get_by_label(TEXT_INPUT_LABEL).type_text("Hello");
    harness.run();

    harness.get_by_label(SPEAK_BUTTON_LABEL).click();
    harness.run();

    let _notice = harness.get_by_label("language and voice required");
    assert!(log.utterances().is_empty());
}

/// Test picking language and voice through the dropdowns, then speaking
#[test]
fn test_choose_from_dropdowns_and_speak() {
    let (app, log) = TestApp::new();
    let mut harness = harness(app);

    harness.run();

    harness.get_by_label(LANGUAGE_DROPDOWN_LABEL).click();
    harness.run();
    harness.get_by_label("English").click();
    harness.run();

    harness.get_by_label(VOICE_DROPDOWN_LABEL).click();
    harness.run();
    harness.get_by_label("EN").click();
    harness.run();

    let form = harness.state().state.form.state();
    assert_eq!(form.language, LanguageChoice::English);
    assert_eq!(form.voice, VoiceChoice::EN);

    harness.get_by_label(TEXT_INPUT_LABEL).focus();
    harness.run();
    harness.get_by_label(TEXT_INPUT_LABEL).type_text("Hello");
    harness.run();

    harness.get_by_label(SPEAK_BUTTON_LABEL).click();
    harness.run();

    assert_eq!(log.utterances(), vec![("Hello".to_string(), QueueMode::Flush)]);
    let report = harness.state().state.last_utterance.clone().unwrap();
    assert_eq!(report.voice_matched.as_deref(), Some("en-us-x-iol-local"));
}

/// Test the complete flow: type, pick a voice, speak
#[test]
fn test_complete_speak_flow() {
    let (app, log) = TestApp::new();
    let mut harness = harness(app.with_selection("Spanish", "ES"));

    harness.run();

    harness.get_by_label(TEXT_INPUT_LABEL).focus();
    harness.run();
    harness.get_by_label(TEXT_INPUT_LABEL).type_text("Hola");
    harness.run();

    harness.get_by_label(SPEAK_BUTTON_LABEL).click();
    harness.run();

    assert_eq!(log.utterances(), vec![("Hola".to_string(), QueueMode::Flush)]);
    assert!(harness.state().state.notification.is_none());

    let report = harness.state().state.last_utterance.clone().unwrap();
    assert_eq!(report.voice_matched.as_deref(), Some("es-es-x-ana-local"));
}

/// Test that a later utterance replaces the earlier one
#[test]
fn test_second_speak_flushes_first() {
    let (app, log) = TestApp::new();
    let mut harness = harness(app.with_selection("English", "EN"));

    harness.run();

    harness.state_mut().state.form.set_text("first");
    harness.get_by_label(SPEAK_BUTTON_LABEL).click();
    harness.run();

    harness.state_mut().state.form.set_text("second");
    harness.get_by_label(SPEAK_BUTTON_LABEL).click();
    harness.run();

    let utterances = log.utterances();
    assert_eq!(utterances.len(), 2);
    assert!(utterances.iter().all(|(_, mode)| *mode == QueueMode::Flush));
    assert_eq!(utterances[1].0, "second");
}

/// Test that speaking after teardown is a silent no-op
#[test]
fn test_speak_after_shutdown_is_dropped() {
    let (app, log) = TestApp::new();
    let mut app = app.with_selection("English", "EN");
    app.state.form.set_text("Hello");
    app.state.shutdown();

    assert_eq!(app.state.submit(), SubmitOutcome::Dropped);
    assert!(app.state.notification.is_none());
    assert!(log.utterances().is_empty());
}
