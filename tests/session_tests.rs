//! Speech session lifecycle driven through the form controller

use megaphone::form::{FormController, SubmitOutcome, ValidationError};
use megaphone::speech::{
    EngineCall, Locale, PlatformVoice, QueueMode, RecordingEngine, SessionState, SpeechEngine,
    SpeechSession,
};
use std::time::Duration;

const WAIT: Duration = Duration::from_secs(5);

fn english_form(text: &str) -> FormController {
    let mut form = FormController::new();
    form.set_text(text);
    form.select_language("English");
    form.select_voice("EN");
    form
}

#[test]
fn test_submit_is_dropped_until_engine_is_ready() {
    let (gate_tx, gate_rx) = crossbeam_channel::bounded::<()>(0);
    let (engine, log) = RecordingEngine::new(vec![PlatformVoice::new(
        "iol",
        "en-us-x-iol-local",
        "en-US",
    )]);

    let mut session = SpeechSession::start(move || {
        let _ = gate_rx.recv();
        Ok(Box::new(engine) as Box<dyn SpeechEngine>)
    })
    .unwrap();

    let form = english_form("Hello");
    assert_eq!(session.poll(), SessionState::Uninitialized);
    assert_eq!(form.submit(&mut session), SubmitOutcome::Dropped);

    gate_tx.send(()).unwrap();
    assert_eq!(session.wait(WAIT), SessionState::Ready);

    let SubmitOutcome::Spoken(report) = form.submit(&mut session) else {
        panic!("expected speech once ready");
    };
    assert_eq!(report.request.locale, Locale::new("en", "US"));
    assert_eq!(report.voice_matched.as_deref(), Some("en-us-x-iol-local"));
    assert_eq!(log.utterances(), vec![("Hello".to_string(), QueueMode::Flush)]);

    drop(session);
    assert_eq!(log.count(&EngineCall::Stop), 1);
    assert_eq!(log.count(&EngineCall::Release), 1);
}

#[test]
fn test_validation_runs_before_session_check() {
    let mut session = SpeechSession::start(|| {
        Err(megaphone::MegaphoneError::EngineUnavailable(
            "no backend".into(),
        ))
    })
    .unwrap();
    assert_eq!(session.wait(WAIT), SessionState::Released);

    let outcome = english_form("  ").submit(&mut session);
    assert_eq!(outcome, SubmitOutcome::Rejected(ValidationError::NoText));

    let outcome = english_form("Hello").submit(&mut session);
    assert_eq!(outcome, SubmitOutcome::Dropped);
}

#[test]
fn test_teardown_is_idempotent() {
    let (engine, log) = RecordingEngine::new(vec![]);
    let mut session = SpeechSession::ready(Box::new(engine));

    english_form("Hello").submit(&mut session);
    session.release();
    session.release();
    drop(session);

    let calls = log.calls();
    assert_eq!(
        &calls[calls.len() - 2..],
        &[EngineCall::Stop, EngineCall::Release]
    );
    assert_eq!(log.count(&EngineCall::Release), 1);
}
