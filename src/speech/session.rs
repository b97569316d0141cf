//! Lifecycle of the speech engine handle
//!
//! The handle is acquired when the screen becomes active and released when it
//! is torn down. Initialization runs on a worker thread; until it reports
//! back the session is `Uninitialized` and submits are dropped.

use crate::speech::engine::SpeechEngine;
use crate::{MegaphoneError, Result};
use crossbeam_channel::{bounded, Receiver, RecvTimeoutError, TryRecvError};
use std::thread;
use std::time::Duration;
use tracing::{debug, error, info, warn};

/// Where the session is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Engine initialization has not reported back yet
    Uninitialized,
    /// Engine is available for requests
    Ready,
    /// Engine handle has been released (or never came up)
    Released,
}

type InitResult = Result<Box<dyn SpeechEngine>>;

/// Owner of the platform speech engine handle
pub struct SpeechSession {
    state: SessionState,
    engine: Option<Box<dyn SpeechEngine>>,
    init_rx: Option<Receiver<InitResult>>,
    failure: Option<MegaphoneError>,
}

impl SpeechSession {
    /// Start initializing an engine on a worker thread
    ///
    /// `factory` runs once on the worker. Call [`poll`](Self::poll) to pick
    /// up the result.
    pub fn start<F>(factory: F) -> Result<Self>
    where
        F: FnOnce() -> Result<Box<dyn SpeechEngine>> + Send + 'static,
    {
        let (init_tx, init_rx) = bounded::<InitResult>(1);

        thread::Builder::new()
            .name("speech-init".into())
            .spawn(move || {
                debug!("Speech engine initialization starting");
                let result = factory();

                // The session may already be gone; the engine must still be
                // stopped and released.
                if let Err(returned) = init_tx.send(result) {
                    if let Ok(mut engine) = returned.into_inner() {
                        info!("Session released before {} engine came up", engine.name());
                        if let Err(e) = engine.stop() {
                            warn!("Failed to stop {} engine: {}", engine.name(), e);
                        }
                    }
                }
            })?;

        Ok(Self {
            state: SessionState::Uninitialized,
            engine: None,
            init_rx: Some(init_rx),
            failure: None,
        })
    }

    /// Wrap an engine that is already initialized
    pub fn ready(engine: Box<dyn SpeechEngine>) -> Self {
        info!("Speech session ready ({})", engine.name());
        Self {
            state: SessionState::Ready,
            engine: Some(engine),
            init_rx: None,
            failure: None,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_ready(&self) -> bool {
        self.state == SessionState::Ready
    }

    /// Why initialization failed, if it did
    pub fn failure(&self) -> Option<&MegaphoneError> {
        self.failure.as_ref()
    }

    /// Pick up the initialization result if it has arrived
    pub fn poll(&mut self) -> SessionState {
        if self.state != SessionState::Uninitialized {
            return self.state;
        }

        let received = match &self.init_rx {
            Some(rx) => rx.try_recv(),
            None => return self.state,
        };

        match received {
            Ok(result) => self.accept(result),
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => self.abandon(),
        }

        self.state
    }

    /// Block up to `timeout` for initialization to finish
    pub fn wait(&mut self, timeout: Duration) -> SessionState {
        if self.state != SessionState::Uninitialized {
            return self.state;
        }

        let received = match &self.init_rx {
            Some(rx) => rx.recv_timeout(timeout),
            None => return self.state,
        };

        match received {
            Ok(result) => self.accept(result),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => self.abandon(),
        }

        self.state
    }

    fn accept(&mut self, result: InitResult) {
        self.init_rx = None;
        match result {
            Ok(engine) => {
                info!("Speech session ready ({})", engine.name());
                self.engine = Some(engine);
                self.state = SessionState::Ready;
            }
            Err(e) => {
                error!("Speech engine failed to initialize: {}", e);
                self.failure = Some(e);
                self.state = SessionState::Released;
            }
        }
    }

    fn abandon(&mut self) {
        error!("Speech engine initialization worker exited without a result");
        self.init_rx = None;
        self.state = SessionState::Released;
    }

    /// The engine, only while `Ready`
    pub fn engine_mut(&mut self) -> Option<&mut (dyn SpeechEngine + 'static)> {
        if self.state != SessionState::Ready {
            return None;
        }
        self.engine.as_deref_mut()
    }

    /// Stop any in-flight utterance and release the engine handle
    ///
    /// Safe to call in any state and more than once; the engine is released
    /// exactly once. An engine already waiting in the channel is stopped and
    /// released here; one still initializing is released by the worker when
    /// it arrives.
    pub fn release(&mut self) {
        if self.state == SessionState::Released && self.engine.is_none() {
            return;
        }

        let pending = self
            .init_rx
            .take()
            .and_then(|rx| rx.try_recv().ok())
            .and_then(|result| result.ok());

        if let Some(mut engine) = self.engine.take().or(pending) {
            if let Err(e) = engine.stop() {
                warn!("Failed to stop {} engine: {}", engine.name(), e);
            }
            info!("Releasing {} speech engine", engine.name());
            drop(engine);
        }

        self.state = SessionState::Released;
    }
}

impl Drop for SpeechSession {
    fn drop(&mut self) {
        self.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::speech::recording::{EngineCall, RecordingEngine};

    const WAIT: Duration = Duration::from_secs(5);

    #[test]
    fn test_ready_session_exposes_engine() {
        let (engine, _log) = RecordingEngine::new(vec![]);
        let mut session = SpeechSession::ready(Box::new(engine));
        assert!(session.is_ready());
        assert!(session.engine_mut().is_some());
    }

    #[test]
    fn test_async_initialization() {
        let (engine, log) = RecordingEngine::new(vec![]);
        let mut session =
            SpeechSession::start(move || Ok(Box::new(engine) as Box<dyn SpeechEngine>)).unwrap();

        assert_eq!(session.wait(WAIT), SessionState::Ready);
        assert!(session.engine_mut().is_some());
        assert!(log.is_empty());
    }

    #[test]
    fn test_uninitialized_has_no_engine() {
        let (gate_tx, gate_rx) = bounded::<()>(0);
        let (engine, _log) = RecordingEngine::new(vec![]);
        let mut session = SpeechSession::start(move || {
            let _ = gate_rx.recv();
            Ok(Box::new(engine) as Box<dyn SpeechEngine>)
        })
        .unwrap();

        assert_eq!(session.poll(), SessionState::Uninitialized);
        assert!(session.engine_mut().is_none());

        gate_tx.send(()).unwrap();
        assert_eq!(session.wait(WAIT), SessionState::Ready);
    }

    #[test]
    fn test_failed_initialization_releases() {
        let mut session =
            SpeechSession::start(|| Err(MegaphoneError::EngineUnavailable("no backend".into())))
                .unwrap();

        assert_eq!(session.wait(WAIT), SessionState::Released);
        assert!(session.engine_mut().is_none());
    }

    #[test]
    fn test_release_stops_then_releases_once() {
        let (engine, log) = RecordingEngine::new(vec![]);
        let mut session = SpeechSession::ready(Box::new(engine));

        session.release();
        session.release();
        drop(session);

        assert_eq!(log.calls(), vec![EngineCall::Stop, EngineCall::Release]);
    }

    #[test]
    fn test_drop_releases() {
        let (engine, log) = RecordingEngine::new(vec![]);
        let session = SpeechSession::ready(Box::new(engine));
        drop(session);

        assert_eq!(log.count(&EngineCall::Stop), 1);
        assert_eq!(log.count(&EngineCall::Release), 1);
    }

    #[test]
    fn test_release_before_initialization_completes() {
        let (gate_tx, gate_rx) = bounded::<()>(0);
        let (done_tx, done_rx) = bounded::<()>(1);
        let (engine, log) = RecordingEngine::new(vec![]);
        let mut session = SpeechSession::start(move || {
            let _ = gate_rx.recv();
            let _ = done_tx.send(());
            Ok(Box::new(engine) as Box<dyn SpeechEngine>)
        })
        .unwrap();

        session.release();
        assert_eq!(session.state(), SessionState::Released);
        assert!(session.engine_mut().is_none());

        gate_tx.send(()).unwrap();
        done_rx.recv_timeout(WAIT).unwrap();

        // The worker releases the late engine on its own thread
        let deadline = std::time::Instant::now() + WAIT;
        while log.count(&EngineCall::Release) == 0 && std::time::Instant::now() < deadline {
            thread::sleep(Duration::from_millis(10));
        }
        assert_eq!(log.count(&EngineCall::Stop), 1);
        assert_eq!(log.count(&EngineCall::Release), 1);
        assert_eq!(session.poll(), SessionState::Released);
    }

    #[test]
    fn test_release_with_engine_waiting_in_channel() {
        let (engine, log) = RecordingEngine::new(vec![]);
        let mut session =
            SpeechSession::start(move || Ok(Box::new(engine) as Box<dyn SpeechEngine>)).unwrap();

        // Initialization finished but was never polled
        let deadline = std::time::Instant::now() + WAIT;
        while session.init_rx.as_ref().is_some_and(|rx| rx.is_empty())
            && std::time::Instant::now() < deadline
        {
            thread::sleep(Duration::from_millis(10));
        }
        assert_eq!(session.state(), SessionState::Uninitialized);

        session.release();
        assert_eq!(session.state(), SessionState::Released);
        assert_eq!(log.calls(), vec![EngineCall::Stop, EngineCall::Release]);

        drop(session);
        assert_eq!(log.count(&EngineCall::Release), 1);
    }

    #[test]
    fn test_failed_initialization_keeps_error() {
        let mut session =
            SpeechSession::start(|| Err(MegaphoneError::EngineUnavailable("no backend".into())))
                .unwrap();

        session.wait(WAIT);
        assert!(matches!(
            session.failure(),
            Some(MegaphoneError::EngineUnavailable(msg)) if msg == "no backend"
        ));
    }
}
