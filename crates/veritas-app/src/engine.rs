//! Engine - shared orchestration state for TUI and headless runners
//!
//! The Engine owns the application state, the message channel, the
//! detectors and the event broadcaster. Both runners drive it the same way:
//! feed messages in, render or print what comes out.

use tokio::sync::{broadcast, mpsc};

use veritas_core::prelude::*;
use veritas_core::{AnalysisId, PreviewId, WorkflowState};
use veritas_detect::DetectorSet;

use crate::config::Settings;
use crate::engine_event::EngineEvent;
use crate::message::Message;
use crate::process;
use crate::signals;
use crate::state::AppState;

/// Lightweight snapshot of state for change detection.
///
/// Captured before message processing, compared after to detect
/// what changed and emit appropriate EngineEvents.
#[derive(Debug, Clone, PartialEq)]
struct StateSnapshot {
    workflow: WorkflowState,
    demo_mode: bool,
    preview: Option<PreviewId>,
    in_flight: Option<AnalysisId>,
    result_id: Option<AnalysisId>,
    failure_id: Option<AnalysisId>,
}

impl StateSnapshot {
    fn capture(state: &AppState) -> Self {
        Self {
            workflow: state.workflow_state(),
            demo_mode: state.demo_mode(),
            preview: state.file().map(|f| f.preview().id()),
            in_flight: state.in_flight().map(|f| f.id),
            result_id: state.result_id(),
            failure_id: state.last_failure().map(|f| f.id),
        }
    }
}

/// Orchestration engine for Veritas.
pub struct Engine {
    /// TEA application state (the Model)
    pub state: AppState,

    /// Sender half of the unified message channel.
    /// Clone this to give to input sources (signal handler, runners).
    pub msg_tx: mpsc::Sender<Message>,

    /// Receiver half of the unified message channel.
    pub msg_rx: mpsc::Receiver<Message>,

    /// Settings the engine was built from
    pub settings: Settings,

    detectors: DetectorSet,

    /// Event broadcaster for external consumers.
    event_tx: broadcast::Sender<EngineEvent>,
}

impl Engine {
    /// Create an Engine from settings.
    ///
    /// Builds the detectors (a malformed `api.base_url` is fatal) and spawns
    /// the signal handler. Must be called inside a tokio runtime.
    pub fn new(settings: Settings) -> Result<Self> {
        let detectors =
            DetectorSet::from_endpoint(&settings.api.base_url, settings.api.timeout())?;
        let engine = Self::with_detectors(settings, detectors);
        signals::spawn_signal_handler(engine.msg_tx.clone());
        Ok(engine)
    }

    /// Create an Engine around explicit detectors, without a signal handler
    pub fn with_detectors(settings: Settings, detectors: DetectorSet) -> Self {
        let state = AppState::with_settings(settings.clone());
        let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);
        let (event_tx, _) = broadcast::channel(256);

        info!(
            "Engine ready ({}, endpoint {})",
            state.detection_mode().label(),
            detectors.remote().endpoint()
        );

        Self {
            state,
            msg_tx,
            msg_rx,
            settings,
            detectors,
            event_tx,
        }
    }

    /// Subscribe to engine events.
    ///
    /// Slow subscribers lose the oldest events (`RecvError::Lagged`).
    pub fn subscribe(&self) -> broadcast::Receiver<EngineEvent> {
        self.event_tx.subscribe()
    }

    /// Process a single message through the TEA update cycle and emit
    /// events for whatever changed.
    pub fn process_message(&mut self, msg: Message) {
        let pre = StateSnapshot::capture(&self.state);

        process::process_message(&mut self.state, msg, &self.msg_tx, &self.detectors);

        let post = StateSnapshot::capture(&self.state);
        if pre != post {
            self.emit_events(&pre, &post);
        }
    }

    /// Drain and process all pending messages from the channel.
    ///
    /// Returns the number of messages processed.
    pub fn drain_pending_messages(&mut self) -> usize {
        let mut count = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.process_message(msg);
            count += 1;
        }
        count
    }

    /// Wait for the next message and process it.
    ///
    /// Returns `false` once the channel is closed.
    pub async fn process_next(&mut self) -> bool {
        match self.msg_rx.recv().await {
            Some(msg) => {
                self.process_message(msg);
                true
            }
            None => false,
        }
    }

    /// Get a clone of the message sender for spawning input sources.
    pub fn msg_sender(&self) -> mpsc::Sender<Message> {
        self.msg_tx.clone()
    }

    pub fn detectors(&self) -> &DetectorSet {
        &self.detectors
    }

    /// Check if the application should quit.
    pub fn should_quit(&self) -> bool {
        self.state.should_quit()
    }

    /// Announce shutdown to subscribers.
    ///
    /// In-flight analyses are not cancelled; their results are discarded
    /// with the runtime.
    pub async fn shutdown(&mut self) {
        if let Some(running) = self.state.in_flight() {
            info!("Abandoning in-flight analysis {}", running.id);
        }
        self.emit(EngineEvent::Shutdown);
    }

    /// Emit EngineEvents based on state changes after processing.
    fn emit_events(&self, pre: &StateSnapshot, post: &StateSnapshot) {
        if post.preview.is_some() && post.preview != pre.preview {
            if let Some(file) = self.state.file() {
                self.emit(EngineEvent::FileSelected {
                    name: file.name().to_string(),
                    size: file.len(),
                    mime: file.preview().mime().map(str::to_string),
                    dimensions: file.preview().dimensions(),
                });
            }
        }

        if let Some(id) = post.in_flight.filter(|id| Some(*id) != pre.in_flight) {
            if let Some(running) = self.state.in_flight() {
                self.emit(EngineEvent::AnalysisStarted {
                    id,
                    mode: running.mode,
                });
            }
        }

        if let Some(id) = post.result_id.filter(|id| Some(*id) != pre.result_id) {
            if let Some(result) = self.state.result() {
                self.emit(EngineEvent::AnalysisCompleted {
                    id,
                    result: result.clone(),
                });
            }
        }

        if let Some(id) = post.failure_id.filter(|id| Some(*id) != pre.failure_id) {
            if let Some(failure) = self.state.last_failure() {
                self.emit(EngineEvent::AnalysisFailed {
                    id,
                    error: failure.error.clone(),
                });
            }
        }

        if pre.demo_mode != post.demo_mode {
            self.emit(EngineEvent::DemoModeChanged {
                demo_mode: post.demo_mode,
            });
        }

        if pre.workflow != post.workflow {
            debug!(
                "Workflow {} -> {}",
                pre.workflow.label(),
                post.workflow.label()
            );
            self.emit(EngineEvent::WorkflowChanged {
                old: pre.workflow,
                new: post.workflow,
            });

            if post.workflow == WorkflowState::Idle {
                self.emit(EngineEvent::Reset);
            }
        }
    }

    /// Emit a single EngineEvent to all subscribers.
    ///
    /// Having no subscribers is not an error.
    fn emit(&self, event: EngineEvent) {
        let _ = self.event_tx.send(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::time::Duration;
    use veritas_detect::{RemoteDetector, SimulatedDetector};

    fn engine() -> Engine {
        let detectors = DetectorSet::new(
            SimulatedDetector::with_delay(Duration::from_millis(1)),
            RemoteDetector::new("http://127.0.0.1:9", None).unwrap(),
        );
        Engine::with_detectors(Settings::default(), detectors)
    }

    fn file_loaded(name: &str) -> Message {
        Message::FileLoaded {
            name: name.into(),
            path: None,
            bytes: Arc::from(&b"bytes"[..]),
        }
    }

    fn drain_events(rx: &mut broadcast::Receiver<EngineEvent>) -> Vec<&'static str> {
        let mut types = Vec::new();
        while let Ok(event) = rx.try_recv() {
            types.push(event.event_type());
        }
        types
    }

    #[tokio::test]
    async fn test_engine_starts_idle() {
        let mut engine = engine();
        assert!(!engine.should_quit());
        assert_eq!(engine.state.workflow_state(), WorkflowState::Idle);
        assert_eq!(engine.drain_pending_messages(), 0);
    }

    #[tokio::test]
    async fn test_engine_new_rejects_bad_endpoint() {
        let mut settings = Settings::default();
        settings.api.base_url = "not a url".into();

        let err = Engine::new(settings).err().unwrap();

        assert!(err.is_fatal());
    }

    #[tokio::test]
    async fn test_engine_process_quit_message() {
        let mut engine = engine();
        engine.process_message(Message::Quit);
        assert!(engine.should_quit());
    }

    #[tokio::test]
    async fn test_file_selected_event() {
        let mut engine = engine();
        let mut rx = engine.subscribe();

        engine.process_message(file_loaded("a.png"));

        assert_eq!(drain_events(&mut rx), vec!["file_selected", "workflow_changed"]);
    }

    #[tokio::test]
    async fn test_replacing_file_emits_file_selected_again() {
        let mut engine = engine();
        engine.process_message(file_loaded("a.png"));
        let mut rx = engine.subscribe();

        engine.process_message(file_loaded("b.png"));

        // FileSelected -> FileSelected: no workflow change
        assert_eq!(drain_events(&mut rx), vec!["file_selected"]);
    }

    #[tokio::test]
    async fn test_analysis_started_and_reset_events() {
        let mut engine = engine();
        engine.process_message(file_loaded("a.png"));
        let mut rx = engine.subscribe();

        engine.process_message(Message::Analyze);
        assert_eq!(
            drain_events(&mut rx),
            vec!["analysis_started", "workflow_changed"]
        );

        engine.process_message(Message::Reset);
        assert_eq!(drain_events(&mut rx), vec!["workflow_changed", "reset"]);
    }

    #[tokio::test]
    async fn test_demo_toggle_event() {
        let mut engine = engine();
        let mut rx = engine.subscribe();

        engine.process_message(Message::ToggleDemoMode);

        match rx.try_recv().unwrap() {
            EngineEvent::DemoModeChanged { demo_mode } => assert!(demo_mode),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_no_events_when_nothing_changes() {
        let mut engine = engine();
        let mut rx = engine.subscribe();

        engine.process_message(Message::Analyze);
        engine.process_message(Message::Tick);

        assert!(drain_events(&mut rx).is_empty());
    }

    #[tokio::test]
    async fn test_shutdown_emits_event() {
        let mut engine = engine();
        let mut rx = engine.subscribe();

        engine.shutdown().await;

        assert!(matches!(rx.try_recv().unwrap(), EngineEvent::Shutdown));
    }
}
