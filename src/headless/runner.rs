//! Headless mode runner - one select + analyze cycle without the TUI

use std::path::PathBuf;

use tokio::sync::broadcast::{self, error::TryRecvError};
use tracing::{info, warn};

use veritas_app::config::Settings;
use veritas_app::{Engine, EngineEvent, Message};
use veritas_core::prelude::*;

use super::HeadlessEvent;

/// How the headless cycle ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadlessOutcome {
    /// A result was printed
    Completed,
    /// The analysis failed or was interrupted
    Failed,
}

/// Run in headless mode: load `image`, analyze it once, print NDJSON events
pub async fn run_headless(settings: Settings, image: PathBuf) -> Result<HeadlessOutcome> {
    info!("Headless analysis of {}", image.display());

    let mut engine = match Engine::new(settings) {
        Ok(engine) => engine,
        Err(e) => {
            HeadlessEvent::error(e.to_string(), e.is_fatal()).emit();
            return Err(e);
        }
    };
    let result = drive(&mut engine, image).await;

    engine.shutdown().await;
    result
}

/// Feed the engine until the single analysis settles
async fn drive(engine: &mut Engine, image: PathBuf) -> Result<HeadlessOutcome> {
    let mut events = engine.subscribe();
    engine.process_message(Message::LoadFile { path: image });

    loop {
        if engine.should_quit() {
            info!("Quit requested");
            HeadlessEvent::error("Interrupted before the analysis finished", true).emit();
            return Ok(HeadlessOutcome::Failed);
        }

        let Some(msg) = engine.msg_rx.recv().await else {
            info!("Message channel closed");
            return Ok(HeadlessOutcome::Failed);
        };

        // A read failure has no engine event; report it and stop
        if let Message::FileLoadFailed { path, error } = &msg {
            HeadlessEvent::error(
                format!("Could not open file: {}: {}", path.display(), error),
                true,
            )
            .emit();
            return Err(Error::file_read(path.clone(), error.clone()));
        }

        engine.process_message(msg);

        if let Some(outcome) = emit_pending_events(engine, &mut events) {
            return Ok(outcome);
        }
    }
}

/// Print queued engine events, starting the analysis once the file is in.
///
/// Returns the outcome once the analysis has completed or failed.
fn emit_pending_events(
    engine: &mut Engine,
    events: &mut broadcast::Receiver<EngineEvent>,
) -> Option<HeadlessOutcome> {
    loop {
        let mut file_selected = false;
        let mut outcome = None;

        while let Some(event) = next_event(events) {
            if let Some(headless) = HeadlessEvent::from_engine_event(&event) {
                headless.emit();
            }
            match event {
                EngineEvent::FileSelected { .. } => file_selected = true,
                EngineEvent::AnalysisCompleted { .. } => outcome = Some(HeadlessOutcome::Completed),
                EngineEvent::AnalysisFailed { .. } => outcome = Some(HeadlessOutcome::Failed),
                _ => {}
            }
        }

        if outcome.is_some() || !file_selected {
            return outcome;
        }
        engine.process_message(Message::Analyze);
    }
}

fn next_event(events: &mut broadcast::Receiver<EngineEvent>) -> Option<EngineEvent> {
    loop {
        match events.try_recv() {
            Ok(event) => return Some(event),
            Err(TryRecvError::Lagged(skipped)) => {
                warn!("Headless output skipped {} engine events", skipped)
            }
            Err(TryRecvError::Empty | TryRecvError::Closed) => return None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use veritas_app::{DetectorSet, SimulatedDetector};
    use veritas_core::WorkflowState;
    use veritas_detect::RemoteDetector;

    fn demo_engine() -> Engine {
        let mut settings = Settings::default();
        settings.behavior.demo_mode = true;
        let detectors = DetectorSet::new(
            SimulatedDetector::with_delay(Duration::from_millis(10)),
            RemoteDetector::new("http://127.0.0.1:9", None).unwrap(),
        );
        Engine::with_detectors(settings, detectors)
    }

    #[tokio::test]
    async fn test_headless_cycle_completes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("face.png");
        std::fs::write(&path, b"pretend image").unwrap();

        let mut engine = demo_engine();
        let outcome = tokio::time::timeout(Duration::from_secs(10), drive(&mut engine, path))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(outcome, HeadlessOutcome::Completed);
        assert_eq!(engine.state.workflow_state(), WorkflowState::Complete);
    }

    #[tokio::test]
    async fn test_headless_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut engine = demo_engine();

        let err = drive(&mut engine, dir.path().join("missing.png"))
            .await
            .unwrap_err();

        assert!(matches!(err, Error::FileRead { .. }));
    }

    #[tokio::test]
    async fn test_headless_remote_failure_reports_failed() {
        // Nothing listens on the discard port
        let mut engine = demo_engine();
        engine.process_message(Message::SetDemoMode(false));

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("face.png");
        std::fs::write(&path, b"pretend image").unwrap();

        let outcome = tokio::time::timeout(Duration::from_secs(10), drive(&mut engine, path))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(outcome, HeadlessOutcome::Failed);
        assert_eq!(engine.state.workflow_state(), WorkflowState::FileSelected);
    }
}
