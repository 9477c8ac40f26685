//! Action handlers: UpdateAction dispatch and background task spawning

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, warn};

use veritas_core::{AnalysisId, DetectionMode, ImageUpload};
use veritas_detect::DetectorSet;

use crate::handler::Task;
use crate::message::Message;
use crate::UpdateAction;

/// Execute an action by spawning a background task
pub fn handle_action(action: UpdateAction, msg_tx: mpsc::Sender<Message>, detectors: &DetectorSet) {
    match action {
        UpdateAction::SpawnTask(task) => {
            let detectors = detectors.clone();
            tokio::spawn(async move {
                execute_task(task, msg_tx, detectors).await;
            });
        }
    }
}

/// Run a task to completion and report the outcome as a message
pub async fn execute_task(task: Task, msg_tx: mpsc::Sender<Message>, detectors: DetectorSet) {
    let msg = match task {
        Task::Analyze { id, mode, upload } => run_analysis(id, mode, &upload, &detectors).await,
        Task::LoadFile { path } => read_file(path).await,
    };

    if msg_tx.send(msg).await.is_err() {
        debug!("Message channel closed before task result was delivered");
    }
}

async fn run_analysis(
    id: AnalysisId,
    mode: DetectionMode,
    upload: &ImageUpload,
    detectors: &DetectorSet,
) -> Message {
    match detectors.detect(mode, upload).await {
        Ok(result) => Message::AnalysisCompleted { id, result },
        Err(e) => {
            if !e.is_analysis_failure() {
                warn!("Unexpected detector error for analysis {}: {:?}", id, e);
            }
            Message::AnalysisFailed {
                id,
                error: e.to_string(),
            }
        }
    }
}

async fn read_file(path: PathBuf) -> Message {
    match tokio::fs::read(&path).await {
        Ok(bytes) => Message::FileLoaded {
            name: display_name(&path),
            path: Some(path),
            bytes: Arc::from(bytes),
        },
        Err(e) => Message::FileLoadFailed {
            path,
            error: e.to_string(),
        },
    }
}

/// File name shown in the UI and sent as the multipart file name
fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use veritas_detect::{RemoteDetector, SimulatedDetector};

    fn detectors() -> DetectorSet {
        DetectorSet::new(
            SimulatedDetector::with_delay(Duration::from_millis(1)),
            RemoteDetector::new("http://127.0.0.1:9", None).unwrap(),
        )
    }

    #[tokio::test]
    async fn test_load_file_reads_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cat.png");
        std::fs::write(&path, b"bytes").unwrap();

        let (tx, mut rx) = mpsc::channel(1);
        execute_task(Task::LoadFile { path: path.clone() }, tx, detectors()).await;

        match rx.recv().await.unwrap() {
            Message::FileLoaded { name, path: p, bytes } => {
                assert_eq!(name, "cat.png");
                assert_eq!(p, Some(path));
                assert_eq!(&*bytes, b"bytes");
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_load_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.png");

        let (tx, mut rx) = mpsc::channel(1);
        execute_task(Task::LoadFile { path }, tx, detectors()).await;

        assert!(matches!(
            rx.recv().await.unwrap(),
            Message::FileLoadFailed { .. }
        ));
    }

    #[tokio::test]
    async fn test_simulated_analysis_reports_completion() {
        let (tx, mut rx) = mpsc::channel(1);
        let task = Task::Analyze {
            id: AnalysisId::new(3),
            mode: DetectionMode::Simulated,
            upload: ImageUpload {
                file_name: "a.png".into(),
                mime: None,
                bytes: Arc::from(&b"x"[..]),
            },
        };

        execute_task(task, tx, detectors()).await;

        match rx.recv().await.unwrap() {
            Message::AnalysisCompleted { id, result } => {
                assert_eq!(id, AnalysisId::new(3));
                assert!((0.85..=0.99).contains(&result.confidence));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_display_name_uses_file_name() {
        assert_eq!(display_name(Path::new("/a/b/photo.jpg")), "photo.jpg");
    }
}
