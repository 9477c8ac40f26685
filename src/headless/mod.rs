//! Headless mode - NDJSON event output instead of the TUI
//!
//! `veritas --headless IMAGE` runs one select + analyze cycle and writes one
//! JSON object per line to stdout. Each object has an `"event"` field naming
//! its type and a millisecond `"timestamp"`.
//!
//! # Example Output
//!
//! ```json
//! {"event":"file_selected","name":"face.png","size":48213,"mime":"image/png","dimensions":[512,512],"timestamp":1704700001000}
//! {"event":"analysis_started","analysis_id":1,"mode":"remote","timestamp":1704700001002}
//! {"event":"analysis_completed","analysis_id":1,"verdict":"DEEPFAKE DETECTED","confidence_percent":"93.0","result":{"is_fake":true,"confidence":0.93,"label":"AI"},"timestamp":1704700003140}
//! ```

pub mod runner;

use chrono::Utc;
use serde::Serialize;
use std::io::{self, Write};
use tracing::error;

use veritas_app::EngineEvent;
use veritas_core::{AnalysisId, AnalysisResult, DetectionMode};

pub use runner::{run_headless, HeadlessOutcome};

/// Events emitted in headless mode
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    FileSelected {
        name: String,
        size: usize,
        mime: Option<String>,
        dimensions: Option<(u32, u32)>,
        timestamp: i64,
    },

    AnalysisStarted {
        analysis_id: AnalysisId,
        mode: DetectionMode,
        timestamp: i64,
    },

    AnalysisCompleted {
        analysis_id: AnalysisId,
        /// Headline as shown in the result card
        verdict: &'static str,
        /// Confidence as displayed, one decimal place
        confidence_percent: String,
        result: AnalysisResult,
        timestamp: i64,
    },

    AnalysisFailed {
        analysis_id: AnalysisId,
        error: String,
        timestamp: i64,
    },

    DemoModeChanged { demo_mode: bool, timestamp: i64 },

    Reset { timestamp: i64 },

    /// Error outside an analysis (unreadable file, ...)
    Error {
        message: String,
        fatal: bool,
        timestamp: i64,
    },
}

impl HeadlessEvent {
    /// Emit this event to stdout as one JSON line
    pub fn emit(&self) {
        let json = match serde_json::to_string(self) {
            Ok(json) => json,
            Err(e) => {
                error!("Failed to serialize headless event: {}", e);
                return;
            }
        };

        let mut stdout = io::stdout().lock();
        if let Err(e) = writeln!(stdout, "{}", json) {
            error!("Failed to write headless event to stdout: {}", e);
            return;
        }

        if let Err(e) = stdout.flush() {
            error!("Failed to flush headless stdout: {}", e);
        }
    }

    /// Current timestamp in milliseconds
    fn now() -> i64 {
        Utc::now().timestamp_millis()
    }

    pub fn error(message: impl Into<String>, fatal: bool) -> Self {
        Self::Error {
            message: message.into(),
            fatal,
            timestamp: Self::now(),
        }
    }

    /// Map an engine event to its headless form.
    ///
    /// Workflow transitions and shutdown have no headless counterpart.
    pub fn from_engine_event(event: &EngineEvent) -> Option<Self> {
        let timestamp = Self::now();
        let mapped = match event {
            EngineEvent::FileSelected {
                name,
                size,
                mime,
                dimensions,
            } => Self::FileSelected {
                name: name.clone(),
                size: *size,
                mime: mime.clone(),
                dimensions: *dimensions,
                timestamp,
            },
            EngineEvent::AnalysisStarted { id, mode } => Self::AnalysisStarted {
                analysis_id: *id,
                mode: *mode,
                timestamp,
            },
            EngineEvent::AnalysisCompleted { id, result } => Self::AnalysisCompleted {
                analysis_id: *id,
                verdict: result.verdict().headline(),
                confidence_percent: result.confidence_display(),
                result: result.clone(),
                timestamp,
            },
            EngineEvent::AnalysisFailed { id, error } => Self::AnalysisFailed {
                analysis_id: *id,
                error: error.clone(),
                timestamp,
            },
            EngineEvent::DemoModeChanged { demo_mode } => Self::DemoModeChanged {
                demo_mode: *demo_mode,
                timestamp,
            },
            EngineEvent::Reset => Self::Reset { timestamp },
            EngineEvent::WorkflowChanged { .. } | EngineEvent::Shutdown => return None,
        };
        Some(mapped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use veritas_core::WorkflowState;

    fn to_value(event: &HeadlessEvent) -> serde_json::Value {
        let json = serde_json::to_string(event).expect("serialization failed");
        serde_json::from_str(&json).expect("invalid JSON")
    }

    #[test]
    fn test_file_selected_serialization() {
        let event = HeadlessEvent::from_engine_event(&EngineEvent::FileSelected {
            name: "face.png".into(),
            size: 2048,
            mime: Some("image/png".into()),
            dimensions: Some((64, 32)),
        })
        .unwrap();
        let value = to_value(&event);

        assert_eq!(value["event"], "file_selected");
        assert_eq!(value["name"], "face.png");
        assert_eq!(value["size"], 2048);
        assert_eq!(value["mime"], "image/png");
        assert_eq!(value["dimensions"][0], 64);
        assert!(value["timestamp"].is_number());
    }

    #[test]
    fn test_analysis_started_serialization() {
        let event = HeadlessEvent::from_engine_event(&EngineEvent::AnalysisStarted {
            id: AnalysisId::new(4),
            mode: DetectionMode::Simulated,
        })
        .unwrap();
        let value = to_value(&event);

        assert_eq!(value["event"], "analysis_started");
        assert_eq!(value["analysis_id"], 4);
        assert_eq!(value["mode"], "simulated");
    }

    #[test]
    fn test_analysis_completed_serialization() {
        let result = AnalysisResult {
            is_fake: true,
            confidence: 0.93,
            label: "AI".into(),
            ..Default::default()
        };
        let event = HeadlessEvent::from_engine_event(&EngineEvent::AnalysisCompleted {
            id: AnalysisId::new(1),
            result,
        })
        .unwrap();
        let value = to_value(&event);

        assert_eq!(value["event"], "analysis_completed");
        assert_eq!(value["verdict"], "DEEPFAKE DETECTED");
        assert_eq!(value["confidence_percent"], "93.0");
        assert_eq!(value["result"]["label"], "AI");
        assert_eq!(value["result"]["is_fake"], true);
    }

    #[test]
    fn test_analysis_failed_serialization() {
        let event = HeadlessEvent::from_engine_event(&EngineEvent::AnalysisFailed {
            id: AnalysisId::new(2),
            error: "API Error: 500 - internal error".into(),
        })
        .unwrap();
        let value = to_value(&event);

        assert_eq!(value["event"], "analysis_failed");
        assert_eq!(value["error"], "API Error: 500 - internal error");
    }

    #[test]
    fn test_error_serialization() {
        let value = to_value(&HeadlessEvent::error("Could not open file", true));

        assert_eq!(value["event"], "error");
        assert_eq!(value["message"], "Could not open file");
        assert_eq!(value["fatal"], true);
    }

    #[test]
    fn test_workflow_and_shutdown_not_emitted() {
        assert!(HeadlessEvent::from_engine_event(&EngineEvent::Shutdown).is_none());
        assert!(HeadlessEvent::from_engine_event(&EngineEvent::WorkflowChanged {
            old: WorkflowState::Idle,
            new: WorkflowState::FileSelected,
        })
        .is_none());
    }

    #[test]
    fn test_reset_and_demo_toggle() {
        let reset = to_value(&HeadlessEvent::from_engine_event(&EngineEvent::Reset).unwrap());
        assert_eq!(reset["event"], "reset");

        let toggle = to_value(
            &HeadlessEvent::from_engine_event(&EngineEvent::DemoModeChanged { demo_mode: true })
                .unwrap(),
        );
        assert_eq!(toggle["event"], "demo_mode_changed");
        assert_eq!(toggle["demo_mode"], true);
    }
}
