//! Domain events emitted by the Engine for external consumers
//!
//! Events are broadcast after each message processing cycle via
//! `Engine::subscribe()`. The headless runner turns them into NDJSON.

use veritas_core::{AnalysisId, AnalysisResult, DetectionMode, WorkflowState};

/// Domain events emitted by the Engine.
#[derive(Debug, Clone)]
pub enum EngineEvent {
    // ─────────────────────────────────────────────────────────
    // File Selection
    // ─────────────────────────────────────────────────────────
    /// A file was selected (first one or replacement)
    FileSelected {
        name: String,
        size: usize,
        mime: Option<String>,
        dimensions: Option<(u32, u32)>,
    },

    // ─────────────────────────────────────────────────────────
    // Analysis
    // ─────────────────────────────────────────────────────────
    AnalysisStarted { id: AnalysisId, mode: DetectionMode },

    AnalysisCompleted {
        id: AnalysisId,
        result: AnalysisResult,
    },

    AnalysisFailed { id: AnalysisId, error: String },

    // ─────────────────────────────────────────────────────────
    // Workflow
    // ─────────────────────────────────────────────────────────
    /// The derived workflow state changed
    WorkflowChanged {
        old: WorkflowState,
        new: WorkflowState,
    },

    DemoModeChanged { demo_mode: bool },

    /// The workflow went back to Idle
    Reset,

    /// Engine is shutting down
    Shutdown,
}

impl EngineEvent {
    /// Returns a short string label for this event type (for logging/debugging).
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::FileSelected { .. } => "file_selected",
            Self::AnalysisStarted { .. } => "analysis_started",
            Self::AnalysisCompleted { .. } => "analysis_completed",
            Self::AnalysisFailed { .. } => "analysis_failed",
            Self::WorkflowChanged { .. } => "workflow_changed",
            Self::DemoModeChanged { .. } => "demo_mode_changed",
            Self::Reset => "reset",
            Self::Shutdown => "shutdown",
        }
    }
}
