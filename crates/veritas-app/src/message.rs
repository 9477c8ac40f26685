//! Message types for the application (TEA pattern)

use std::path::PathBuf;
use std::sync::Arc;

use veritas_core::{AnalysisId, AnalysisResult};

use crate::input_key::InputKey;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates
    Tick,

    /// Quit (q, Ctrl+C, signal handler)
    Quit,

    // ─────────────────────────────────────────────────────────
    // File Prompt
    // ─────────────────────────────────────────────────────────
    /// Open the path prompt
    OpenFilePrompt,

    /// Replace the prompt text
    FilePromptInput { text: String },

    /// Load the path currently in the prompt
    SubmitFilePrompt,

    /// Close the prompt without loading
    CancelFilePrompt,

    // ─────────────────────────────────────────────────────────
    // File Selection
    // ─────────────────────────────────────────────────────────
    /// Read a file from disk in the background
    LoadFile { path: PathBuf },

    /// File bytes are available; selects the file
    FileLoaded {
        name: String,
        path: Option<PathBuf>,
        bytes: Arc<[u8]>,
    },

    /// Reading the file failed
    FileLoadFailed { path: PathBuf, error: String },

    // ─────────────────────────────────────────────────────────
    // Analysis Workflow
    // ─────────────────────────────────────────────────────────
    /// Start an analysis of the selected file
    Analyze,

    /// A detector finished successfully
    AnalysisCompleted {
        id: AnalysisId,
        result: AnalysisResult,
    },

    /// A detector failed
    AnalysisFailed { id: AnalysisId, error: String },

    /// Clear file, preview and result
    Reset,

    /// Flip between simulated and remote analysis
    ToggleDemoMode,

    /// Set demo mode explicitly
    SetDemoMode(bool),

    // ─────────────────────────────────────────────────────────
    // Notification
    // ─────────────────────────────────────────────────────────
    DismissNotification,
}
