//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers for UI modes

pub(crate) mod keys;
pub(crate) mod update;


use std::path::PathBuf;

use veritas_core::{AnalysisId, DetectionMode, ImageUpload};

use crate::message::Message;

// Re-export main entry point
pub use keys::handle_key;
pub use update::update;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone)]
pub enum UpdateAction {
    /// Spawn a background task
    SpawnTask(Task),
}

/// Background tasks to spawn
#[derive(Debug, Clone)]
pub enum Task {
    /// Run one analysis with the mode captured at dispatch
    Analyze {
        id: AnalysisId,
        mode: DetectionMode,
        upload: ImageUpload,
    },
    /// Read a file from disk
    LoadFile { path: PathBuf },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
