//! Main update function - handles state transitions (TEA pattern)

use std::path::PathBuf;

use veritas_core::prelude::*;
use veritas_core::WorkflowState;

use crate::message::Message;
use crate::state::{AppState, Notification};

use super::{keys::handle_key, Task, UpdateAction, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => {
            state.tick();
            UpdateResult::none()
        }

        Message::Quit => {
            state.request_quit();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // File Prompt
        // ─────────────────────────────────────────────────────────
        Message::OpenFilePrompt => {
            // The upload form is hidden while busy or showing a result
            if matches!(
                state.workflow_state(),
                WorkflowState::Idle | WorkflowState::FileSelected
            ) {
                state.open_file_prompt();
            }
            UpdateResult::none()
        }

        Message::FilePromptInput { text } => {
            state.file_prompt.input = text;
            UpdateResult::none()
        }

        Message::SubmitFilePrompt => {
            let input = state.file_prompt.input.trim().to_string();
            state.close_file_prompt();
            if input.is_empty() {
                return UpdateResult::none();
            }
            UpdateResult::message(Message::LoadFile {
                path: expand_path(&input),
            })
        }

        Message::CancelFilePrompt => {
            state.close_file_prompt();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // File Selection
        // ─────────────────────────────────────────────────────────
        Message::LoadFile { path } => {
            debug!("Loading {:?}", path);
            UpdateResult::action(UpdateAction::SpawnTask(Task::LoadFile { path }))
        }

        Message::FileLoaded { name, path, bytes } => {
            state.select_file(name, path, bytes);
            UpdateResult::none()
        }

        Message::FileLoadFailed { path, error } => {
            warn!("Could not open {:?}: {}", path, error);
            state.show_notification(Notification::file_open_failed(format!(
                "{}: {}",
                path.display(),
                error
            )));
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Analysis Workflow
        // ─────────────────────────────────────────────────────────
        Message::Analyze => match state.begin_analysis() {
            Ok(Some(ticket)) => {
                info!("Starting analysis {} ({})", ticket.id, ticket.mode.label());
                UpdateResult::action(UpdateAction::SpawnTask(Task::Analyze {
                    id: ticket.id,
                    mode: ticket.mode,
                    upload: ticket.upload,
                }))
            }
            Ok(None) => UpdateResult::none(),
            Err(e) => {
                debug!("Analyze ignored: {}", e);
                UpdateResult::none()
            }
        },

        Message::AnalysisCompleted { id, result } => {
            let verdict = result.verdict().headline();
            let confidence = result.confidence_display();
            if state.complete_analysis(id, result) {
                info!("Analysis {} complete: {} ({}%)", id, verdict, confidence);
            } else {
                debug!("Dropping stale result for analysis {}", id);
            }
            UpdateResult::none()
        }

        Message::AnalysisFailed { id, error } => {
            if state.fail_analysis(id, error.clone()) {
                error!("Analysis {} failed: {}", id, error);
            } else {
                debug!("Dropping stale failure for analysis {}: {}", id, error);
            }
            UpdateResult::none()
        }

        Message::Reset => {
            state.reset();
            UpdateResult::none()
        }

        Message::ToggleDemoMode => {
            state.toggle_demo_mode();
            UpdateResult::none()
        }

        Message::SetDemoMode(demo_mode) => {
            state.set_demo_mode(demo_mode);
            UpdateResult::none()
        }

        Message::DismissNotification => {
            state.dismiss_notification();
            UpdateResult::none()
        }
    }
}

/// Expand a leading `~` to the home directory
fn expand_path(input: &str) -> PathBuf {
    if let Some(rest) = input.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    } else if input == "~" {
        if let Some(home) = dirs::home_dir() {
            return home;
        }
    }
    PathBuf::from(input)
}
