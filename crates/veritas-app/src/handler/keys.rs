//! Key event handlers for different UI modes

use veritas_core::WorkflowState;

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, UiMode};

/// Convert key events to messages based on current UI mode
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match state.ui_mode {
        UiMode::Notification => handle_key_notification(key),
        UiMode::FilePrompt => handle_key_file_prompt(state, key),
        UiMode::Main => match state.workflow_state() {
            WorkflowState::Complete => handle_key_result(key),
            WorkflowState::Analyzing => handle_key_analyzing(key),
            WorkflowState::Idle | WorkflowState::FileSelected => handle_key_upload(state, key),
        },
    }
}

/// Blocking notification: only dismiss or force quit
fn handle_key_notification(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Enter | InputKey::Esc => Some(Message::DismissNotification),
        InputKey::CharCtrl('c') => Some(Message::Quit),
        _ => None,
    }
}

fn handle_key_file_prompt(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc => Some(Message::CancelFilePrompt),
        InputKey::Enter => Some(Message::SubmitFilePrompt),

        InputKey::Backspace => {
            let mut text = state.file_prompt.input.clone();
            text.pop();
            Some(Message::FilePromptInput { text })
        }

        // Clear all input
        InputKey::CharCtrl('u') => Some(Message::FilePromptInput {
            text: String::new(),
        }),

        InputKey::Char(c) => {
            let mut text = state.file_prompt.input.clone();
            text.push(c);
            Some(Message::FilePromptInput { text })
        }

        InputKey::CharCtrl('c') => Some(Message::Quit),

        _ => None,
    }
}

/// Upload form (Idle / FileSelected)
fn handle_key_upload(state: &AppState, key: InputKey) -> Option<Message> {
    let has_file = state.file().is_some();

    match key {
        InputKey::Char('q') | InputKey::CharCtrl('c') => Some(Message::Quit),
        InputKey::Char('o') => Some(Message::OpenFilePrompt),
        InputKey::Char('d') | InputKey::Tab => Some(Message::ToggleDemoMode),
        InputKey::Enter | InputKey::Char('a') if has_file => Some(Message::Analyze),
        InputKey::Char('r') | InputKey::Esc if has_file => Some(Message::Reset),
        _ => None,
    }
}

/// While analyzing the trigger is hidden; only mode toggle and quit remain
fn handle_key_analyzing(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::CharCtrl('c') => Some(Message::Quit),
        InputKey::Char('d') | InputKey::Tab => Some(Message::ToggleDemoMode),
        _ => None,
    }
}

/// Result view: a single dismiss action
fn handle_key_result(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('x') | InputKey::Char('r') | InputKey::Esc => Some(Message::Reset),
        InputKey::Char('q') | InputKey::CharCtrl('c') => Some(Message::Quit),
        InputKey::Char('d') | InputKey::Tab => Some(Message::ToggleDemoMode),
        _ => None,
    }
}
