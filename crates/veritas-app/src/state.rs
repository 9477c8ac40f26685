//! Application state (Model in TEA pattern)
//!
//! `AppState` owns the whole upload workflow: the selected file and its
//! preview, the in-flight analysis ticket, the stored result and the demo
//! flag. The [`WorkflowState`] is never stored; it is derived from these
//! fields by [`AppState::workflow_state`].

use std::path::PathBuf;
use std::sync::Arc;

use veritas_core::prelude::*;
use veritas_core::types::format_size;
use veritas_core::{
    AnalysisId, AnalysisResult, DetectionMode, ImageUpload, PreviewRegistry, SelectedFile,
    WorkflowState, ADVISORY_MAX_BYTES,
};

use crate::config::Settings;

/// Current UI mode/screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    /// Upload form or result view, depending on the workflow state
    #[default]
    Main,

    /// One-line path input for choosing a file
    FilePrompt,

    /// Blocking notification; must be dismissed
    Notification,
}

/// Blocking message shown over the main view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub body: String,
}

impl Notification {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }

    pub fn analysis_failed(error: impl Into<String>) -> Self {
        Self::new("Analysis Failed", error)
    }

    pub fn file_open_failed(error: impl Into<String>) -> Self {
        Self::new("Could not open file", error)
    }

    /// Single-line form, e.g. `"Analysis Failed: API Error: 500 - boom"`
    pub fn text(&self) -> String {
        format!("{}: {}", self.title, self.body)
    }
}

/// State of the path prompt
#[derive(Debug, Clone, Default)]
pub struct FilePromptState {
    pub input: String,
}

/// The analysis currently running in the background
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InFlight {
    pub id: AnalysisId,
    /// Mode captured when the analysis was dispatched
    pub mode: DetectionMode,
}

/// Everything a background task needs to run one analysis
#[derive(Debug, Clone)]
pub struct AnalysisTicket {
    pub id: AnalysisId,
    pub mode: DetectionMode,
    pub upload: ImageUpload,
}

/// Last failed analysis, kept until the next run, file change or reset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisFailure {
    pub id: AnalysisId,
    pub error: String,
}

/// Complete application state (the Model in TEA)
pub struct AppState {
    /// Current UI mode
    pub ui_mode: UiMode,

    /// Settings the app was started with
    pub settings: Settings,

    /// Path prompt input
    pub file_prompt: FilePromptState,

    /// Blocking notification, shown while `ui_mode == Notification`
    pub notification: Option<Notification>,

    /// Spinner frame, advanced by ticks while analyzing
    pub spinner_frame: usize,

    demo_mode: bool,
    file: Option<SelectedFile>,
    result: Option<(AnalysisId, AnalysisResult)>,
    in_flight: Option<InFlight>,
    last_failure: Option<AnalysisFailure>,
    last_issued: AnalysisId,
    previews: PreviewRegistry,
    quitting: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    /// Create state seeded from settings (demo flag comes from `behavior`)
    pub fn with_settings(settings: Settings) -> Self {
        Self {
            ui_mode: UiMode::Main,
            demo_mode: settings.behavior.demo_mode,
            settings,
            file_prompt: FilePromptState::default(),
            notification: None,
            spinner_frame: 0,
            file: None,
            result: None,
            in_flight: None,
            last_failure: None,
            last_issued: AnalysisId::new(0),
            previews: PreviewRegistry::new(),
            quitting: false,
        }
    }

    // ─────────────────────────────────────────────────────────
    // Workflow Queries
    // ─────────────────────────────────────────────────────────

    /// Derive the workflow phase: in-flight wins, then result, then file
    pub fn workflow_state(&self) -> WorkflowState {
        if self.in_flight.is_some() {
            WorkflowState::Analyzing
        } else if self.result.is_some() {
            WorkflowState::Complete
        } else if self.file.is_some() {
            WorkflowState::FileSelected
        } else {
            WorkflowState::Idle
        }
    }

    pub fn file(&self) -> Option<&SelectedFile> {
        self.file.as_ref()
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        self.result.as_ref().map(|(_, result)| result)
    }

    /// Identity of the stored result
    pub fn result_id(&self) -> Option<AnalysisId> {
        self.result.as_ref().map(|(id, _)| *id)
    }

    pub fn in_flight(&self) -> Option<InFlight> {
        self.in_flight
    }

    pub fn is_analyzing(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn last_failure(&self) -> Option<&AnalysisFailure> {
        self.last_failure.as_ref()
    }

    pub fn previews(&self) -> &PreviewRegistry {
        &self.previews
    }

    pub fn demo_mode(&self) -> bool {
        self.demo_mode
    }

    /// Mode the next `analyze()` would use
    pub fn detection_mode(&self) -> DetectionMode {
        DetectionMode::from_demo_flag(self.demo_mode)
    }

    // ─────────────────────────────────────────────────────────
    // Workflow Operations
    // ─────────────────────────────────────────────────────────

    /// Select a file, replacing any previous one.
    ///
    /// The previous file's preview is released when it is dropped here. Any
    /// stored result and any in-flight ticket are discarded.
    pub fn select_file(&mut self, name: impl Into<String>, path: Option<PathBuf>, bytes: Arc<[u8]>) {
        let name = name.into();

        if bytes.len() > ADVISORY_MAX_BYTES {
            warn!(
                "{} is {}, above the advisory {} limit",
                name,
                format_size(bytes.len()),
                format_size(ADVISORY_MAX_BYTES)
            );
        }

        if let Some(dropped) = self.in_flight.take() {
            debug!("Dropping in-flight analysis {} on file change", dropped.id);
        }

        let preview = self.previews.create(Arc::clone(&bytes));
        info!("Selected {} ({})", name, format_size(bytes.len()));

        self.result = None;
        self.last_failure = None;
        self.file = Some(SelectedFile::new(name, path, bytes, preview));
    }

    /// Clear file, preview, result and in-flight ticket
    pub fn reset(&mut self) {
        self.file = None;
        self.result = None;
        self.in_flight = None;
        self.last_failure = None;
        self.spinner_frame = 0;
        debug!("Workflow reset");
    }

    /// Issue a ticket for a new analysis.
    ///
    /// Fails with [`Error::NoFile`] without a file. Returns `Ok(None)` while
    /// another analysis is in flight. Otherwise clears the previous result
    /// and enters `Analyzing`.
    pub fn begin_analysis(&mut self) -> Result<Option<AnalysisTicket>> {
        let file = self.file.as_ref().ok_or(Error::NoFile)?;

        if let Some(running) = self.in_flight {
            debug!("Analysis {} already in flight", running.id);
            return Ok(None);
        }

        let id = self.last_issued.next();
        let mode = self.detection_mode();
        let upload = file.to_upload();

        self.last_issued = id;
        self.result = None;
        self.last_failure = None;
        self.spinner_frame = 0;
        self.in_flight = Some(InFlight { id, mode });

        Ok(Some(AnalysisTicket { id, mode, upload }))
    }

    /// Store a result if `id` is the in-flight analysis.
    ///
    /// Returns `false` for stale completions, which are dropped.
    pub fn complete_analysis(&mut self, id: AnalysisId, result: AnalysisResult) -> bool {
        if !self.is_in_flight(id) {
            return false;
        }
        self.in_flight = None;
        self.result = Some((id, result));
        true
    }

    /// Record a failure if `id` is the in-flight analysis.
    ///
    /// Goes back to `FileSelected` and raises the failure notification.
    /// Returns `false` for stale failures.
    pub fn fail_analysis(&mut self, id: AnalysisId, error: impl Into<String>) -> bool {
        if !self.is_in_flight(id) {
            return false;
        }
        let error = error.into();
        self.in_flight = None;
        self.show_notification(Notification::analysis_failed(error.clone()));
        self.last_failure = Some(AnalysisFailure { id, error });
        true
    }

    fn is_in_flight(&self, id: AnalysisId) -> bool {
        self.in_flight.is_some_and(|running| running.id == id)
    }

    /// Flip demo mode; returns the new value
    pub fn toggle_demo_mode(&mut self) -> bool {
        self.set_demo_mode(!self.demo_mode);
        self.demo_mode
    }

    pub fn set_demo_mode(&mut self, demo_mode: bool) {
        if self.demo_mode != demo_mode {
            self.demo_mode = demo_mode;
            info!("Detection mode: {}", self.detection_mode().label());
        }
    }

    // ─────────────────────────────────────────────────────────
    // UI Helpers
    // ─────────────────────────────────────────────────────────

    pub fn open_file_prompt(&mut self) {
        self.file_prompt.input.clear();
        self.ui_mode = UiMode::FilePrompt;
    }

    pub fn close_file_prompt(&mut self) {
        self.file_prompt.input.clear();
        if self.ui_mode == UiMode::FilePrompt {
            self.ui_mode = UiMode::Main;
        }
    }

    pub fn show_notification(&mut self, notification: Notification) {
        self.notification = Some(notification);
        self.ui_mode = UiMode::Notification;
    }

    pub fn dismiss_notification(&mut self) {
        self.notification = None;
        if self.ui_mode == UiMode::Notification {
            self.ui_mode = UiMode::Main;
        }
    }

    /// Advance animations
    pub fn tick(&mut self) {
        if self.is_analyzing() {
            self.spinner_frame = self.spinner_frame.wrapping_add(1);
        }
    }

    pub fn request_quit(&mut self) {
        self.quitting = true;
    }

    pub fn should_quit(&self) -> bool {
        self.quitting
    }
}
