//! Domain types for the upload, analyze, display workflow

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize};

use crate::preview::PreviewHandle;

/// Size shown in the advisory upload text ("Max 10MB"). Not enforced.
pub const ADVISORY_MAX_BYTES: usize = 10 * 1024 * 1024;

// ─────────────────────────────────────────────────────────────────────────────
// Workflow
// ─────────────────────────────────────────────────────────────────────────────

/// Identity of a single `analyze()` run.
///
/// Issued in increasing order by the controller. A stored result keeps the id
/// of the run that produced it, which the view uses to key its animations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct AnalysisId(u64);

impl AnalysisId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn get(self) -> u64 {
        self.0
    }

    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

impl fmt::Display for AnalysisId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Where an analysis is performed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DetectionMode {
    /// Fabricate a plausible result locally after a fixed delay
    Simulated,
    /// POST the image to the detection endpoint
    #[default]
    Remote,
}

impl DetectionMode {
    /// Map the user-facing demo flag to a mode
    pub fn from_demo_flag(demo_mode: bool) -> Self {
        if demo_mode {
            DetectionMode::Simulated
        } else {
            DetectionMode::Remote
        }
    }

    pub fn is_simulated(self) -> bool {
        matches!(self, DetectionMode::Simulated)
    }

    pub fn label(self) -> &'static str {
        match self {
            DetectionMode::Simulated => "Demo Mode",
            DetectionMode::Remote => "Real API",
        }
    }
}

/// Observable phase of the upload workflow.
///
/// Derived from controller fields; see `AppState::workflow_state`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkflowState {
    /// No file chosen
    #[default]
    Idle,
    /// File chosen, not analyzed yet (or the last analysis failed)
    FileSelected,
    /// Request in flight
    Analyzing,
    /// Result present
    Complete,
}

impl WorkflowState {
    pub fn label(&self) -> &'static str {
        match self {
            WorkflowState::Idle => "Idle",
            WorkflowState::FileSelected => "File Selected",
            WorkflowState::Analyzing => "Analyzing",
            WorkflowState::Complete => "Complete",
        }
    }

    pub fn is_busy(&self) -> bool {
        matches!(self, WorkflowState::Analyzing)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Analysis Result
// ─────────────────────────────────────────────────────────────────────────────

/// Primary classification outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Deepfake,
    LikelyReal,
}

impl Verdict {
    pub fn from_is_fake(is_fake: bool) -> Self {
        if is_fake {
            Verdict::Deepfake
        } else {
            Verdict::LikelyReal
        }
    }

    pub fn headline(self) -> &'static str {
        match self {
            Verdict::Deepfake => "DEEPFAKE DETECTED",
            Verdict::LikelyReal => "LIKELY REAL",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Verdict::Deepfake => "High probability of digital manipulation artifacts found.",
            Verdict::LikelyReal => "No significant digital anomalies detected.",
        }
    }
}

/// Outcome of one analysis run, as returned by the detection endpoint.
///
/// Deserialization is lenient: missing or `null` fields fall back to their
/// defaults and unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_fake: bool,

    /// Model certainty in `[0, 1]`. `0` when the reply omits it.
    #[serde(default, deserialize_with = "null_as_default")]
    pub confidence: f64,

    /// Raw classifier label, diagnostic only
    #[serde(default, deserialize_with = "null_as_default")]
    pub label: String,

    /// Seconds spent on inference, when reported
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub processing_time: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fake_score: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub real_score: Option<f64>,

    /// Backend note attached to fallback and error replies
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Format with `digits` decimals, rounding ties away from zero.
///
/// `format!("{:.1}")` rounds ties to even, so 56.25 would print as "56.2".
fn to_fixed(value: f64, digits: usize) -> String {
    let factor = 10f64.powi(digits as i32);
    format!("{:.*}", digits, (value * factor).round() / factor)
}

impl AnalysisResult {
    pub fn verdict(&self) -> Verdict {
        Verdict::from_is_fake(self.is_fake)
    }

    /// Confidence scaled to a percentage (not clamped)
    pub fn confidence_percent(&self) -> f64 {
        self.confidence * 100.0
    }

    /// Confidence percentage with one decimal place, e.g. `"93.0"`
    pub fn confidence_display(&self) -> String {
        to_fixed(self.confidence_percent(), 1)
    }

    /// Both raw scores, or `None` if either is missing
    pub fn raw_scores(&self) -> Option<(f64, f64)> {
        match (self.fake_score, self.real_score) {
            (Some(fake), Some(real)) => Some((fake, real)),
            _ => None,
        }
    }

    /// Raw-output detail line, e.g. `"Fake: 90% / Real: 10%"` or `"N/A"`
    pub fn raw_output_display(&self) -> String {
        match self.raw_scores() {
            Some((fake, real)) => format!(
                "Fake: {}% / Real: {}%",
                to_fixed(fake * 100.0, 0),
                to_fixed(real * 100.0, 0)
            ),
            None => "N/A".to_string(),
        }
    }

    pub fn processing_time_display(&self) -> Option<String> {
        self.processing_time.map(|t| format!("Processed in {}s", t))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Files
// ─────────────────────────────────────────────────────────────────────────────

/// Image payload handed to a detector
#[derive(Clone)]
pub struct ImageUpload {
    pub file_name: String,
    /// Sniffed MIME type, when the bytes look like a known image format
    pub mime: Option<String>,
    pub bytes: Arc<[u8]>,
}

impl fmt::Debug for ImageUpload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageUpload")
            .field("file_name", &self.file_name)
            .field("mime", &self.mime)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// The user-chosen image.
///
/// Owns its preview handle, so dropping or replacing a `SelectedFile`
/// releases the preview.
pub struct SelectedFile {
    name: String,
    path: Option<PathBuf>,
    bytes: Arc<[u8]>,
    preview: PreviewHandle,
}

impl SelectedFile {
    pub fn new(
        name: impl Into<String>,
        path: Option<PathBuf>,
        bytes: Arc<[u8]>,
        preview: PreviewHandle,
    ) -> Self {
        Self {
            name: name.into(),
            path,
            bytes,
            preview,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn bytes(&self) -> &Arc<[u8]> {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn preview(&self) -> &PreviewHandle {
        &self.preview
    }

    /// Whether the file exceeds the advisory upload size
    pub fn exceeds_advisory_size(&self) -> bool {
        self.len() > ADVISORY_MAX_BYTES
    }

    pub fn to_upload(&self) -> ImageUpload {
        ImageUpload {
            file_name: self.name.clone(),
            mime: self.preview.mime().map(str::to_string),
            bytes: Arc::clone(&self.bytes),
        }
    }
}

impl fmt::Debug for SelectedFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectedFile")
            .field("name", &self.name)
            .field("path", &self.path)
            .field("len", &self.bytes.len())
            .field("preview", &self.preview)
            .finish()
    }
}

/// Format a byte count for display, e.g. `"1.5 MB"`
pub fn format_size(bytes: usize) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = KB * 1024.0;
    let b = bytes as f64;
    if b >= MB {
        format!("{:.1} MB", b / MB)
    } else if b >= KB {
        format!("{:.1} KB", b / KB)
    } else {
        format!("{} B", bytes)
    }
}
