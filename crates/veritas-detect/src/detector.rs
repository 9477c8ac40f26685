//! Detector trait and the per-mode dispatcher

use std::sync::Arc;
use std::time::Duration;

use veritas_core::prelude::*;
use veritas_core::{AnalysisResult, DetectionMode, ImageUpload};

use crate::remote::RemoteDetector;
use crate::simulated::SimulatedDetector;

/// Produces an analysis for one image.
///
/// Implementations make exactly one attempt per call. No retries.
#[trait_variant::make(Detector: Send)]
pub trait LocalDetector {
    /// Classify the upload
    async fn detect(&self, upload: &ImageUpload) -> Result<AnalysisResult>;

    /// Short name for logs
    fn name(&self) -> &'static str;
}

/// The simulated and remote detectors side by side.
///
/// The mode is chosen per call, so flipping demo mode only affects the next
/// analysis.
#[derive(Clone)]
pub struct DetectorSet {
    simulated: Arc<SimulatedDetector>,
    remote: Arc<RemoteDetector>,
}

impl DetectorSet {
    pub fn new(simulated: SimulatedDetector, remote: RemoteDetector) -> Self {
        Self {
            simulated: Arc::new(simulated),
            remote: Arc::new(remote),
        }
    }

    /// Build from an endpoint base URL and optional request timeout
    pub fn from_endpoint(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        Ok(Self::new(
            SimulatedDetector::new(),
            RemoteDetector::new(base_url, timeout)?,
        ))
    }

    pub fn remote(&self) -> &RemoteDetector {
        &self.remote
    }

    pub fn simulated(&self) -> &SimulatedDetector {
        &self.simulated
    }

    /// Run the detector for `mode`
    pub async fn detect(&self, mode: DetectionMode, upload: &ImageUpload) -> Result<AnalysisResult> {
        match mode {
            DetectionMode::Simulated => run(self.simulated.as_ref(), upload).await,
            DetectionMode::Remote => run(self.remote.as_ref(), upload).await,
        }
    }
}

async fn run<D: Detector>(detector: &D, upload: &ImageUpload) -> Result<AnalysisResult> {
    debug!(
        "Running {} detector on {} ({} bytes)",
        Detector::name(detector),
        upload.file_name,
        upload.bytes.len()
    );
    Detector::detect(detector, upload).await
}

impl std::fmt::Debug for DetectorSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DetectorSet")
            .field("endpoint", &self.remote.endpoint().as_str())
            .field("simulated_delay", &self.simulated.delay())
            .finish()
    }
}
