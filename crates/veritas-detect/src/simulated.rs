//! Local simulation used in demo mode

use std::time::Duration;

use rand::Rng;

use veritas_core::prelude::*;
use veritas_core::{AnalysisResult, ImageUpload};

use crate::detector::Detector;

/// How long a simulated analysis takes
pub const SIMULATED_DELAY: Duration = Duration::from_secs(2);

/// Reported `processing_time` of every simulated result, in seconds
pub const SIMULATED_PROCESSING_TIME: f64 = 1.2;

/// Fabricate a plausible result.
///
/// The verdict is a coin flip; label and raw scores follow it, and the
/// confidence lands in `[0.85, 0.99)`.
pub fn fabricate<R: Rng + ?Sized>(rng: &mut R) -> AnalysisResult {
    let is_fake = rng.gen_bool(0.5);
    let (label, fake_score, real_score) = if is_fake {
        ("AI", 0.9, 0.1)
    } else {
        ("Real", 0.1, 0.9)
    };

    AnalysisResult {
        is_fake,
        confidence: rng.gen_range(0.85..0.99),
        label: label.to_string(),
        processing_time: Some(SIMULATED_PROCESSING_TIME),
        fake_score: Some(fake_score),
        real_score: Some(real_score),
        message: None,
    }
}

/// Detector that never touches the network and never fails
#[derive(Debug, Clone)]
pub struct SimulatedDetector {
    delay: Duration,
}

impl Default for SimulatedDetector {
    fn default() -> Self {
        Self {
            delay: SIMULATED_DELAY,
        }
    }
}

impl SimulatedDetector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Detector for SimulatedDetector {
    async fn detect(&self, upload: &ImageUpload) -> Result<AnalysisResult> {
        info!("Running in demo mode for {}", upload.file_name);
        tokio::time::sleep(self.delay).await;
        // ThreadRng is !Send, keep it out of the await
        let result = fabricate(&mut rand::thread_rng());
        Ok(result)
    }

    fn name(&self) -> &'static str {
        "simulated"
    }
}
