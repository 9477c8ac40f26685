//! # veritas-detect - Deepfake Detectors
//!
//! Turns an [`ImageUpload`](veritas_core::ImageUpload) into an
//! [`AnalysisResult`](veritas_core::AnalysisResult).
//!
//! ## Detectors
//! - [`RemoteDetector`] - multipart `POST {base_url}/detect`
//! - [`SimulatedDetector`] - fixed delay, fabricated result
//! - [`DetectorSet`] - both of the above, picked per call by
//!   [`DetectionMode`](veritas_core::DetectionMode)
//!
//! All detectors implement the [`Detector`] trait.

pub mod detector;
pub mod remote;
pub mod simulated;

pub use detector::{Detector, DetectorSet, LocalDetector};
pub use remote::{detect_endpoint, RemoteDetector, DEFAULT_BASE_URL};
pub use simulated::{fabricate, SimulatedDetector, SIMULATED_DELAY, SIMULATED_PROCESSING_TIME};
