//! # veritas-core - Core Domain Types
//!
//! Foundation crate for Veritas. Provides the analysis data model, error
//! handling, logging setup, and the preview registry.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, tracing, image, base64).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`AnalysisResult`] - Outcome of one analysis run (verdict, confidence, raw scores)
//! - [`WorkflowState`] - Idle / FileSelected / Analyzing / Complete
//! - [`SelectedFile`] - The user-chosen image and its preview handle
//! - [`ImageUpload`] - Payload handed to a detector
//! - [`DetectionMode`] - Simulated or remote analysis
//! - [`AnalysisId`] - Identity of one `analyze()` run
//!
//! ### Previews (`preview`)
//! - [`PreviewRegistry`] - Issues and resolves preview URIs
//! - [`PreviewHandle`] - Scoped preview; dropping it revokes the URI
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use veritas_core::prelude::*;
//! ```

pub mod error;
pub mod logging;
pub mod preview;
pub mod types;

/// Prelude for common imports used throughout all Veritas crates
pub mod prelude {
    pub use super::error::{Error, Result};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result};
pub use preview::{PreviewHandle, PreviewId, PreviewRegistry};
pub use types::{
    AnalysisId, AnalysisResult, DetectionMode, ImageUpload, SelectedFile, Verdict, WorkflowState,
    ADVISORY_MAX_BYTES,
};
