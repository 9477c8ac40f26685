//! veritas-app - Application state and orchestration for Veritas
//!
//! This crate implements the TEA (The Elm Architecture) pattern for the
//! upload, analyze, display workflow: `AppState` is the model, `Message`s
//! drive `handler::update()`, and background work (file reads, detector
//! calls) is spawned from `UpdateAction`s and reports back as messages. The
//! `Engine` wraps all of it for the TUI and headless runners.

pub mod actions;
pub mod config;
pub mod engine;
pub mod engine_event;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod process;
pub mod signals;
pub mod state;

// Re-export primary types
pub use engine::Engine;
pub use engine_event::EngineEvent;
pub use handler::{Task, UpdateAction, UpdateResult};
pub use message::Message;
pub use state::{AppState, Notification, UiMode};

// Re-export detector types for runners
pub use veritas_detect::{DetectorSet, SimulatedDetector};
