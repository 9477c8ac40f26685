//! Centralized theme for the Veritas TUI.
//!
//! - `palette`: Raw color constants
//! - `styles`: Semantic style builder functions
//! - `icons`: Icon glyphs with Unicode and Nerd Font variants

pub mod icons;
pub mod palette;
pub mod styles;
