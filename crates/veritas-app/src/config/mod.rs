//! Configuration file parsing for Veritas
//!
//! Settings live in `<config_dir>/veritas/config.toml`. Command-line flags
//! are layered on top through [`SettingsOverrides`].

pub mod settings;
pub mod types;

pub use settings::{config_file_path, default_config_dir, init_config, load_settings};
pub use types::*;
