//! Settings file loading and initialization

use std::path::{Path, PathBuf};

use veritas_core::prelude::*;

use super::types::Settings;

const CONFIG_DIR_NAME: &str = "veritas";
const CONFIG_FILENAME: &str = "config.toml";

/// Platform config directory for Veritas, e.g. `~/.config/veritas`
pub fn default_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME))
}

/// Path of the settings file inside `config_dir`
pub fn config_file_path(config_dir: &Path) -> PathBuf {
    config_dir.join(CONFIG_FILENAME)
}

// ─────────────────────────────────────────────────────────────────────────────
// Settings Loading
// ─────────────────────────────────────────────────────────────────────────────

/// Load settings from `config_dir/config.toml`
///
/// Returns default settings if the file doesn't exist or can't be parsed.
pub fn load_settings(config_dir: &Path) -> Settings {
    let config_path = config_file_path(config_dir);

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Write the default `config.toml` into `config_dir` if none exists.
///
/// Returns the path of the (new or existing) file.
pub fn init_config(config_dir: &Path) -> Result<PathBuf> {
    if !config_dir.exists() {
        std::fs::create_dir_all(config_dir)
            .map_err(|e| Error::config(format!("Failed to create config dir: {}", e)))?;
    }

    let config_path = config_file_path(config_dir);
    if config_path.exists() {
        debug!("Config file already present at {:?}", config_path);
        return Ok(config_path);
    }

    std::fs::write(&config_path, generate_default_config())
        .map_err(|e| Error::config(format!("Failed to write config.toml: {}", e)))?;
    info!("Created default config at {:?}", config_path);

    Ok(config_path)
}

fn generate_default_config() -> String {
    r#"# Veritas Configuration

[api]
base_url = "https://imagedetection-tw7n.onrender.com"
# timeout_secs = 30     # Unset = wait for the server indefinitely

[behavior]
demo_mode = false       # true = simulate results locally, no network

[ui]
icons = "unicode"       # or "nerd_fonts"
show_features = true
"#
    .to_string()
}
