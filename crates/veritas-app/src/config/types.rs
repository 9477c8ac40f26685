//! Configuration types for Veritas

use std::time::Duration;

use serde::{Deserialize, Serialize};
use veritas_detect::DEFAULT_BASE_URL;

/// Settings loaded from `config.toml`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub api: ApiSettings,

    #[serde(default)]
    pub behavior: BehaviorSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// Detection endpoint settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiSettings {
    /// Base URL; requests go to `{base_url}/detect`
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds. Unset (or 0) waits indefinitely.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: None,
        }
    }
}

impl ApiSettings {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

/// Behavior settings
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct BehaviorSettings {
    /// Start in demo mode (simulated analysis)
    #[serde(default)]
    pub demo_mode: bool,
}

/// Icon set used by the TUI
///
/// `Unicode` works in any terminal; `NerdFonts` needs a patched font.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IconMode {
    #[default]
    Unicode,
    NerdFonts,
}

impl std::fmt::Display for IconMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IconMode::Unicode => write!(f, "unicode"),
            IconMode::NerdFonts => write!(f, "nerd_fonts"),
        }
    }
}

/// UI settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UiSettings {
    #[serde(default)]
    pub icons: IconMode,

    /// Show the feature cards below the main panel
    #[serde(default = "default_true")]
    pub show_features: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            icons: IconMode::default(),
            show_features: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Command-line values that take precedence over the config file
#[derive(Debug, Clone, Default)]
pub struct SettingsOverrides {
    pub demo_mode: Option<bool>,
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
}

impl SettingsOverrides {
    pub fn apply(&self, settings: &mut Settings) {
        if let Some(demo_mode) = self.demo_mode {
            settings.behavior.demo_mode = demo_mode;
        }
        if let Some(base_url) = &self.base_url {
            settings.api.base_url = base_url.clone();
        }
        if let Some(timeout_secs) = self.timeout_secs {
            settings.api.timeout_secs = Some(timeout_secs);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.api.base_url, "https://imagedetection-tw7n.onrender.com");
        assert!(settings.api.timeout().is_none());
        assert!(!settings.behavior.demo_mode);
        assert_eq!(settings.ui.icons, IconMode::Unicode);
        assert!(settings.ui.show_features);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let settings: Settings = toml::from_str("[behavior]\ndemo_mode = true\n").unwrap();
        assert!(settings.behavior.demo_mode);
        assert_eq!(settings.api.base_url, DEFAULT_BASE_URL);
        assert!(settings.ui.show_features);
    }

    #[test]
    fn test_zero_timeout_means_none() {
        let api = ApiSettings {
            timeout_secs: Some(0),
            ..Default::default()
        };
        assert!(api.timeout().is_none());

        let api = ApiSettings {
            timeout_secs: Some(30),
            ..Default::default()
        };
        assert_eq!(api.timeout(), Some(Duration::from_secs(30)));
    }

    #[test]
    fn test_icon_mode_parsing() {
        let settings: Settings = toml::from_str("[ui]\nicons = \"nerd_fonts\"\n").unwrap();
        assert_eq!(settings.ui.icons, IconMode::NerdFonts);
        assert_eq!(IconMode::NerdFonts.to_string(), "nerd_fonts");
    }

    #[test]
    fn test_overrides_win() {
        let mut settings = Settings::default();
        let overrides = SettingsOverrides {
            demo_mode: Some(true),
            base_url: Some("http://localhost:8000".into()),
            timeout_secs: Some(5),
        };

        overrides.apply(&mut settings);

        assert!(settings.behavior.demo_mode);
        assert_eq!(settings.api.base_url, "http://localhost:8000");
        assert_eq!(settings.api.timeout_secs, Some(5));
    }

    #[test]
    fn test_empty_overrides_change_nothing() {
        let mut settings = Settings::default();
        settings.behavior.demo_mode = true;

        SettingsOverrides::default().apply(&mut settings);

        assert!(settings.behavior.demo_mode);
        assert_eq!(settings.api.base_url, DEFAULT_BASE_URL);
    }
}
