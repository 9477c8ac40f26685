//! Veritas - deepfake detection client for the terminal
//!
//! This is the binary entry point: argument parsing, settings, logging, and
//! the choice between the TUI and headless mode.

mod headless;

use std::path::PathBuf;

use clap::Parser;
use veritas_app::config::{self, Settings, SettingsOverrides};
use veritas_core::prelude::*;

use crate::headless::HeadlessOutcome;

/// Veritas - detect deepfakes from the terminal
#[derive(Parser, Debug)]
#[command(name = "veritas")]
#[command(about = "Upload an image and check it for AI-generated manipulation", long_about = None)]
struct Args {
    /// Image to preselect (required with --headless)
    #[arg(value_name = "IMAGE")]
    image: Option<PathBuf>,

    /// Run one analysis and print NDJSON events instead of the TUI
    #[arg(long, requires = "image")]
    headless: bool,

    /// Fabricate results locally instead of calling the API
    #[arg(long, conflicts_with = "real")]
    demo: bool,

    /// Use the detection API (default)
    #[arg(long)]
    real: bool,

    /// Base URL of the detection service; `/detect` is appended
    #[arg(long, value_name = "URL")]
    api_url: Option<String>,

    /// Request timeout in seconds (0 disables it)
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,

    /// Directory holding config.toml
    #[arg(long, value_name = "DIR")]
    config_dir: Option<PathBuf>,

    /// Write a default config.toml and exit
    #[arg(long)]
    init_config: bool,
}

impl Args {
    fn overrides(&self) -> SettingsOverrides {
        let demo_mode = match (self.demo, self.real) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        };

        SettingsOverrides {
            demo_mode,
            base_url: self.api_url.clone(),
            timeout_secs: self.timeout,
        }
    }

    fn config_dir(&self) -> Option<PathBuf> {
        self.config_dir.clone().or_else(config::default_config_dir)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    color_eyre::install().map_err(|e| Error::startup(e.to_string()))?;

    // Logs go to a file: the TUI owns the terminal, headless mode owns stdout
    veritas_core::logging::init()?;

    info!("Mode: {}", if args.headless { "headless" } else { "tui" });

    let config_dir = args.config_dir();

    if args.init_config {
        let Some(dir) = config_dir else {
            return Err(Error::config("No config directory available on this platform"));
        };
        let path = config::init_config(&dir)?;
        eprintln!("Config file: {}", path.display());
        return Ok(());
    }

    let mut settings = match &config_dir {
        Some(dir) => config::load_settings(dir),
        None => {
            warn!("No config directory available, using defaults");
            Settings::default()
        }
    };
    args.overrides().apply(&mut settings);

    info!(
        "Settings: demo_mode={}, base_url={}, timeout={:?}",
        settings.behavior.demo_mode,
        settings.api.base_url,
        settings.api.timeout()
    );

    let result = match (args.headless, args.image) {
        (true, Some(image)) => match headless::run_headless(settings, image).await {
            Ok(HeadlessOutcome::Completed) => Ok(()),
            Ok(HeadlessOutcome::Failed) => std::process::exit(2),
            Err(e) => Err(e),
        },
        (_, image) => veritas_tui::run(settings, image).await,
    };

    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }

    info!("Veritas exiting");
    result
}
