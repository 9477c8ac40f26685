//! Main TUI runner - entry point and event loop

use std::path::PathBuf;

use veritas_app::config::Settings;
use veritas_app::{Engine, Message};
use veritas_core::prelude::*;

use super::render::{self, ViewState};
use super::{event, terminal};

/// Run the TUI.
///
/// `initial_image`, when given, is loaded as if it had been picked in the
/// file prompt.
pub async fn run(settings: Settings, initial_image: Option<PathBuf>) -> Result<()> {
    // Build the engine first: a bad endpoint URL fails before the
    // terminal switches to raw mode
    let mut engine = Engine::new(settings)?;

    if let Some(path) = initial_image {
        info!("Preselecting {}", path.display());
        engine.process_message(Message::LoadFile { path });
    }

    terminal::install_panic_hook();
    let mut term = ratatui::init();
    let mut view_state = ViewState::default();

    let result = run_loop(&mut term, &mut engine, &mut view_state);

    if let Err(e) = &result {
        error!("TUI loop failed: {}", e);
    }

    engine.shutdown().await;
    ratatui::restore();
    info!("Veritas exiting");

    result
}

/// Main event loop
fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    engine: &mut Engine,
    view_state: &mut ViewState,
) -> Result<()> {
    while !engine.should_quit() {
        // Task results and signals
        engine.drain_pending_messages();

        terminal.draw(|frame| render::view(frame, &engine.state, view_state))?;

        if let Some(message) = event::poll()? {
            engine.process_message(message);
        }
    }

    Ok(())
}
