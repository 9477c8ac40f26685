//! OS signal handling for graceful shutdown

use tokio::sync::mpsc;

use veritas_core::prelude::*;

use crate::message::Message;

/// Spawn a task that turns SIGINT/SIGTERM (Ctrl+C on Windows) into
/// `Message::Quit`
pub fn spawn_signal_handler(tx: mpsc::Sender<Message>) {
    tokio::spawn(async move {
        match next_signal().await {
            Ok(name) => {
                info!("Received {}, quitting", name);
                let _ = tx.send(Message::Quit).await;
            }
            Err(e) => error!("Signal handler error: {}", e),
        }
    });
}

#[cfg(unix)]
async fn next_signal() -> Result<&'static str> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut sigint = signal(SignalKind::interrupt())
        .map_err(|e| Error::signal(format!("SIGINT handler: {}", e)))?;
    let mut sigterm = signal(SignalKind::terminate())
        .map_err(|e| Error::signal(format!("SIGTERM handler: {}", e)))?;

    let name = tokio::select! {
        _ = sigint.recv() => "SIGINT",
        _ = sigterm.recv() => "SIGTERM",
    };
    Ok(name)
}

#[cfg(not(unix))]
async fn next_signal() -> Result<&'static str> {
    tokio::signal::ctrl_c()
        .await
        .map_err(|e| Error::signal(format!("Ctrl+C handler: {}", e)))?;
    Ok("Ctrl+C")
}
