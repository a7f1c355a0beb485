//! Word round server - Entry Point
//!
//! Loads the word list, starts the RoundCoordinator actor and accepts
//! player connections.

use std::env;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use wordle_server::{serve, Dictionary, GameConfig, RoundCoordinator};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Use RUST_LOG env var to control log level
    // e.g., RUST_LOG=debug or RUST_LOG=wordle_server=trace
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("wordle_server=info")),
        )
        .init();

    let mut config = GameConfig::from_env()?;

    // Bind address from command line takes precedence
    if let Some(addr) = env::args().nth(1) {
        config.bind_addr = addr;
    }

    // An unusable word list means no round can ever start
    let dictionary = match Dictionary::load(&config.word_list, config.word_length).await {
        Ok(dictionary) => Arc::new(dictionary),
        Err(e) => {
            error!(
                "Cannot load word list {}: {}",
                config.word_list.display(),
                e
            );
            return Err(e.into());
        }
    };

    let listener = TcpListener::bind(&config.bind_addr).await?;
    info!("Word server listening on {}", config.bind_addr);
    info!(
        "{} players per round, {} attempts each, {}s per round",
        config.player_quota,
        config.max_attempts,
        config.round_duration.as_secs()
    );

    let cmd_tx = RoundCoordinator::spawn(dictionary, config);
    info!("RoundCoordinator actor started");

    serve(listener, cmd_tx).await;

    Ok(())
}
