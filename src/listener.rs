//! Connection accept loop
//!
//! Spawns one `handle_connection` task per accepted TCP stream.

use tokio::net::TcpListener;
use tokio::sync::mpsc;
use tracing::{error, info};

use crate::coordinator::ServerCommand;
use crate::handler::handle_connection;

/// Accept connections forever
///
/// Accept errors are logged and the loop keeps going.
pub async fn serve(listener: TcpListener, cmd_tx: mpsc::Sender<ServerCommand>) {
    loop {
        match listener.accept().await {
            Ok((stream, addr)) => {
                info!("New connection from {}", addr);
                let cmd_tx = cmd_tx.clone();

                // Spawn handler task for each connection
                tokio::spawn(async move {
                    if let Err(e) = handle_connection(stream, cmd_tx).await {
                        error!("Connection handler error: {}", e);
                    }
                });
            }
            Err(e) => {
                error!("Failed to accept connection: {}", e);
            }
        }
    }
}
