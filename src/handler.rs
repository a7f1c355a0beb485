//! TCP connection handler
//!
//! Handles one player connection: reads the display name, registers with
//! the RoundCoordinator, then forwards each line as a command while a
//! write task drains the player's outbound channel onto the socket.

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpStream;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::coordinator::ServerCommand;
use crate::error::AppError;
use crate::message::{ClientMessage, ServerMessage};
use crate::types::PlayerId;

/// Outbound lines buffered per player before messages are dropped
pub const OUTBOUND_BUFFER_SIZE: usize = 32;

/// Handle a new TCP connection
///
/// Returns when the client disconnects, or when the coordinator drops the
/// player's channel at the end of the round.
///
/// Lines are forwarded without waiting for the previous reply; replies stay
/// in order because the mailbox and the outbound channel are both FIFO.
pub async fn handle_connection(
    stream: TcpStream,
    cmd_tx: mpsc::Sender<ServerCommand>,
) -> Result<(), AppError> {
    let peer_addr = stream
        .peer_addr()
        .map(|a| a.to_string())
        .unwrap_or_else(|_| "unknown".to_string());

    let (read_half, mut write_half) = stream.into_split();
    let mut lines = BufReader::new(read_half).lines();

    // First line is the display name
    let Some(name) = lines.next_line().await? else {
        debug!("{} closed before sending a name", peer_addr);
        return Ok(());
    };
    let display_name = match name.trim() {
        "" => "Unknown".to_string(),
        name => name.to_string(),
    };

    let player_id = PlayerId::new();
    info!("Player {} ({}) connected from {}", display_name, player_id, peer_addr);

    // Server -> client lines
    let (msg_tx, mut msg_rx) = mpsc::channel::<ServerMessage>(OUTBOUND_BUFFER_SIZE);

    if cmd_tx
        .send(ServerCommand::Join {
            player_id,
            display_name,
            sender: msg_tx,
        })
        .await
        .is_err()
    {
        warn!("Failed to register {} - coordinator closed", player_id);
        return Err(AppError::ChannelSend);
    }

    let cmd_tx_read = cmd_tx.clone();

    // Socket -> ServerCommand
    let mut read_task = tokio::spawn(async move {
        loop {
            match lines.next_line().await {
                Ok(Some(line)) => {
                    let cmd = match ClientMessage::parse(&line) {
                        ClientMessage::TimedOut => ServerCommand::TimedOut { player_id },
                        ClientMessage::Guess(text) => ServerCommand::Guess { player_id, text },
                    };
                    if cmd_tx_read.send(cmd).await.is_err() {
                        debug!("Coordinator closed, ending read task for {}", player_id);
                        break;
                    }
                }
                Ok(None) => {
                    debug!("{} closed the connection", player_id);
                    break;
                }
                Err(e) => {
                    warn!("Read error for {}: {}", player_id, e);
                    break;
                }
            }
        }
    });

    // ServerMessage -> socket
    let mut write_task = tokio::spawn(async move {
        while let Some(msg) = msg_rx.recv().await {
            let line = format!("{}\n", msg);
            if let Err(e) = write_half.write_all(line.as_bytes()).await {
                debug!("Write failed, ending write task: {}", e);
                break;
            }
        }
        let _ = write_half.shutdown().await;
        debug!("Write task ended for {}", player_id);
    });

    // Wait for either task to complete
    tokio::select! {
        _ = &mut read_task => {
            debug!("Read task completed for {}", player_id);
        }
        _ = &mut write_task => {
            debug!("Write task completed for {}", player_id);
            read_task.abort();
        }
    }

    // Counts as finished-without-win if the round is still running
    let _ = cmd_tx.send(ServerCommand::Disconnect { player_id }).await;

    info!("Player {} disconnected", player_id);

    Ok(())
}
