//! Multiplayer word-guessing round server
//!
//! Players connect over TCP and share one secret word per round. Each
//! player gets per-letter feedback on their own guesses; when everyone has
//! finished (or the round timer runs out) the results are broadcast and a
//! fresh round begins.
//!
//! # Features
//! - Line-oriented TCP protocol (`FEEDBACK:` / `SERVER:` lines)
//! - Duplicate-aware guess evaluation
//! - Fixed player quota per round with a round timer
//! - Winner by fewest attempts, then fastest time
//! - Disconnected players count as finished so rounds never hang
//!
//! # Architecture
//! Uses the Actor pattern with `mpsc` channels:
//! - `RoundCoordinator` is the single writer for the live round
//! - Each connection has a `handler` task communicating with the coordinator
//! - The round timer reports back through the same mailbox, tagged with
//!   the id of the round it belongs to
//!
//! # Example
//! ```ignore
//! use std::sync::Arc;
//! use tokio::net::TcpListener;
//! use wordle_server::{serve, Dictionary, GameConfig, RoundCoordinator};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = GameConfig::default();
//!     let dictionary = Arc::new(Dictionary::load(&config.word_list, 5).await.unwrap());
//!     let listener = TcpListener::bind(&config.bind_addr).await.unwrap();
//!
//!     let cmd_tx = RoundCoordinator::spawn(dictionary, config);
//!     serve(listener, cmd_tx).await;
//! }
//! ```

pub mod config;
pub mod coordinator;
pub mod dictionary;
pub mod error;
pub mod feedback;
pub mod handler;
pub mod listener;
pub mod message;
pub mod player;
pub mod round;
pub mod timer;
pub mod types;

// Re-export main types for convenience
pub use config::GameConfig;
pub use coordinator::{RoundCoordinator, ServerCommand};
pub use dictionary::Dictionary;
pub use error::{AppError, RoundError, SendError};
pub use feedback::{evaluate, Feedback, Mark};
pub use handler::handle_connection;
pub use listener::serve;
pub use message::{ClientMessage, RoundResults, ServerMessage, Standing};
pub use player::Player;
pub use round::Round;
pub use types::{PlayerId, RoundId, RoundPhase};
