//! Player struct definition
//!
//! Per-connection game state plus the channel used to reach the connection.

use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TrySendError;

use crate::error::SendError;
use crate::message::ServerMessage;
use crate::types::PlayerId;

/// A registered player of the live round
#[derive(Debug)]
pub struct Player {
    /// Connection identity
    pub id: PlayerId,
    pub display_name: String,
    /// Shared with the round and every other player in it
    pub target_word: Arc<str>,
    pub attempts: u32,
    pub max_attempts: u32,
    pub guessed_correctly: bool,
    pub finished: bool,
    pub started_at: Instant,
    pub finished_at: Option<Instant>,
    /// Server → Client line channel
    pub sender: mpsc::Sender<ServerMessage>,
}

impl Player {
    pub fn new(
        id: PlayerId,
        display_name: String,
        target_word: Arc<str>,
        max_attempts: u32,
        sender: mpsc::Sender<ServerMessage>,
    ) -> Self {
        Self {
            id,
            display_name,
            target_word,
            attempts: 0,
            max_attempts,
            guessed_correctly: false,
            finished: false,
            started_at: Instant::now(),
            finished_at: None,
            sender,
        }
    }

    /// Queue a message for this player without waiting
    ///
    /// A full channel means the peer is not reading; the message is dropped
    /// rather than stalling the round.
    pub fn send(&self, msg: ServerMessage) -> Result<(), SendError> {
        self.sender.try_send(msg).map_err(|e| match e {
            TrySendError::Full(_) => SendError::ChannelFull,
            TrySendError::Closed(_) => SendError::ChannelClosed,
        })
    }

    /// Record a correct guess
    pub fn mark_solved(&mut self, now: Instant) {
        self.guessed_correctly = true;
        self.finished = true;
        self.finished_at = Some(now);
    }

    /// Record a terminal state without a win
    pub fn mark_unsolved(&mut self) {
        self.finished = true;
    }

    pub fn attempts_exhausted(&self) -> bool {
        self.attempts >= self.max_attempts
    }

    /// Time from joining to the winning guess
    pub fn elapsed(&self) -> Option<Duration> {
        self.finished_at
            .map(|at| at.saturating_duration_since(self.started_at))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(sender: mpsc::Sender<ServerMessage>) -> Player {
        Player::new(PlayerId::new(), "Alice".to_string(), Arc::from("CRANE"), 6, sender)
    }

    #[tokio::test]
    async fn test_player_creation() {
        let (tx, _rx) = mpsc::channel(32);
        let player = player(tx);

        assert_eq!(player.attempts, 0);
        assert!(!player.finished);
        assert!(!player.guessed_correctly);
        assert!(player.elapsed().is_none());
    }

    #[tokio::test]
    async fn test_send_to_full_and_closed_channel() {
        let (tx, rx) = mpsc::channel(1);
        let player = player(tx);
        let msg = || ServerMessage::TimeUp {
            word: "CRANE".to_string(),
        };

        assert!(player.send(msg()).is_ok());
        assert!(matches!(player.send(msg()), Err(SendError::ChannelFull)));

        drop(rx);
        assert!(matches!(player.send(msg()), Err(SendError::ChannelClosed)));
    }

    #[tokio::test]
    async fn test_mark_solved_records_elapsed() {
        let (tx, _rx) = mpsc::channel(32);
        let mut player = player(tx);
        let later = player.started_at + Duration::from_secs(42);

        player.mark_solved(later);

        assert!(player.finished);
        assert!(player.guessed_correctly);
        assert_eq!(player.elapsed(), Some(Duration::from_secs(42)));
    }
}
