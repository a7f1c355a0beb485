//! Error types for the word server
//!
//! Defines startup/fatal errors, per-round business errors and
//! outbound delivery errors. Uses thiserror for ergonomic error definitions.

use thiserror::Error;

/// Application-level errors
///
/// Fatal for the process (startup) or for a single connection.
#[derive(Debug, Error)]
pub enum AppError {
    /// IO error (fatal for the connection, or for startup)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Channel send error (fatal - coordinator mailbox closed)
    #[error("Channel send error")]
    ChannelSend,

    /// No usable words in the word list
    #[error("Word list contains no valid {0}-letter words")]
    EmptyDictionary(usize),

    /// A configuration value could not be parsed
    #[error("Invalid value {value:?} for {key}")]
    Config { key: &'static str, value: String },

    /// Target and guess differ in length
    #[error("Guess length {guess} does not match target length {target}")]
    LengthMismatch { target: usize, guess: usize },
}

/// Round-level errors
///
/// Rejections reported back to the player as a protocol line; the
/// connection stays open unless the player could not join.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoundError {
    /// The round already has its quota of players
    #[error("Round in progress")]
    RoundInProgress,

    /// The player is not part of the live round
    #[error("Not registered")]
    NotRegistered,

    /// The player already won, ran out of attempts or timed out
    #[error("Already finished")]
    AlreadyFinished,

    /// Wrong length, non-alphabetic or not in the word list
    #[error("Invalid guess: {0}")]
    InvalidGuess(String),
}

/// Message send errors
///
/// Occurs when a player's outbound channel cannot take a message.
#[derive(Debug, Error)]
pub enum SendError {
    /// The receiving end of the channel has been closed
    #[error("Channel closed")]
    ChannelClosed,

    /// The peer is not draining its channel
    #[error("Channel full")]
    ChannelFull,
}
