//! Line protocol definitions
//!
//! One newline-terminated text line per event. Client lines are parsed
//! into `ClientMessage`; `ServerMessage` renders through `Display` with a
//! `FEEDBACK:` or `SERVER:` prefix.

use std::fmt;
use std::time::Duration;

use crate::error::RoundError;
use crate::feedback::Feedback;

/// Sentinel a client sends when its local countdown expires
pub const TIMED_OUT: &str = "TIMED_OUT";

/// Client → Server message after the display-name line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientMessage {
    /// Player's own timer ran out
    TimedOut,
    /// A guess, still unvalidated
    Guess(String),
}

impl ClientMessage {
    /// Parse one line (without the trailing newline)
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        if line == TIMED_OUT {
            ClientMessage::TimedOut
        } else {
            ClientMessage::Guess(line.to_string())
        }
    }
}

/// One player's entry in the final results
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Standing {
    pub name: String,
    /// Attempts and elapsed time, present only for players who guessed it
    pub solved: Option<(u32, Duration)>,
}

/// Outcome of a round, ready to broadcast
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResults {
    pub target_word: String,
    /// Index into `standings`
    pub winner: Option<usize>,
    pub standings: Vec<Standing>,
}

/// Server → Client message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServerMessage {
    /// Per-letter marks for an accepted guess
    Feedback(Feedback),
    /// Player guessed the word
    Solved { attempts: u32, word: String },
    /// Player used up all attempts
    OutOfAttempts { word: String },
    /// Player's time ran out
    TimeUp { word: String },
    /// A player joined the round
    PlayerJoined { name: String },
    /// Current roster, in join order
    Players { names: Vec<String> },
    /// Final results for the round
    Results(RoundResults),
    /// Rejection of a line
    Error(RoundError),
}

impl fmt::Display for ServerMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerMessage::Feedback(feedback) => write!(f, "FEEDBACK: {}", feedback),
            ServerMessage::Solved { attempts, word } => write!(
                f,
                "FEEDBACK: You guessed it in {} tries! The word was: {}",
                attempts, word
            ),
            ServerMessage::OutOfAttempts { word } => {
                write!(f, "FEEDBACK: Out of attempts! The word was: {}", word)
            }
            ServerMessage::TimeUp { word } => {
                write!(f, "FEEDBACK: Time's up! The word was: {}", word)
            }
            ServerMessage::PlayerJoined { name } => {
                write!(f, "SERVER: {} has joined the game!", name)
            }
            ServerMessage::Players { names } => write!(f, "SERVER: Players: {}", names.join(" ")),
            ServerMessage::Results(results) => write_results(f, results),
            ServerMessage::Error(err) => match err {
                RoundError::RoundInProgress => write!(
                    f,
                    "SERVER: A round is already in progress. Try again later."
                ),
                RoundError::NotRegistered => write!(f, "SERVER: You are not in this round."),
                RoundError::AlreadyFinished => {
                    write!(f, "FEEDBACK: You have already finished this round.")
                }
                RoundError::InvalidGuess(_) => {
                    write!(f, "FEEDBACK: Invalid Guess! Word not in list!")
                }
            },
        }
    }
}

/// Results span several lines, each carrying the `SERVER:` prefix
fn write_results(f: &mut fmt::Formatter<'_>, results: &RoundResults) -> fmt::Result {
    writeln!(f, "SERVER: GAME OVER! Final results:")?;

    match results.winner.and_then(|i| results.standings.get(i)) {
        Some(Standing {
            name,
            solved: Some((attempts, elapsed)),
        }) => writeln!(
            f,
            "SERVER: WINNER: {} guessed the word {} in {} attempts and {}s",
            name,
            results.target_word,
            attempts,
            elapsed.as_secs()
        )?,
        _ => writeln!(
            f,
            "SERVER: No one guessed the word correctly. The correct word was: {}",
            results.target_word
        )?,
    }

    let mut lines = results.standings.iter().peekable();
    while let Some(standing) = lines.next() {
        match standing.solved {
            Some((attempts, elapsed)) => write!(
                f,
                "SERVER: - {} - {} attempts, {}s",
                standing.name,
                attempts,
                elapsed.as_secs()
            )?,
            None => write!(f, "SERVER: - {} - did not finish", standing.name)?,
        }
        if lines.peek().is_some() {
            writeln!(f)?;
        }
    }
    Ok(())
}

impl From<RoundError> for ServerMessage {
    fn from(err: RoundError) -> Self {
        ServerMessage::Error(err)
    }
}
