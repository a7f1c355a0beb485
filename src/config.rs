//! Server and round settings
//!
//! Every value has a fixed default and can be overridden through an
//! environment variable.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::error::AppError;

/// Default listening address
pub const DEFAULT_ADDR: &str = "0.0.0.0:5001";

#[derive(Debug, Clone)]
pub struct GameConfig {
    pub bind_addr: String,
    pub word_list: PathBuf,
    pub round_duration: Duration,
    pub max_attempts: u32,
    pub player_quota: usize,
    pub word_length: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_ADDR.to_string(),
            word_list: PathBuf::from("words.txt"),
            round_duration: Duration::from_secs(120),
            max_attempts: 6,
            player_quota: 2,
            word_length: 5,
        }
    }
}

impl GameConfig {
    /// Defaults overridden by `WORDLE_*` environment variables
    pub fn from_env() -> Result<Self, AppError> {
        let defaults = Self::default();
        Ok(Self {
            bind_addr: env::var("WORDLE_ADDR").unwrap_or(defaults.bind_addr),
            word_list: env::var("WORDLE_WORDS")
                .map(PathBuf::from)
                .unwrap_or(defaults.word_list),
            round_duration: env_count("WORDLE_ROUND_SECS")?
                .map(Duration::from_secs)
                .unwrap_or(defaults.round_duration),
            max_attempts: env_count("WORDLE_MAX_ATTEMPTS")?.unwrap_or(defaults.max_attempts),
            player_quota: env_count("WORDLE_PLAYERS")?.unwrap_or(defaults.player_quota),
            word_length: env_count("WORDLE_WORD_LENGTH")?.unwrap_or(defaults.word_length),
        })
    }
}

fn env_count<T>(key: &'static str) -> Result<Option<T>, AppError>
where
    T: FromStr + PartialOrd + From<u8>,
{
    match env::var(key) {
        Ok(value) => parse_count(key, &value).map(Some),
        Err(_) => Ok(None),
    }
}

/// Parse a value that must be at least 1
fn parse_count<T>(key: &'static str, value: &str) -> Result<T, AppError>
where
    T: FromStr + PartialOrd + From<u8>,
{
    let parsed: T = parse_value(key, value)?;
    if parsed < T::from(1) {
        return Err(AppError::Config {
            key,
            value: value.to_string(),
        });
    }
    Ok(parsed)
}

fn parse_value<T: FromStr>(key: &'static str, value: &str) -> Result<T, AppError> {
    value.trim().parse().map_err(|_| AppError::Config {
        key,
        value: value.to_string(),
    })
}
