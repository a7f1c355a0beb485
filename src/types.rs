//! Basic type definitions for the word server
//!
//! Provides newtype wrappers for type safety:
//! - `PlayerId`: UUID-based identifier, one per connection
//! - `RoundId`: monotonically increasing round token
//! - `RoundPhase`: lifecycle state of the live round

use uuid::Uuid;

/// Unique player identifier (newtype pattern)
///
/// Wraps a UUID v4. Each connection gets a fresh id, so an id is never
/// reused across rounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlayerId(pub Uuid);

impl PlayerId {
    /// Create a new random player ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for PlayerId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identity of one round instance
///
/// The round timer carries the id of the round it was scheduled for; a
/// timer whose id no longer matches the live round is stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoundId(pub u64);

impl RoundId {
    /// The id of the round that follows this one
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl std::fmt::Display for RoundId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Round lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundPhase {
    /// Collecting players until the quota is reached
    Waiting,
    /// Quota reached, timer running
    InProgress,
    /// Results announced; the round is about to be replaced
    Finished,
}
