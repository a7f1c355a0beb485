//! Round struct definition
//!
//! The single live round: phase, target word, players in join order and
//! the pending timer. Only the coordinator mutates it.

use std::sync::Arc;
use std::time::Instant;

use crate::message::{RoundResults, Standing};
use crate::player::Player;
use crate::timer::RoundTimer;
use crate::types::{PlayerId, RoundId, RoundPhase};

#[derive(Debug)]
pub struct Round {
    pub id: RoundId,
    pub phase: RoundPhase,
    /// Drawn on first registration, fixed until reset
    pub target_word: Option<Arc<str>>,
    /// Insertion order is join order
    pub players: Vec<Player>,
    pub timer: Option<RoundTimer>,
    pub created_at: Instant,
}

impl Round {
    /// Fresh round waiting for players
    pub fn new(id: RoundId) -> Self {
        Self {
            id,
            phase: RoundPhase::Waiting,
            target_word: None,
            players: Vec::new(),
            timer: None,
            created_at: Instant::now(),
        }
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn player_mut(&mut self, id: PlayerId) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.id == id)
    }

    pub fn contains(&self, id: PlayerId) -> bool {
        self.player(id).is_some()
    }

    /// True when there is at least one player and none is still playing
    pub fn all_finished(&self) -> bool {
        !self.players.is_empty() && self.players.iter().all(|p| p.finished)
    }

    pub fn player_names(&self) -> Vec<String> {
        self.players.iter().map(|p| p.display_name.clone()).collect()
    }

    /// Take the pending timer, if any, and stop it
    pub fn cancel_timer(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.cancel();
        }
    }

    /// Summarize the round for broadcast
    pub fn results(&self) -> RoundResults {
        let standings = self
            .players
            .iter()
            .map(|p| Standing {
                name: p.display_name.clone(),
                solved: if p.guessed_correctly {
                    p.elapsed().map(|elapsed| (p.attempts, elapsed))
                } else {
                    None
                },
            })
            .collect::<Vec<_>>();

        RoundResults {
            target_word: self
                .target_word
                .as_deref()
                .unwrap_or_default()
                .to_string(),
            winner: select_winner(&standings),
            standings,
        }
    }
}

/// Fewest attempts wins; equal attempts go to the faster player, and a
/// full tie goes to whoever joined first.
pub fn select_winner(standings: &[Standing]) -> Option<usize> {
    standings
        .iter()
        .enumerate()
        .filter_map(|(i, s)| s.solved.map(|solved| (i, solved)))
        .min_by_key(|(_, solved)| *solved)
        .map(|(i, _)| i)
}
