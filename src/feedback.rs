//! Guess evaluation
//!
//! Computes per-position marks for a guess against the target word.
//! Repeated letters are never credited more often than they occur in
//! the target.

use std::fmt;

use crate::error::AppError;

/// Classification of one guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    /// Right letter, right position
    Correct,
    /// Letter occurs elsewhere in the target
    Present,
    /// No unclaimed occurrence in the target
    Absent,
}

impl Mark {
    /// Wire symbol for this mark
    pub fn symbol(self) -> char {
        match self {
            Mark::Correct => 'G',
            Mark::Present => 'Y',
            Mark::Absent => 'X',
        }
    }
}

/// Marks for every position of a guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback(pub Vec<Mark>);

impl Feedback {
    /// A win is all-correct
    pub fn is_win(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|m| *m == Mark::Correct)
    }

    pub fn marks(&self) -> &[Mark] {
        &self.0
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for mark in &self.0 {
            write!(f, "{}", mark.symbol())?;
        }
        Ok(())
    }
}

/// Evaluate `guess` against `target`
///
/// Both words must already share the same case. Exact matches are claimed
/// first; remaining letters then claim the leftmost unused occurrence in
/// the target.
pub fn evaluate(target: &str, guess: &str) -> Result<Feedback, AppError> {
    let target: Vec<char> = target.chars().collect();
    let guess: Vec<char> = guess.chars().collect();

    if target.len() != guess.len() {
        return Err(AppError::LengthMismatch {
            target: target.len(),
            guess: guess.len(),
        });
    }

    let mut marks = vec![Mark::Absent; guess.len()];
    let mut used = vec![false; target.len()];

    // Pass 1: exact positions
    for (i, (&g, &t)) in guess.iter().zip(&target).enumerate() {
        if g == t {
            marks[i] = Mark::Correct;
            used[i] = true;
        }
    }

    // Pass 2: misplaced letters
    for (i, &g) in guess.iter().enumerate() {
        if marks[i] == Mark::Correct {
            continue;
        }
        let found = target
            .iter()
            .enumerate()
            .position(|(j, &t)| !used[j] && t == g);
        if let Some(j) = found {
            marks[i] = Mark::Present;
            used[j] = true;
        }
    }

    Ok(Feedback(marks))
}
