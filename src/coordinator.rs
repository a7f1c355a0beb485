//! RoundCoordinator actor implementation
//!
//! The single writer for the live round. Connection handlers and the round
//! timer talk to it only through `ServerCommand`s on one mpsc mailbox, so
//! registrations, guesses, finish checks, announcements and resets are
//! applied one at a time.

use std::sync::Arc;
use std::time::Instant;

use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::config::GameConfig;
use crate::dictionary::Dictionary;
use crate::error::RoundError;
use crate::feedback::{evaluate, Feedback};
use crate::message::ServerMessage;
use crate::player::Player;
use crate::round::Round;
use crate::timer::RoundTimer;
use crate::types::{PlayerId, RoundId, RoundPhase};

/// Mailbox size for coordinator commands
pub const COMMAND_BUFFER_SIZE: usize = 256;

/// Commands sent to the RoundCoordinator actor
#[derive(Debug)]
pub enum ServerCommand {
    /// A connection sent its display name
    Join {
        player_id: PlayerId,
        display_name: String,
        sender: mpsc::Sender<ServerMessage>,
    },
    /// A guess line
    Guess { player_id: PlayerId, text: String },
    /// The client's own countdown expired
    TimedOut { player_id: PlayerId },
    /// Connection closed or failed
    Disconnect { player_id: PlayerId },
    /// The round timer scheduled for `round_id` elapsed
    RoundTimerExpired { round_id: RoundId },
}

/// The round coordinator actor
pub struct RoundCoordinator {
    dictionary: Arc<Dictionary>,
    config: GameConfig,
    round: Round,
    /// Handed to round timers so they can report back
    timer_tx: mpsc::WeakSender<ServerCommand>,
}

impl RoundCoordinator {
    pub fn new(
        dictionary: Arc<Dictionary>,
        config: GameConfig,
        timer_tx: mpsc::WeakSender<ServerCommand>,
    ) -> Self {
        Self {
            dictionary,
            config,
            round: Round::new(RoundId(1)),
            timer_tx,
        }
    }

    /// Create the mailbox and run the actor on its own task
    ///
    /// The actor stops once every returned sender (and every clone held by
    /// connection handlers) is dropped.
    pub fn spawn(dictionary: Arc<Dictionary>, config: GameConfig) -> mpsc::Sender<ServerCommand> {
        let (cmd_tx, cmd_rx) = mpsc::channel(COMMAND_BUFFER_SIZE);
        let coordinator = Self::new(dictionary, config, cmd_tx.downgrade());
        tokio::spawn(coordinator.run(cmd_rx));
        cmd_tx
    }

    /// Run the coordinator event loop
    pub async fn run(mut self, mut receiver: mpsc::Receiver<ServerCommand>) {
        info!("RoundCoordinator started");

        while let Some(cmd) = receiver.recv().await {
            self.handle_command(cmd);
        }

        self.round.cancel_timer();
        info!("RoundCoordinator shutting down");
    }

    /// Process a single command
    pub fn handle_command(&mut self, cmd: ServerCommand) {
        match cmd {
            ServerCommand::Join {
                player_id,
                display_name,
                sender,
            } => {
                if let Err(err) = self.register_player(player_id, display_name, sender.clone()) {
                    // Dropping `sender` afterwards closes the connection
                    let _ = sender.try_send(err.into());
                }
            }
            ServerCommand::Guess { player_id, text } => {
                if let Err(err) = self.submit_guess(player_id, &text) {
                    debug!("Guess from {} rejected: {}", player_id, err);
                    self.send_to(player_id, err.into());
                }
            }
            ServerCommand::TimedOut { player_id } => {
                if let Err(err) = self.force_timeout(player_id) {
                    self.send_to(player_id, err.into());
                }
            }
            ServerCommand::Disconnect { player_id } => {
                self.disconnect(player_id);
            }
            ServerCommand::RoundTimerExpired { round_id } => {
                self.handle_round_timer(round_id);
            }
        }
    }

    pub fn round(&self) -> &Round {
        &self.round
    }

    /// Add a player to the live round
    ///
    /// The first player of a fresh round fixes the target word; the player
    /// that fills the quota starts the round and its timer.
    pub fn register_player(
        &mut self,
        player_id: PlayerId,
        display_name: String,
        sender: mpsc::Sender<ServerMessage>,
    ) -> Result<(), RoundError> {
        if self.round.phase != RoundPhase::Waiting
            || self.round.players.len() >= self.config.player_quota
        {
            info!("Rejected {} ({}): round in progress", display_name, player_id);
            return Err(RoundError::RoundInProgress);
        }

        let dictionary = &self.dictionary;
        let round_id = self.round.id;
        let target_word = self
            .round
            .target_word
            .get_or_insert_with(|| {
                let word: Arc<str> = Arc::from(dictionary.pick_random());
                debug!("Round {} target word drawn", round_id);
                word
            })
            .clone();

        let player = Player::new(
            player_id,
            display_name.clone(),
            target_word,
            self.config.max_attempts,
            sender,
        );
        self.round.players.push(player);

        info!(
            "{} ({}) joined round {} [{}/{}]",
            display_name,
            player_id,
            self.round.id,
            self.round.players.len(),
            self.config.player_quota
        );

        self.broadcast(ServerMessage::PlayerJoined { name: display_name });
        self.broadcast(ServerMessage::Players {
            names: self.round.player_names(),
        });

        if self.round.players.len() >= self.config.player_quota {
            self.start_round();
        }

        Ok(())
    }

    /// Waiting -> InProgress; starts the one timer for this round
    fn start_round(&mut self) {
        self.round.phase = RoundPhase::InProgress;
        self.round.timer = Some(RoundTimer::start(
            self.round.id,
            self.config.round_duration,
            self.timer_tx.clone(),
        ));
        info!(
            "Round {} started with {} players, {}s on the clock",
            self.round.id,
            self.round.players.len(),
            self.config.round_duration.as_secs()
        );
    }

    /// Score a guess
    ///
    /// Invalid words are rejected without consuming an attempt.
    pub fn submit_guess(&mut self, player_id: PlayerId, text: &str) -> Result<Feedback, RoundError> {
        let guess = text.trim();
        let round_id = self.round.id;
        let player = self
            .round
            .player_mut(player_id)
            .ok_or(RoundError::NotRegistered)?;

        if player.finished {
            return Err(RoundError::AlreadyFinished);
        }
        if !self.dictionary.is_valid(guess) {
            return Err(RoundError::InvalidGuess(guess.to_string()));
        }

        let guess = guess.to_ascii_uppercase();
        let feedback = evaluate(&player.target_word, &guess)
            .map_err(|_| RoundError::InvalidGuess(guess.clone()))?;

        player.attempts += 1;
        debug!(
            "{} guess {}/{}: {}",
            player.display_name, player.attempts, player.max_attempts, feedback
        );
        send_or_warn(player, ServerMessage::Feedback(feedback.clone()));

        let finished = if feedback.is_win() {
            player.mark_solved(Instant::now());
            info!(
                "{} solved round {} in {} attempts",
                player.display_name, round_id, player.attempts
            );
            send_or_warn(
                player,
                ServerMessage::Solved {
                    attempts: player.attempts,
                    word: player.target_word.to_string(),
                },
            );
            true
        } else if player.attempts_exhausted() {
            player.mark_unsolved();
            info!("{} is out of attempts", player.display_name);
            send_or_warn(
                player,
                ServerMessage::OutOfAttempts {
                    word: player.target_word.to_string(),
                },
            );
            true
        } else {
            false
        };

        if finished {
            self.check_all_finished();
        }

        Ok(feedback)
    }

    /// The player's own countdown ran out
    pub fn force_timeout(&mut self, player_id: PlayerId) -> Result<(), RoundError> {
        let player = self
            .round
            .player_mut(player_id)
            .ok_or(RoundError::NotRegistered)?;

        if player.finished {
            return Err(RoundError::AlreadyFinished);
        }

        player.mark_unsolved();
        info!("{} timed out", player.display_name);
        send_or_warn(
            player,
            ServerMessage::TimeUp {
                word: player.target_word.to_string(),
            },
        );

        self.check_all_finished();
        Ok(())
    }

    /// Connection gone: count an unfinished player as finished without a win
    ///
    /// The player stays in the registry so the results still list them.
    pub fn disconnect(&mut self, player_id: PlayerId) {
        let Some(player) = self.round.player_mut(player_id) else {
            debug!("Disconnect from {} outside the live round", player_id);
            return;
        };

        info!("{} disconnected", player.display_name);
        if !player.finished {
            player.mark_unsolved();
            self.check_all_finished();
        }
    }

    /// Timer expiry; ignored unless it belongs to the live, running round
    pub fn handle_round_timer(&mut self, round_id: RoundId) {
        if round_id != self.round.id || self.round.phase != RoundPhase::InProgress {
            warn!(
                "Ignoring stale timer for round {} (live round {})",
                round_id, self.round.id
            );
            return;
        }

        info!("Round {} time limit reached", round_id);
        // The task has completed; nothing left to cancel
        self.round.timer = None;

        for player in self.round.players.iter_mut().filter(|p| !p.finished) {
            player.mark_unsolved();
            send_or_warn(
                player,
                ServerMessage::TimeUp {
                    word: player.target_word.to_string(),
                },
            );
        }

        self.finish_round();
    }

    /// Announce and reset once every registered player is done
    pub fn check_all_finished(&mut self) {
        if self.round.all_finished() {
            self.finish_round();
        }
    }

    /// Announce (at most once) and always move on to a fresh round
    fn finish_round(&mut self) {
        self.announce_results();
        self.reset_round();
    }

    /// Broadcast the results once per round
    ///
    /// Returns false if this round has already been announced.
    fn announce_results(&mut self) -> bool {
        if self.round.phase == RoundPhase::Finished {
            return false;
        }

        self.round.cancel_timer();
        self.round.phase = RoundPhase::Finished;

        let results = self.round.results();
        match results.winner.and_then(|i| results.standings.get(i)) {
            Some(winner) => info!("Round {} won by {}", self.round.id, winner.name),
            None => info!("Round {} ended with no winner", self.round.id),
        }

        self.broadcast(ServerMessage::Results(results));
        true
    }

    /// Replace the round with a fresh one
    ///
    /// Dropping the players drops their senders, which ends their
    /// connections once the queued lines are written.
    fn reset_round(&mut self) {
        self.round.cancel_timer();
        let next = self.round.id.next();
        let previous = std::mem::replace(&mut self.round, Round::new(next));
        info!(
            "Round {} reset after {}s; waiting for players for round {}",
            previous.id,
            previous.created_at.elapsed().as_secs(),
            next
        );
    }

    /// Deliver to every registered player; a slow or closed peer is skipped
    pub fn broadcast(&self, msg: ServerMessage) {
        for player in &self.round.players {
            send_or_warn(player, msg.clone());
        }
    }

    fn send_to(&self, player_id: PlayerId, msg: ServerMessage) {
        if let Some(player) = self.round.player(player_id) {
            send_or_warn(player, msg);
        }
    }
}

fn send_or_warn(player: &Player, msg: ServerMessage) {
    if let Err(e) = player.send(msg) {
        warn!("Dropped message for {}: {}", player.display_name, e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    struct Harness {
        coordinator: RoundCoordinator,
        commands: mpsc::Receiver<ServerCommand>,
        // Keeps the weak timer sender upgradable
        _cmd_tx: mpsc::Sender<ServerCommand>,
    }

    fn harness(words: &str) -> Harness {
        let dictionary = Arc::new(Dictionary::from_word_list(words, 5).unwrap());
        let (cmd_tx, commands) = mpsc::channel(16);
        let coordinator =
            RoundCoordinator::new(dictionary, GameConfig::default(), cmd_tx.downgrade());
        Harness {
            coordinator,
            commands,
            _cmd_tx: cmd_tx,
        }
    }

    fn join(
        coordinator: &mut RoundCoordinator,
        name: &str,
    ) -> (PlayerId, mpsc::Receiver<ServerMessage>) {
        let (tx, rx) = mpsc::channel(64);
        let id = PlayerId::new();
        coordinator
            .register_player(id, name.to_string(), tx)
            .unwrap();
        (id, rx)
    }

    fn drain(rx: &mut mpsc::Receiver<ServerMessage>) -> Vec<ServerMessage> {
        let mut out = Vec::new();
        while let Ok(msg) = rx.try_recv() {
            out.push(msg);
        }
        out
    }

    fn results_count(messages: &[ServerMessage]) -> usize {
        messages
            .iter()
            .filter(|m| matches!(m, ServerMessage::Results(_)))
            .count()
    }

    #[tokio::test]
    async fn test_join_broadcasts_and_quota_starts_round() {
        let mut h = harness("crane");
        let (_alice, mut alice_rx) = join(&mut h.coordinator, "alice");

        assert_eq!(h.coordinator.round().phase, RoundPhase::Waiting);
        assert!(h.coordinator.round().timer.is_none());
        assert_eq!(h.coordinator.round().target_word.as_deref(), Some("CRANE"));

        let (_bob, _bob_rx) = join(&mut h.coordinator, "bob");
        let round = h.coordinator.round();
        assert_eq!(round.phase, RoundPhase::InProgress);
        assert_eq!(round.timer.as_ref().map(|t| t.round_id()), Some(round.id));
        assert!(round
            .players
            .iter()
            .all(|p| Arc::ptr_eq(&p.target_word, round.target_word.as_ref().unwrap())));

        let seen = drain(&mut alice_rx);
        assert!(seen.contains(&ServerMessage::PlayerJoined {
            name: "bob".to_string()
        }));
        assert!(seen.contains(&ServerMessage::Players {
            names: vec!["alice".to_string(), "bob".to_string()]
        }));
    }

    #[tokio::test]
    async fn test_join_rejected_once_round_in_progress() {
        let mut h = harness("crane");
        join(&mut h.coordinator, "alice");
        join(&mut h.coordinator, "bob");
        let timer_round = h.coordinator.round().timer.as_ref().map(|t| t.round_id());

        let (tx, _rx) = mpsc::channel(8);
        let result = h
            .coordinator
            .register_player(PlayerId::new(), "carol".to_string(), tx);

        assert_eq!(result, Err(RoundError::RoundInProgress));
        assert_eq!(h.coordinator.round().players.len(), 2);
        assert_eq!(
            h.coordinator.round().timer.as_ref().map(|t| t.round_id()),
            timer_round
        );
    }

    #[tokio::test]
    async fn test_invalid_guess_does_not_count() {
        let mut h = harness("crane\nslate");
        let (alice, _rx) = join(&mut h.coordinator, "alice");

        for bad in ["zzzzz", "cran", "cr4ne", "cranes", ""] {
            let result = h.coordinator.submit_guess(alice, bad);
            assert!(matches!(result, Err(RoundError::InvalidGuess(_))));
        }

        assert_eq!(h.coordinator.round().player(alice).unwrap().attempts, 0);
    }

    #[tokio::test]
    async fn test_guess_is_case_insensitive_and_counted() {
        let mut h = harness("crane\nslate");
        let (alice, mut rx) = join(&mut h.coordinator, "alice");
        let target = h.coordinator.round().target_word.clone().unwrap();
        let other = if &*target == "CRANE" { "slate" } else { "crane" };

        let feedback = h.coordinator.submit_guess(alice, other).unwrap();
        assert!(!feedback.is_win());
        assert_eq!(h.coordinator.round().player(alice).unwrap().attempts, 1);

        let seen = drain(&mut rx);
        assert!(seen.contains(&ServerMessage::Feedback(feedback)));
    }

    #[tokio::test]
    async fn test_win_by_both_players_announces_once_and_resets() {
        let mut h = harness("crane");
        let (alice, mut alice_rx) = join(&mut h.coordinator, "alice");
        let (bob, mut bob_rx) = join(&mut h.coordinator, "bob");
        let first_round = h.coordinator.round().id;

        assert!(h.coordinator.submit_guess(alice, "crane").unwrap().is_win());
        assert_eq!(h.coordinator.round().id, first_round);
        assert!(h.coordinator.submit_guess(bob, "CRANE").unwrap().is_win());

        let alice_seen = drain(&mut alice_rx);
        let bob_seen = drain(&mut bob_rx);
        assert_eq!(results_count(&alice_seen), 1);
        assert_eq!(results_count(&bob_seen), 1);
        assert!(alice_seen.contains(&ServerMessage::Solved {
            attempts: 1,
            word: "CRANE".to_string()
        }));

        let round = h.coordinator.round();
        assert_eq!(round.id, first_round.next());
        assert_eq!(round.phase, RoundPhase::Waiting);
        assert!(round.players.is_empty());
        assert!(round.target_word.is_none());
        assert!(round.timer.is_none());

        // Registry cleared: the old senders are gone
        assert!(alice_rx.recv().await.is_none());
    }

    #[tokio::test]
    async fn test_exhaustion_finishes_player() {
        let mut h = harness("crane\nslate");
        let (alice, mut rx) = join(&mut h.coordinator, "alice");
        join(&mut h.coordinator, "bob");
        let target = h.coordinator.round().target_word.clone().unwrap();
        let wrong = if &*target == "CRANE" { "slate" } else { "crane" };

        for _ in 0..6 {
            h.coordinator.submit_guess(alice, wrong).unwrap();
        }

        let player = h.coordinator.round().player(alice).unwrap();
        assert!(player.finished);
        assert!(!player.guessed_correctly);
        assert_eq!(player.attempts, 6);
        assert_eq!(
            h.coordinator.submit_guess(alice, wrong),
            Err(RoundError::AlreadyFinished)
        );
        assert!(drain(&mut rx).contains(&ServerMessage::OutOfAttempts {
            word: target.to_string()
        }));
        assert_eq!(h.coordinator.round().phase, RoundPhase::InProgress);
    }

    #[tokio::test]
    async fn test_no_winner_discloses_word() {
        let mut h = harness("crane");
        let (alice, mut rx) = join(&mut h.coordinator, "alice");
        let (bob, _bob_rx) = join(&mut h.coordinator, "bob");

        h.coordinator.force_timeout(alice).unwrap();
        h.coordinator.disconnect(bob);

        let results = drain(&mut rx)
            .into_iter()
            .find_map(|m| match m {
                ServerMessage::Results(r) => Some(r),
                _ => None,
            })
            .unwrap();
        assert_eq!(results.winner, None);
        assert_eq!(results.target_word, "CRANE");
        assert_eq!(results.standings.len(), 2);
        assert!(results.standings.iter().all(|s| s.solved.is_none()));
    }

    #[tokio::test]
    async fn test_disconnect_lets_round_complete() {
        let mut h = harness("crane");
        let (alice, mut alice_rx) = join(&mut h.coordinator, "alice");
        let (bob, _bob_rx) = join(&mut h.coordinator, "bob");
        let first_round = h.coordinator.round().id;

        h.coordinator.disconnect(bob);
        assert_eq!(h.coordinator.round().id, first_round);

        h.coordinator.submit_guess(alice, "crane").unwrap();
        assert_eq!(results_count(&drain(&mut alice_rx)), 1);
        assert_eq!(h.coordinator.round().id, first_round.next());
    }

    #[tokio::test(start_paused = true)]
    async fn test_timer_expiry_times_out_unfinished_players() {
        let mut h = harness("crane");
        let (alice, mut alice_rx) = join(&mut h.coordinator, "alice");
        let (_bob, mut bob_rx) = join(&mut h.coordinator, "bob");
        let round_id = h.coordinator.round().id;

        h.coordinator.submit_guess(alice, "crane").unwrap();

        let cmd = h.commands.recv().await.unwrap();
        assert!(matches!(cmd, ServerCommand::RoundTimerExpired { round_id: id } if id == round_id));
        h.coordinator.handle_command(cmd);

        let bob_seen = drain(&mut bob_rx);
        assert!(bob_seen.contains(&ServerMessage::TimeUp {
            word: "CRANE".to_string()
        }));
        assert_eq!(results_count(&bob_seen), 1);

        let alice_seen = drain(&mut alice_rx);
        assert_eq!(results_count(&alice_seen), 1);
        assert!(alice_seen.iter().any(|m| matches!(
            m,
            ServerMessage::Results(r) if r.winner == Some(0)
        )));
        assert_eq!(h.coordinator.round().id, round_id.next());
    }

    #[tokio::test(start_paused = true)]
    async fn test_round_finished_by_play_cancels_timer() {
        let mut h = harness("crane");
        let (alice, mut alice_rx) = join(&mut h.coordinator, "alice");
        let (bob, _bob_rx) = join(&mut h.coordinator, "bob");

        h.coordinator.submit_guess(alice, "crane").unwrap();
        h.coordinator.force_timeout(bob).unwrap();

        tokio::time::sleep(Duration::from_secs(300)).await;
        assert!(h.commands.try_recv().is_err());
        assert_eq!(results_count(&drain(&mut alice_rx)), 1);
    }

    #[tokio::test]
    async fn test_stale_timer_is_ignored() {
        let mut h = harness("crane");
        let (alice, _alice_rx) = join(&mut h.coordinator, "alice");
        let (bob, _bob_rx) = join(&mut h.coordinator, "bob");
        let old_round = h.coordinator.round().id;

        h.coordinator.submit_guess(alice, "crane").unwrap();
        h.coordinator.submit_guess(bob, "crane").unwrap();

        let (carol, mut carol_rx) = join(&mut h.coordinator, "carol");
        let (_dave, _dave_rx) = join(&mut h.coordinator, "dave");
        drain(&mut carol_rx);

        h.coordinator
            .handle_command(ServerCommand::RoundTimerExpired { round_id: old_round });

        let round = h.coordinator.round();
        assert_eq!(round.id, old_round.next());
        assert_eq!(round.phase, RoundPhase::InProgress);
        assert!(!round.player(carol).unwrap().finished);
        assert!(drain(&mut carol_rx).is_empty());
    }

    #[tokio::test]
    async fn test_announce_results_runs_once_per_round() {
        let mut h = harness("crane");
        let (_alice, mut rx) = join(&mut h.coordinator, "alice");

        assert!(h.coordinator.announce_results());
        assert!(!h.coordinator.announce_results());

        // An already-announced round still gets replaced
        h.coordinator.finish_round();
        assert_eq!(results_count(&drain(&mut rx)), 1);
        assert_eq!(h.coordinator.round().phase, RoundPhase::Waiting);

        let (tx, _bob_rx) = mpsc::channel(8);
        assert!(h
            .coordinator
            .register_player(PlayerId::new(), "bob".to_string(), tx)
            .is_ok());
    }

    #[tokio::test]
    async fn test_closed_peer_does_not_block_broadcast() {
        let mut h = harness("crane");
        let (alice, alice_rx) = join(&mut h.coordinator, "alice");
        let (bob, mut bob_rx) = join(&mut h.coordinator, "bob");
        drop(alice_rx);

        h.coordinator.submit_guess(bob, "crane").unwrap();
        h.coordinator.disconnect(alice);

        assert_eq!(results_count(&drain(&mut bob_rx)), 1);
        assert_eq!(h.coordinator.round().id, RoundId(2));
    }

    #[tokio::test]
    async fn test_full_peer_does_not_block_broadcast() {
        let mut h = harness("crane");
        // Capacity 1: the join notice fills it and nothing is ever read
        let (alice_tx, mut alice_rx) = mpsc::channel(1);
        let alice = PlayerId::new();
        h.coordinator
            .register_player(alice, "alice".to_string(), alice_tx)
            .unwrap();
        let (bob, mut bob_rx) = join(&mut h.coordinator, "bob");

        h.coordinator.force_timeout(alice).unwrap();
        h.coordinator.submit_guess(bob, "crane").unwrap();

        assert_eq!(results_count(&drain(&mut bob_rx)), 1);
        assert_eq!(
            drain(&mut alice_rx),
            vec![ServerMessage::PlayerJoined {
                name: "alice".to_string()
            }]
        );
    }

    #[tokio::test]
    async fn test_reset_starts_independent_round() {
        let mut h = harness("crane\nslate\npudgy");
        let (alice, _rx) = join(&mut h.coordinator, "alice");
        h.coordinator.force_timeout(alice).unwrap();

        let round = h.coordinator.round();
        assert!(round.players.is_empty());
        assert!(round.target_word.is_none());

        let (bob, _bob_rx) = join(&mut h.coordinator, "bob");
        let round = h.coordinator.round();
        assert_eq!(round.player_names(), vec!["bob"]);
        assert!(!round.contains(alice));
        assert!(round.contains(bob));
        let word = round.target_word.clone().unwrap();
        assert_eq!(round.player(bob).unwrap().target_word, word);
        assert!(["CRANE", "SLATE", "PUDGY"].contains(&&*word));
    }

    #[tokio::test]
    async fn test_unknown_player_rejected() {
        let mut h = harness("crane");
        assert_eq!(
            h.coordinator.submit_guess(PlayerId::new(), "crane"),
            Err(RoundError::NotRegistered)
        );
        assert_eq!(
            h.coordinator.force_timeout(PlayerId::new()),
            Err(RoundError::NotRegistered)
        );
    }

    #[tokio::test]
    async fn test_join_command_rejection_is_sent_to_connection() {
        let mut h = harness("crane");
        join(&mut h.coordinator, "alice");
        join(&mut h.coordinator, "bob");

        let (tx, mut rx) = mpsc::channel(8);
        h.coordinator.handle_command(ServerCommand::Join {
            player_id: PlayerId::new(),
            display_name: "carol".to_string(),
            sender: tx,
        });

        assert_eq!(
            rx.recv().await,
            Some(ServerMessage::Error(RoundError::RoundInProgress))
        );
        assert_eq!(rx.recv().await, None);
    }
}
