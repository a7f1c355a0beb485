//! Round timer
//!
//! A deferred task that reports expiry back to the coordinator mailbox.
//! It only holds a weak sender, so a pending timer never keeps the
//! coordinator alive.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::coordinator::ServerCommand;
use crate::types::RoundId;

#[derive(Debug)]
pub struct RoundTimer {
    round_id: RoundId,
    handle: JoinHandle<()>,
}

impl RoundTimer {
    /// Schedule a `RoundTimerExpired` for `round_id` after `duration`
    pub fn start(
        round_id: RoundId,
        duration: Duration,
        commands: mpsc::WeakSender<ServerCommand>,
    ) -> Self {
        let handle = tokio::spawn(async move {
            tokio::time::sleep(duration).await;
            let Some(commands) = commands.upgrade() else {
                return;
            };
            debug!("Round {} timer fired", round_id);
            let _ = commands
                .send(ServerCommand::RoundTimerExpired { round_id })
                .await;
        });

        Self { round_id, handle }
    }

    pub fn round_id(&self) -> RoundId {
        self.round_id
    }

    /// Stop the timer if it has not fired yet
    ///
    /// An expiry already sitting in the mailbox is not recalled; the
    /// coordinator discards it by round id.
    pub fn cancel(self) {
        self.handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_timer_fires_with_its_round_id() {
        let (tx, mut rx) = mpsc::channel(8);
        let _timer = RoundTimer::start(RoundId(3), Duration::from_secs(120), tx.downgrade());

        let cmd = rx.recv().await.unwrap();
        assert!(matches!(
            cmd,
            ServerCommand::RoundTimerExpired {
                round_id: RoundId(3)
            }
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancelled_timer_never_fires() {
        let (tx, mut rx) = mpsc::channel(8);
        let timer = RoundTimer::start(RoundId(1), Duration::from_secs(120), tx.downgrade());
        timer.cancel();

        tokio::time::sleep(Duration::from_secs(300)).await;
        assert!(rx.try_recv().is_err());
    }
}
