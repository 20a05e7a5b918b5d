//! Reveal drivers.
//!
//! The frame driver needs no code here: the sheet advances its sequencer
//! from `update(dt)`. The task driver runs the timeline on a tokio task that
//! only holds a weak handle, so dropping the sheet ends it.

use crate::reveal::RevealSequencer;
use parking_lot::Mutex;
use std::sync::{Arc, Weak};
use tokio::task::JoinHandle;

/// How the reveal timeline is driven.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealDriver {
    /// Advance from the host's frame loop.
    #[default]
    Frame,
    /// Sleep each delay on a tokio task.
    Task,
}

/// Runs the remaining timeline of a started sequencer.
///
/// Returns silently when the sequencer is dropped mid-way or has not been
/// started. The lock is never held across a sleep.
pub async fn run_reveal(sequencer: Weak<Mutex<RevealSequencer>>) {
    loop {
        let delay = {
            let Some(shared) = sequencer.upgrade() else {
                return;
            };
            let guard = shared.lock();
            match guard.next_delay() {
                Some(delay) => delay,
                None => return,
            }
        };

        tokio::time::sleep(delay).await;

        let Some(shared) = sequencer.upgrade() else {
            tracing::trace!("sheet gone, abandoning reveal");
            return;
        };
        shared.lock().fire_next();
    }
}

/// Starts `sequencer` and spawns [`run_reveal`] for it on the current runtime.
///
/// Returns `None` if the sequencer had already been started.
///
/// # Panics
///
/// Panics if called outside a tokio runtime.
pub fn spawn_reveal(sequencer: &Arc<Mutex<RevealSequencer>>) -> Option<JoinHandle<()>> {
    if !sequencer.lock().start() {
        return None;
    }
    Some(tokio::spawn(run_reveal(Arc::downgrade(sequencer))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::FormFactor;
    use crate::reveal::RevealPhase;
    use crate::settings::RevealTimings;
    use std::time::Duration;

    fn shared(cards: usize) -> Arc<Mutex<RevealSequencer>> {
        Arc::new(Mutex::new(RevealSequencer::new(
            &RevealTimings::default(),
            FormFactor::Phone,
            cards,
        )))
    }

    #[tokio::test(start_paused = true)]
    async fn test_task_runs_whole_timeline() {
        let seq = shared(3);
        let handle = spawn_reveal(&seq).unwrap();
        handle.await.unwrap();

        let seq = seq.lock();
        assert_eq!(seq.phase(), RevealPhase::Interactive);
        assert!(seq.state().cards().iter().all(|shown| *shown));
    }

    #[tokio::test(start_paused = true)]
    async fn test_task_follows_timeline() {
        let seq = shared(2);
        let _handle = spawn_reveal(&seq).unwrap();

        tokio::time::sleep(Duration::from_millis(300)).await;
        assert_eq!(seq.lock().phase(), RevealPhase::Idle);

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert_eq!(seq.lock().phase(), RevealPhase::IconShown);

        tokio::time::sleep(Duration::from_millis(400)).await;
        assert_eq!(seq.lock().phase(), RevealPhase::CardsShown(1));
        assert!(!seq.lock().is_interactive());
    }

    #[tokio::test(start_paused = true)]
    async fn test_second_spawn_is_refused() {
        let seq = shared(1);
        assert!(spawn_reveal(&seq).is_some());
        assert!(spawn_reveal(&seq).is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropped_sequencer_ends_task() {
        let seq = shared(4);
        let handle = spawn_reveal(&seq).unwrap();
        tokio::time::sleep(Duration::from_millis(400)).await;
        drop(seq);

        tokio::time::timeout(Duration::from_secs(5), handle)
            .await
            .expect("task should end once the sequencer is gone")
            .unwrap();
    }

    #[tokio::test]
    async fn test_unstarted_sequencer_returns_immediately() {
        let seq = shared(1);
        run_reveal(Arc::downgrade(&seq)).await;
        assert_eq!(seq.lock().phase(), RevealPhase::Idle);
    }
}
