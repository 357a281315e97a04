//! Hero background rotation.
//!
//! [`BackgroundCycle`] is the index arithmetic. [`HeroRotator`] drives it from
//! a tokio interval and publishes every step on a watch channel. The rotator
//! owns its task: cancelling it, or dropping the handle, stops the timer for
//! good. Cancelling twice is a no-op.

use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

use crate::error::{Error, Result};

/// How long each hero background stays on screen
pub const ROTATION_PERIOD: Duration = Duration::from_millis(8000);

/// Position within a fixed, non-empty image sequence.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct BackgroundCycle {
    index: usize,
    len: usize,
}

impl BackgroundCycle {
    /// Starts at index 0. Fails if there is nothing to cycle through.
    pub fn new(len: usize) -> Result<Self> {
        if len == 0 {
            return Err(Error::EmptyImageSequence);
        }
        Ok(Self { index: 0, len })
    }

    pub fn current(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Moves to the next image, wrapping after the last one.
    pub fn advance(&mut self) -> usize {
        self.index = (self.index + 1) % self.len;
        self.index
    }
}

/// A running hero rotation bound to the lifetime of this handle.
#[derive(Debug)]
pub struct HeroRotator {
    task: Option<JoinHandle<()>>,
    index: watch::Receiver<usize>,
    len: usize,
}

impl HeroRotator {
    /// Spawns the rotation task on the current tokio runtime.
    ///
    /// The first advance happens one full `period` after the call. Must be
    /// called from within a runtime context.
    pub fn start(len: usize, period: Duration) -> Result<Self> {
        let mut cycle = BackgroundCycle::new(len)?;
        if period.is_zero() {
            return Err(Error::InvalidPeriod(period));
        }

        let (tx, rx) = watch::channel(cycle.current());
        let task = tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                let index = cycle.advance();
                tracing::debug!(index, "Hero background advanced");
                if tx.send(index).is_err() {
                    break;
                }
            }
        });

        tracing::debug!(len, period_ms = period.as_millis() as u64, "Hero rotator started");
        Ok(Self {
            task: Some(task),
            index: rx,
            len,
        })
    }

    /// Latest published index
    pub fn current(&self) -> usize {
        *self.index.borrow()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Receiver that observes every index change.
    pub fn subscribe(&self) -> watch::Receiver<usize> {
        self.index.clone()
    }

    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    /// Stops the timer. Calling this on a cancelled rotator does nothing.
    pub fn cancel(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            tracing::debug!(index = self.current(), "Hero rotator cancelled");
        }
    }
}

impl Drop for HeroRotator {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_sequence_is_rejected() {
        assert_eq!(BackgroundCycle::new(0), Err(Error::EmptyImageSequence));
    }

    #[test]
    fn cycle_wraps_after_last_image() {
        let mut cycle = BackgroundCycle::new(3).unwrap();
        assert_eq!(cycle.current(), 0);
        assert_eq!(cycle.advance(), 1);
        assert_eq!(cycle.advance(), 2);
        assert_eq!(cycle.advance(), 0);
    }

    #[test]
    fn single_image_never_moves() {
        let mut cycle = BackgroundCycle::new(1).unwrap();
        for _ in 0..5 {
            assert_eq!(cycle.advance(), 0);
        }
    }

    #[tokio::test]
    async fn start_rejects_zero_period() {
        let err = HeroRotator::start(3, Duration::ZERO).unwrap_err();
        assert_eq!(err, Error::InvalidPeriod(Duration::ZERO));
    }

    #[tokio::test]
    async fn start_rejects_empty_sequence() {
        let err = HeroRotator::start(0, ROTATION_PERIOD).unwrap_err();
        assert_eq!(err, Error::EmptyImageSequence);
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_is_idempotent() {
        let mut rotator = HeroRotator::start(3, ROTATION_PERIOD).unwrap();
        assert!(rotator.is_running());
        rotator.cancel();
        rotator.cancel();
        assert!(!rotator.is_running());
        assert_eq!(rotator.current(), 0);
    }
}
