//! Settle-once completion signal.
//!
//! One signal represents the outcome of one asynchronous test scenario. The
//! driver settles it exactly once, by whichever path finishes first (success
//! or failure), and the test body awaits the recorded outcome. A second
//! settlement is a harness defect and is reported loudly as [`DoubleSettle`].

use std::time::Duration;

use tokio::sync::watch;
use tokio::time;

use crate::core::error::{DoubleSettle, ScenarioError};

/// Default window a scenario may stay pending before `wait` gives up.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

type Outcome<T> = Result<T, ScenarioError>;

/// Single-slot synchronization primitive bridging an asynchronous settlement
/// into an awaited outcome.
///
/// Lifecycle: created unsettled, mutated exactly once by `resolve` or
/// `reject`, then read by any number of `wait` calls. Waits issued before
/// settlement suspend; waits issued after return the recorded outcome
/// immediately.
#[derive(Debug)]
pub struct CompletionSignal<T> {
    tx: watch::Sender<Option<Outcome<T>>>,
    timeout: Duration,
}

impl<T: Clone> CompletionSignal<T> {
    /// Fresh unsettled signal with the default timeout.
    pub fn new() -> Self {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    /// Fresh unsettled signal that times out after `timeout`.
    pub fn with_timeout(timeout: Duration) -> Self {
        let (tx, _rx) = watch::channel(None);
        Self { tx, timeout }
    }

    /// Settle with success.
    ///
    /// # Errors
    ///
    /// Returns [`DoubleSettle`] if the signal was already settled, leaving
    /// the first outcome untouched.
    pub fn resolve(&self, value: T) -> Result<(), DoubleSettle> {
        self.settle(Ok(value))
    }

    /// Settle with failure, carrying the error.
    ///
    /// # Errors
    ///
    /// Returns [`DoubleSettle`] if the signal was already settled, leaving
    /// the first outcome untouched.
    pub fn reject(&self, error: ScenarioError) -> Result<(), DoubleSettle> {
        self.settle(Err(error))
    }

    fn settle(&self, outcome: Outcome<T>) -> Result<(), DoubleSettle> {
        let mut outcome = Some(outcome);
        let stored = self.tx.send_if_modified(|slot| {
            if slot.is_some() {
                return false;
            }
            *slot = outcome.take();
            true
        });
        if stored {
            Ok(())
        } else {
            Err(DoubleSettle)
        }
    }

    /// Whether a settlement has been recorded.
    pub fn is_settled(&self) -> bool {
        self.tx.borrow().is_some()
    }

    /// Await settlement and return the recorded outcome.
    ///
    /// Every call observes the same single outcome. If nothing settles the
    /// signal within the configured window, returns
    /// [`ScenarioError::Timeout`].
    pub async fn wait(&self) -> Result<T, ScenarioError> {
        let mut rx = self.tx.subscribe();
        // The sender half lives on `self`, so the channel cannot close while
        // we are waiting; the only failure mode left is the timeout.
        let outcome = match time::timeout(self.timeout, rx.wait_for(|slot| slot.is_some())).await {
            Ok(Ok(slot)) => slot
                .clone()
                .unwrap_or_else(|| unreachable!("wait_for yielded an unsettled slot")),
            Ok(Err(_)) => unreachable!("signal sender dropped while waiting"),
            Err(_) => Err(ScenarioError::Timeout(self.timeout)),
        };
        outcome
    }
}

impl<T: Clone> Default for CompletionSignal<T> {
    fn default() -> Self {
        Self::new()
    }
}
