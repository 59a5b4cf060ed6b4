//! Scenario runner for integration tests.
//!
//! A scenario is one end-to-end test case: a driver future that issues one
//! or more API calls, validating each response, chaining with `?`. The
//! runner settles the scenario's completion signal exactly once with
//! whatever the driver produced, so the awaiting test body always observes
//! the outcome, including expectation failures raised deep inside a chain.
//!
//! Chaining with `?` also gives the stop-on-failure property for free: once
//! a step fails, no later step of the driver runs.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;

use crate::config::HarnessConfig;
use crate::core::error::{ScenarioError, ScenarioResult};
use crate::signal::CompletionSignal;

/// One test scenario with its own completion signal.
///
/// Signals are per-scenario local state; nothing is shared across scenarios,
/// so independent scenarios may run concurrently without interference.
pub struct Scenario {
    signal: Arc<CompletionSignal<bool>>,
}

impl Scenario {
    /// Scenario with the default settlement timeout.
    pub fn new() -> Self {
        Self {
            signal: Arc::new(CompletionSignal::new()),
        }
    }

    /// Scenario whose `outcome` gives up after `timeout`.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            signal: Arc::new(CompletionSignal::with_timeout(timeout)),
        }
    }

    /// Scenario whose timeout comes from the harness configuration.
    pub fn from_config(config: &HarnessConfig) -> Self {
        Self::with_timeout(config.scenario_timeout())
    }

    /// Handle to the underlying signal, for drivers that settle manually.
    pub fn signal(&self) -> Arc<CompletionSignal<bool>> {
        Arc::clone(&self.signal)
    }

    /// Spawn the driver future and route its result into the signal.
    ///
    /// `Ok(value)` resolves the scenario, any [`ScenarioError`] rejects it.
    /// Client errors, transport errors and assertion failures are all plain
    /// `Err` values on the driver's path, so every failure is observed by
    /// [`outcome`](Self::outcome) rather than lost on the spawned task.
    ///
    /// # Panics
    ///
    /// Panics on a double settlement, which is a harness defect rather than
    /// a test outcome.
    pub fn run<F>(&self, driver: F) -> JoinHandle<()>
    where
        F: Future<Output = ScenarioResult<bool>> + Send + 'static,
    {
        let signal = Arc::clone(&self.signal);
        tokio::spawn(async move {
            let settled = match driver.await {
                Ok(value) => signal.resolve(value),
                Err(error) => {
                    tracing::debug!(%error, "scenario driver failed");
                    signal.reject(error)
                }
            };
            if let Err(defect) = settled {
                panic!("scenario driver: {defect}");
            }
        })
    }

    /// Await the scenario's terminal outcome.
    pub async fn outcome(&self) -> ScenarioResult<bool> {
        self.signal.wait().await
    }

    /// Await the outcome and require a truthy success.
    ///
    /// # Panics
    ///
    /// Panics with the recorded error if the scenario failed, or if it
    /// resolved with `false`.
    pub async fn expect_success(&self) {
        match self.outcome().await {
            Ok(value) => assert!(value, "the scenario did not complete successfully"),
            Err(error) => panic!("scenario failed: {error}"),
        }
    }

    /// Await the outcome and require the given failure.
    ///
    /// # Panics
    ///
    /// Panics if the scenario succeeded or failed with a different error.
    pub async fn expect_failure(&self) -> ScenarioError {
        match self.outcome().await {
            Ok(value) => panic!("scenario unexpectedly succeeded with {value}"),
            Err(error) => error,
        }
    }
}

impl Default for Scenario {
    fn default() -> Self {
        Self::new()
    }
}

/// Expectation check for scenario drivers and validators.
///
/// On failure returns early with [`ScenarioError::Assertion`] carrying the
/// formatted message, which the runner routes into the completion signal.
#[macro_export]
macro_rules! check {
    ($cond:expr, $($msg:tt)+) => {
        if !($cond) {
            return Err($crate::core::error::ScenarioError::Assertion(format!($($msg)+)).into());
        }
    };
}
