//! Storefront platform client SDKs and integration-test harness.
//!
//! Two HTTP client surfaces for a game-server e-commerce platform: the
//! public headless storefront API and the secret-key plugin API. Around
//! them, a small harness for end-to-end scenarios: a settle-once
//! [`CompletionSignal`](signal::CompletionSignal), a [`Scenario`](harness::Scenario)
//! runner that funnels every failure category into the signal, and
//! structural [`validate`] checks for each response entity.

pub mod config;
pub mod core;
pub mod harness;
pub mod headless;
pub mod plugin;
pub mod signal;
pub mod validate;

// Re-export commonly used types
pub use config::Config;
pub use core::error::{ApiError, ApiResult, DoubleSettle, ScenarioError, ScenarioResult};
pub use harness::Scenario;
pub use headless::HeadlessApi;
pub use plugin::PluginApi;
pub use signal::CompletionSignal;
