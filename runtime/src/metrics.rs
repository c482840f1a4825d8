//! Prometheus metrics for observability and monitoring.
//!
//! The store records one counter sample and one latency sample per applied
//! action, labelled with the store label and the action kind. Install a
//! recorder once per process to collect them:
//!
//! ```rust,no_run
//! use unidirectional_runtime::metrics::MetricsRecorder;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut recorder = MetricsRecorder::new();
//! recorder.install()?;
//!
//! // ... dispatch actions ...
//!
//! if let Some(text) = recorder.render() {
//!     println!("{text}");
//! }
//! # Ok(())
//! # }
//! ```

use metrics::{describe_counter, describe_histogram};
use metrics_exporter_prometheus::{Matcher, PrometheusBuilder, PrometheusHandle};
use std::time::Duration;
use thiserror::Error;

// Re-export metrics macros for use in other modules
pub use metrics::{counter, histogram};

/// Actions applied by a store
pub const ACTIONS_TOTAL: &str = "store_actions_total";
/// Actions refused because the store was shut down
pub const REJECTED_ACTIONS_TOTAL: &str = "store_rejected_actions_total";
/// Time spent inside the reducer per action
pub const REDUCER_DURATION_SECONDS: &str = "store_reducer_duration_seconds";

/// Errors from metrics operations.
#[derive(Error, Debug)]
pub enum MetricsError {
    /// Failed to build metrics exporter
    #[error("Failed to build metrics exporter: {0}")]
    Build(String),
    /// Failed to install metrics exporter
    #[error("Failed to install metrics exporter: {0}")]
    Install(String),
}

/// Prometheus recorder.
///
/// Installs itself as the process-wide `metrics` recorder and renders the
/// Prometheus text exposition on demand.
#[derive(Default)]
pub struct MetricsRecorder {
    handle: Option<PrometheusHandle>,
}

impl MetricsRecorder {
    /// Create a recorder that is not yet installed.
    #[must_use]
    pub const fn new() -> Self {
        Self { handle: None }
    }

    /// Register metric descriptions and install the Prometheus recorder.
    ///
    /// # Errors
    ///
    /// Returns error if the exporter cannot be built or installed.
    ///
    /// # Note
    ///
    /// If a recorder is already installed (e.g., in tests), this logs a
    /// warning and succeeds without a handle; `render()` then returns `None`.
    pub fn install(&mut self) -> Result<(), MetricsError> {
        register_metrics();

        let builder = PrometheusBuilder::new()
            // Reducers are in-memory; bucket at micro- to millisecond scale
            .set_buckets_for_metric(
                Matcher::Suffix("duration_seconds".to_string()),
                &[
                    0.000_001, 0.000_005, 0.000_01, 0.000_05, 0.000_1, 0.000_5, 0.001, 0.005, 0.01,
                ],
            )
            .map_err(|e| MetricsError::Build(e.to_string()))?;

        match builder.install_recorder() {
            Ok(handle) => {
                self.handle = Some(handle);
                tracing::info!("Metrics recorder installed");
                Ok(())
            }
            Err(e) => {
                let err_msg = e.to_string();
                if err_msg.contains("already initialized") {
                    tracing::warn!("Metrics recorder already initialized, skipping re-initialization");
                    Ok(())
                } else {
                    Err(MetricsError::Install(err_msg))
                }
            }
        }
    }

    /// Get the Prometheus handle, if this instance installed the recorder.
    #[must_use]
    pub const fn handle(&self) -> Option<&PrometheusHandle> {
        self.handle.as_ref()
    }

    /// Render current metrics in Prometheus format.
    ///
    /// Returns `None` if this instance did not install the recorder.
    #[must_use]
    pub fn render(&self) -> Option<String> {
        self.handle.as_ref().map(PrometheusHandle::render)
    }
}

/// Register all metric descriptions.
fn register_metrics() {
    describe_counter!(ACTIONS_TOTAL, "Total number of actions applied by stores");
    describe_counter!(
        REJECTED_ACTIONS_TOTAL,
        "Total number of actions rejected by stores that were shut down"
    );
    describe_histogram!(
        REDUCER_DURATION_SECONDS,
        "Time taken by the reducer to produce the next state"
    );
}

/// Store metrics recorder.
pub struct StoreMetrics;

impl StoreMetrics {
    /// Record an applied action.
    pub fn record_action(store: &str, kind: &'static str, duration: Duration) {
        counter!(ACTIONS_TOTAL, "store" => store.to_owned(), "kind" => kind).increment(1);
        histogram!(REDUCER_DURATION_SECONDS, "store" => store.to_owned())
            .record(duration.as_secs_f64());
    }

    /// Record a rejected action.
    pub fn record_rejection(store: &str) {
        counter!(REJECTED_ACTIONS_TOTAL, "store" => store.to_owned()).increment(1);
    }
}
