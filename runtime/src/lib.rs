//! # Unidirectional Runtime
//!
//! Store runtime for the unidirectional state core.
//!
//! The [`Store`] owns the single current state of an application. Every
//! action sent to it is run through the reducer, the result replaces the held
//! state, and subscribers are told which action was applied.
//!
//! ## Core Components
//!
//! - **Store**: Holds state, serializes dispatch, notifies subscribers
//! - **`StoreConfig`**: Label and subscription buffer size
//! - **Metrics**: Prometheus counters and histograms for dispatch
//!
//! ## Example
//!
//! ```ignore
//! use unidirectional_runtime::Store;
//!
//! let store = Store::new(initial_state, my_reducer, environment);
//!
//! // Send an action
//! store.send(Action::DoSomething).await?;
//!
//! // Read state
//! let value = store.state(|s| s.some_field).await;
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;
use unidirectional_core::{action::Action, reducer::Reducer};

/// Prometheus metrics for observability
pub mod metrics;

/// Error types for the Store runtime
pub mod error {
    use thiserror::Error;

    /// Errors that can occur during Store operations
    ///
    /// Reducers are total, so the only failure left is the shell refusing work.
    #[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
    pub enum StoreError {
        /// Store is shutting down and not accepting new actions
        ///
        /// This error is returned when `send()` or `dispatch()` is called after
        /// `shutdown()`.
        #[error("Store is shutting down")]
        ShutdownInProgress,
    }
}

pub use error::StoreError;

/// Default number of applied actions buffered per subscriber
pub const DEFAULT_BROADCAST_CAPACITY: usize = 16;

/// Configuration for Store instances
///
/// # Example
///
/// ```
/// use unidirectional_runtime::StoreConfig;
///
/// let config = StoreConfig::default()
///     .with_label("todos")
///     .with_broadcast_capacity(64);
///
/// assert_eq!(config.label, "todos");
/// assert_eq!(config.broadcast_capacity, 64);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Name of the store in spans, logs, and metric labels
    pub label: String,
    /// Number of applied actions buffered for each subscriber
    ///
    /// A subscriber that falls further behind than this skips ahead and
    /// observes `RecvError::Lagged`. Values below 1 are raised to 1.
    pub broadcast_capacity: usize,
}

impl StoreConfig {
    /// Create a new configuration with custom values
    #[must_use]
    pub fn new(label: impl Into<String>, broadcast_capacity: usize) -> Self {
        Self {
            label: label.into(),
            broadcast_capacity,
        }
    }

    /// Set the store label
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Set the subscriber buffer size
    #[must_use]
    pub const fn with_broadcast_capacity(mut self, capacity: usize) -> Self {
        self.broadcast_capacity = capacity;
        self
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            label: "store".to_string(),
            broadcast_capacity: DEFAULT_BROADCAST_CAPACITY,
        }
    }
}

/// Store module - the stateful shell around a pure reducer
pub mod store {
    use super::{Action, Arc, AtomicBool, Ordering, Reducer, RwLock, StoreConfig, StoreError};
    use crate::metrics::StoreMetrics;
    use tokio::sync::broadcast;

    /// The Store - runtime coordinator for a reducer
    ///
    /// The Store manages:
    /// 1. State (behind `RwLock`, replaced wholesale after every action)
    /// 2. Reducer (business logic)
    /// 3. Environment (injected dependencies)
    /// 4. Subscribers (notified of every applied action)
    ///
    /// Dispatch is serialized: the write lock is held for the whole reducer
    /// call, so each reducer invocation sees the previous invocation's output
    /// and actions are applied in the order they acquire the lock.
    ///
    /// # Type Parameters
    ///
    /// - `S`: State type
    /// - `A`: Action type
    /// - `E`: Environment type
    /// - `R`: Reducer implementation
    ///
    /// # Example
    ///
    /// ```ignore
    /// let store = Store::new(TodoState::default(), TodoAppReducer::new(), ());
    ///
    /// let next = store.dispatch(add_todo("buy milk")).await?;
    /// assert_eq!(next.todos.len(), 1);
    /// ```
    pub struct Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
    {
        pub(crate) state: Arc<RwLock<S>>,
        reducer: Arc<R>,
        environment: Arc<E>,
        label: Arc<str>,
        shutdown: Arc<AtomicBool>,
        /// Applied actions, in application order.
        action_broadcast: broadcast::Sender<A>,
    }

    impl<S, A, E, R> Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E> + Send + Sync + 'static,
        A: Action + Clone + Send + 'static,
        S: Send + Sync + 'static,
        E: Send + Sync + 'static,
    {
        /// Create a new store with initial state, reducer, and environment
        ///
        /// Uses [`StoreConfig::default`].
        ///
        /// # Arguments
        ///
        /// - `initial_state`: The starting state for the store
        /// - `reducer`: The reducer implementation (business logic)
        /// - `environment`: Injected dependencies
        #[must_use]
        pub fn new(initial_state: S, reducer: R, environment: E) -> Self {
            Self::with_config(initial_state, reducer, environment, StoreConfig::default())
        }

        /// Create a new Store with custom configuration
        ///
        /// # Example
        ///
        /// ```ignore
        /// let config = StoreConfig::default().with_label("todos");
        /// let store = Store::with_config(TodoState::default(), TodoAppReducer::new(), (), config);
        /// ```
        #[must_use]
        pub fn with_config(
            initial_state: S,
            reducer: R,
            environment: E,
            config: StoreConfig,
        ) -> Self {
            let (action_broadcast, _) = broadcast::channel(config.broadcast_capacity.max(1));

            Self {
                state: Arc::new(RwLock::new(initial_state)),
                reducer: Arc::new(reducer),
                environment: Arc::new(environment),
                label: Arc::from(config.label),
                shutdown: Arc::new(AtomicBool::new(false)),
                action_broadcast,
            }
        }

        /// Name of this store in logs and metrics
        #[must_use]
        pub fn label(&self) -> &str {
            &self.label
        }

        /// Send an action to the store
        ///
        /// 1. Acquires the write lock on state
        /// 2. Calls the reducer with (state, action, environment)
        /// 3. Replaces the held state with the result
        /// 4. Notifies subscribers
        ///
        /// # Errors
        ///
        /// Returns [`StoreError::ShutdownInProgress`] if the store is shutting down.
        #[tracing::instrument(skip(self, action), name = "store_send", fields(store = %self.label, kind = action.kind()))]
        pub async fn send(&self, action: A) -> Result<(), StoreError> {
            self.apply(action, |_| ()).await
        }

        /// Send an action and return a snapshot of the resulting state
        ///
        /// The snapshot is taken under the same lock that applied the action, so
        /// it is exactly the reducer's output for this action.
        ///
        /// # Errors
        ///
        /// Returns [`StoreError::ShutdownInProgress`] if the store is shutting down.
        #[tracing::instrument(skip(self, action), name = "store_dispatch", fields(store = %self.label, kind = action.kind()))]
        pub async fn dispatch(&self, action: A) -> Result<S, StoreError>
        where
            S: Clone,
        {
            self.apply(action, S::clone).await
        }

        async fn apply<T>(&self, action: A, snapshot: impl FnOnce(&S) -> T) -> Result<T, StoreError> {
            // Check if store is shutting down
            if self.shutdown.load(Ordering::Acquire) {
                return Err(self.reject());
            }

            let kind = action.kind();

            let result = {
                let mut state = self.state.write().await;
                tracing::trace!("Acquired write lock on state");

                // Shutdown may have happened while waiting for the lock.
                if self.shutdown.load(Ordering::Acquire) {
                    return Err(self.reject());
                }

                let start = std::time::Instant::now();
                let next = self.reducer.reduce(&*state, &action, &self.environment);
                *state = next;
                StoreMetrics::record_action(&self.label, kind, start.elapsed());

                // Broadcast under the lock so subscribers see application order.
                // An error only means nobody is subscribed.
                let _ = self.action_broadcast.send(action);

                snapshot(&*state)
            };

            tracing::debug!(kind, "Action applied");
            Ok(result)
        }

        fn reject(&self) -> StoreError {
            tracing::warn!("Rejected action: store is shutting down");
            StoreMetrics::record_rejection(&self.label);
            StoreError::ShutdownInProgress
        }

        /// Read current state via a closure
        ///
        /// Access state through a closure to ensure the lock is released promptly:
        ///
        /// ```ignore
        /// let count = store.state(|s| s.todos.len()).await;
        /// ```
        pub async fn state<F, T>(&self, f: F) -> T
        where
            F: FnOnce(&S) -> T,
        {
            let state = self.state.read().await;
            f(&*state)
        }

        /// Subscribe to applied actions
        ///
        /// The receiver yields every action after the state change it caused is
        /// visible through [`Store::state`]. Actions sent before subscribing are
        /// not replayed.
        #[must_use]
        pub fn subscribe(&self) -> broadcast::Receiver<A> {
            self.action_broadcast.subscribe()
        }

        /// Number of live subscribers
        #[must_use]
        pub fn subscriber_count(&self) -> usize {
            self.action_broadcast.receiver_count()
        }

        /// Stop accepting actions
        ///
        /// Already-applied actions are unaffected; later `send`/`dispatch` calls
        /// on this store or any of its clones fail with
        /// [`StoreError::ShutdownInProgress`], and so do calls still waiting
        /// for the state lock. Once this returns, the state only changes
        /// through an action that was already being reduced. State stays
        /// readable.
        pub fn shutdown(&self) {
            if !self.shutdown.swap(true, Ordering::AcqRel) {
                tracing::info!(store = %self.label, "Store shut down");
            }
        }

        /// Whether `shutdown()` has been called
        #[must_use]
        pub fn is_shut_down(&self) -> bool {
            self.shutdown.load(Ordering::Acquire)
        }
    }

    impl<S, A, E, R> Clone for Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
    {
        fn clone(&self) -> Self {
            Self {
                state: Arc::clone(&self.state),
                reducer: Arc::clone(&self.reducer),
                environment: Arc::clone(&self.environment),
                label: Arc::clone(&self.label),
                shutdown: Arc::clone(&self.shutdown),
                action_broadcast: self.action_broadcast.clone(),
            }
        }
    }

    impl<S, A, E, R> std::fmt::Debug for Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
    {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.debug_struct("Store")
                .field("label", &self.label)
                .field("shutdown", &self.shutdown.load(Ordering::Relaxed))
                .field("subscribers", &self.action_broadcast.receiver_count())
                .finish_non_exhaustive()
        }
    }
}

// Re-export for convenience
pub use store::Store;
