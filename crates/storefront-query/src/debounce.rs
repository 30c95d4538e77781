//! Debouncing for high-frequency filter input (keystrokes, slider drags).
//!
//! A [`Debouncer`] owns a single pending-call slot. Every [`Debouncer::call`]
//! aborts whatever is in the slot and arms a fresh timer task, so at most one
//! invocation is ever pending and only the most recent arguments run.
//!
//! # Timing (delay = 30 ms)
//!
//! | Call at | Outcome |
//! |---------|---------|
//! | t=0  | superseded at t=10, never runs |
//! | t=10 | superseded at t=35, never runs |
//! | t=35 | runs once at t=65 |

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::error::QueryError;

type Action<T> = Arc<dyn Fn(T) + Send + Sync>;

pub struct Debouncer<T> {
    action: Action<T>,
    delay: Duration,
    runtime: Handle,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl<T: Send + 'static> Debouncer<T> {
    /// Creates a debouncer whose timers run on the current tokio runtime.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::NoRuntime`] when called outside a tokio runtime.
    pub fn new<F>(action: F, delay: Duration) -> Result<Self, QueryError>
    where
        F: Fn(T) + Send + Sync + 'static,
    {
        let runtime = Handle::try_current()?;
        Ok(Self::with_handle(runtime, action, delay))
    }

    /// Creates a debouncer whose timers run on `runtime`.
    #[must_use]
    pub fn with_handle<F>(runtime: Handle, action: F, delay: Duration) -> Self
    where
        F: Fn(T) + Send + Sync + 'static,
    {
        Self {
            action: Arc::new(action),
            delay,
            runtime,
            pending: Mutex::new(None),
        }
    }

    /// Schedules `action(args)` after the delay, replacing any pending call.
    pub fn call(&self, args: T) {
        let mut slot = self.pending.lock().unwrap_or_else(PoisonError::into_inner);

        if let Some(previous) = slot.take() {
            if !previous.is_finished() {
                tracing::debug!(delay = ?self.delay, "superseding pending debounced call");
            }
            previous.abort();
        }

        let action = Arc::clone(&self.action);
        let delay = self.delay;
        *slot = Some(self.runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            action(args);
        }));
    }

    /// Returns `true` while a scheduled call has not yet run.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl<T> std::fmt::Debug for Debouncer<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Debouncer")
            .field("delay", &self.delay)
            .finish_non_exhaustive()
    }
}

/// Wraps `action` in a [`Debouncer`] and returns its `call` as a closure.
///
/// # Errors
///
/// Returns [`QueryError::NoRuntime`] when called outside a tokio runtime.
pub fn debounce<T, F>(action: F, delay: Duration) -> Result<impl Fn(T), QueryError>
where
    T: Send + 'static,
    F: Fn(T) + Send + Sync + 'static,
{
    let debouncer = Debouncer::new(action, delay)?;
    Ok(move |args: T| debouncer.call(args))
}
