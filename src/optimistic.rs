//! Optimistic state transitions with rollback.
//!
//! A command applies its transition to shared state right away, keeping a
//! rollback closure that captures whatever it overwrote. Once the remote call
//! resolves, [`OptimisticCommand::settle`] either keeps the speculative state
//! or restores the captured snapshot.

use crate::errors::ApiResult;
use tokio::sync::Mutex;
use tracing::debug;

/// Undo closure captured by a transition
pub type Rollback<S> = Box<dyn FnOnce(&mut S) + Send>;

#[must_use = "an optimistic command must be settled"]
pub struct OptimisticCommand<'a, S> {
    state: &'a Mutex<S>,
    rollback: Rollback<S>,
}

impl<'a, S: Send> OptimisticCommand<'a, S> {
    /// Apply `transition` under the lock. The transition returns the closure
    /// that undoes it.
    pub async fn begin<F>(state: &'a Mutex<S>, transition: F) -> Self
    where
        F: FnOnce(&mut S) -> Rollback<S>,
    {
        let mut guard = state.lock().await;
        let rollback = transition(&mut *guard);
        Self { state, rollback }
    }

    /// Keep the transition on success, undo it on failure. The outcome is
    /// returned unchanged either way.
    pub async fn settle<T>(self, outcome: ApiResult<T>) -> ApiResult<T> {
        if outcome.is_err() {
            debug!("remote call failed, rolling back optimistic update");
            let mut guard = self.state.lock().await;
            (self.rollback)(&mut *guard);
        }
        outcome
    }
}
