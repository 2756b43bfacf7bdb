//! Single rolling auto-dismiss timer.
//!
//! At most one delayed task is outstanding at any instant. Arming always
//! aborts the previous task first, and every arm/cancel bumps a generation
//! counter so a task that already woke up but lost the race for the store
//! lock can tell it is stale and back off.

use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::config;

#[derive(Debug)]
pub struct ExpiryScheduler {
    ttl: Duration,
    generation: u64,
    pending: Option<JoinHandle<()>>,
}

impl ExpiryScheduler {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            generation: 0,
            pending: None,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Cancels any armed timer and schedules `on_fire` after `ttl`.
    ///
    /// `on_fire` receives the generation it was armed under; pass it back to
    /// [`ExpiryScheduler::take_fired`] before acting. Outside a tokio runtime
    /// nothing is scheduled and the scheduler stays idle.
    pub fn arm<F>(&mut self, on_fire: F)
    where
        F: FnOnce(u64) + Send + 'static,
    {
        self.cancel();

        let handle = match Handle::try_current() {
            Ok(h) => h,
            Err(_) => {
                tracing::warn!("no tokio runtime; alert expiry timer not armed");
                return;
            }
        };

        let generation = self.generation;
        let ttl = self.ttl;
        self.pending = Some(handle.spawn(async move {
            tokio::time::sleep(ttl).await;
            on_fire(generation);
        }));

        tracing::debug!(generation, ttl_ms = config::millis(ttl), "expiry timer armed");
    }

    /// Aborts the outstanding timer, if any. Safe to call repeatedly.
    pub fn cancel(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        if let Some(task) = self.pending.take() {
            task.abort();
            tracing::debug!(generation = self.generation, "expiry timer canceled");
        }
    }

    /// Claims a firing. Returns false when `generation` has been superseded
    /// by a later arm or cancel, in which case the caller must do nothing.
    pub fn take_fired(&mut self, generation: u64) -> bool {
        if generation != self.generation {
            return false;
        }
        // The task is finishing on its own; detach rather than abort it.
        self.pending = None;
        true
    }

    pub fn is_armed(&self) -> bool {
        self.pending.as_ref().is_some_and(|t| !t.is_finished())
    }
}

impl Drop for ExpiryScheduler {
    fn drop(&mut self) {
        self.cancel();
    }
}
