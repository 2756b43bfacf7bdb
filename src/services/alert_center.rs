//! The owning controller for the alert queue.
//!
//! `AlertCenter` is a cheap, cloneable handle around one lock that holds the
//! store, the expiry timer and the emphasis dispatcher, so `add`, `dismiss`
//! and timer firings never interleave. The timer task only keeps a weak
//! reference: once the last handle is dropped the board (and its timer)
//! goes away and nothing fires afterwards.

use std::sync::{Arc, Mutex, MutexGuard, Weak};

use crate::config::AlertSettings;
use crate::events::{DashboardEvent, EventBus};
use crate::models::{Alert, AlertId};
use crate::services::alert_store::{AlertStore, StoreChange};
use crate::services::expiry_scheduler::ExpiryScheduler;
use crate::services::side_effect::NotificationSideEffect;

struct Board {
    store: AlertStore,
    expiry: ExpiryScheduler,
    side_effect: NotificationSideEffect,
    events: Option<EventBus>,
    closed: bool,
}

#[derive(Clone)]
pub struct AlertCenter {
    inner: Arc<Mutex<Board>>,
}

fn lock(inner: &Mutex<Board>) -> MutexGuard<'_, Board> {
    inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl AlertCenter {
    pub fn new(settings: AlertSettings, side_effect: NotificationSideEffect) -> Self {
        let settings = settings.normalized();
        let board = Board {
            store: AlertStore::new(settings.store_capacity, settings.visible_limit),
            expiry: ExpiryScheduler::new(settings.ttl),
            side_effect,
            events: None,
            closed: false,
        };

        Self {
            inner: Arc::new(Mutex::new(board)),
        }
    }

    /// Publish `alertsUpdated` on `events` after every change.
    pub fn with_events(self, events: EventBus) -> Self {
        lock(&self.inner).events = Some(events);
        self
    }

    pub fn add(&self, alert: Alert) {
        let weak = Arc::downgrade(&self.inner);
        let mut board = lock(&self.inner);
        if board.closed {
            tracing::debug!(id = %alert.id, "alert center closed; alert dropped");
            return;
        }

        tracing::info!(id = %alert.id, kind = %alert.kind, "alert added");
        let change = board.store.add(alert);
        if let Some(evicted) = &change.evicted {
            tracing::debug!(id = %evicted.id, "alert evicted (over capacity)");
        }
        board.apply(change, weak);
    }

    pub fn dismiss(&self, id: &AlertId) {
        let weak = Arc::downgrade(&self.inner);
        let mut board = lock(&self.inner);
        let change = board.store.dismiss(id);
        if !change.changed {
            tracing::debug!(%id, "dismiss for unknown alert ignored");
            return;
        }

        tracing::info!(%id, "alert dismissed");
        board.apply(change, weak);
    }

    pub fn visible(&self, limit: usize) -> Vec<Alert> {
        lock(&self.inner).store.visible(limit)
    }

    pub fn visible_default(&self) -> Vec<Alert> {
        lock(&self.inner).store.visible_default()
    }

    pub fn visible_limit(&self) -> usize {
        lock(&self.inner).store.visible_limit()
    }

    pub fn len(&self) -> usize {
        lock(&self.inner).store.len()
    }

    pub fn is_empty(&self) -> bool {
        lock(&self.inner).store.is_empty()
    }

    pub fn head(&self) -> Option<Alert> {
        lock(&self.inner).store.head().cloned()
    }

    pub fn expiry_armed(&self) -> bool {
        lock(&self.inner).expiry.is_armed()
    }

    pub fn clear(&self) {
        let weak = Arc::downgrade(&self.inner);
        let mut board = lock(&self.inner);
        let change = board.store.clear();
        board.apply(change, weak);
    }

    /// Tears the center down: cancels the timer and refuses further adds.
    pub fn shutdown(&self) {
        let mut board = lock(&self.inner);
        board.closed = true;
        board.expiry.cancel();
        tracing::info!("alert center shut down");
    }

    fn on_expiry(weak: Weak<Mutex<Board>>, generation: u64) {
        let Some(inner) = weak.upgrade() else {
            return;
        };
        let mut board = lock(&inner);
        if board.closed || !board.expiry.take_fired(generation) {
            return;
        }

        let Some(id) = board.store.window_tail() else {
            return;
        };

        tracing::info!(%id, "alert expired");
        let change = board.store.dismiss(&id);
        board.apply(change, weak);
    }
}

impl Board {
    fn apply(&mut self, change: StoreChange, weak: Weak<Mutex<Board>>) {
        if !change.changed {
            return;
        }

        if change.new_head.is_some() {
            if let Some(head) = self.store.head() {
                self.side_effect.dispatch(head);
            }
        }

        if change.window_changed {
            if self.store.is_empty() || self.closed {
                self.expiry.cancel();
            } else {
                self.expiry
                    .arm(move |generation| AlertCenter::on_expiry(weak, generation));
            }
        }

        if let Some(events) = &self.events {
            // Nobody listening is fine.
            let _ = events.send(DashboardEvent::alerts_updated(self.store.len()));
        }
    }
}
