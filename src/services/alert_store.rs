//! Bounded, newest-first alert collection.
//!
//! The store only ever inserts at the head and removes by id. Every mutation
//! reports what changed so the owner can rearm expiry and fire emphasis
//! without re-deriving it from snapshots.

use std::collections::VecDeque;

use crate::models::{Alert, AlertId, AlertKind};

/// Outcome of a single `add` / `dismiss` / `expire`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoreChange {
    /// Whether the store contents changed at all.
    pub changed: bool,
    /// Whether the visible window (first `visible_limit` ids) changed.
    pub window_changed: bool,
    /// Head identity after the mutation, when it differs from before.
    pub new_head: Option<(AlertId, AlertKind)>,
    /// Tail entry dropped because capacity was exceeded.
    pub evicted: Option<Alert>,
    /// Entry removed by dismiss or expiry.
    pub removed: Option<Alert>,
}

#[derive(Debug)]
pub struct AlertStore {
    entries: VecDeque<Alert>,
    capacity: usize,
    visible_limit: usize,
}

impl AlertStore {
    pub fn new(capacity: usize, visible_limit: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity + 1),
            capacity,
            visible_limit: visible_limit.clamp(1, capacity),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn visible_limit(&self) -> usize {
        self.visible_limit
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn head(&self) -> Option<&Alert> {
        self.entries.front()
    }

    /// Inserts at the head; drops the tail when over capacity. Never rejects.
    pub fn add(&mut self, alert: Alert) -> StoreChange {
        let before = self.snapshot_ids();

        self.entries.push_front(alert);

        let evicted = if self.entries.len() > self.capacity {
            self.entries.pop_back()
        } else {
            None
        };

        self.finish(before, None, evicted)
    }

    /// Removes the first entry carrying `id`. Unknown ids are a no-op.
    pub fn dismiss(&mut self, id: &AlertId) -> StoreChange {
        let Some(pos) = self.entries.iter().position(|a| &a.id == id) else {
            return StoreChange::default();
        };

        let before = self.snapshot_ids();
        let removed = self.entries.remove(pos);
        self.finish(before, removed, None)
    }

    /// Id of the oldest alert currently in the visible window.
    pub fn window_tail(&self) -> Option<AlertId> {
        let n = self.entries.len().min(self.visible_limit);
        n.checked_sub(1)
            .and_then(|i| self.entries.get(i))
            .map(|a| a.id.clone())
    }

    /// Copy of the first `limit` alerts, newest first.
    pub fn visible(&self, limit: usize) -> Vec<Alert> {
        self.entries.iter().take(limit).cloned().collect()
    }

    pub fn visible_default(&self) -> Vec<Alert> {
        self.visible(self.visible_limit)
    }

    pub fn clear(&mut self) -> StoreChange {
        if self.entries.is_empty() {
            return StoreChange::default();
        }
        self.entries.clear();
        StoreChange {
            changed: true,
            window_changed: true,
            ..StoreChange::default()
        }
    }

    fn window_ids(&self) -> Vec<AlertId> {
        self.entries
            .iter()
            .take(self.visible_limit)
            .map(|a| a.id.clone())
            .collect()
    }

    fn snapshot_ids(&self) -> (Option<AlertId>, Vec<AlertId>) {
        (self.head().map(|a| a.id.clone()), self.window_ids())
    }

    fn finish(
        &self,
        (head_before, window_before): (Option<AlertId>, Vec<AlertId>),
        removed: Option<Alert>,
        evicted: Option<Alert>,
    ) -> StoreChange {
        let window_changed = self.window_ids() != window_before;

        // Head-identity check: emphasis is due whenever the head is now a
        // different alert, whether it arrived by add or surfaced by removal.
        let new_head = match self.entries.front() {
            Some(head) if head_before.as_ref() != Some(&head.id) => {
                Some((head.id.clone(), head.kind))
            }
            _ => None,
        };

        StoreChange {
            changed: true,
            window_changed,
            new_head,
            evicted,
            removed,
        }
    }
}
