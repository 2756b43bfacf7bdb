//! One-shot emphasis for a newly-arrived head alert.
//!
//! Sinks are best-effort: an error from any sink is logged and dropped, and
//! never reaches the store mutation that triggered it.

use std::sync::Arc;

use serde_json::json;

use crate::events::{DashboardEvent, EventBus, ALERT_EMPHASIS};
use crate::models::Alert;

pub trait Emphasis: Send + Sync {
    fn name(&self) -> &'static str;

    fn emphasize(&self, alert: &Alert) -> Result<(), String>;
}

/// Publishes the tone and CSS class for the head alert so the browser can
/// play/flash it.
pub struct BroadcastEmphasis {
    events: EventBus,
}

impl BroadcastEmphasis {
    pub fn new(events: EventBus) -> Self {
        Self { events }
    }
}

impl Emphasis for BroadcastEmphasis {
    fn name(&self) -> &'static str {
        "broadcast"
    }

    fn emphasize(&self, alert: &Alert) -> Result<(), String> {
        // No open tab, nothing to flash.
        if self.events.receiver_count() == 0 {
            return Ok(());
        }

        let payload = json!({
            "id": alert.id,
            "kind": alert.kind,
            "class": alert.kind.emphasis_class(),
            "tone": alert.kind.tone(),
        });

        self.events
            .send(DashboardEvent {
                name: ALERT_EMPHASIS,
                data: payload.to_string(),
            })
            .map(|_| ())
            .map_err(|e| e.to_string())
    }
}

#[derive(Clone, Default)]
pub struct NotificationSideEffect {
    sinks: Vec<Arc<dyn Emphasis>>,
}

impl NotificationSideEffect {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sink(mut self, sink: Arc<dyn Emphasis>) -> Self {
        self.sinks.push(sink);
        self
    }

    pub fn is_silent(&self) -> bool {
        self.sinks.is_empty()
    }

    pub fn dispatch(&self, alert: &Alert) {
        for sink in &self.sinks {
            if let Err(e) = sink.emphasize(alert) {
                tracing::warn!(
                    sink = sink.name(),
                    id = %alert.id,
                    kind = %alert.kind,
                    "alert emphasis failed: {}",
                    e
                );
            }
        }
    }
}
