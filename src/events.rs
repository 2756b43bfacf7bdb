use tokio::sync::broadcast;

pub const ALERTS_UPDATED: &str = "alertsUpdated";
pub const ALERT_EMPHASIS: &str = "alertEmphasis";

/// Something every open dashboard tab should hear about.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardEvent {
    pub name: &'static str,
    pub data: String,
}

impl DashboardEvent {
    pub fn alerts_updated(len: usize) -> Self {
        Self {
            name: ALERTS_UPDATED,
            data: len.to_string(),
        }
    }
}

pub type EventBus = broadcast::Sender<DashboardEvent>;

pub fn event_bus() -> EventBus {
    let (tx, _rx) = broadcast::channel::<DashboardEvent>(64);
    tx
}
