use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde_json::json;

use crate::{models::Alert, models::AlertId, AppState};

/// Everything but RFC 3986 unreserved characters, so an id is one path segment.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

pub fn dismiss_url(id: &AlertId) -> String {
    format!("/alerts/{}/dismiss", utf8_percent_encode(id.as_str(), PATH_SEGMENT))
}

pub fn alert_json(a: &Alert) -> serde_json::Value {
    json!({
        "id": a.id,
        "kind": a.kind,
        "emoji": a.kind.emoji(),
        "emphasis": a.kind.emphasis_class(),
        "dismiss_url": dismiss_url(&a.id),
        "title": a.title,
        "message": a.message,
        "details": a.details,
        "timestamp": a.timestamp,
    })
}

pub fn render_alerts(state: &AppState, alerts: &[Alert]) -> Result<String, String> {
    let items: Vec<serde_json::Value> = alerts.iter().map(alert_json).collect();
    let ctx = json!({ "alerts": items, "has_alerts": !items.is_empty() });

    state
        .hbs
        .render("partials/alerts_list", &ctx)
        .map_err(|e| e.to_string())
}

pub fn render_shell(state: &AppState, initial_path: &str) -> Result<String, String> {
    let alerts_html = render_alerts(state, &state.alerts.visible_default())?;

    let ctx = json!({
        "title": "SniperDesk",
        "initial_path": initial_path,
        "alerts_html": alerts_html,
    });

    state
        .hbs
        .render("layouts/base", &ctx)
        .map_err(|e| e.to_string())
}
