//! Library entrypoint for SniperDesk.
//!
//! Integration tests under `tests/` import the app state, routers,
//! controllers and the alert services from here.

pub mod config;
pub mod events;
pub mod models;

pub mod services;

#[path = "views/render.rs"]
pub mod render;
#[path = "views/templates.rs"]
pub mod templates;

pub mod controllers;
pub mod routes;

use std::sync::Arc;

use models::{Alert, AlertKind};
use services::{
    side_effect::{BroadcastEmphasis, NotificationSideEffect},
    AlertCenter,
};

#[derive(Clone)]
pub struct AppState {
    pub hbs: templates::Hbs,
    pub settings: config::Settings,
    pub alerts: AlertCenter,
    pub events_tx: events::EventBus,
}

impl AppState {
    /// Wires the alert center to the dashboard event bus and, unless
    /// disabled, posts the bootstrap alert.
    pub fn from_settings(settings: config::Settings) -> Self {
        let events_tx = events::event_bus();

        let side_effect = if settings.alerts.emphasis {
            NotificationSideEffect::new()
                .with_sink(Arc::new(BroadcastEmphasis::new(events_tx.clone())))
        } else {
            NotificationSideEffect::new()
        };

        let alerts = AlertCenter::new(settings.alerts, side_effect).with_events(events_tx.clone());

        if settings.boot_alert {
            alerts.add(Alert::system(AlertKind::Info, "Dashboard started"));
        }

        Self {
            hbs: templates::build_handlebars(),
            settings,
            alerts,
            events_tx,
        }
    }
}
