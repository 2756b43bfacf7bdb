use axum::{Router, routing::{get, post}};
use crate::{AppState, controllers::alerts_controller};

pub fn add_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/alerts", get(alerts_controller::get_alerts_list).post(alerts_controller::post_add_alert))
        .route("/alerts/visible", get(alerts_controller::get_visible_alerts))
        .route("/alerts/trade", post(alerts_controller::post_trade_alert))
        .route("/alerts/connection", post(alerts_controller::post_connection_alert))
        .route("/alerts/token", post(alerts_controller::post_token_alert))
        .route("/alerts/:id/dismiss", post(alerts_controller::post_dismiss_alert))
}
