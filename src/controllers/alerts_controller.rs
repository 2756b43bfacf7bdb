use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::{HeaderMap, HeaderValue, StatusCode},
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::json;

use crate::{
    events::ALERTS_UPDATED,
    models::{
        alert::{clip_message, display_timestamp},
        Alert, AlertId, AlertKind, Recommendation, TradeSide,
    },
    render, AppState,
};

fn bad_request(e: JsonRejection) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({ "error": e.body_text() })),
    )
        .into_response()
}

fn alerts_updated_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert("HX-Trigger", HeaderValue::from_static(ALERTS_UPDATED));
    headers
}

/// Producer payload. Every field is optional: a missing kind falls back to
/// `info` and a missing message renders empty.
#[derive(Debug, Default, Deserialize)]
pub struct NewAlert {
    pub id: Option<AlertId>,
    pub kind: Option<String>,
    pub title: Option<String>,
    pub message: Option<String>,
    pub details: Option<String>,
    pub timestamp: Option<String>,
}

impl NewAlert {
    pub fn into_alert(self) -> Alert {
        let kind = match self.kind.as_deref().map(AlertKind::parse) {
            Some(Some(k)) => k,
            Some(None) => {
                tracing::debug!(kind = ?self.kind, "unknown alert kind; using info");
                AlertKind::Info
            }
            None => AlertKind::Info,
        };

        Alert {
            id: self.id.unwrap_or_else(AlertId::generate),
            kind,
            title: self.title,
            message: clip_message(self.message.unwrap_or_default()),
            details: self.details,
            timestamp: self.timestamp.unwrap_or_else(display_timestamp),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct TradeFillForm {
    pub side: TradeSide,
    pub symbol: String,
    pub amount: f64,
    pub price: f64,
    #[serde(default)]
    pub reasons: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct ConnectionForm {
    pub connected: bool,
    #[serde(default)]
    pub wallet: String,
}

/// Either a plain selection (`symbol` + `address`) or, when any screener
/// field is present, a new-token discovery notice.
#[derive(Debug, Deserialize)]
pub struct TokenForm {
    pub symbol: String,
    #[serde(default)]
    pub address: String,
    pub name: Option<String>,
    pub price: Option<f64>,
    pub liquidity: Option<f64>,
    pub recommendation: Option<String>,
}

impl TokenForm {
    pub fn into_alert(self) -> Alert {
        let symbol = self.symbol.trim().to_uppercase();
        let discovered = self.name.is_some()
            || self.price.is_some()
            || self.liquidity.is_some()
            || self.recommendation.is_some();

        if !discovered {
            return Alert::token_selected(&symbol, &self.address);
        }

        let name = self.name.unwrap_or_else(|| "Unknown".to_string());
        let recommendation = self
            .recommendation
            .as_deref()
            .map(Recommendation::parse)
            .unwrap_or_default();
        Alert::new_token(
            &symbol,
            &name,
            &self.address,
            self.price.unwrap_or_default(),
            self.liquidity.unwrap_or_default(),
            recommendation,
        )
    }
}

#[derive(Debug, Deserialize)]
pub struct VisibleQuery {
    pub limit: Option<usize>,
}

// GET /alerts
pub async fn get_alerts_list(State(state): State<AppState>) -> Response {
    let alerts = state.alerts.visible_default();

    match render::render_alerts(&state, &alerts) {
        Ok(html) => (StatusCode::OK, Html(html)).into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Html(format!("template error: {e}")),
        )
            .into_response(),
    }
}

// GET /alerts/visible?limit=3
pub async fn get_visible_alerts(
    State(state): State<AppState>,
    Query(q): Query<VisibleQuery>,
) -> Response {
    let limit = q.limit.unwrap_or_else(|| state.alerts.visible_limit());
    let alerts = state.alerts.visible(limit);

    (StatusCode::OK, Json(alerts)).into_response()
}

// POST /alerts
pub async fn post_add_alert(
    State(state): State<AppState>,
    payload: Result<Json<NewAlert>, JsonRejection>,
) -> Response {
    let Json(new_alert) = match payload {
        Ok(p) => p,
        Err(e) => return bad_request(e),
    };

    let alert = new_alert.into_alert();
    state.alerts.add(alert.clone());

    (StatusCode::CREATED, alerts_updated_headers(), Json(alert)).into_response()
}

// POST /alerts/trade
pub async fn post_trade_alert(
    State(state): State<AppState>,
    payload: Result<Json<TradeFillForm>, JsonRejection>,
) -> Response {
    let Json(form) = match payload {
        Ok(p) => p,
        Err(e) => return bad_request(e),
    };

    let symbol = form.symbol.trim().to_uppercase();
    let alert = Alert::trade_fill(form.side, &symbol, form.amount, form.price, &form.reasons);
    state.alerts.add(alert.clone());

    (StatusCode::CREATED, alerts_updated_headers(), Json(alert)).into_response()
}

// POST /alerts/connection
pub async fn post_connection_alert(
    State(state): State<AppState>,
    payload: Result<Json<ConnectionForm>, JsonRejection>,
) -> Response {
    let Json(form) = match payload {
        Ok(p) => p,
        Err(e) => return bad_request(e),
    };

    let alert = Alert::connection(form.connected, form.wallet.trim());
    state.alerts.add(alert.clone());

    (StatusCode::CREATED, alerts_updated_headers(), Json(alert)).into_response()
}

// POST /alerts/token
pub async fn post_token_alert(
    State(state): State<AppState>,
    payload: Result<Json<TokenForm>, JsonRejection>,
) -> Response {
    let Json(form) = match payload {
        Ok(p) => p,
        Err(e) => return bad_request(e),
    };

    let alert = form.into_alert();
    state.alerts.add(alert.clone());

    (StatusCode::CREATED, alerts_updated_headers(), Json(alert)).into_response()
}

// POST /alerts/:id/dismiss
pub async fn post_dismiss_alert(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Response {
    state.alerts.dismiss(&AlertId::new(id));

    (StatusCode::NO_CONTENT, alerts_updated_headers()).into_response()
}
