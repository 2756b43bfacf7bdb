use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse},
};

use crate::{render, AppState};

pub async fn home(State(state): State<AppState>) -> impl IntoResponse {
    match render::render_shell(&state, "/") {
        Ok(page) => (StatusCode::OK, Html(page)).into_response(),
        Err(e) => (StatusCode::INTERNAL_SERVER_ERROR, Html(e)).into_response(),
    }
}

pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Html("not found".to_string()))
}

pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Html(format!("ok ({} alerts)", state.alerts.len())),
    )
}
