use std::net::SocketAddr;

use tracing_subscriber::EnvFilter;

use sniperdesk::{config, routes, AppState};

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for ctrl-c: {}", e);
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let settings = config::load();
    tracing::info!(
        capacity = settings.alerts.store_capacity,
        visible = settings.alerts.visible_limit,
        ttl_ms = config::millis(settings.alerts.ttl),
        "alert queue configured"
    );

    let state = AppState::from_settings(settings.clone());
    let app = routes::app(state.clone());

    let addr = SocketAddr::from((settings.host.parse::<std::net::IpAddr>()?, settings.port));
    tracing::info!("listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    state.alerts.shutdown();
    Ok(())
}
