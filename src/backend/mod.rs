pub mod handlers;
mod response;
mod routes;

use axum::routing::get;
use axum::Router;
use sqlx::{Pool, Sqlite};

use crate::config::Config;

pub use response::ApiResponse;

#[derive(Clone)]
pub struct AppState {
    pub db: Pool<Sqlite>,
    pub pin_secret: String,
}

/// Builds the full application router. Tests drive this directly without a
/// listener.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "Backend is running" }))
        .merge(routes::api_routes())
        .with_state(state)
}

pub async fn run_server(config: &Config, pool: Pool<Sqlite>) -> anyhow::Result<()> {
    let state = AppState {
        db: pool,
        pin_secret: config.pin_secret.clone(),
    };
    let app = app(state);

    tracing::info!("Server listening on http://{}", config.bind_addr);
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
