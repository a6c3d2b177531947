mod config;
mod error;
mod models;
mod routes;
mod store;

use std::sync::Arc;

use crate::{config::Config, store::MovieStore};

#[derive(Clone)]
pub struct AppState {
    pub store: MovieStore,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,movied=debug".to_string()),
        )
        .init();

    let config = Config::from_env()?;

    let state = Arc::new(AppState { store: MovieStore::new() });
    let app = routes::router(state);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    tracing::info!(addr = %config.addr, "server is running");
    axum::serve(listener, app).await?;

    Ok(())
}
