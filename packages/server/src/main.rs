//! readcoach backend entry point.

use anyhow::Context;
use readcoach_domain::{ServiceError, VoiceSelection};
use readcoach_gcloud::GoogleClient;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

mod error;
mod routes;
mod state;

use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,readcoach_server=debug")),
        )
        .init();

    let gcloud = GoogleClient::from_env()
        .map_err(|e| ServiceError::Configuration(e.to_string()))
        .context("building the Google Cloud client")?;
    let state = Arc::new(AppState::new(gcloud, VoiceSelection::default()));

    let addr = std::env::var("READCOACH_ADDR").unwrap_or_else(|_| "0.0.0.0:8000".to_owned());
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    tracing::info!(%addr, "readcoach backend listening");

    axum::serve(listener, routes::router(state)).await?;
    Ok(())
}
