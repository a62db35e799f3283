mod config;
mod editor;
mod errors;
mod export;
mod models;
mod preview;
mod routes;
mod state;
mod store;
mod views;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::export::page::page_config;
use crate::models::resume::Resume;
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::DocumentStore;
use crate::views::Views;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resume Maker v{}", env!("CARGO_PKG_VERSION"));

    // Page geometry for the print stylesheet
    let page = page_config(config.paper_size);
    info!(
        "Print page: {} ({}mm x {}mm)",
        config.paper_size, page.width_mm, page.height_mm
    );

    let views = Views::new(page)?;

    // The session's document starts blank and lives only as long as the process
    let state = AppState {
        store: Arc::new(DocumentStore::new(Resume::default())),
        views: Arc::new(views),
        config: config.clone(),
    };

    let app = build_router(state).layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    info!("Listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
