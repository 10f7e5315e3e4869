mod config;
mod errors;
mod filter;
mod models;
mod render;
mod routes;
mod state;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::models::Catalog;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Storefront v{}", env!("CARGO_PKG_VERSION"));

    // Load the resume catalog once; it is read-only from here on
    let catalog = Catalog::load(config.resume_data_path.as_deref())
        .context("Failed to load resume catalog")?;

    match &config.resume_pdf_path {
        Some(path) => info!("Resume download served from {}", path.display()),
        None => info!("No RESUME_PDF_PATH set; download link shows a placeholder notice"),
    }

    let state = AppState::new(catalog, config.clone());

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
