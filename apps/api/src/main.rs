mod config;
mod errors;
mod ingest;
mod models;
mod ner;
mod parser;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::http::HeaderValue;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::ner::{DisabledNer, HttpNerClient, NameRecognizer};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting resume parser API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize the NER collaborator (disabled unless NER_ENDPOINT is set)
    let ner: Arc<dyn NameRecognizer> = match &config.ner_endpoint {
        Some(endpoint) => {
            info!("NER client initialized (endpoint: {endpoint})");
            Arc::new(HttpNerClient::new(endpoint.clone()))
        }
        None => {
            info!("NER disabled; name extraction uses line heuristic only");
            Arc::new(DisabledNer)
        }
    };

    let cors = build_cors_layer(&config)?;

    let state = AppState {
        config: config.clone(),
        ner,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Restricts CORS to the configured origin; permissive when unset.
fn build_cors_layer(config: &Config) -> Result<CorsLayer> {
    Ok(match &config.cors_allowed_origin {
        Some(origin) => CorsLayer::new()
            .allow_origin(origin.parse::<HeaderValue>()?)
            .allow_methods(Any)
            .allow_headers(Any),
        None => CorsLayer::permissive(),
    })
}
