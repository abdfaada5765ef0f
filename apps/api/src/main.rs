mod config;
mod errors;
mod generation;
mod llm_client;
mod models;
mod routes;
mod state;
#[cfg(test)]
mod test_support;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::generation::generator::ResumeGenerator;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed values, not on a missing key)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Tailor API v{}", env!("CARGO_PKG_VERSION"));

    config.warn_if_unconfigured();

    // Initialize LLM client
    let llm = LlmClient::new(config.gemini_base_url.clone(), config.llm_timeout)?;
    info!(
        "LLM client initialized (model: {}, timeout: {}s)",
        config.gemini_model,
        config.llm_timeout.as_secs()
    );

    let generator = ResumeGenerator::new(
        config.gemini_api_key.clone(),
        Arc::new(llm),
        config.gemini_model.clone(),
    )
    .with_default_variant(config.template_variant);
    info!("Default template variant: {}", generator.default_variant());

    let state = AppState {
        generator: Arc::new(generator),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
