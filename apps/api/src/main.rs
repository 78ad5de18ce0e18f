mod analysis;
mod builder;
mod chat;
mod config;
mod errors;
mod llm_client;
mod routes;
mod state;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analysis::generator::AiReportGenerator;
use crate::builder::store::ResumeStore;
use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Fails fast on a missing GOOGLE_API_KEY
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resume API v{}", env!("CARGO_PKG_VERSION"));

    // One connection pool shared by both models
    let http = reqwest::Client::builder()
        .timeout(config.llm_timeout)
        .build()
        .context("Failed to build HTTP client")?;

    let analysis_model = LlmClient::new(
        http.clone(),
        config.gemini_api_base.clone(),
        config.google_api_key.clone(),
        config.gemini_model.clone(),
    );
    let chat_model = LlmClient::new(
        http,
        config.gemini_api_base.clone(),
        config.google_api_key.clone(),
        config.chat_model.clone(),
    );
    info!(
        "LLM clients initialized (analysis: {}, chat: {})",
        analysis_model.model(),
        chat_model.model()
    );

    let resumes = ResumeStore::new(config.resumes_dir.clone());
    info!("Resume store at {}", resumes.dir().display());

    let state = AppState {
        analyzer: AiReportGenerator::new(Arc::new(analysis_model), config.llm_timeout),
        assistant: AiReportGenerator::new(Arc::new(chat_model), config.llm_timeout),
        resumes,
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once the frontend host is fixed

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
