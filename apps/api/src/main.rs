mod config;
mod errors;
mod extraction;
mod llm_client;
mod matching;
mod models;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{Backend, Config};
use crate::extraction::llm::LlmExtractor;
use crate::extraction::{ResumeExtractor, RuleBasedExtractor};
use crate::llm_client::{LlmBackend, LlmClient};
use crate::matching::llm::LlmJobMatcher;
use crate::matching::scoring::KeywordJobMatcher;
use crate::matching::JobMatcher;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Floowbox API v{}", env!("CARGO_PKG_VERSION"));

    let (extractor, matcher) = build_backends(&config)?;
    info!(
        "Backends: extractor={}, matcher={}",
        extractor.backend(),
        matcher.backend()
    );

    let state = AppState::new(&config, extractor, matcher);

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Constructs the extractor / matcher pair for the configured backend.
/// The LLM client is built once here and shared by both.
fn build_backends(config: &Config) -> Result<(Arc<dyn ResumeExtractor>, Arc<dyn JobMatcher>)> {
    match config.backend {
        Backend::RuleBased => Ok((
            Arc::new(RuleBasedExtractor),
            Arc::new(KeywordJobMatcher {
                policy: config.match_policy,
            }),
        )),
        Backend::Llm => {
            let settings = config
                .llm
                .clone()
                .context("LLM backend selected without LLM settings")?;
            let client = LlmClient::new(settings).context("Failed to build LLM HTTP client")?;
            info!("LLM client initialized (model: {})", client.model());

            let llm: Arc<dyn LlmBackend> = Arc::new(client);
            Ok((
                Arc::new(LlmExtractor::new(llm.clone())),
                Arc::new(LlmJobMatcher::new(llm)),
            ))
        }
    }
}
