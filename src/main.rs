use anyhow::Context;
use clap::Parser; // for cli
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use quote_gateway::config::{ApiKey, Args};
use quote_gateway::{AppState, build_router};

// this is main async function with tokio
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env is optional, missing file just means defaults
    let _ = dotenv::dotenv();
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // creating shared state
    let state = Arc::new(AppState::from_args(&args).context("failed to build FavQs client")?);
    if state.api_key == ApiKey::Placeholder {
        warn!("FAVQS_API_KEY is a placeholder value, serving sample quotes");
    }

    let app = build_router(state.clone());

    let addr = format!("0.0.0.0:{}", args.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    info!("Quote gateway running on http://localhost:{}", args.port);
    if state.quotes.uses_upstream() {
        info!("Forwarding to FavQs at {}", args.api_url);
    } else {
        info!("{}", state.api_key.status());
    }
    info!("Cache TTL: {} seconds", args.cache_ttl);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
}
