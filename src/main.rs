use anyhow::{Context, Result};
use spaceapi_bridge::api::{create_spaceapi_router, SpaceApiAppState};
use spaceapi_bridge::config::load_config_or_default;
use spaceapi_bridge::schema::StatusDocument;
use spaceapi_bridge::translator::Translator;
use spaceapi_bridge::upstream::HttpStateSource;
use std::sync::Arc;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "spaceapi_bridge=info".into()),
        )
        .init();

    info!("SpaceAPI bridge starting...");

    let config_path =
        std::env::var("SPACEAPI_CONFIG").unwrap_or_else(|_| "spaceapi.toml".to_string());
    let mut config = load_config_or_default(&config_path)?;
    config.apply_env();

    let template = match &config.template.path {
        Some(path) => StatusDocument::from_json_file(path)?,
        None => StatusDocument::metalab(),
    };
    info!(space = %template.space, "Facility template ready");

    let source = HttpStateSource::new(&config.upstream)?;
    info!(
        url = %source.url(),
        timeout_seconds = config.upstream.timeout_seconds,
        schema = ?config.upstream.schema,
        "Upstream state source configured"
    );

    let translator = Translator::new(template, Arc::new(source));
    let router = create_spaceapi_router(SpaceApiAppState { translator });

    let listener = tokio::net::TcpListener::bind(&config.server.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.server.bind_addr))?;
    info!(addr = %config.server.bind_addr, "SpaceAPI listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    info!("SpaceAPI bridge stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for ctrl_c signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
