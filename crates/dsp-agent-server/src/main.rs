//! DSP agent — chat server bridging game documentation and physics
//! research retrieval with a remote completion backend.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

mod routes;
mod state;
#[cfg(test)]
mod test_support;

use state::AppState;

fn resolve_config_path() -> PathBuf {
    std::env::var("DSP_AGENT_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("config.json"))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration; any problem here aborts startup
    let config_path = resolve_config_path();
    let config = dsp_agent_core::AgentConfig::load(&config_path)?;
    let port = config.port;

    info!("docs backend: {}", config.backends.docs);
    info!("research backend: {}", config.backends.research);
    info!("completion model: {}", config.claude.model);

    // Build application state
    let state = Arc::new(AppState::new(config)?);

    // Build router
    let app = routes::build_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("DSP agent listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("DSP agent shut down");
    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    info!("shutdown signal received");
}
