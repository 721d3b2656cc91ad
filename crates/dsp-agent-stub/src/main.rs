//! Standalone stub backend: `stub-backend <docs|research>`.
//!
//! Listens on `PORT` (default 3000) and serves canned search results so
//! the agent can run without the real retrieval services.

use tracing::info;
use tracing_subscriber::EnvFilter;

use dsp_agent_stub::{stub_router, StubService, StubState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let service = match std::env::args().nth(1).as_deref() {
        Some("docs") => StubService::Docs,
        Some("research") => StubService::Research,
        _ => {
            eprintln!("Usage: stub-backend <docs|research>");
            std::process::exit(1);
        }
    };

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3000);

    let app = stub_router(StubState::new(service));
    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("{} listening on {}", service.service_name(), addr);
    axum::serve(listener, app).await?;

    Ok(())
}
