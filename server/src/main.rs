use std::sync::Arc;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use tailspin_server::config::ServerConfig;
use tailspin_server::repository::{init_db, seed_demo_data};
use tailspin_server::{build_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::from_env().context("invalid configuration")?;

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("tailspin_server=info,tower_http=info")),
        )
        .init();

    let conn = init_db(&config.database_path)
        .with_context(|| format!("failed to open database {}", config.database_path.display()))?;

    let state = AppState::new(conn, config);
    if state.config.seed_demo_data {
        seed_demo_data(&state.breeds, &state.dogs)
            .await
            .context("failed to seed demo data")?;
    }

    let config = Arc::clone(&state.config);
    let app = build_router(state);

    let addr = config.socket_addr();
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
