use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use hostgate::{routes::create_router, AppState, Config, MemoryBookStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Missing .env is fine; the environment may be set directly
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("hostgate=info,tower_http=info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().context("invalid configuration")?;

    let state = match &config.database_url {
        Some(url) => {
            let pool = hostgate_shared::create_lazy_pool(url, config.database_max_connections)
                .context("invalid DATABASE_URL")?;
            AppState::with_pool(config.clone(), pool)?
        }
        None => {
            tracing::warn!("DATABASE_URL not set, subdomains are checked against an empty in-memory catalog");
            AppState::with_memory_store(config.clone(), Arc::new(MemoryBookStore::new()))?
        }
    };

    tracing::info!(
        subdomains = config.params.subdomain_allowed,
        validator = %state.gate.gate.validator_name(),
        debug = config.gate.debug,
        "Host gate configured"
    );

    let listener = tokio::net::TcpListener::bind(&config.bind_address)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_address))?;
    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, create_router(state)).await?;
    Ok(())
}
