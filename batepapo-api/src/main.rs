//! Process bootstrap for the chat backend

use anyhow::Result;
use batepapo_api::api::build_router;
use batepapo_api::state::AppState;
use batepapo_core::config::Config;
use batepapo_core::core_chat::store::SqlStore;
use batepapo_core::logging::init_logging;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;
    init_logging(&config.logging)?;

    let store = Arc::new(match &config.store.db_path {
        Some(path) => SqlStore::open(path)?,
        None => SqlStore::memory()?,
    });
    let state = Arc::new(AppState::new(store.clone(), store));

    let router = build_router(state);
    let listener = TcpListener::bind(config.server.bind_address).await?;
    info!("chat backend listening on {}", config.server.bind_address);

    axum::serve(listener, router).await?;

    Ok(())
}
