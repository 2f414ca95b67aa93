// region:    --- Imports
use auction_api::app::build_router;
use auction_api::config::AppConfig;
use auction_api::database::DatabaseManager;
use auction_api::store::PostgresAuctionStore;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
// endregion: --- Imports

// region:    --- Main
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    // logging
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("auction_api=info,tower_http=info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .without_time()
        .with_target(false)
        .init();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("{:<12} --> invalid configuration: {}", "Main", e);
            return Err(e.into());
        }
    };

    let db_manager = DatabaseManager::new(&config.database)?;

    if config.bootstrap_schema {
        if let Err(e) = db_manager.initialize_database().await {
            error!("{:<12} --> schema bootstrap failed: {:?}", "Main", e);
            return Err(e.into());
        }
        info!("{:<12} --> schema bootstrap done", "Main");
    }

    let store = Arc::new(PostgresAuctionStore::new(db_manager));
    let routes_all = build_router(store);

    let listener = TcpListener::bind(config.listen_addr()?).await?;
    info!(
        "{:<12} --> Web Server: Listening on {}",
        "Main",
        listener.local_addr()?
    );

    if let Err(err) = axum::serve(listener, routes_all.into_make_service()).await {
        error!("{:<12} --> Server error: {}", "Main", err);
    }
    Ok(())
}
// endregion: --- Main
