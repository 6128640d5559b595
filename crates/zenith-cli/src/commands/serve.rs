//! Serve command
//!
//! Usage: zenith serve [--bind <ADDR>]

use tracing::info;
use zenith_api::AppState;
use zenith_core::ExError;

use crate::config::ServeArgs;

/// Seed the catalog, bind, and serve until Ctrl-C
pub async fn execute(args: ServeArgs) -> anyhow::Result<()> {
    let catalog = super::load_catalog()?;
    info!(
        emotions = catalog.emotion_count(),
        quotes = catalog.quote_count(),
        "Catalog seeded"
    );

    let listener = zenith_api::bind(args.bind).await.map_err(ExError::from)?;
    info!("Zenith API listening on http://{}", args.bind);

    zenith_api::serve(listener, AppState::new(catalog), shutdown_signal())
        .await
        .map_err(ExError::from)?;

    info!("Zenith API stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
