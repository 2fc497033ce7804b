//! Query performance dashboard
//!
//! Serves a configured list of scheduled queries, rendering each query's
//! performance impact as a pill with an explanatory tooltip.

pub mod config;
pub mod dashboard;
pub mod error;

pub use config::{load_config, Config};
pub use error::{QueryPerfError, Result};

use std::net::SocketAddr;

use tokio_util::sync::CancellationToken;

/// Run the dashboard with the given configuration until Ctrl-C
pub async fn run(config: Config) -> Result<()> {
    config.validate()?;

    let cancel = CancellationToken::new();

    // Setup shutdown handler
    let cancel_for_signal = cancel.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => tracing::info!("Shutdown signal received"),
            Err(e) => tracing::error!("Failed to listen for ctrl-c: {}", e),
        }
        cancel_for_signal.cancel();
    });

    serve(config, cancel).await
}

/// Serve the dashboard until `cancel` fires
pub async fn serve(config: Config, cancel: CancellationToken) -> Result<()> {
    let port = config.dashboard.port;
    let router = dashboard::build_router(config.dashboard, config.queries);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    let listener = tokio::net::TcpListener::bind(addr).await.map_err(|e| {
        QueryPerfError::Dashboard(format!("Failed to bind dashboard to port {}: {}", port, e))
    })?;
    tracing::info!("Dashboard listening on http://{}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(async move {
            cancel.cancelled().await;
        })
        .await?;

    tracing::info!("Dashboard stopped");
    Ok(())
}
