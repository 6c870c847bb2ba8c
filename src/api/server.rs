//! Server lifecycle: bind → serve → graceful shutdown.

use std::net::SocketAddr;

use tokio::net::TcpListener;

use crate::api::router::app_router;

/// Bind the estimator on `addr` and serve until ctrl-c.
pub async fn serve(addr: SocketAddr) -> std::io::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    let bound = listener.local_addr()?;
    tracing::info!(addr = %bound, "estimator listening — open http://{bound}/ in a browser");

    axum::serve(listener, app_router())
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {e}");
        return;
    }
    tracing::info!("shutdown signal received");
}
