pub mod api; // Presentation shell: page + JSON API
pub mod config;
pub mod models; // Patient attributes, complication types
pub mod scoring; // Pure risk engine

use tracing_subscriber::EnvFilter;

/// Initialize tracing and run the estimator until shutdown.
pub async fn run() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    api::serve(config::bind_addr()).await
}
