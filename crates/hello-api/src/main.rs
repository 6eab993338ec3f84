//! hello-api — greeting and health check HTTP service.
//!
//! Serves `GET /` and `GET /health` on the port given by `PORT`
//! (default 5000) until SIGINT/SIGTERM.

use tracing_subscriber::EnvFilter;

use hello_api::config::{ApiConfig, DEFAULT_LOG_FILTER, LogFormat};
use hello_api::server;

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    match format {
        LogFormat::Json => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init(),
        LogFormat::Text => tracing_subscriber::fmt().with_env_filter(filter).init(),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing(LogFormat::from_env());

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "hello-api starting");

    let config = ApiConfig::from_env();

    if let Err(e) = server::run(&config).await {
        tracing::error!(error = %e, "hello-api failed");
        return Err(e.into());
    }

    tracing::info!("hello-api stopped");
    Ok(())
}
