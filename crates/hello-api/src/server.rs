//! Listener setup, serving and graceful shutdown.

use std::future::Future;

use axum::Router;
use tokio::net::TcpListener;

use crate::config::ApiConfig;
use crate::error::{ServerError, ServerResult};
use crate::routes::build_router;

/// Bind the listening socket.
pub async fn bind(addr: &str) -> ServerResult<TcpListener> {
    TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: addr.to_string(),
            source,
        })
}

/// Serve `app` on `listener` until `shutdown` resolves, then drain
/// in-flight requests and return.
pub async fn serve<F>(listener: TcpListener, app: Router, shutdown: F) -> ServerResult<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;
    Ok(())
}

/// Resolves on Ctrl+C, or SIGTERM on Unix.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("received Ctrl+C, shutting down");
        }
        () = terminate => {
            tracing::info!("received SIGTERM, shutting down");
        }
    }
}

/// Bind to the configured address and serve until a shutdown signal.
pub async fn run(config: &ApiConfig) -> ServerResult<()> {
    run_until(config, shutdown_signal()).await
}

/// Bind to the configured address and serve until `shutdown` resolves.
pub async fn run_until<F>(config: &ApiConfig, shutdown: F) -> ServerResult<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = config.addr();
    let listener = bind(&addr).await?;
    tracing::info!(addr = %addr, "listening");

    serve(listener, build_router(), shutdown).await?;

    tracing::info!("server stopped");
    Ok(())
}
