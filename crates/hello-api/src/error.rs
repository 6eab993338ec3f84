//! Server startup and runtime errors.

use std::io;

/// Failures that stop the HTTP server.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[from] io::Error),
}

/// Convenience alias.
pub type ServerResult<T> = Result<T, ServerError>;
