use std::net::SocketAddr;

use thiserror::Error;

/// Errors that stop the server itself (as opposed to a single request)
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("failed to bind {0}: {1}")]
    Bind(SocketAddr, #[source] std::io::Error),

    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}

/// Result type for server lifecycle operations
pub type Result<T> = std::result::Result<T, ServerError>;
