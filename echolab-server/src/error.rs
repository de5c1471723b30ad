use std::net::SocketAddr;

use echolab_core::ConfigError;
use thiserror::Error;

/// Server-specific error types.
///
/// These only occur during startup; the route handlers themselves are
/// infallible (bad input is echoed, not rejected).
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
