use std::net::SocketAddr;
use thiserror::Error;

/// Everything that can stop the service from starting or keep it from serving.
#[derive(Debug, Error)]
pub enum StartupError {

    #[error("invalid {var}={value:?}: {reason}")]
    Config {
        var: &'static str,
        value: String,
        reason: String
    },

    #[error("failed to bind to {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error
    },

    #[error("failed to read bound address: {0}")]
    LocalAddr(#[source] std::io::Error),

    #[error("server failed: {0}")]
    Serve(#[from] std::io::Error)

}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_local_addr_failure_is_not_reported_as_serve_failure() {

        let err = StartupError::LocalAddr(std::io::Error::other("socket closed"));

        assert_eq!(err.to_string(), "failed to read bound address: socket closed");

    }

}
