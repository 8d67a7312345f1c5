// Standard library
use std::net::SocketAddr;
use std::time::Duration;

// 3rd party crates
use hickory_proto::op::ResponseCode;
use hickory_proto::ProtoError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LookupError {
    #[error("Invalid record name '{name}': {error}")]
    InvalidName { name: String, error: ProtoError },

    #[error("Failed to encode query for '{name}': {error}")]
    Encode { name: String, error: ProtoError },

    #[error("Lookup of '{name}' at {server} timed out after {timeout:?}")]
    Timeout {
        name: String,
        server: SocketAddr,
        timeout: Duration,
    },

    #[error("Network error from {server}: {error}")]
    Network {
        server: SocketAddr,
        error: std::io::Error,
    },

    #[error("No such host '{name}' at {server}")]
    NxDomain { name: String, server: SocketAddr },

    #[error("{server} answered '{name}' with {code}")]
    ResponseCode {
        name: String,
        server: SocketAddr,
        code: ResponseCode,
    },

    #[error("No address records for '{name}' at {server}")]
    NoAddresses { name: String, server: SocketAddr },
}
