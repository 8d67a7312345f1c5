// Standard library
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

// 3rd party crates
use async_trait::async_trait;

// Current module imports
use super::errors::LookupError;

/// Host lookup pinned to a single DNS server.
///
/// Implementations must dial `server` and nothing else: no system resolver
/// configuration, no fallback nameservers, no cache. The whole lookup has to
/// finish within `timeout`.
#[async_trait]
pub trait HostLookup: Send + Sync {
    /// Resolves `name` to its addresses by asking `server` directly.
    ///
    /// Returns at least one address on success.
    async fn lookup_host(
        &self,
        server: SocketAddr,
        name: &str,
        timeout: Duration,
    ) -> Result<Vec<IpAddr>, LookupError>;
}
