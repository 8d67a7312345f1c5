// Standard library
use std::time::Duration;

/// Upper bound for a single host lookup, including the TCP fallback
pub const PROBE_TIMEOUT: Duration = Duration::from_millis(10_000);

/// Maximum UDP DNS response size
pub const MAX_UDP_RESPONSE_SIZE: usize = 4096;
