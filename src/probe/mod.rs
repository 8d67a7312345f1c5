//! DNS Probe Module
//!
//! Verifies that the local DNS resolver (and optionally Consul behind it) is
//! answering queries. A probe performs up to three host lookups, each one
//! dialed straight at a loopback endpoint so the answer comes from the named
//! server and never from the system resolver or an OS cache:
//!
//! 1. the configured DNS record against the DNS port,
//! 2. the Consul record against the DNS port (forwarding check),
//! 3. the Consul record against the Consul port (direct check).
//!
//! The first failing step decides the outcome, see [`types::ProbeStatus`].
//! Lookup errors never leave this module; they are logged at debug level and
//! collapsed into the status.

pub mod constants;
pub mod errors;
pub mod impls;
pub mod lookup;
pub mod traits;
pub mod types;

#[cfg(test)]
pub mod testing;
