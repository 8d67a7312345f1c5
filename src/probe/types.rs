// Standard library
use std::sync::Arc;
use std::time::Duration;

// Project imports
use super::traits::HostLookup;

/// IP protocol family a probe is addressed with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProtocolFamily {
    V4,
    V6,
}

/// Outcome of a single probe, in check precedence order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProbeStatus {
    /// Every applicable lookup succeeded
    Up,
    /// The DNS record could not be resolved through the DNS port
    DnsDown,
    /// The DNS server did not resolve the Consul record
    ForwardingDown,
    /// Consul did not resolve its own record
    ConsulDown,
}

/// Everything one probe needs. Built once at startup, read-only afterwards.
#[derive(Debug, Clone)]
pub struct ProbeConfig {
    pub family: ProtocolFamily,
    pub dns_port: u16,
    pub consul_port: u16,
    pub dns_record: String,
    pub consul_record: String,
    pub consul_enabled: bool,
    pub timeout: Duration,
}

/// Runs the lookup sequence through an injected [`HostLookup`]
#[derive(Clone)]
pub struct Prober {
    pub lookup: Arc<dyn HostLookup>,
}
