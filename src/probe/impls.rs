// Standard library
use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;

// 3rd party crates
use tracing::debug;

// Current module imports
use super::traits::HostLookup;
use super::types::{ProbeConfig, ProbeStatus, Prober, ProtocolFamily};

impl ProtocolFamily {
    /// Loopback address used as the literal dial target for this family
    pub fn loopback(&self) -> IpAddr {
        match self {
            ProtocolFamily::V4 => IpAddr::V4(Ipv4Addr::LOCALHOST),
            ProtocolFamily::V6 => IpAddr::V6(Ipv6Addr::LOCALHOST),
        }
    }
}

impl fmt::Display for ProtocolFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProtocolFamily::V4 => write!(f, "ipv4"),
            ProtocolFamily::V6 => write!(f, "ipv6"),
        }
    }
}

impl ProbeStatus {
    pub fn is_up(&self) -> bool {
        matches!(self, ProbeStatus::Up)
    }
}

impl fmt::Display for ProbeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            ProbeStatus::Up => "UP",
            ProbeStatus::DnsDown => "DNS_DOWN",
            ProbeStatus::ForwardingDown => "FORWARDING_DOWN",
            ProbeStatus::ConsulDown => "CONSUL_DOWN",
        };
        f.write_str(tag)
    }
}

impl ProbeConfig {
    /// Copy of this configuration addressed with another protocol family
    pub fn for_family(&self, family: ProtocolFamily) -> Self {
        Self {
            family,
            ..self.clone()
        }
    }

    /// The DNS server under test
    pub fn dns_endpoint(&self) -> SocketAddr {
        SocketAddr::new(self.family.loopback(), self.dns_port)
    }

    /// Consul's own DNS interface
    pub fn consul_endpoint(&self) -> SocketAddr {
        SocketAddr::new(self.family.loopback(), self.consul_port)
    }
}

impl Prober {
    pub fn new(lookup: Arc<dyn HostLookup>) -> Self {
        Self { lookup }
    }

    /// Runs one probe. Stops at the first failing lookup, never retries.
    pub async fn probe(&self, config: &ProbeConfig) -> ProbeStatus {
        let dns_endpoint = config.dns_endpoint();

        if !self
            .resolves(dns_endpoint, &config.dns_record, config.timeout)
            .await
        {
            return ProbeStatus::DnsDown;
        }

        if !config.consul_enabled {
            return ProbeStatus::Up;
        }

        // The DNS server has to forward the Consul domain on its own
        if !self
            .resolves(dns_endpoint, &config.consul_record, config.timeout)
            .await
        {
            return ProbeStatus::ForwardingDown;
        }

        if !self
            .resolves(config.consul_endpoint(), &config.consul_record, config.timeout)
            .await
        {
            return ProbeStatus::ConsulDown;
        }

        ProbeStatus::Up
    }

    async fn resolves(&self, server: SocketAddr, name: &str, timeout: Duration) -> bool {
        match self.lookup.lookup_host(server, name, timeout).await {
            Ok(addrs) => {
                debug!("Resolved {} at {} to {:?}", name, server, addrs);
                true
            }
            Err(e) => {
                debug!("Lookup of {} at {} failed: {}", name, server, e);
                false
            }
        }
    }
}
