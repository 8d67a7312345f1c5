// Standard library
use std::path::PathBuf;

// 3rd party crates
use clap::Parser;
use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError};

/// DNS Checker: checks DNS and optionally Consul and reports the status on a web page
#[derive(Debug, Parser)]
#[command(name = "dns-checker", version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (default: $DNS_CHECKER_CONFIG_PATH or the user config directory)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// DNS port [default: 53]
    #[arg(long, value_name = "DNSPORT")]
    pub dns_port: Option<u16>,

    /// Consul port [default: 8600]
    #[arg(long, value_name = "CONSULPORT")]
    pub consul_port: Option<u16>,

    /// DNS record to check
    #[arg(long, value_name = "DNSRECORD")]
    pub dns_record: Option<String>,

    /// Consul record to check [default: consul.service.consul]
    #[arg(long, value_name = "CONSULRECORD")]
    pub consul_record: Option<String>,

    /// Check Consul DNS as well
    #[arg(long)]
    pub consul: bool,

    /// Log successful checks too
    #[arg(long)]
    pub verbose: bool,

    /// Web server address [default: 0.0.0.0]
    #[arg(long, value_name = "LISTENADDRESS")]
    pub listen_address: Option<String>,

    /// Web server port [default: 10053]
    #[arg(long, value_name = "LISTENPORT")]
    pub listen_port: Option<u16>,

    /// Log level: error, warn, info, debug or trace
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Print version and build information and exit
    #[arg(short = 'b', long)]
    pub build: bool,
}

impl Cli {
    /// Layers the flags given on the command line over the other sources.
    pub fn apply_overrides(
        &self,
        builder: ConfigBuilder<DefaultState>,
    ) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        builder
            .set_override_option("log.level", self.log_level.clone())?
            .set_override_option("log.verbose", self.verbose.then_some(true))?
            .set_override_option("server.listen_address", self.listen_address.clone())?
            .set_override_option("server.listen_port", self.listen_port.map(i64::from))?
            .set_override_option("dns.port", self.dns_port.map(i64::from))?
            .set_override_option("dns.record", self.dns_record.clone())?
            .set_override_option("consul.enabled", self.consul.then_some(true))?
            .set_override_option("consul.port", self.consul_port.map(i64::from))?
            .set_override_option("consul.record", self.consul_record.clone())
    }
}

pub fn build_info() -> String {
    format!(
        "{} version: {}, built on: {}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        option_env!("DNS_CHECKER_BUILD_TIME").unwrap_or("unknown")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_port_and_record_flags() {
        let cli = Cli::parse_from([
            "dns-checker",
            "--dns-port=5353",
            "--consul-port",
            "8601",
            "--dns-record=www.example.com",
            "--consul",
            "--listen-port=8080",
        ]);

        assert_eq!(cli.dns_port, Some(5353));
        assert_eq!(cli.consul_port, Some(8601));
        assert_eq!(cli.dns_record.as_deref(), Some("www.example.com"));
        assert!(cli.consul);
        assert!(!cli.verbose);
        assert_eq!(cli.listen_port, Some(8080));
        assert_eq!(cli.consul_record, None);
    }

    #[test]
    fn rejects_out_of_range_port() {
        assert!(Cli::try_parse_from(["dns-checker", "--dns-port=70000"]).is_err());
    }

    #[test]
    fn build_info_names_version() {
        assert!(build_info().contains(env!("CARGO_PKG_VERSION")));
    }
}
