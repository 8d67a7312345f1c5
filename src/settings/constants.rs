/// Example configuration
pub const DEFAULT_CONFIG: &str = r#"
# Logging configuration
[log]
# Level can be "error", "warn", "info", "debug", or "trace"
level = "warn"
# Log successful checks as well (raises the level to at least "info")
verbose = false

# Status page web server
[server]
listen_address = "0.0.0.0"
listen_port = 10053

# DNS server under test, always queried on the loopback address
[dns]
port = 53
# Record to resolve, required
# record = "www.example.com"

# Consul DNS interface, checked directly and through the DNS server
[consul]
enabled = false
port = 8600
record = "consul.service.consul"
"#;

/// Environment variable overriding the configuration file location
pub const CONFIG_PATH_ENV: &str = "DNS_CHECKER_CONFIG_PATH";

/// Prefix of configuration environment variables, e.g. `DNS_CHECKER__DNS__PORT`
pub const ENV_PREFIX: &str = "DNS_CHECKER";

pub const DEFAULT_LOG_LEVEL: &str = "warn";
pub const DEFAULT_LISTEN_ADDRESS: &str = "0.0.0.0";
pub const DEFAULT_LISTEN_PORT: u16 = 10053;
pub const DEFAULT_DNS_PORT: u16 = 53;
pub const DEFAULT_CONSUL_PORT: u16 = 8600;
pub const DEFAULT_CONSUL_RECORD: &str = "consul.service.consul";
