// 3rd party crates
use config::ConfigError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Invalid log level: {0}. Must be one of: error, warn, info, debug, trace")]
    InvalidLogLevel(String),
    #[error("Invalid listen address: {0}")]
    InvalidListenAddress(String),
    #[error("{0} port must be greater than 0")]
    InvalidPort(&'static str),
    #[error("No DNS record to check is configured")]
    MissingDnsRecord,
    #[error("Consul checks are enabled but no Consul record is configured")]
    MissingConsulRecord,
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("Configuration validation failed: {0}")]
    Validation(#[from] ValidationError),
}
