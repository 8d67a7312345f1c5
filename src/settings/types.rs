// Standard library
use std::path::PathBuf;
use std::sync::Arc;

// 3rd party crates
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Log {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub verbose: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Server {
    #[serde(default = "default_listen_address")]
    pub listen_address: String,
    #[serde(default = "default_listen_port")]
    pub listen_port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Dns {
    #[serde(default = "default_dns_port")]
    pub port: u16,
    #[serde(default)]
    pub record: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Consul {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_consul_port")]
    pub port: u16,
    #[serde(default = "default_consul_record")]
    pub record: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Settings {
    #[serde(default)]
    pub log: Log,
    #[serde(default)]
    pub server: Server,
    #[serde(default)]
    pub dns: Dns,
    #[serde(default)]
    pub consul: Consul,
}

/// Settings that passed [`Settings::validate`]
#[derive(Debug, Clone)]
pub struct ValidatedSettings(pub(super) Settings);

/// Loads the application settings once at startup.
pub struct ConfigManager {
    pub settings: Arc<Settings>,
    pub config_path: PathBuf,
}

pub(super) fn default_log_level() -> String {
    super::constants::DEFAULT_LOG_LEVEL.to_string()
}

pub(super) fn default_listen_address() -> String {
    super::constants::DEFAULT_LISTEN_ADDRESS.to_string()
}

pub(super) fn default_listen_port() -> u16 {
    super::constants::DEFAULT_LISTEN_PORT
}

pub(super) fn default_dns_port() -> u16 {
    super::constants::DEFAULT_DNS_PORT
}

pub(super) fn default_consul_port() -> u16 {
    super::constants::DEFAULT_CONSUL_PORT
}

pub(super) fn default_consul_record() -> String {
    super::constants::DEFAULT_CONSUL_RECORD.to_string()
}
