// Standard library
use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::{env, fs};

// 3rd party crates
use config::{Config, ConfigError, Environment, File};
use log::{error, info, LevelFilter};

// Project imports
use crate::probe::constants::PROBE_TIMEOUT;
use crate::probe::types::{ProbeConfig, ProtocolFamily};

// Current module imports
use super::cli::Cli;
use super::constants::{CONFIG_PATH_ENV, DEFAULT_CONFIG, ENV_PREFIX};
use super::errors::{SettingsError, ValidationError};
use super::types::{
    default_consul_port, default_consul_record, default_dns_port, default_listen_address,
    default_listen_port, default_log_level, ConfigManager, Consul, Dns, Log, Server, Settings,
    ValidatedSettings,
};

impl Default for Log {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            verbose: false,
        }
    }
}

impl Default for Server {
    fn default() -> Self {
        Self {
            listen_address: default_listen_address(),
            listen_port: default_listen_port(),
        }
    }
}

impl Default for Dns {
    fn default() -> Self {
        Self {
            port: default_dns_port(),
            record: String::new(),
        }
    }
}

impl Default for Consul {
    fn default() -> Self {
        Self {
            enabled: false,
            port: default_consul_port(),
            record: default_consul_record(),
        }
    }
}

impl Settings {
    /// Configured log level. Verbose mode needs at least `info`.
    pub fn get_log_level(&self) -> String {
        let level = self.log.level.to_lowercase();
        match level.as_str() {
            "error" | "warn" if self.log.verbose => "info".to_string(),
            _ => level,
        }
    }

    pub fn listen_addr(&self) -> Result<SocketAddr, ValidationError> {
        let ip: IpAddr = self
            .server
            .listen_address
            .trim()
            .parse()
            .map_err(|_| ValidationError::InvalidListenAddress(self.server.listen_address.clone()))?;
        Ok(SocketAddr::new(ip, self.server.listen_port))
    }

    /// Probe configuration shared by every request, addressed with `family`
    pub fn probe_config(&self, family: ProtocolFamily) -> ProbeConfig {
        ProbeConfig {
            family,
            dns_port: self.dns.port,
            consul_port: self.consul.port,
            dns_record: self.dns.record.trim().to_string(),
            consul_record: self.consul.record.trim().to_string(),
            consul_enabled: self.consul.enabled,
            timeout: PROBE_TIMEOUT,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        // Validate log level
        match self.log.level.to_lowercase().as_str() {
            "error" | "warn" | "info" | "debug" | "trace" => {}
            _ => return Err(ValidationError::InvalidLogLevel(self.log.level.clone())),
        }

        // Validate ports
        if self.server.listen_port == 0 {
            return Err(ValidationError::InvalidPort("Listen"));
        }
        if self.dns.port == 0 {
            return Err(ValidationError::InvalidPort("DNS"));
        }
        if self.consul.port == 0 {
            return Err(ValidationError::InvalidPort("Consul"));
        }

        self.listen_addr()?;

        // Validate records
        if self.dns.record.trim().is_empty() {
            return Err(ValidationError::MissingDnsRecord);
        }
        if self.consul.enabled && self.consul.record.trim().is_empty() {
            return Err(ValidationError::MissingConsulRecord);
        }

        Ok(())
    }
}

impl ConfigManager {
    /// Creates a new `ConfigManager` instance by loading and validating the configuration.
    pub fn new(cli: &Cli) -> Result<Self, SettingsError> {
        let config_path: PathBuf = Self::get_config_path(cli)?;
        Self::ensure_config_file_exists(&config_path)?;

        let settings: Settings = Self::load_settings(&config_path, cli)?;

        // Validate settings before proceeding
        let validated_settings = ValidatedSettings::new(settings).map_err(|e| {
            error!("Configuration validation failed: {}", e);
            e
        })?;

        let manager = ConfigManager {
            settings: Arc::new(validated_settings.into_inner()),
            config_path,
        };

        manager.adjust_logging_level();

        Ok(manager)
    }

    /// Determines the configuration file path.
    fn get_config_path(cli: &Cli) -> Result<PathBuf, ConfigError> {
        if let Some(path) = &cli.config {
            Ok(path.clone())
        } else if let Ok(path) = env::var(CONFIG_PATH_ENV) {
            Ok(PathBuf::from(path))
        } else if let Some(config_dir) = dirs::config_dir() {
            Ok(config_dir.join("dns-checker").join("config.toml"))
        } else {
            let msg: &str = "Could not determine the configuration directory";
            error!("{}", msg);
            Err(ConfigError::Message(msg.into()))
        }
    }

    /// Ensures that the configuration file exists, creating it if necessary.
    fn ensure_config_file_exists(config_path: &Path) -> Result<(), ConfigError> {
        if !config_path.exists() {
            if let Some(parent_dir) = config_path.parent() {
                fs::create_dir_all(parent_dir).map_err(|e| {
                    let msg: String = format!("Failed to create configuration directory: {}", e);
                    error!("{}", msg);
                    ConfigError::Message(msg)
                })?;
            }
            fs::write(config_path, DEFAULT_CONFIG).map_err(|e| {
                let msg: String = format!("Failed to create default configuration file: {}", e);
                error!("{}", msg);
                ConfigError::Message(msg)
            })?;
            info!("Default configuration file created at: {:?}", config_path);
        }
        Ok(())
    }

    /// Loads the settings from the configuration file, environment variables
    /// and command line flags, in increasing priority.
    fn load_settings(config_path: &Path, cli: &Cli) -> Result<Settings, ConfigError> {
        let config_file: &str = config_path.to_str().ok_or_else(|| {
            let msg: &str = "Configuration file path contains invalid UTF-8 characters";
            error!("{}", msg);
            ConfigError::Message(msg.into())
        })?;

        let builder = Config::builder()
            .add_source(File::with_name(config_file))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            );

        let settings: Config = cli.apply_overrides(builder)?.build()?;

        settings.try_deserialize()
    }

    /// Adjusts the logging level based on the configuration.
    fn adjust_logging_level(&self) {
        let level_filter: LevelFilter = match self.get_log_level().as_str() {
            "error" => LevelFilter::Error,
            "warn" => LevelFilter::Warn,
            "info" => LevelFilter::Info,
            "debug" => LevelFilter::Debug,
            "trace" => LevelFilter::Trace,
            _ => LevelFilter::Info,
        };
        log::set_max_level(level_filter);
    }

    /// Provides a shared reference to the settings.
    pub fn get_settings(&self) -> Arc<Settings> {
        Arc::clone(&self.settings)
    }

    pub fn get_log_level(&self) -> String {
        self.settings.get_log_level()
    }
}

impl ValidatedSettings {
    pub fn new(settings: Settings) -> Result<Self, ValidationError> {
        settings.validate()?;
        Ok(ValidatedSettings(settings))
    }

    pub fn into_inner(self) -> Settings {
        self.0
    }
}
