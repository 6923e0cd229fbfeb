//! Domain-specific configuration modules

pub mod channels;
pub mod database;
pub mod logging;
pub mod server;
pub mod utils;

use crate::error::ConfigResult;
use crate::validation::Validatable;
use serde::{Deserialize, Serialize};

/// Main configuration combining all domains
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct MsamConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub server: server::ServerConfig,

    /// Database connection configuration
    #[serde(default)]
    pub database: database::DatabaseConfig,

    /// Channel and settings table names
    #[serde(default)]
    pub channels: channels::ChannelsConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: logging::LoggingConfig,
}

impl MsamConfig {
    /// Validate all domain configurations
    pub fn validate_all(&self) -> ConfigResult<()> {
        self.server.validate()?;
        self.database.validate()?;
        self.channels.validate()?;
        self.logging.validate()?;
        Ok(())
    }

    /// Render the configuration as a YAML document that `ConfigLoader::from_file` accepts
    pub fn to_yaml(&self) -> ConfigResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(MsamConfig::default().validate_all().is_ok());
    }

    #[test]
    fn test_yaml_parses_back() {
        let mut config = MsamConfig::default();
        config.channels.table_name = "msam_channels".to_string();

        let yaml = config.to_yaml().unwrap();
        let parsed: MsamConfig = serde_yaml::from_str(&yaml).unwrap();

        assert_eq!(parsed.channels.table_name, "msam_channels");
        assert!(parsed.validate_all().is_ok());
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let parsed: MsamConfig = serde_yaml::from_str("channels:\n  table_name: msam_channels\n").unwrap();

        assert_eq!(parsed.channels.table_name, "msam_channels");
        assert_eq!(parsed.channels.settings_table_name, "settings");
        assert_eq!(parsed.server.port, 8080);
    }
}
