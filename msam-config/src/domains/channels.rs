//! Channel table configuration

use crate::error::ConfigResult;
use crate::validation::{validate_table_name, Validatable};
use serde::{Deserialize, Serialize};

/// Names of the tables backing the channel registry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChannelsConfig {
    /// Table holding `(channel, id)` membership records
    #[serde(default = "default_table_name")]
    pub table_name: String,

    /// Table holding named settings, including the channel name list
    #[serde(default = "default_settings_table_name")]
    pub settings_table_name: String,
}

impl Default for ChannelsConfig {
    fn default() -> Self {
        Self {
            table_name: default_table_name(),
            settings_table_name: default_settings_table_name(),
        }
    }
}

impl Validatable for ChannelsConfig {
    fn validate(&self) -> ConfigResult<()> {
        validate_table_name(&self.table_name, "table_name", self.domain_name())?;
        validate_table_name(
            &self.settings_table_name,
            "settings_table_name",
            self.domain_name(),
        )?;

        if self.table_name == self.settings_table_name {
            return Err(self.validation_error(
                "table_name and settings_table_name must name different tables",
            ));
        }

        Ok(())
    }

    fn domain_name(&self) -> &'static str {
        "channels"
    }
}

fn default_table_name() -> String {
    "channels".to_string()
}

fn default_settings_table_name() -> String {
    "settings".to_string()
}
