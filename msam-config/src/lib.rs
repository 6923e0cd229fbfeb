//! Domain-driven configuration management for the MSAM channel service
//!
//! Configuration is split by functional domain (server, database, channel
//! tables, logging). Every domain has defaults, can be validated, and can be
//! overridden from `MSAM_*` environment variables.

pub mod error;
pub mod loader;
pub mod validation;

// Domain-specific configuration modules
pub mod domains;

// Re-export main types
pub use error::{ConfigError, ConfigResult};
pub use loader::ConfigLoader;

// Re-export domain configurations
pub use domains::{
    channels::ChannelsConfig, database::DatabaseConfig, logging::LoggingConfig,
    server::ServerConfig, MsamConfig,
};

// Re-export utilities
pub use domains::utils::serde_duration;
