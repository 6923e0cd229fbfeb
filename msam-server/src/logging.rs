//! Tracing subscriber setup

use anyhow::Result;
use msam_config::{domains::logging::LogFormat, LoggingConfig};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over the configured level. Calling this again
/// after a subscriber is installed is a no-op.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let filter = build_filter(config)?;
    let registry = tracing_subscriber::registry().with(filter);
    let location = config.include_location;

    let result = match config.format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_file(location).with_line_number(location))
            .try_init(),
        LogFormat::Pretty => registry
            .with(fmt::layer().pretty().with_file(location).with_line_number(location))
            .try_init(),
        LogFormat::Compact => registry
            .with(fmt::layer().compact().with_file(location).with_line_number(location))
            .try_init(),
        LogFormat::Text => registry
            .with(fmt::layer().with_file(location).with_line_number(location))
            .try_init(),
    };

    // Use try_init to avoid panic if global subscriber already set
    if result.is_err() {
        tracing::debug!("Global tracing subscriber already initialized, skipping");
    }

    tracing::info!("Logging initialized");
    Ok(())
}

fn build_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(config.level.as_filter())
            .map_err(|e| anyhow::anyhow!("Invalid log filter: {}", e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use msam_config::domains::logging::LogLevel;

    #[test]
    fn test_repeated_init_is_harmless() {
        let config = LoggingConfig {
            level: LogLevel::Debug,
            format: LogFormat::Compact,
            include_location: true,
        };

        assert!(init_logging(&config).is_ok());
        assert!(init_logging(&LoggingConfig::default()).is_ok());
    }
}
