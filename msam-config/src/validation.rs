//! Configuration validation traits and utilities

use crate::error::{ConfigError, ConfigResult};

/// Trait for validatable configuration
pub trait Validatable {
    /// Validate the configuration
    fn validate(&self) -> ConfigResult<()>;

    /// Get the domain name for error reporting
    fn domain_name(&self) -> &'static str;

    /// Helper to create a domain-specific validation error
    fn validation_error(&self, message: impl Into<String>) -> ConfigError {
        ConfigError::DomainError {
            domain: self.domain_name().to_string(),
            message: message.into(),
        }
    }
}

/// Validate a required string field
pub fn validate_required_string(value: &str, field_name: &str, domain: &str) -> ConfigResult<()> {
    if value.is_empty() {
        return Err(ConfigError::DomainError {
            domain: domain.to_string(),
            message: format!("{} cannot be empty", field_name),
        });
    }
    Ok(())
}

/// Validate a positive number
pub fn validate_positive<T>(value: T, field_name: &str, domain: &str) -> ConfigResult<()>
where
    T: PartialOrd + Default + std::fmt::Display,
{
    if value <= T::default() {
        return Err(ConfigError::DomainError {
            domain: domain.to_string(),
            message: format!("{} must be greater than 0, got {}", field_name, value),
        });
    }
    Ok(())
}

/// Validate a SQL table identifier.
///
/// Table names are interpolated as identifiers, so only ASCII letters,
/// digits, `_` and `-` are accepted and the first character must not be a
/// digit.
pub fn validate_table_name(value: &str, field_name: &str, domain: &str) -> ConfigResult<()> {
    validate_required_string(value, field_name, domain)?;

    let starts_with_digit = value.chars().next().is_some_and(|c| c.is_ascii_digit());
    let valid_chars = value
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');

    if starts_with_digit || !valid_chars {
        return Err(ConfigError::DomainError {
            domain: domain.to_string(),
            message: format!("{} '{}' is not a valid table name", field_name, value),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_required_string() {
        assert!(validate_required_string("value", "field", "test").is_ok());
        assert!(validate_required_string("", "field", "test").is_err());
    }

    #[test]
    fn test_validate_positive() {
        assert!(validate_positive(1u32, "field", "test").is_ok());
        assert!(validate_positive(0u32, "field", "test").is_err());
    }

    #[test]
    fn test_validate_table_name() {
        assert!(validate_table_name("channels", "table_name", "channels").is_ok());
        assert!(validate_table_name("msam-channels_v2", "table_name", "channels").is_ok());

        assert!(validate_table_name("", "table_name", "channels").is_err());
        assert!(validate_table_name("1channels", "table_name", "channels").is_err());
        assert!(validate_table_name("channels; DROP", "table_name", "channels").is_err());
        assert!(validate_table_name("chan\"nels", "table_name", "channels").is_err());
    }
}
