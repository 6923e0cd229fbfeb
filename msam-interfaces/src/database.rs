//! Storage repository interfaces
//!
//! These traits are the seam between the channel registry and whatever
//! holds the data. Implementations live in `msam-storage`; tests substitute
//! in-memory or mock versions.

use async_trait::async_trait;
use serde_json::Value;

use crate::records::ChannelNodeRecord;

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Common storage error type
#[derive(Debug, Clone, thiserror::Error)]
pub enum StorageError {
    /// The backing table does not exist
    #[error("Table not found: {table}")]
    NotFound { table: String },

    #[error("Query failed: {message}")]
    Query { message: String },

    #[error("Connection error: {message}")]
    Connection { message: String },

    #[error("Serialization error: {message}")]
    Serialization { message: String },

    #[error("Internal storage error: {message}")]
    Internal { message: String },
}

impl StorageError {
    /// Whether this is the tolerated not-found condition
    pub fn is_not_found(&self) -> bool {
        matches!(self, StorageError::NotFound { .. })
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        StorageError::Serialization {
            message: err.to_string(),
        }
    }
}

/// Base repository trait with health check capability
#[async_trait]
pub trait Repository: Send + Sync {
    /// Check if the repository is healthy and can serve requests
    async fn health_check(&self) -> StorageResult<()>;
}

/// Key-value table of channel membership records keyed by `(channel, id)`.
#[async_trait]
pub trait ChannelTable: Repository {
    /// Write a record, overwriting any record with the same key
    async fn put_item(&self, record: ChannelNodeRecord) -> StorageResult<()>;

    /// All records whose channel equals `channel`
    async fn query_channel(&self, channel: &str) -> StorageResult<Vec<ChannelNodeRecord>>;

    /// Delete the record with the given key. Deleting a missing key is not an error.
    async fn delete_item(&self, channel: &str, id: &str) -> StorageResult<()>;
}

/// Named settings holding arbitrary JSON values.
#[async_trait]
pub trait SettingsStore: Repository {
    /// Value of a setting, `None` if it has never been set
    async fn get_setting(&self, key: &str) -> StorageResult<Option<Value>>;

    /// Create or replace a setting
    async fn put_setting(&self, key: &str, value: Value) -> StorageResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_is_tolerated_kind() {
        let err = StorageError::NotFound {
            table: "channels".to_string(),
        };
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Table not found: channels");

        let err = StorageError::Query {
            message: "disk I/O error".to_string(),
        };
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<Vec<String>>("{").unwrap_err();
        let err: StorageError = json_err.into();
        assert!(matches!(err, StorageError::Serialization { .. }));
    }
}
