use msam_config::{ChannelsConfig, DatabaseConfig};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection as SeaConnection, DbErr};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

use super::schema;

/// Keeps the single in-memory connection from ever being reaped or recycled
const IN_MEMORY_CONNECTION_LIFETIME: Duration = Duration::from_secs(100 * 365 * 24 * 60 * 60);

/// Database connection wrapper
#[derive(Clone)]
pub struct DatabaseConnection {
    connection: SeaConnection,
}

/// Database-related errors
#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("Database error: {0}")]
    DbError(#[from] DbErr),

    #[error("Schema error: {0}")]
    SchemaError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl DatabaseConnection {
    /// Create a new database connection with configuration
    pub async fn new(config: DatabaseConfig) -> Result<Self, DatabaseError> {
        info!("Connecting to database: {}", config.url);

        Self::ensure_sqlite_directory_exists(&config.url)?;
        let connection = Database::connect(Self::connect_options(&config)).await?;

        debug!(
            "Database connection established with {} max connections",
            config.max_connections
        );

        Ok(Self { connection })
    }

    /// Pool options for a configured database
    fn connect_options(config: &DatabaseConfig) -> ConnectOptions {
        let mut opts = ConnectOptions::new(Self::sqlite_url_with_create_mode(&config.url));
        opts.max_connections(config.max_connections)
            .min_connections(1)
            .connect_timeout(config.connection_timeout)
            .acquire_timeout(config.connection_timeout)
            .sqlx_logging(true)
            .sqlx_logging_level(log::LevelFilter::Debug);

        // An in-memory database lives and dies with its only connection, and
        // sqlx applies its own reaping defaults when these are left unset.
        if config.is_in_memory() {
            opts.idle_timeout(IN_MEMORY_CONNECTION_LIFETIME)
                .max_lifetime(IN_MEMORY_CONNECTION_LIFETIME);
        } else {
            opts.idle_timeout(Duration::from_secs(300))
                .max_lifetime(Duration::from_secs(3600));
        }

        opts
    }

    /// Create the parent directory of a file-based SQLite database
    fn ensure_sqlite_directory_exists(database_url: &str) -> Result<(), DatabaseError> {
        if database_url.contains(":memory:") {
            debug!("Using in-memory SQLite database");
            return Ok(());
        }

        let Some(file_path) = Self::sqlite_file_path(database_url) else {
            debug!("Non-SQLite database detected, skipping directory creation");
            return Ok(());
        };

        let path = std::path::Path::new(file_path);
        if let Some(parent_dir) = path.parent() {
            if !parent_dir.as_os_str().is_empty() && !parent_dir.exists() {
                info!("Creating database directory: {:?}", parent_dir);
                std::fs::create_dir_all(parent_dir).map_err(|e| {
                    DatabaseError::ConfigError(format!(
                        "Failed to create database directory {:?}: {}",
                        parent_dir, e
                    ))
                })?;
            }
        }

        Ok(())
    }

    /// File path of a SQLite URL, without any query string
    fn sqlite_file_path(database_url: &str) -> Option<&str> {
        let path = database_url
            .strip_prefix("sqlite://")
            .or_else(|| database_url.strip_prefix("sqlite:"))?;
        Some(path.split('?').next().unwrap_or(path))
    }

    /// sqlx only creates missing SQLite files when asked to with `mode=rwc`
    fn sqlite_url_with_create_mode(database_url: &str) -> String {
        if database_url.contains(":memory:")
            || Self::sqlite_file_path(database_url).is_none()
            || database_url.contains('?')
        {
            return database_url.to_string();
        }
        format!("{}?mode=rwc", database_url)
    }

    /// Get the underlying Sea-ORM connection
    pub fn get_connection(&self) -> &SeaConnection {
        &self.connection
    }

    /// Create the channel and settings tables if they do not exist yet
    pub async fn ensure_schema(&self, channels: &ChannelsConfig) -> Result<(), DatabaseError> {
        info!(
            "Ensuring tables '{}' and '{}' exist",
            channels.table_name, channels.settings_table_name
        );

        let backend = self.connection.get_database_backend();
        for statement in [
            schema::channel_table(&channels.table_name),
            schema::settings_table(&channels.settings_table_name),
        ] {
            self.connection
                .execute(backend.build(&statement))
                .await
                .map_err(|e| DatabaseError::SchemaError(e.to_string()))?;
        }

        Ok(())
    }

    /// Check that the database answers
    pub async fn ping(&self) -> Result<(), DatabaseError> {
        self.connection.ping().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn in_memory_config() -> DatabaseConfig {
        DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
            connection_timeout: Duration::from_secs(10),
        }
    }

    #[tokio::test]
    async fn test_in_memory_database() {
        let db = DatabaseConnection::new(in_memory_config()).await.unwrap();
        assert!(db.ping().await.is_ok());
    }

    #[test]
    fn test_in_memory_connection_is_never_recycled() {
        let opts = DatabaseConnection::connect_options(&in_memory_config());

        assert_eq!(opts.get_url(), "sqlite::memory:");
        assert_eq!(opts.get_max_connections(), Some(1));
        assert_eq!(opts.get_idle_timeout(), Some(IN_MEMORY_CONNECTION_LIFETIME));
        assert_eq!(opts.get_max_lifetime(), Some(IN_MEMORY_CONNECTION_LIFETIME));
    }

    #[test]
    fn test_file_connections_are_recycled() {
        let config = DatabaseConfig {
            url: "sqlite://msam.db".to_string(),
            max_connections: 4,
            connection_timeout: Duration::from_secs(10),
        };
        let opts = DatabaseConnection::connect_options(&config);

        assert_eq!(opts.get_url(), "sqlite://msam.db?mode=rwc");
        assert_eq!(opts.get_idle_timeout(), Some(Duration::from_secs(300)));
        assert_eq!(opts.get_max_lifetime(), Some(Duration::from_secs(3600)));
    }

    #[tokio::test]
    async fn test_ensure_schema_is_idempotent() {
        let db = DatabaseConnection::new(in_memory_config()).await.unwrap();
        let channels = ChannelsConfig::default();

        db.ensure_schema(&channels).await.unwrap();
        db.ensure_schema(&channels).await.unwrap();
    }

    #[tokio::test]
    async fn test_file_database_is_created() {
        let temp_dir = tempfile::tempdir().unwrap();
        let db_path = temp_dir.path().join("nested").join("msam.db");
        let config = DatabaseConfig {
            url: format!("sqlite://{}", db_path.display()),
            max_connections: 2,
            connection_timeout: Duration::from_secs(10),
        };

        let db = DatabaseConnection::new(config).await.unwrap();
        db.ensure_schema(&ChannelsConfig::default()).await.unwrap();

        assert!(db_path.exists());
    }

    #[test]
    fn test_sqlite_file_path() {
        assert_eq!(
            DatabaseConnection::sqlite_file_path("sqlite:///var/lib/msam.db"),
            Some("/var/lib/msam.db")
        );
        assert_eq!(
            DatabaseConnection::sqlite_file_path("sqlite:msam.db?mode=ro"),
            Some("msam.db")
        );
        assert_eq!(
            DatabaseConnection::sqlite_file_path("postgres://localhost/msam"),
            None
        );
    }

    #[test]
    fn test_create_mode_appended_for_files_only() {
        assert_eq!(
            DatabaseConnection::sqlite_url_with_create_mode("sqlite://msam.db"),
            "sqlite://msam.db?mode=rwc"
        );
        assert_eq!(
            DatabaseConnection::sqlite_url_with_create_mode("sqlite::memory:"),
            "sqlite::memory:"
        );
        assert_eq!(
            DatabaseConnection::sqlite_url_with_create_mode("sqlite://msam.db?mode=ro"),
            "sqlite://msam.db?mode=ro"
        );
    }
}
