//! Server startup and shutdown logic

use anyhow::{Context, Result};
use axum::Router;
use msam_config::MsamConfig;
use msam_rest_api::{create_rest_app, AppConfig, ChannelsContext};
use msam_storage::{DatabaseConnection, SqlChannelTable, SqlSettingsStore};
use std::sync::Arc;

/// Server application struct
pub struct Server {
    config: MsamConfig,
    context: ChannelsContext,
}

impl Server {
    /// Initialize logging and storage for a new server
    pub async fn new(config: MsamConfig) -> Result<Self> {
        // Initialize logging first
        crate::logging::init_logging(&config.logging)?;

        let context = connect_storage(&config).await?;
        Ok(Self { config, context })
    }

    /// Build the complete application router
    pub fn build_app(&self) -> Router {
        let app_config = AppConfig {
            enable_cors: self.config.server.enable_cors,
            enable_tracing: self.config.server.enable_tracing,
        };

        create_rest_app(self.context.clone(), app_config)
    }

    /// Serve until Ctrl-C or SIGTERM
    pub async fn start(self) -> Result<()> {
        let app = self.build_app();
        let addr = self.config.server.socket_address();

        self.log_config_summary();

        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .with_context(|| format!("Failed to bind {}", addr))?;
        tracing::info!("Server listening on {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }

    fn log_config_summary(&self) {
        tracing::info!("=== MSAM Server Configuration ===");
        tracing::info!("Bind Address: {}", self.config.server.socket_address());
        tracing::info!("Database: {}", self.config.database.url);
        tracing::info!("Channel Table: {}", self.config.channels.table_name);
        tracing::info!("Settings Table: {}", self.config.channels.settings_table_name);
        tracing::info!("CORS: {}", if self.config.server.enable_cors { "Enabled" } else { "Disabled" });
        tracing::info!("Tracing: {}", if self.config.server.enable_tracing { "Enabled" } else { "Disabled" });
        tracing::info!("=================================");
    }
}

/// Connect to the database, create missing tables and build the handler context
pub async fn connect_storage(config: &MsamConfig) -> Result<ChannelsContext> {
    let db = DatabaseConnection::new(config.database.clone())
        .await
        .context("Failed to connect to database")?;

    db.ensure_schema(&config.channels)
        .await
        .context("Failed to create channel tables")?;

    let table = SqlChannelTable::new(db.clone(), config.channels.table_name.clone());
    let settings = SqlSettingsStore::new(db, config.channels.settings_table_name.clone());

    Ok(ChannelsContext::new(Arc::new(table), Arc::new(settings)))
}

/// Graceful shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown...");
}
