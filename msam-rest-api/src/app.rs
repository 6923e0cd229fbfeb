//! Main application configuration and router setup

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::{context::ChannelsContext, handlers, middleware::cors_layer};

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Enable CORS middleware
    pub enable_cors: bool,
    /// Enable request tracing
    pub enable_tracing: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            enable_cors: true,
            enable_tracing: true,
        }
    }
}

/// Create the complete REST API application
pub fn create_rest_app(context: ChannelsContext, config: AppConfig) -> Router {
    let mut app = Router::new()
        .route("/health", get(handlers::health_check))
        .route("/channels", get(handlers::list_channels))
        .route(
            "/channel/{name}",
            get(handlers::get_channel_nodes)
                .put(handlers::set_channel_nodes)
                .delete(handlers::delete_channel_nodes),
        )
        .with_state(context);

    // Add middleware layers (applied in reverse order)
    if config.enable_cors {
        app = app.layer(cors_layer());
    }

    if config.enable_tracing {
        app = app.layer(TraceLayer::new_for_http());
    }

    app
}
