//! # MSAM REST API
//!
//! HTTP endpoints for the channel registry. A channel is a named group of
//! node ids; the registry keeps the `(channel, id)` records in a channel
//! table and mirrors the list of known channel names into the settings
//! store under the `channels` key.
//!
//! ## Endpoints
//!
//! - `GET /channels` - known channel names
//! - `GET /channel/{name}` - node records of a channel
//! - `PUT /channel/{name}` - add node ids (JSON array body) to a channel
//! - `DELETE /channel/{name}` - remove a channel and all its records
//! - `GET /health` - storage health
//!
//! Channel operations always answer `200 OK`; failures are reported in the
//! body as `{"exception": "..."}`.
//!
//! ## Example
//!
//! ```rust,no_run
//! use msam_rest_api::{create_rest_app, AppConfig, ChannelsContext};
//! # use std::sync::Arc;
//! # async fn example(
//! #     table: Arc<dyn msam_interfaces::ChannelTable>,
//! #     settings: Arc<dyn msam_interfaces::SettingsStore>,
//! # ) -> Result<(), Box<dyn std::error::Error>> {
//! let context = ChannelsContext::new(table, settings);
//! let app = create_rest_app(context, AppConfig::default());
//!
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:8080").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

pub mod app;
pub mod context;
pub mod errors;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod registry;

// Re-export commonly used types
pub use app::{create_rest_app, AppConfig};
pub use context::ChannelsContext;
pub use errors::{RestError, RestResult};
pub use models::*;
pub use registry::{decode_channel_name, ChannelLookup, ChannelRegistry, CHANNELS_SETTING};
