//! HTTP middleware layers

use axum::http::Method;
use tower_http::cors::{Any, CorsLayer};

/// Permissive CORS for the channel endpoints
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::PUT, Method::DELETE, Method::OPTIONS])
        .allow_headers(Any)
}
