//! HTTP request handlers for the REST API

pub mod channels;
pub mod health;

// Re-export handlers for easier access
pub use channels::*;
pub use health::*;
