pub mod channels;
pub mod common;

// Re-export commonly used types
pub use channels::{ChannelResponse, ExceptionBody, Message};
pub use common::{HealthCheckResult, HealthResponse, HealthStatus};
