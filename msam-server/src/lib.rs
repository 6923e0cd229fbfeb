//! MSAM channel server
//!
//! Wires configuration, logging, SQLite storage and the REST API together.

pub mod logging;
pub mod startup;

// Re-export main components
pub use logging::init_logging;
pub use startup::{connect_storage, Server};
