//! Storage backends for the MSAM channel registry
//!
//! Implements the [`ChannelTable`](msam_interfaces::ChannelTable) and
//! [`SettingsStore`](msam_interfaces::SettingsStore) interfaces:
//!
//! - [`seaorm`] - SQLite through SeaORM, with table names taken from configuration
//! - [`testing`] - in-memory backends for tests (feature `testing`)

// SeaORM implementation (feature-gated)
#[cfg(feature = "database")]
pub mod seaorm;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

#[cfg(feature = "database")]
pub use seaorm::{DatabaseConnection, DatabaseError, SqlChannelTable, SqlSettingsStore};
