//! # MSAM Interfaces
//!
//! Storage interfaces for the MSAM channel registry.
//!
//! The REST layer never talks to a concrete database. It receives trait
//! objects for the two collaborators it needs and the server binary decides
//! which backend to plug in:
//!
//! - [`ChannelTable`] - the key-value table of `(channel, id)` records
//! - [`SettingsStore`] - named settings, including the channel name list
//!
//! Both extend [`Repository`], which only adds a health check.

pub mod database;
pub mod records;

// Re-export commonly used types
pub use database::{ChannelTable, Repository, SettingsStore, StorageError, StorageResult};
pub use records::ChannelNodeRecord;
