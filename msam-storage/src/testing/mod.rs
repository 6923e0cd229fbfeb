//! Testing utilities
//!
//! In-memory implementations of the storage interfaces. They behave like the
//! SQLite backends and can simulate a missing table.

pub mod memory;

pub use memory::{MemoryChannelTable, MemorySettingsStore};
