//! SeaORM implementation of the channel storage layer
//!
//! Table names are configurable, so statements are built with `sea_query`
//! against an [`Alias`](sea_orm::sea_query::Alias) instead of static entities.

pub mod channel_table;
pub mod connection;
pub mod schema;
pub mod settings_store;

pub use channel_table::SqlChannelTable;
pub use connection::{DatabaseConnection, DatabaseError};
pub use settings_store::SqlSettingsStore;

use msam_interfaces::StorageError;
use sea_orm::DbErr;

/// Map a SeaORM error to the storage error seen by the registry.
///
/// A missing table is the tolerated not-found condition; everything else is
/// a storage failure.
pub(crate) fn map_db_error(table: &str, err: DbErr) -> StorageError {
    let message = err.to_string();
    if message.contains("no such table") {
        return StorageError::NotFound {
            table: table.to_string(),
        };
    }

    match err {
        DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => {
            StorageError::Connection { message }
        }
        _ => StorageError::Query { message },
    }
}
