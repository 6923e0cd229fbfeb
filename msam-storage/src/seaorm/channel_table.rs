//! Channel table backed by SQLite

use async_trait::async_trait;
use sea_orm::sea_query::{Alias, Expr, OnConflict, Order, Query};
use sea_orm::ConnectionTrait;
use tracing::debug;

use msam_interfaces::{ChannelNodeRecord, ChannelTable, Repository, StorageError, StorageResult};

use super::{connection::DatabaseConnection, map_db_error, schema::ChannelColumn};

/// SeaORM implementation of the [`ChannelTable`]
#[derive(Clone)]
pub struct SqlChannelTable {
    db: DatabaseConnection,
    table_name: String,
}

impl SqlChannelTable {
    pub fn new(db: DatabaseConnection, table_name: impl Into<String>) -> Self {
        Self {
            db,
            table_name: table_name.into(),
        }
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    fn table(&self) -> Alias {
        Alias::new(&self.table_name)
    }

    fn map_err(&self, err: sea_orm::DbErr) -> StorageError {
        map_db_error(&self.table_name, err)
    }
}

#[async_trait]
impl Repository for SqlChannelTable {
    async fn health_check(&self) -> StorageResult<()> {
        let query = Query::select()
            .column(ChannelColumn::Id)
            .from(self.table())
            .limit(1)
            .to_owned();

        let conn = self.db.get_connection();
        conn.query_all(conn.get_database_backend().build(&query))
            .await
            .map_err(|e| self.map_err(e))?;
        Ok(())
    }
}

#[async_trait]
impl ChannelTable for SqlChannelTable {
    async fn put_item(&self, record: ChannelNodeRecord) -> StorageResult<()> {
        debug!(
            "Writing record ({}, {}) to {}",
            record.channel, record.id, self.table_name
        );

        // The key is the whole record, so an existing row is already identical
        let insert = Query::insert()
            .into_table(self.table())
            .columns([ChannelColumn::Channel, ChannelColumn::Id])
            .values([record.channel.into(), record.id.into()])
            .map_err(|e| StorageError::Internal {
                message: e.to_string(),
            })?
            .on_conflict(
                OnConflict::columns([ChannelColumn::Channel, ChannelColumn::Id])
                    .do_nothing()
                    .to_owned(),
            )
            .to_owned();

        let conn = self.db.get_connection();
        conn.execute(conn.get_database_backend().build(&insert))
            .await
            .map_err(|e| self.map_err(e))?;
        Ok(())
    }

    async fn query_channel(&self, channel: &str) -> StorageResult<Vec<ChannelNodeRecord>> {
        debug!("Querying {} for channel '{}'", self.table_name, channel);

        let select = Query::select()
            .columns([ChannelColumn::Channel, ChannelColumn::Id])
            .from(self.table())
            .and_where(Expr::col(ChannelColumn::Channel).eq(channel))
            .order_by(ChannelColumn::Id, Order::Asc)
            .to_owned();

        let conn = self.db.get_connection();
        let rows = conn
            .query_all(conn.get_database_backend().build(&select))
            .await
            .map_err(|e| self.map_err(e))?;

        rows.iter()
            .map(|row| {
                Ok(ChannelNodeRecord {
                    channel: row.try_get("", "channel").map_err(|e| self.map_err(e))?,
                    id: row.try_get("", "id").map_err(|e| self.map_err(e))?,
                })
            })
            .collect()
    }

    async fn delete_item(&self, channel: &str, id: &str) -> StorageResult<()> {
        debug!("Deleting record ({}, {}) from {}", channel, id, self.table_name);

        let delete = Query::delete()
            .from_table(self.table())
            .and_where(Expr::col(ChannelColumn::Channel).eq(channel))
            .and_where(Expr::col(ChannelColumn::Id).eq(id))
            .to_owned();

        let conn = self.db.get_connection();
        conn.execute(conn.get_database_backend().build(&delete))
            .await
            .map_err(|e| self.map_err(e))?;
        Ok(())
    }
}
