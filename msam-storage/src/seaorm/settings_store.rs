//! Settings store backed by SQLite

use async_trait::async_trait;
use sea_orm::sea_query::{Alias, Expr, OnConflict, Query};
use sea_orm::ConnectionTrait;
use serde_json::Value;
use tracing::debug;

use msam_interfaces::{Repository, SettingsStore, StorageError, StorageResult};

use super::{connection::DatabaseConnection, map_db_error, schema::SettingColumn};

/// SeaORM implementation of the [`SettingsStore`]
#[derive(Clone)]
pub struct SqlSettingsStore {
    db: DatabaseConnection,
    table_name: String,
}

impl SqlSettingsStore {
    pub fn new(db: DatabaseConnection, table_name: impl Into<String>) -> Self {
        Self {
            db,
            table_name: table_name.into(),
        }
    }

    fn table(&self) -> Alias {
        Alias::new(&self.table_name)
    }

    fn map_err(&self, err: sea_orm::DbErr) -> StorageError {
        map_db_error(&self.table_name, err)
    }
}

#[async_trait]
impl Repository for SqlSettingsStore {
    async fn health_check(&self) -> StorageResult<()> {
        let query = Query::select()
            .column(SettingColumn::Id)
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
impl SettingsStore for SqlSettingsStore {
    async fn get_setting(&self, key: &str) -> StorageResult<Option<Value>> {
        debug!("Reading setting '{}' from {}", key, self.table_name);

        let select = Query::select()
            .column(SettingColumn::Value)
            .from(self.table())
            .and_where(Expr::col(SettingColumn::Id).eq(key))
            .to_owned();

        let conn = self.db.get_connection();
        let row = conn
            .query_one(conn.get_database_backend().build(&select))
            .await
            .map_err(|e| self.map_err(e))?;

        match row {
            Some(row) => {
                let raw: String = row.try_get("", "value").map_err(|e| self.map_err(e))?;
                Ok(Some(serde_json::from_str(&raw)?))
            }
            None => Ok(None),
        }
    }

    async fn put_setting(&self, key: &str, value: Value) -> StorageResult<()> {
        debug!("Writing setting '{}' to {}", key, self.table_name);

        let raw = serde_json::to_string(&value)?;
        let upsert = Query::insert()
            .into_table(self.table())
            .columns([SettingColumn::Id, SettingColumn::Value])
            .values([key.into(), raw.into()])
            .map_err(|e| StorageError::Internal {
                message: e.to_string(),
            })?
            .on_conflict(
                OnConflict::column(SettingColumn::Id)
                    .update_column(SettingColumn::Value)
                    .to_owned(),
            )
            .to_owned();

        let conn = self.db.get_connection();
        conn.execute(conn.get_database_backend().build(&upsert))
            .await
            .map_err(|e| self.map_err(e))?;
        Ok(())
    }
}
