use async_trait::async_trait;
use serde_json::Value;
use std::collections::{BTreeSet, HashMap};
use tokio::sync::RwLock;

use msam_interfaces::{
    ChannelNodeRecord, ChannelTable, Repository, SettingsStore, StorageError, StorageResult,
};

/// In-memory [`ChannelTable`]
#[derive(Debug, Default)]
pub struct MemoryChannelTable {
    records: RwLock<BTreeSet<ChannelNodeRecord>>,
    missing_table: Option<String>,
}

impl MemoryChannelTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// A table whose every operation fails with [`StorageError::NotFound`]
    pub fn missing(table: impl Into<String>) -> Self {
        Self {
            records: RwLock::default(),
            missing_table: Some(table.into()),
        }
    }

    /// Snapshot of every stored record, ordered by key
    pub async fn records(&self) -> Vec<ChannelNodeRecord> {
        self.records.read().await.iter().cloned().collect()
    }

    fn check_exists(&self) -> StorageResult<()> {
        match &self.missing_table {
            Some(table) => Err(StorageError::NotFound {
                table: table.clone(),
            }),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl Repository for MemoryChannelTable {
    async fn health_check(&self) -> StorageResult<()> {
        self.check_exists()
    }
}

#[async_trait]
impl ChannelTable for MemoryChannelTable {
    async fn put_item(&self, record: ChannelNodeRecord) -> StorageResult<()> {
        self.check_exists()?;
        self.records.write().await.insert(record);
        Ok(())
    }

    async fn query_channel(&self, channel: &str) -> StorageResult<Vec<ChannelNodeRecord>> {
        self.check_exists()?;
        Ok(self
            .records
            .read()
            .await
            .iter()
            .filter(|record| record.channel == channel)
            .cloned()
            .collect())
    }

    async fn delete_item(&self, channel: &str, id: &str) -> StorageResult<()> {
        self.check_exists()?;
        self.records
            .write()
            .await
            .remove(&ChannelNodeRecord::new(channel, id));
        Ok(())
    }
}

/// In-memory [`SettingsStore`]
#[derive(Debug, Default)]
pub struct MemorySettingsStore {
    values: RwLock<HashMap<String, Value>>,
}

impl MemorySettingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with one setting
    pub fn with_setting(key: impl Into<String>, value: Value) -> Self {
        let mut values = HashMap::new();
        values.insert(key.into(), value);
        Self {
            values: RwLock::new(values),
        }
    }
}

#[async_trait]
impl Repository for MemorySettingsStore {
    async fn health_check(&self) -> StorageResult<()> {
        Ok(())
    }
}

#[async_trait]
impl SettingsStore for MemorySettingsStore {
    async fn get_setting(&self, key: &str) -> StorageResult<Option<Value>> {
        Ok(self.values.read().await.get(key).cloned())
    }

    async fn put_setting(&self, key: &str, value: Value) -> StorageResult<()> {
        self.values.write().await.insert(key.to_string(), value);
        Ok(())
    }
}
