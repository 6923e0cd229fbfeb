//! Channel registry
//!
//! Owns the channel operations: reading, adding to and deleting the node
//! records of a channel, and keeping the list of known channel names in the
//! settings store in step with the records.
//!
//! The name list is updated with an unguarded read-modify-write. Concurrent
//! writes to the list race and the last writer wins.

use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, error, warn};

use msam_interfaces::{ChannelNodeRecord, ChannelTable, SettingsStore, StorageResult};

use crate::models::{ChannelResponse, Message};

/// Setting key under which the channel name list is stored
pub const CHANNELS_SETTING: &str = "channels";

/// Outcome of looking up a channel's records.
///
/// Lookup failures are not reported to callers; they collapse into `Empty`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChannelLookup {
    Found(Vec<ChannelNodeRecord>),
    Empty,
}

impl ChannelLookup {
    pub fn into_records(self) -> Vec<ChannelNodeRecord> {
        match self {
            ChannelLookup::Found(records) => records,
            ChannelLookup::Empty => Vec::new(),
        }
    }
}

/// Percent-decode a channel name taken from a request path.
///
/// Escapes that do not form valid UTF-8 decode to U+FFFD, so every path
/// segment names some channel.
pub fn decode_channel_name(encoded: &str) -> String {
    String::from_utf8_lossy(&urlencoding::decode_binary(encoded.as_bytes())).into_owned()
}

/// Channel operations over an injected channel table and settings store
#[derive(Clone)]
pub struct ChannelRegistry {
    table: Arc<dyn ChannelTable>,
    settings: Arc<dyn SettingsStore>,
}

impl ChannelRegistry {
    pub fn new(table: Arc<dyn ChannelTable>, settings: Arc<dyn SettingsStore>) -> Self {
        Self { table, settings }
    }

    pub fn table(&self) -> &Arc<dyn ChannelTable> {
        &self.table
    }

    pub fn settings(&self) -> &Arc<dyn SettingsStore> {
        &self.settings
    }

    /// Known channel names, `[]` if none were ever stored.
    ///
    /// Storage failures are returned to the caller unchanged.
    pub async fn list_channels(&self) -> StorageResult<Vec<String>> {
        self.channel_names().await
    }

    /// Node records of a channel. Unknown channels and failed lookups give `[]`.
    pub async fn get_channel_nodes(&self, encoded_name: &str) -> ChannelResponse<Vec<ChannelNodeRecord>> {
        let name = decode_channel_name(encoded_name);
        ChannelResponse::Ok(self.lookup(&name).await.into_records())
    }

    /// Add node ids to a channel and register the channel name.
    ///
    /// Existing records not named in `node_ids` are kept. A failure part way
    /// through leaves the records written so far in place.
    pub async fn set_channel_nodes(&self, encoded_name: &str, node_ids: &[String]) -> ChannelResponse<Message> {
        let result = self.try_set_channel_nodes(encoded_name, node_ids).await;
        if let Err(e) = &result {
            error!("Failed to save channel {}: {}", encoded_name, e);
        }
        result.map(|_| Message::saved()).into()
    }

    /// Delete every record of a channel and unregister the channel name.
    ///
    /// A missing table is tolerated; any other storage failure is reported.
    pub async fn delete_channel_nodes(&self, encoded_name: &str) -> ChannelResponse<Message> {
        let result = self.try_delete_channel_nodes(encoded_name).await;
        if let Err(e) = &result {
            error!("Failed to delete channel {}: {}", encoded_name, e);
        }
        result.map(|_| Message::done()).into()
    }

    async fn lookup(&self, name: &str) -> ChannelLookup {
        match self.table.query_channel(name).await {
            Ok(records) if records.is_empty() => ChannelLookup::Empty,
            Ok(records) => ChannelLookup::Found(records),
            Err(e) => {
                warn!("Lookup of channel {} failed: {}", name, e);
                ChannelLookup::Empty
            }
        }
    }

    async fn try_set_channel_nodes(&self, encoded_name: &str, node_ids: &[String]) -> StorageResult<()> {
        let name = decode_channel_name(encoded_name);

        for id in node_ids {
            self.table
                .put_item(ChannelNodeRecord::new(name.clone(), id.clone()))
                .await?;
        }
        debug!("Wrote {} records to channel {}", node_ids.len(), name);

        let mut names = self.channel_names().await?;
        if !names.contains(&name) {
            names.push(name);
            self.save_channel_names(names).await?;
        }

        Ok(())
    }

    async fn try_delete_channel_nodes(&self, encoded_name: &str) -> StorageResult<()> {
        let name = decode_channel_name(encoded_name);

        match self.delete_channel(&name).await {
            Err(e) if e.is_not_found() => {
                warn!("Skipping delete of channel {}: {}", name, e);
                Ok(())
            }
            other => other,
        }
    }

    async fn delete_channel(&self, name: &str) -> StorageResult<()> {
        let records = self.table.query_channel(name).await?;
        for record in &records {
            self.table.delete_item(&record.channel, &record.id).await?;
        }
        debug!("Deleted {} records from channel {}", records.len(), name);

        let mut names = self.channel_names().await?;
        if let Some(index) = names.iter().position(|n| n == name) {
            names.remove(index);
            self.save_channel_names(names).await?;
        }

        Ok(())
    }

    async fn channel_names(&self) -> StorageResult<Vec<String>> {
        match self.settings.get_setting(CHANNELS_SETTING).await? {
            None | Some(Value::Null) => Ok(Vec::new()),
            Some(value) => Ok(serde_json::from_value(value)?),
        }
    }

    async fn save_channel_names(&self, names: Vec<String>) -> StorageResult<()> {
        self.settings
            .put_setting(CHANNELS_SETTING, Value::from(names))
            .await
    }
}
