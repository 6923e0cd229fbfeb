//! Context types for dependency injection in REST API handlers

use msam_interfaces::{ChannelTable, SettingsStore};
use std::sync::Arc;

use crate::registry::ChannelRegistry;

/// Context for the channel endpoints
#[derive(Clone)]
pub struct ChannelsContext {
    pub registry: Arc<ChannelRegistry>,
}

impl ChannelsContext {
    pub fn new(table: Arc<dyn ChannelTable>, settings: Arc<dyn SettingsStore>) -> Self {
        Self {
            registry: Arc::new(ChannelRegistry::new(table, settings)),
        }
    }
}
