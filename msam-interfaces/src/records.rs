//! Records stored in the channel table

use serde::{Deserialize, Serialize};

/// Membership of a node id under a channel.
///
/// The pair `(channel, id)` is the full composite key; there are no other
/// attributes.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ChannelNodeRecord {
    pub channel: String,
    pub id: String,
}

impl ChannelNodeRecord {
    pub fn new(channel: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            channel: channel.into(),
            id: id.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_wire_shape() {
        let record = ChannelNodeRecord::new("My Channel", "arn:node:1");
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json, serde_json::json!({"channel": "My Channel", "id": "arn:node:1"}));
    }

    #[test]
    fn test_record_ordering_follows_key() {
        let mut records = vec![
            ChannelNodeRecord::new("b", "1"),
            ChannelNodeRecord::new("a", "2"),
            ChannelNodeRecord::new("a", "1"),
        ];
        records.sort();

        assert_eq!(records[0], ChannelNodeRecord::new("a", "1"));
        assert_eq!(records[2], ChannelNodeRecord::new("b", "1"));
    }
}
