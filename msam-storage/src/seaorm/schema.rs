//! Table definitions for the configurable channel and settings tables

use sea_orm::sea_query::{Alias, ColumnDef, Index, Table, TableCreateStatement};
use sea_orm::DeriveIden;

/// Columns of the channel table
#[derive(DeriveIden, Clone, Copy)]
pub enum ChannelColumn {
    Channel,
    Id,
}

/// Columns of the settings table
#[derive(DeriveIden, Clone, Copy)]
pub enum SettingColumn {
    Id,
    Value,
}

/// `(channel, id)` composite-key table with no other attributes
pub fn channel_table(name: &str) -> TableCreateStatement {
    Table::create()
        .table(Alias::new(name))
        .if_not_exists()
        .col(ColumnDef::new(ChannelColumn::Channel).string().not_null())
        .col(ColumnDef::new(ChannelColumn::Id).string().not_null())
        .primary_key(
            Index::create()
                .col(ChannelColumn::Channel)
                .col(ChannelColumn::Id),
        )
        .to_owned()
}

/// Named settings; values are JSON documents stored as text
pub fn settings_table(name: &str) -> TableCreateStatement {
    Table::create()
        .table(Alias::new(name))
        .if_not_exists()
        .col(
            ColumnDef::new(SettingColumn::Id)
                .string()
                .not_null()
                .primary_key(),
        )
        .col(ColumnDef::new(SettingColumn::Value).text().not_null())
        .to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::sea_query::SqliteQueryBuilder;

    #[test]
    fn test_channel_table_uses_configured_name() {
        let sql = channel_table("msam-channels").to_string(SqliteQueryBuilder);

        assert!(sql.contains("\"msam-channels\""));
        assert!(sql.contains("IF NOT EXISTS"));
        assert!(sql.contains("PRIMARY KEY"));
    }

    #[test]
    fn test_settings_table_columns() {
        let sql = settings_table("settings").to_string(SqliteQueryBuilder);

        assert!(sql.contains("\"id\""));
        assert!(sql.contains("\"value\""));
    }
}
