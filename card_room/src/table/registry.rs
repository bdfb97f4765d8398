//! Table registry for creating, editing and removing tables.

use super::config::{TableConfig, TableStatus};
use crate::seating::{AllocationError, AllocationResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Table ID type
pub type TableId = i64;

/// A registered table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    pub id: TableId,
    pub config: TableConfig,
    pub status: TableStatus,
}

impl Table {
    /// Whether new players may be seated here
    pub fn accepts_players(&self) -> bool {
        self.status != TableStatus::Inactive
    }
}

/// Registry of all tables on the floor
#[derive(Debug, Clone)]
pub struct TableRegistry {
    /// Registered tables, ordered by ID
    tables: BTreeMap<TableId, Table>,

    /// Next table ID
    next_table_id: TableId,
}

impl TableRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            tables: BTreeMap::new(),
            next_table_id: 1,
        }
    }

    /// Register a new table
    ///
    /// # Arguments
    ///
    /// * `config` - Table configuration
    ///
    /// # Returns
    ///
    /// * `AllocationResult<TableId>` - ID of the new table, or a validation error
    pub fn create(&mut self, config: TableConfig) -> AllocationResult<TableId> {
        config.validate()?;

        let table_id = self.next_table_id;
        self.next_table_id = table_id
            .checked_add(1)
            .ok_or_else(|| AllocationError::InvalidConfig("table ids exhausted".to_string()))?;

        log::info!("Created table {} '{}'", table_id, config.name);
        self.tables.insert(
            table_id,
            Table {
                id: table_id,
                config,
                status: TableStatus::Active,
            },
        );

        Ok(table_id)
    }

    /// Register a table under a caller-chosen ID
    ///
    /// Used when loading a floor seed. The next generated ID moves past it.
    pub fn insert_with_id(
        &mut self,
        table_id: TableId,
        config: TableConfig,
        status: TableStatus,
    ) -> AllocationResult<()> {
        config.validate()?;

        if self.tables.contains_key(&table_id) {
            return Err(AllocationError::InvalidConfig(format!(
                "duplicate table id {table_id}"
            )));
        }
        let next_table_id = table_id.checked_add(1).ok_or_else(|| {
            AllocationError::InvalidConfig(format!("table id {table_id} is out of range"))
        })?;

        self.tables.insert(
            table_id,
            Table {
                id: table_id,
                config,
                status,
            },
        );
        self.next_table_id = self.next_table_id.max(next_table_id);

        Ok(())
    }

    /// Look up a table
    pub fn get(&self, table_id: TableId) -> AllocationResult<&Table> {
        self.tables
            .get(&table_id)
            .ok_or(AllocationError::TableNotFound(table_id))
    }

    /// Replace a table's configuration
    ///
    /// The new configuration is validated before anything changes. Shrinking
    /// below an occupied seat is checked by the floor, not here.
    pub fn update(&mut self, table_id: TableId, config: TableConfig) -> AllocationResult<()> {
        config.validate()?;

        let table = self
            .tables
            .get_mut(&table_id)
            .ok_or(AllocationError::TableNotFound(table_id))?;
        table.config = config;

        log::debug!("Updated configuration of table {}", table_id);
        Ok(())
    }

    /// Change a table's status
    pub fn set_status(&mut self, table_id: TableId, status: TableStatus) -> AllocationResult<()> {
        let table = self
            .tables
            .get_mut(&table_id)
            .ok_or(AllocationError::TableNotFound(table_id))?;

        log::info!("Table {} status {} -> {}", table_id, table.status, status);
        table.status = status;

        Ok(())
    }

    /// Remove a table
    pub fn remove(&mut self, table_id: TableId) -> AllocationResult<Table> {
        let table = self
            .tables
            .remove(&table_id)
            .ok_or(AllocationError::TableNotFound(table_id))?;

        log::info!("Deleted table {} '{}'", table_id, table.config.name);
        Ok(table)
    }

    /// All tables, ordered by ID
    pub fn iter(&self) -> impl Iterator<Item = &Table> {
        self.tables.values()
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

impl Default for TableRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::GameType;

    fn config(name: &str) -> TableConfig {
        TableConfig::new(name, GameType::TexasHoldem, "1/2", 9)
    }

    #[test]
    fn test_create_assigns_sequential_ids() {
        let mut registry = TableRegistry::new();
        assert_eq!(registry.create(config("Table 1")), Ok(1));
        assert_eq!(registry.create(config("Table 2")), Ok(2));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_insert_with_largest_id_is_rejected() {
        let mut registry = TableRegistry::new();
        let result = registry.insert_with_id(i64::MAX, config("Table X"), TableStatus::Active);
        assert!(matches!(result, Err(AllocationError::InvalidConfig(_))));
        assert!(registry.is_empty());
        assert_eq!(registry.create(config("Table 1")), Ok(1));
    }

    #[test]
    fn test_create_after_highest_seeded_id() {
        let mut registry = TableRegistry::new();
        registry
            .insert_with_id(i64::MAX - 2, config("Table X"), TableStatus::Active)
            .unwrap();
        assert_eq!(registry.create(config("Table Y")), Ok(i64::MAX - 1));
        assert!(matches!(
            registry.create(config("Table Z")),
            Err(AllocationError::InvalidConfig(_))
        ));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_create_rejects_invalid_config() {
        let mut registry = TableRegistry::new();
        let result = registry.create(config(""));
        assert_eq!(result, Err(AllocationError::MissingField("name")));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_new_tables_start_active() {
        let mut registry = TableRegistry::new();
        let id = registry.create(config("Table 1")).unwrap();
        let table = registry.get(id).unwrap();
        assert_eq!(table.status, TableStatus::Active);
        assert!(table.accepts_players());
    }

    #[test]
    fn test_set_status_and_accepts_players() {
        let mut registry = TableRegistry::new();
        let id = registry.create(config("Table 1")).unwrap();

        registry.set_status(id, TableStatus::Paused).unwrap();
        assert!(registry.get(id).unwrap().accepts_players());

        registry.set_status(id, TableStatus::Inactive).unwrap();
        assert!(!registry.get(id).unwrap().accepts_players());
    }

    #[test]
    fn test_update_keeps_old_config_on_error() {
        let mut registry = TableRegistry::new();
        let id = registry.create(config("Table 1")).unwrap();

        let mut bad = config("Table 1");
        bad.max_seats = 0;
        assert!(registry.update(id, bad).is_err());
        assert_eq!(registry.get(id).unwrap().config.max_seats, 9);
    }

    #[test]
    fn test_insert_with_id_advances_next_id() {
        let mut registry = TableRegistry::new();
        registry
            .insert_with_id(7, config("Seeded"), TableStatus::Paused)
            .unwrap();
        assert_eq!(registry.create(config("Fresh")), Ok(8));
        assert!(
            registry
                .insert_with_id(7, config("Again"), TableStatus::Active)
                .is_err()
        );
    }

    #[test]
    fn test_missing_table_errors() {
        let mut registry = TableRegistry::new();
        assert_eq!(
            registry.get(42).unwrap_err(),
            AllocationError::TableNotFound(42)
        );
        assert!(registry.remove(42).is_err());
        assert!(registry.set_status(42, TableStatus::Paused).is_err());
    }
}
