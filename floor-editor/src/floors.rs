//! Floor Registry
//!
//! Floor names live here, independent of the items, so a floor can be created
//! and named before anything is placed on it. Item `floor_name` fields are
//! snapshots written when an item is created or its floor is renamed.

use crate::core::{EditorError, Result};
use crate::grid::GridStore;
use shared::models::{DEFAULT_FLOOR_LEVEL, Item};
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, Default)]
pub struct FloorRegistry {
    names: BTreeMap<u32, String>,
}

impl FloorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the registry from the `floor_name` snapshots of loaded items.
    /// The first name seen for a level wins.
    pub fn from_items<'a>(items: impl IntoIterator<Item = &'a Item>) -> Self {
        let mut registry = Self::new();
        for item in items {
            if let Some(name) = item.floor_name.as_deref().map(str::trim)
                && !name.is_empty()
            {
                registry
                    .names
                    .entry(item.floor_level)
                    .or_insert_with(|| name.to_string());
            }
        }
        registry
    }

    /// Known levels, ascending: registered levels, levels with items, and level 1
    pub fn levels(&self, store: &GridStore) -> Vec<u32> {
        let mut levels: BTreeSet<u32> = self.names.keys().copied().collect();
        levels.extend(store.occupied_levels());
        levels.insert(DEFAULT_FLOOR_LEVEL);
        levels.into_iter().collect()
    }

    /// Registered name, or `"Floor {level}"`
    pub fn name_of(&self, level: u32) -> String {
        self.names
            .get(&level)
            .cloned()
            .unwrap_or_else(|| default_floor_name(level))
    }

    pub fn is_registered(&self, level: u32) -> bool {
        self.names.contains_key(&level)
    }

    /// Associate a name with a level. Registering the same pair twice is a no-op.
    ///
    /// Does not touch existing items; use [`FloorRegistry::rename`] for that.
    pub fn register(&mut self, level: u32, name: &str) -> Result<()> {
        let name = validate_floor(level, name)?;
        if self.names.get(&level).map(String::as_str) != Some(name) {
            tracing::debug!(level, name, "Registered floor");
            self.names.insert(level, name.to_string());
        }
        Ok(())
    }

    /// Rename a level and rewrite `floor_name` on every item of that level.
    /// Returns how many items were updated.
    pub fn rename(&mut self, level: u32, name: &str, store: &mut GridStore) -> Result<usize> {
        let name = validate_floor(level, name)?;
        self.names.insert(level, name.to_string());
        let updated = store.set_floor_name(level, name);
        tracing::info!(level, name, updated, "Renamed floor");
        Ok(updated)
    }

    /// Register the level above the highest known one under its default name
    pub fn add_floor(&mut self, store: &GridStore) -> u32 {
        let level = self
            .levels(store)
            .last()
            .copied()
            .unwrap_or(DEFAULT_FLOOR_LEVEL)
            + 1;
        self.names.insert(level, default_floor_name(level));
        tracing::info!(level, "Added floor");
        level
    }
}

pub fn default_floor_name(level: u32) -> String {
    format!("Floor {}", level)
}

fn validate_floor(level: u32, name: &str) -> Result<&str> {
    if level < DEFAULT_FLOOR_LEVEL {
        return Err(EditorError::validation(format!(
            "Floor level must be at least {}",
            DEFAULT_FLOOR_LEVEL
        )));
    }
    let name = name.trim();
    if name.is_empty() {
        return Err(EditorError::validation("Floor name cannot be empty"));
    }
    Ok(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{ItemKind, Rotation};

    #[test]
    fn test_level_one_always_present() {
        let registry = FloorRegistry::new();
        let store = GridStore::new(1);
        assert_eq!(registry.levels(&store), vec![1]);
        assert_eq!(registry.name_of(1), "Floor 1");
    }

    #[test]
    fn test_levels_union_registry_and_items() {
        let mut registry = FloorRegistry::new();
        let mut store = GridStore::new(1);
        registry.register(4, "Rooftop").unwrap();
        store.place(0, 0, 2, ItemKind::Wall, Rotation::Deg0, &registry);
        assert_eq!(registry.levels(&store), vec![1, 2, 4]);
    }

    #[test]
    fn test_registered_name_reaches_new_items() {
        let mut registry = FloorRegistry::new();
        let mut store = GridStore::new(1);
        registry.register(3, "Terrace").unwrap();
        let item = store
            .place(1, 1, 3, ItemKind::Table, Rotation::Deg0, &registry)
            .cloned()
            .unwrap();
        assert_eq!(item.floor_name.as_deref(), Some("Terrace"));
    }

    #[test]
    fn test_register_is_idempotent() {
        let mut registry = FloorRegistry::new();
        registry.register(2, "Mezzanine").unwrap();
        registry.register(2, "  Mezzanine ").unwrap();
        assert_eq!(registry.name_of(2), "Mezzanine");
    }

    #[test]
    fn test_register_rejects_blank_and_level_zero() {
        let mut registry = FloorRegistry::new();
        assert!(registry.register(2, "   ").is_err());
        assert!(registry.register(0, "Basement").is_err());
        assert!(!registry.is_registered(2));
    }

    #[test]
    fn test_rename_propagates_to_items() {
        let mut registry = FloorRegistry::new();
        let mut store = GridStore::new(1);
        store.place(0, 0, 1, ItemKind::Table, Rotation::Deg0, &registry);
        store.place(1, 0, 1, ItemKind::Chair, Rotation::Deg0, &registry);
        store.place(0, 0, 2, ItemKind::Table, Rotation::Deg0, &registry);

        assert_eq!(registry.rename(1, "Main Hall", &mut store).unwrap(), 2);
        assert_eq!(registry.name_of(1), "Main Hall");
        for item in store.items_on_floor(1) {
            assert_eq!(item.floor_name.as_deref(), Some("Main Hall"));
        }
        assert_eq!(store.get(0, 0, 2).unwrap().floor_name.as_deref(), Some("Floor 2"));
    }

    #[test]
    fn test_add_floor_goes_above_highest() {
        let mut registry = FloorRegistry::new();
        let mut store = GridStore::new(1);
        store.place(0, 0, 2, ItemKind::Wall, Rotation::Deg0, &registry);
        assert_eq!(registry.add_floor(&store), 3);
        assert_eq!(registry.add_floor(&store), 4);
        assert_eq!(registry.name_of(4), "Floor 4");
    }
}
