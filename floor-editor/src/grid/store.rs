//! Grid Cell Store
//!
//! Owns every placed item of a plan, across all floors. At most one item
//! exists per `(floor, x, y)`. Coordinates are not checked against the grid
//! bounds here: items left outside a shrunk grid stay stored.

use super::kind::policy;
use crate::floors::FloorRegistry;
use shared::models::{Item, ItemKind, Rotation};
use shared::util::{now_millis, snowflake_id};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
struct CellKey {
    floor: u32,
    y: i32,
    x: i32,
}

impl CellKey {
    fn new(x: i32, y: i32, floor: u32) -> Self {
        Self { floor, y, x }
    }
}

#[derive(Debug, Clone, Default)]
pub struct GridStore {
    plan_id: i64,
    items: HashMap<CellKey, Item>,
    dirty: bool,
}

impl GridStore {
    pub fn new(plan_id: i64) -> Self {
        Self {
            plan_id,
            items: HashMap::new(),
            dirty: false,
        }
    }

    /// Build a clean store from already-hydrated items.
    ///
    /// A later item on the same cell replaces an earlier one.
    pub fn from_items(plan_id: i64, items: impl IntoIterator<Item = Item>) -> Self {
        let mut store = Self::new(plan_id);
        for item in items {
            let key = CellKey::new(item.x, item.y, item.floor_level);
            if store.items.insert(key, item).is_some() {
                tracing::warn!(
                    floor = key.floor,
                    x = key.x,
                    y = key.y,
                    "Duplicate item on cell, keeping the last one"
                );
            }
        }
        store
    }

    pub fn plan_id(&self) -> i64 {
        self.plan_id
    }

    pub fn get(&self, x: i32, y: i32, floor: u32) -> Option<&Item> {
        self.items.get(&CellKey::new(x, y, floor))
    }

    /// Place `kind` on a cell.
    ///
    /// - same kind already there: only the rotation changes
    /// - other kind there: kind and rotation are overwritten, identity kept
    /// - free cell: a new item is created with the floor's registered name
    /// - `Empty`: the cell is cleared and `None` is returned
    pub fn place(
        &mut self,
        x: i32,
        y: i32,
        floor: u32,
        kind: ItemKind,
        rotation: Rotation,
        floors: &FloorRegistry,
    ) -> Option<&Item> {
        if !policy(kind).occupies_cell {
            self.erase(x, y, floor);
            return None;
        }

        let now = now_millis();
        let plan_id = self.plan_id;
        self.dirty = true;

        let item = self
            .items
            .entry(CellKey::new(x, y, floor))
            .and_modify(|existing| {
                if existing.kind != kind {
                    tracing::debug!(x, y, floor, from = %existing.kind, to = %kind, "Replacing item kind");
                    existing.kind = kind;
                }
                existing.rotation = rotation;
                existing.updated_at = now;
            })
            .or_insert_with(|| {
                tracing::debug!(x, y, floor, kind = %kind, "Placing new item");
                Item {
                    id: snowflake_id(),
                    floor_plan_id: plan_id,
                    kind,
                    x,
                    y,
                    rotation,
                    floor_level: floor,
                    floor_name: Some(floors.name_of(floor)),
                    table_name: None,
                    meta: Default::default(),
                    created_at: now,
                    updated_at: now,
                }
            });
        Some(&*item)
    }

    /// Remove the item on a cell. No-op when the cell is free.
    pub fn erase(&mut self, x: i32, y: i32, floor: u32) -> Option<Item> {
        let removed = self.items.remove(&CellKey::new(x, y, floor));
        if removed.is_some() {
            tracing::debug!(x, y, floor, "Erased item");
            self.dirty = true;
        }
        removed
    }

    /// All items on one floor, including those outside the current bounds,
    /// in row-major order.
    pub fn items_on_floor(&self, floor: u32) -> Vec<&Item> {
        let mut items: Vec<(&CellKey, &Item)> = self
            .items
            .iter()
            .filter(|(key, _)| key.floor == floor)
            .collect();
        items.sort_by_key(|(key, _)| **key);
        items.into_iter().map(|(_, item)| item).collect()
    }

    /// Every item on every floor, ordered by floor then row-major
    pub fn items(&self) -> Vec<&Item> {
        let mut items: Vec<(&CellKey, &Item)> = self.items.iter().collect();
        items.sort_by_key(|(key, _)| **key);
        items.into_iter().map(|(_, item)| item).collect()
    }

    /// Distinct floor levels that have at least one item
    pub fn occupied_levels(&self) -> impl Iterator<Item = u32> + '_ {
        self.items.keys().map(|key| key.floor)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Set `table_name` on the items occupying `cells` of one floor.
    /// Returns how many items were renamed.
    pub fn set_table_name(&mut self, cells: &[(i32, i32)], floor: u32, name: &str) -> usize {
        let now = now_millis();
        let mut renamed = 0;
        for &(x, y) in cells {
            if let Some(item) = self.items.get_mut(&CellKey::new(x, y, floor)) {
                item.table_name = Some(name.to_string());
                item.updated_at = now;
                renamed += 1;
            }
        }
        if renamed > 0 {
            self.dirty = true;
        }
        renamed
    }

    /// Set `floor_name` on every item of a level. Returns how many changed.
    pub fn set_floor_name(&mut self, floor: u32, name: &str) -> usize {
        let now = now_millis();
        let mut renamed = 0;
        for item in self.items.values_mut().filter(|item| item.floor_level == floor) {
            item.floor_name = Some(name.to_string());
            item.updated_at = now;
            renamed += 1;
        }
        if renamed > 0 {
            self.dirty = true;
        }
        renamed
    }

    /// Whether there are edits not yet committed
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }
}
