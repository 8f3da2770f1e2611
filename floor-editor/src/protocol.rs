//! Save/Load Protocol
//!
//! Converts between the backend's item records and the in-memory store.
//! Saving emits the minimal item shape; loading fills in defaults for
//! records written before rotation or floors existed.

use crate::floors::FloorRegistry;
use crate::grid::{GridBounds, GridStore, policy};
use shared::models::{DEFAULT_FLOOR_LEVEL, FloorPlan, Item, ItemRecord, NormalizedItem};
use shared::util::{now_millis, snowflake_id};

/// Minimal persisted form of one item
pub fn normalize(item: &Item) -> NormalizedItem {
    NormalizedItem {
        kind: item.kind,
        x: item.x,
        y: item.y,
        rotation: item.rotation,
        floor_level: item.floor_level,
        meta: (!item.meta.is_empty()).then(|| item.meta.clone()),
        floor_name: item.floor_name.clone(),
        table_name: item.table_name.clone(),
    }
}

/// Normalize a set of items for a full-replacement commit
pub fn serialize<'a>(items: impl IntoIterator<Item = &'a Item>) -> Vec<NormalizedItem> {
    items.into_iter().map(normalize).collect()
}

/// Turn a stored record into an editor item.
///
/// Missing rotation becomes 0, missing or zero floor level becomes 1.
/// `empty` records behave as absence and are dropped.
pub fn hydrate_item(record: ItemRecord, plan_id: i64) -> Option<Item> {
    if !policy(record.kind).occupies_cell {
        return None;
    }

    let now = now_millis();
    let created_at = record.created_at.unwrap_or(now);
    Some(Item {
        id: record.id.unwrap_or_else(snowflake_id),
        floor_plan_id: record.floor_plan_id.unwrap_or(plan_id),
        kind: record.kind,
        x: record.x,
        y: record.y,
        rotation: record.rotation.unwrap_or_default(),
        floor_level: record
            .floor_level
            .filter(|level| *level >= DEFAULT_FLOOR_LEVEL)
            .unwrap_or(DEFAULT_FLOOR_LEVEL),
        floor_name: record.floor_name.filter(|name| !name.trim().is_empty()),
        table_name: record.table_name.filter(|name| !name.trim().is_empty()),
        meta: record.meta.unwrap_or_default(),
        created_at,
        updated_at: record.updated_at.unwrap_or(created_at),
    })
}

/// Everything an editing session starts from
#[derive(Debug, Clone)]
pub struct LoadedPlan {
    pub plan_id: i64,
    pub name: String,
    pub bounds: GridBounds,
    pub store: GridStore,
    pub floors: FloorRegistry,
}

/// Hydrate the store and floor registry from a fetched plan
pub fn load(plan: FloorPlan) -> LoadedPlan {
    let plan_id = plan.id;
    let total = plan.items.len();
    let items: Vec<Item> = plan
        .items
        .into_iter()
        .filter_map(|record| hydrate_item(record, plan_id))
        .collect();

    let floors = FloorRegistry::from_items(&items);
    let store = GridStore::from_items(plan_id, items);
    tracing::info!(
        plan_id,
        items = store.len(),
        dropped = total - store.len(),
        width = plan.width,
        height = plan.height,
        "Loaded floor plan"
    );

    LoadedPlan {
        plan_id,
        name: plan.name,
        bounds: GridBounds::new(plan.width, plan.height),
        store,
        floors,
    }
}
