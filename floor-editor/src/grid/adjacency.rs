//! Adjacency & Grouping
//!
//! Everything here looks at the 8 cells around a center cell on one floor.
//! Grouping is a single hop: a table's group is the table plus whatever sits
//! directly around it, never the neighbors of neighboring tables.

use super::GridBounds;
use super::kind::policy;
use super::store::GridStore;
use shared::models::Item;
use std::collections::BTreeSet;

/// Moore neighborhood offsets, row-major, center excluded
const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Items on the up-to-8 cells around `(x, y)`, skipping offsets outside the grid
pub fn neighbors_of<'a>(
    store: &'a GridStore,
    bounds: GridBounds,
    x: i32,
    y: i32,
    floor: u32,
) -> Vec<&'a Item> {
    NEIGHBOR_OFFSETS
        .iter()
        .map(|(dx, dy)| (x + dx, y + dy))
        .filter(|&(nx, ny)| bounds.contains(nx, ny))
        .filter_map(|(nx, ny)| store.get(nx, ny, floor))
        .collect()
}

/// Number of seats placed around a table, used as its capacity when the
/// availability feed has nothing for it
pub fn chair_count_around(
    store: &GridStore,
    bounds: GridBounds,
    table_x: i32,
    table_y: i32,
    floor: u32,
) -> u32 {
    neighbors_of(store, bounds, table_x, table_y, floor)
        .into_iter()
        .filter(|item| policy(item.kind).seats_guest)
        .count() as u32
}

/// Cells a table rename applies to: the table itself plus every occupied
/// neighbor cell, whatever its kind
pub fn group_of(
    store: &GridStore,
    bounds: GridBounds,
    table_x: i32,
    table_y: i32,
    floor: u32,
) -> BTreeSet<(i32, i32)> {
    let mut group: BTreeSet<(i32, i32)> = neighbors_of(store, bounds, table_x, table_y, floor)
        .into_iter()
        .map(Item::cell)
        .collect();
    group.insert((table_x, table_y));
    group
}

/// First table found around `(x, y)`, in row-major neighbor order
pub fn table_next_to<'a>(
    store: &'a GridStore,
    bounds: GridBounds,
    x: i32,
    y: i32,
    floor: u32,
) -> Option<&'a Item> {
    neighbors_of(store, bounds, x, y, floor)
        .into_iter()
        .find(|item| policy(item.kind).anchors_group)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::floors::FloorRegistry;
    use shared::models::{ItemKind, Rotation};

    fn place(store: &mut GridStore, x: i32, y: i32, kind: ItemKind) {
        store.place(x, y, 1, kind, Rotation::Deg0, &FloorRegistry::new());
    }

    #[test]
    fn test_chair_count_around_table() {
        let mut store = GridStore::new(1);
        let bounds = GridBounds::new(10, 10);
        place(&mut store, 3, 3, ItemKind::Table);
        place(&mut store, 3, 2, ItemKind::Chair);
        place(&mut store, 3, 4, ItemKind::Chair);
        place(&mut store, 4, 4, ItemKind::Wall);
        place(&mut store, 5, 3, ItemKind::Chair); // two cells away

        assert_eq!(chair_count_around(&store, bounds, 3, 3, 1), 2);
        assert_eq!(neighbors_of(&store, bounds, 3, 3, 1).len(), 3);
    }

    #[test]
    fn test_neighbors_skip_cells_outside_bounds() {
        let mut store = GridStore::new(1);
        place(&mut store, 0, 0, ItemKind::Table);
        place(&mut store, 5, 0, ItemKind::Chair);
        place(&mut store, 4, 1, ItemKind::Chair);

        // (5, 0) is outside a 5-wide grid even though it is stored
        let bounds = GridBounds::new(5, 5);
        let around: Vec<_> = neighbors_of(&store, bounds, 4, 0, 1)
            .iter()
            .map(|i| i.cell())
            .collect();
        assert_eq!(around, vec![(4, 1)]);
        assert!(neighbors_of(&store, bounds, 0, 0, 1).is_empty());
    }

    #[test]
    fn test_neighbors_ignore_other_floors() {
        let mut store = GridStore::new(1);
        let floors = FloorRegistry::new();
        place(&mut store, 2, 2, ItemKind::Table);
        store.place(2, 3, 2, ItemKind::Chair, Rotation::Deg0, &floors);
        assert_eq!(chair_count_around(&store, GridBounds::new(10, 10), 2, 2, 1), 0);
    }

    #[test]
    fn test_group_is_one_hop() {
        let mut store = GridStore::new(1);
        let bounds = GridBounds::new(10, 10);
        // Two pushed-together tables sharing the chair at (3, 1)
        place(&mut store, 2, 2, ItemKind::Table);
        place(&mut store, 4, 2, ItemKind::Table);
        place(&mut store, 3, 1, ItemKind::Chair);
        place(&mut store, 5, 3, ItemKind::Chair);

        let group = group_of(&store, bounds, 2, 2, 1);
        assert_eq!(group, BTreeSet::from([(2, 2), (3, 1)]));

        let other = group_of(&store, bounds, 4, 2, 1);
        assert_eq!(other, BTreeSet::from([(4, 2), (3, 1), (5, 3)]));
    }

    #[test]
    fn test_table_next_to_chair() {
        let mut store = GridStore::new(1);
        let bounds = GridBounds::new(10, 10);
        place(&mut store, 6, 6, ItemKind::Table);
        place(&mut store, 7, 7, ItemKind::Chair);
        place(&mut store, 9, 9, ItemKind::Chair);

        assert_eq!(table_next_to(&store, bounds, 7, 7, 1).map(Item::cell), Some((6, 6)));
        assert!(table_next_to(&store, bounds, 9, 9, 1).is_none());
    }
}
