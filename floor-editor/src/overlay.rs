//! Availability Overlay
//!
//! Joins the availability feed onto grid tables for display. Feed entries
//! share no key with grid items; a table matches a feed entry when the
//! coordinates are equal and, if the entry names a floor, the floor matches
//! by level number, registered floor name, or the item's stored floor name.
//! Tables without a match fall back to the chairs placed around them and are
//! assumed free. Nothing here mutates the grid.

use crate::floors::FloorRegistry;
use crate::grid::{GridBounds, GridStore, chair_count_around, policy};
use shared::models::{Item, PublicTable};

/// Where the seat numbers of a table came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeatSource {
    Feed,
    Adjacency,
}

/// Read-only state of one table for tooltips and coloring
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TablePresentation {
    pub x: i32,
    pub y: i32,
    pub floor_level: u32,
    pub table_name: Option<String>,
    pub total_seats: u32,
    pub available_seats: u32,
    pub occupied_seats: u32,
    pub is_available: bool,
    pub reservation_count: usize,
    pub source: SeatSource,
}

fn floor_matches(label: Option<&str>, item: &Item, floors: &FloorRegistry) -> bool {
    let Some(label) = label.map(str::trim).filter(|l| !l.is_empty()) else {
        return true;
    };
    label.parse::<u32>().ok() == Some(item.floor_level)
        || floors.name_of(item.floor_level).eq_ignore_ascii_case(label)
        || item
            .floor_name
            .as_deref()
            .is_some_and(|name| name.trim().eq_ignore_ascii_case(label))
}

/// Feed entry for a grid item, if any
pub fn find_public_table<'a>(
    feed: &'a [PublicTable],
    item: &Item,
    floors: &FloorRegistry,
) -> Option<&'a PublicTable> {
    feed.iter().find(|t| {
        t.x == item.x && t.y == item.y && floor_matches(t.floor.as_deref(), item, floors)
    })
}

/// Presentation state of a table item; `None` for any other kind
pub fn enrich(
    item: &Item,
    store: &GridStore,
    floors: &FloorRegistry,
    bounds: GridBounds,
    feed: &[PublicTable],
) -> Option<TablePresentation> {
    if !policy(item.kind).anchors_group {
        return None;
    }

    let presentation = match find_public_table(feed, item, floors) {
        Some(table) => TablePresentation {
            x: item.x,
            y: item.y,
            floor_level: item.floor_level,
            table_name: item.table_name.clone().or_else(|| Some(table.name.clone())),
            total_seats: table.total_seats,
            available_seats: table.available_seats,
            occupied_seats: table.occupied_seats,
            is_available: table.is_available,
            reservation_count: table.reservations.len(),
            source: SeatSource::Feed,
        },
        None => {
            let seats = chair_count_around(store, bounds, item.x, item.y, item.floor_level);
            TablePresentation {
                x: item.x,
                y: item.y,
                floor_level: item.floor_level,
                table_name: item.table_name.clone(),
                total_seats: seats,
                available_seats: seats,
                occupied_seats: 0,
                is_available: true,
                reservation_count: 0,
                source: SeatSource::Adjacency,
            }
        }
    };
    Some(presentation)
}

/// Available table with the fewest seats that still fit the party.
///
/// Only tables inside the current bounds are considered. Ties go to the lower
/// floor, then the upper row, then the left column.
pub fn best_available_table(
    store: &GridStore,
    floors: &FloorRegistry,
    bounds: GridBounds,
    feed: &[PublicTable],
    party_size: u32,
) -> Option<TablePresentation> {
    store
        .items()
        .into_iter()
        .filter(|item| bounds.contains(item.x, item.y))
        .filter_map(|item| enrich(item, store, floors, bounds, feed))
        .filter(|t| t.is_available && t.available_seats >= party_size.max(1))
        .min_by_key(|t| (t.available_seats, t.floor_level, t.y, t.x))
}
