//! Per-kind policy table
//!
//! Behavior that differs between item kinds is looked up here instead of
//! branching on the kind at every call site.

use shared::models::ItemKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KindPolicy {
    pub kind: ItemKind,
    pub label: &'static str,
    /// Character used in text dumps of a floor
    pub glyph: char,
    /// Counts toward a table's capacity when adjacent to it
    pub seats_guest: bool,
    /// Can be the target of a table rename
    pub anchors_group: bool,
    /// Stored as an item; `false` means placing it clears the cell
    pub occupies_cell: bool,
}

static POLICIES: [KindPolicy; 4] = [
    KindPolicy {
        kind: ItemKind::Table,
        label: "Table",
        glyph: 'T',
        seats_guest: false,
        anchors_group: true,
        occupies_cell: true,
    },
    KindPolicy {
        kind: ItemKind::Chair,
        label: "Chair",
        glyph: 'c',
        seats_guest: true,
        anchors_group: false,
        occupies_cell: true,
    },
    KindPolicy {
        kind: ItemKind::Wall,
        label: "Wall",
        glyph: '#',
        seats_guest: false,
        anchors_group: false,
        occupies_cell: true,
    },
    KindPolicy {
        kind: ItemKind::Empty,
        label: "Empty",
        glyph: '.',
        seats_guest: false,
        anchors_group: false,
        occupies_cell: false,
    },
];

pub fn policy(kind: ItemKind) -> &'static KindPolicy {
    let index = match kind {
        ItemKind::Table => 0,
        ItemKind::Chair => 1,
        ItemKind::Wall => 2,
        ItemKind::Empty => 3,
    };
    &POLICIES[index]
}
