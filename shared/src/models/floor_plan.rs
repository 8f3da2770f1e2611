//! Floor Plan Model

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Smallest accepted grid dimension (cells)
pub const MIN_GRID_SIZE: i32 = 5;
/// Largest accepted grid dimension (cells)
pub const MAX_GRID_SIZE: i32 = 100;
/// Floor level every plan has, even with no items on it
pub const DEFAULT_FLOOR_LEVEL: u32 = 1;

/// Kind of object placed on a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Table,
    Chair,
    Wall,
    /// Absence of an item. Never kept in the editor, see `Tool::Empty`.
    Empty,
}

impl ItemKind {
    pub const ALL: [ItemKind; 4] = [Self::Table, Self::Chair, Self::Wall, Self::Empty];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Table => "table",
            Self::Chair => "chair",
            Self::Wall => "wall",
            Self::Empty => "empty",
        }
    }
}

impl std::fmt::Display for ItemKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Item rotation, serialized as degrees (0 / 90 / 180 / 270)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum Rotation {
    #[default]
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl Rotation {
    pub fn degrees(self) -> i32 {
        match self {
            Self::Deg0 => 0,
            Self::Deg90 => 90,
            Self::Deg180 => 180,
            Self::Deg270 => 270,
        }
    }

    /// Next quarter turn clockwise (270 wraps to 0)
    pub fn clockwise(self) -> Self {
        match self {
            Self::Deg0 => Self::Deg90,
            Self::Deg90 => Self::Deg180,
            Self::Deg180 => Self::Deg270,
            Self::Deg270 => Self::Deg0,
        }
    }
}

impl TryFrom<i32> for Rotation {
    type Error = String;

    fn try_from(degrees: i32) -> Result<Self, Self::Error> {
        match degrees {
            0 => Ok(Self::Deg0),
            90 => Ok(Self::Deg90),
            180 => Ok(Self::Deg180),
            270 => Ok(Self::Deg270),
            other => Err(format!("invalid rotation {other}, expected 0, 90, 180 or 270")),
        }
    }
}

impl From<Rotation> for i32 {
    fn from(rotation: Rotation) -> Self {
        rotation.degrees()
    }
}

/// Floor plan as returned by `GET` on the plan endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FloorPlan {
    pub id: i64,
    pub name: String,
    pub width: i32,
    pub height: i32,
    #[serde(default)]
    pub items: Vec<ItemRecord>,
}

/// Item as stored by the backend.
///
/// Older records may lack `rotation` or `floor_level`; the editor fills them in
/// on load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemRecord {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub floor_plan_id: Option<i64>,
    pub kind: ItemKind,
    pub x: i32,
    pub y: i32,
    #[serde(default)]
    pub rotation: Option<Rotation>,
    #[serde(default)]
    pub floor_level: Option<u32>,
    #[serde(default)]
    pub floor_name: Option<String>,
    #[serde(default)]
    pub table_name: Option<String>,
    #[serde(default)]
    pub meta: Option<Map<String, Value>>,
    #[serde(default)]
    pub created_at: Option<i64>,
    #[serde(default)]
    pub updated_at: Option<i64>,
}

/// Item held in memory while editing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: i64,
    pub floor_plan_id: i64,
    pub kind: ItemKind,
    pub x: i32,
    pub y: i32,
    pub rotation: Rotation,
    pub floor_level: u32,
    pub floor_name: Option<String>,
    pub table_name: Option<String>,
    pub meta: Map<String, Value>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl Item {
    pub fn cell(&self) -> (i32, i32) {
        (self.x, self.y)
    }
}

/// Minimal persisted item shape sent on commit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedItem {
    pub kind: ItemKind,
    pub x: i32,
    pub y: i32,
    pub rotation: Rotation,
    pub floor_level: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Map<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub floor_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_name: Option<String>,
}

/// `PUT` body replacing the whole item set of a plan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitItemsRequest {
    pub items: Vec<NormalizedItem>,
}

/// `PUT` body changing the grid dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResizeRequest {
    pub width: i32,
    pub height: i32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_rotation_serializes_as_degrees() {
        assert_eq!(serde_json::to_value(Rotation::Deg270).unwrap(), json!(270));
        let rotation: Rotation = serde_json::from_value(json!(90)).unwrap();
        assert_eq!(rotation, Rotation::Deg90);
    }

    #[test]
    fn test_rotation_rejects_odd_angles() {
        assert!(serde_json::from_value::<Rotation>(json!(45)).is_err());
    }

    #[test]
    fn test_rotation_clockwise_wraps() {
        assert_eq!(Rotation::Deg270.clockwise(), Rotation::Deg0);
        assert_eq!(Rotation::Deg0.clockwise(), Rotation::Deg90);
    }

    #[test]
    fn test_item_record_tolerates_missing_fields() {
        let record: ItemRecord =
            serde_json::from_value(json!({ "kind": "chair", "x": 2, "y": 7 })).unwrap();
        assert_eq!(record.kind, ItemKind::Chair);
        assert!(record.rotation.is_none());
        assert!(record.floor_level.is_none());
        assert!(record.meta.is_none());
    }

    #[test]
    fn test_normalized_item_omits_unset_fields() {
        let item = NormalizedItem {
            kind: ItemKind::Wall,
            x: 1,
            y: 1,
            rotation: Rotation::Deg0,
            floor_level: 1,
            meta: None,
            floor_name: None,
            table_name: None,
        };
        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(
            value,
            json!({ "kind": "wall", "x": 1, "y": 1, "rotation": 0, "floor_level": 1 })
        );
    }
}
