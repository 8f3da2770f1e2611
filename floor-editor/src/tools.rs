//! Tool & Paint Controller
//!
//! Turns pointer gestures into grid mutations. A primary press applies the
//! selected tool to one cell and starts painting; every cell entered while the
//! button is held gets the same treatment until the button is released or the
//! pointer leaves the grid. A secondary press never mutates, it only resolves
//! a rename target.

use crate::floors::FloorRegistry;
use crate::grid::{GridBounds, GridStore, policy, table_next_to};
use shared::models::{DEFAULT_FLOOR_LEVEL, ItemKind, Rotation};

/// Tool selected in the palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tool {
    #[default]
    Table,
    Chair,
    Wall,
    Empty,
    Eraser,
}

impl Tool {
    /// Kind painted by this tool; `None` clears the cell
    pub fn paint_kind(self) -> Option<ItemKind> {
        let kind = match self {
            Self::Table => ItemKind::Table,
            Self::Chair => ItemKind::Chair,
            Self::Wall => ItemKind::Wall,
            Self::Empty => ItemKind::Empty,
            Self::Eraser => return None,
        };
        policy(kind).occupies_cell.then_some(kind)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    /// Button pressed over a cell
    Down { x: i32, y: i32, button: PointerButton },
    /// Pointer moved into a cell
    Enter { x: i32, y: i32 },
    /// Button released
    Up,
    /// Pointer left the grid area
    Leave,
}

/// What a pointer event did to the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolOutcome {
    Placed { x: i32, y: i32, kind: ItemKind },
    Erased { x: i32, y: i32 },
    /// Secondary click resolved to the table at these coordinates
    RenameRequested { table_x: i32, table_y: i32 },
    Ignored,
}

#[derive(Debug, Clone)]
pub struct ToolController {
    tool: Tool,
    rotation: Rotation,
    floor: u32,
    painting: bool,
}

impl Default for ToolController {
    fn default() -> Self {
        Self {
            tool: Tool::default(),
            rotation: Rotation::default(),
            floor: DEFAULT_FLOOR_LEVEL,
            painting: false,
        }
    }
}

impl ToolController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn select_tool(&mut self, tool: Tool) {
        self.tool = tool;
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    pub fn set_rotation(&mut self, rotation: Rotation) {
        self.rotation = rotation;
    }

    /// Advance the rotation a quarter turn clockwise
    pub fn rotate(&mut self) -> Rotation {
        self.rotation = self.rotation.clockwise();
        self.rotation
    }

    pub fn floor(&self) -> u32 {
        self.floor
    }

    /// Switch the viewed floor. Ends any paint stroke in progress.
    pub fn set_floor(&mut self, level: u32) {
        self.floor = level.max(DEFAULT_FLOOR_LEVEL);
        self.painting = false;
    }

    pub fn is_painting(&self) -> bool {
        self.painting
    }

    /// Handle one pointer event on the current floor
    pub fn handle(
        &mut self,
        event: PointerEvent,
        store: &mut GridStore,
        floors: &FloorRegistry,
        bounds: GridBounds,
    ) -> ToolOutcome {
        match event {
            PointerEvent::Down {
                x,
                y,
                button: PointerButton::Primary,
            } => {
                if !bounds.contains(x, y) {
                    return ToolOutcome::Ignored;
                }
                self.painting = true;
                self.apply(x, y, store, floors)
            }
            PointerEvent::Down {
                x,
                y,
                button: PointerButton::Secondary,
            } => {
                self.painting = false;
                self.rename_target(x, y, store, bounds)
            }
            PointerEvent::Enter { x, y } => {
                if !self.painting || !bounds.contains(x, y) {
                    return ToolOutcome::Ignored;
                }
                self.apply(x, y, store, floors)
            }
            PointerEvent::Up | PointerEvent::Leave => {
                self.painting = false;
                ToolOutcome::Ignored
            }
        }
    }

    /// Feed a stream of pointer events, stopping at the end of the stroke.
    ///
    /// Each event is applied as it arrives. Events after the stroke ends are
    /// left in the iterator.
    pub fn paint<I>(
        &mut self,
        events: &mut I,
        store: &mut GridStore,
        floors: &FloorRegistry,
        bounds: GridBounds,
    ) -> Vec<ToolOutcome>
    where
        I: Iterator<Item = PointerEvent>,
    {
        let mut outcomes = Vec::new();
        for event in events.by_ref() {
            outcomes.push(self.handle(event, store, floors, bounds));
            if !self.painting {
                break;
            }
        }
        outcomes
    }

    fn apply(&self, x: i32, y: i32, store: &mut GridStore, floors: &FloorRegistry) -> ToolOutcome {
        match self.tool.paint_kind() {
            Some(kind) => {
                store.place(x, y, self.floor, kind, self.rotation, floors);
                ToolOutcome::Placed { x, y, kind }
            }
            None => match store.erase(x, y, self.floor) {
                Some(_) => ToolOutcome::Erased { x, y },
                None => ToolOutcome::Ignored,
            },
        }
    }

    /// A table resolves to itself, a chair to the table next to it.
    /// Cells outside the bounds resolve to nothing.
    fn rename_target(&self, x: i32, y: i32, store: &GridStore, bounds: GridBounds) -> ToolOutcome {
        if !bounds.contains(x, y) {
            return ToolOutcome::Ignored;
        }
        let Some(item) = store.get(x, y, self.floor) else {
            return ToolOutcome::Ignored;
        };

        let table = if policy(item.kind).anchors_group {
            Some(item)
        } else if item.kind == ItemKind::Chair {
            table_next_to(store, bounds, x, y, self.floor)
        } else {
            None
        };

        match table {
            Some(table) => ToolOutcome::RenameRequested {
                table_x: table.x,
                table_y: table.y,
            },
            None => ToolOutcome::Ignored,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixture {
        tools: ToolController,
        store: GridStore,
        floors: FloorRegistry,
        bounds: GridBounds,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                tools: ToolController::new(),
                store: GridStore::new(1),
                floors: FloorRegistry::new(),
                bounds: GridBounds::new(10, 10),
            }
        }

        fn send(&mut self, event: PointerEvent) -> ToolOutcome {
            self.tools
                .handle(event, &mut self.store, &self.floors, self.bounds)
        }

        fn click(&mut self, x: i32, y: i32) -> ToolOutcome {
            let outcome = self.send(PointerEvent::Down {
                x,
                y,
                button: PointerButton::Primary,
            });
            self.send(PointerEvent::Up);
            outcome
        }

        fn context_click(&mut self, x: i32, y: i32) -> ToolOutcome {
            self.send(PointerEvent::Down {
                x,
                y,
                button: PointerButton::Secondary,
            })
        }
    }

    #[test]
    fn test_click_places_with_current_rotation() {
        let mut fx = Fixture::new();
        fx.tools.select_tool(Tool::Chair);
        fx.tools.set_rotation(Rotation::Deg90);
        assert_eq!(
            fx.click(2, 3),
            ToolOutcome::Placed {
                x: 2,
                y: 3,
                kind: ItemKind::Chair
            }
        );
        let item = fx.store.get(2, 3, 1).unwrap();
        assert_eq!(item.rotation, Rotation::Deg90);
        assert!(!fx.tools.is_painting());
    }

    #[test]
    fn test_eraser_and_empty_clear_cells() {
        let mut fx = Fixture::new();
        fx.tools.select_tool(Tool::Wall);
        fx.click(1, 1);
        fx.click(2, 1);

        fx.tools.select_tool(Tool::Eraser);
        assert_eq!(fx.click(1, 1), ToolOutcome::Erased { x: 1, y: 1 });
        fx.tools.select_tool(Tool::Empty);
        assert_eq!(fx.click(2, 1), ToolOutcome::Erased { x: 2, y: 1 });
        assert_eq!(fx.click(2, 1), ToolOutcome::Ignored);
        assert!(fx.store.is_empty());
    }

    #[test]
    fn test_drag_paints_every_entered_cell() {
        let mut fx = Fixture::new();
        fx.tools.select_tool(Tool::Wall);
        fx.send(PointerEvent::Down {
            x: 0,
            y: 0,
            button: PointerButton::Primary,
        });
        for x in 1..4 {
            fx.send(PointerEvent::Enter { x, y: 0 });
        }
        fx.send(PointerEvent::Up);
        // Moving without the button held does nothing
        assert_eq!(fx.send(PointerEvent::Enter { x: 5, y: 0 }), ToolOutcome::Ignored);

        let cells: Vec<_> = fx.store.items_on_floor(1).iter().map(|i| i.cell()).collect();
        assert_eq!(cells, vec![(0, 0), (1, 0), (2, 0), (3, 0)]);
    }

    #[test]
    fn test_leaving_grid_ends_stroke() {
        let mut fx = Fixture::new();
        fx.tools.select_tool(Tool::Chair);
        let mut events = vec![
            PointerEvent::Down {
                x: 4,
                y: 4,
                button: PointerButton::Primary,
            },
            PointerEvent::Enter { x: 4, y: 5 },
            PointerEvent::Leave,
            PointerEvent::Enter { x: 4, y: 6 },
        ]
        .into_iter();

        let outcomes = fx
            .tools
            .paint(&mut events, &mut fx.store, &fx.floors, fx.bounds);
        assert_eq!(outcomes.len(), 3);
        assert_eq!(events.next(), Some(PointerEvent::Enter { x: 4, y: 6 }));
        assert_eq!(fx.store.len(), 2);
        assert!(fx.store.get(4, 6, 1).is_none());
    }

    #[test]
    fn test_paints_on_current_floor_only() {
        let mut fx = Fixture::new();
        fx.floors.register(2, "Terrace").unwrap();
        fx.tools.set_floor(2);
        fx.click(0, 0);
        assert!(fx.store.get(0, 0, 1).is_none());
        let item = fx.store.get(0, 0, 2).unwrap();
        assert_eq!(item.floor_name.as_deref(), Some("Terrace"));
    }

    #[test]
    fn test_out_of_bounds_press_is_ignored() {
        let mut fx = Fixture::new();
        assert_eq!(fx.click(10, 0), ToolOutcome::Ignored);
        assert!(fx.store.is_empty());
    }

    #[test]
    fn test_context_click_resolves_rename_target() {
        let mut fx = Fixture::new();
        fx.click(3, 3);
        fx.tools.select_tool(Tool::Chair);
        fx.click(3, 2);
        fx.click(8, 8);
        fx.tools.select_tool(Tool::Wall);
        fx.click(4, 4);

        let target = ToolOutcome::RenameRequested {
            table_x: 3,
            table_y: 3,
        };
        assert_eq!(fx.context_click(3, 3), target);
        assert_eq!(fx.context_click(3, 2), target);
        // Lone chair, wall next to a table, and a free cell
        assert_eq!(fx.context_click(8, 8), ToolOutcome::Ignored);
        assert_eq!(fx.context_click(4, 4), ToolOutcome::Ignored);
        assert_eq!(fx.context_click(0, 0), ToolOutcome::Ignored);
        assert_eq!(fx.store.len(), 4);
    }

    #[test]
    fn test_context_click_outside_bounds_is_ignored() {
        let mut fx = Fixture::new();
        fx.click(8, 8);
        fx.bounds = GridBounds::new(6, 6);
        assert_eq!(fx.context_click(8, 8), ToolOutcome::Ignored);
        assert!(fx.store.get(8, 8, 1).is_some());
    }

    #[test]
    fn test_rotate_cycles() {
        let mut tools = ToolController::new();
        let seen: Vec<_> = (0..4).map(|_| tools.rotate().degrees()).collect();
        assert_eq!(seen, vec![90, 180, 270, 0]);
    }
}
