//! Editing session
//!
//! One loaded floor plan plus everything needed to edit it. Edits are local
//! and immediate; only [`EditorSession::commit`] and [`EditorSession::resize`]
//! reach the backend. A failed backend call leaves local state as it was.

use super::{EditorError, Result};
use crate::audit_log;
use crate::floors::FloorRegistry;
use crate::grid::{self, GridBounds, GridStore, policy};
use crate::overlay::{self, TablePresentation};
use crate::protocol::{self, LoadedPlan};
use crate::resize;
use crate::tools::{PointerEvent, ToolController, ToolOutcome};
use floor_client::FloorPlanBackend;
use shared::models::{AvailabilityQuery, FloorPlan, Item, PublicTable};
use shared::util::now_millis;

pub struct EditorSession<B> {
    backend: B,
    plan_id: i64,
    name: String,
    bounds: GridBounds,
    store: GridStore,
    floors: FloorRegistry,
    tools: ToolController,
    availability: Vec<PublicTable>,
    last_saved_at: Option<i64>,
}

impl<B: FloorPlanBackend> EditorSession<B> {
    /// Fetch the current plan and start a session on it
    pub async fn load(backend: B) -> Result<Self> {
        let plan = backend.fetch_plan().await?;
        Ok(Self::from_plan(backend, plan))
    }

    /// Start a session on an already fetched plan
    pub fn from_plan(backend: B, plan: FloorPlan) -> Self {
        let LoadedPlan {
            plan_id,
            name,
            bounds,
            store,
            floors,
        } = protocol::load(plan);

        Self {
            backend,
            plan_id,
            name,
            bounds,
            store,
            floors,
            tools: ToolController::new(),
            availability: Vec::new(),
            last_saved_at: None,
        }
    }

    // ========== Accessors ==========

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn plan_id(&self) -> i64 {
        self.plan_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn bounds(&self) -> GridBounds {
        self.bounds
    }

    pub fn store(&self) -> &GridStore {
        &self.store
    }

    pub fn floors(&self) -> &FloorRegistry {
        &self.floors
    }

    pub fn tools(&self) -> &ToolController {
        &self.tools
    }

    pub fn tools_mut(&mut self) -> &mut ToolController {
        &mut self.tools
    }

    pub fn is_dirty(&self) -> bool {
        self.store.is_dirty()
    }

    pub fn last_saved_at(&self) -> Option<i64> {
        self.last_saved_at
    }

    /// All items of a floor, including those outside the current bounds
    pub fn items_on_floor(&self, floor: u32) -> Vec<&Item> {
        self.store.items_on_floor(floor)
    }

    /// Items of a floor that are inside the current bounds
    pub fn visible_items(&self, floor: u32) -> Vec<&Item> {
        self.store
            .items_on_floor(floor)
            .into_iter()
            .filter(|item| self.bounds.contains(item.x, item.y))
            .collect()
    }

    pub fn levels(&self) -> Vec<u32> {
        self.floors.levels(&self.store)
    }

    // ========== Editing ==========

    /// Apply a pointer event with the current tool on the current floor
    pub fn pointer(&mut self, event: PointerEvent) -> ToolOutcome {
        self.tools
            .handle(event, &mut self.store, &self.floors, self.bounds)
    }

    /// Rename a table and the items directly around it.
    /// Returns how many items got the new name. Tables outside the current
    /// bounds cannot be renamed.
    pub fn rename_table(&mut self, x: i32, y: i32, floor: u32, name: &str) -> Result<usize> {
        let name = name.trim();
        if name.is_empty() {
            return Err(EditorError::validation("Table name cannot be empty"));
        }
        let is_table = self.bounds.contains(x, y)
            && self
                .store
                .get(x, y, floor)
                .is_some_and(|item| policy(item.kind).anchors_group);
        if !is_table {
            return Err(EditorError::TableNotFound { x, y, floor });
        }

        let cells: Vec<(i32, i32)> = grid::group_of(&self.store, self.bounds, x, y, floor)
            .into_iter()
            .collect();
        let renamed = self.store.set_table_name(&cells, floor, name);
        tracing::info!(x, y, floor, name, renamed, "Renamed table group");
        Ok(renamed)
    }

    pub fn register_floor(&mut self, level: u32, name: &str) -> Result<()> {
        self.floors.register(level, name)
    }

    pub fn rename_floor(&mut self, level: u32, name: &str) -> Result<usize> {
        self.floors.rename(level, name, &mut self.store)
    }

    /// Create the next floor and switch to it
    pub fn add_floor(&mut self) -> u32 {
        let level = self.floors.add_floor(&self.store);
        self.tools.set_floor(level);
        level
    }

    // ========== Backend ==========

    /// Replace the plan's items on the backend with the local set.
    ///
    /// On success the session is clean and the save time recorded. On failure
    /// nothing local changes.
    pub async fn commit(&mut self) -> Result<usize> {
        let items = protocol::serialize(self.store.items());
        let count = items.len();

        if let Err(e) = self.backend.replace_items(self.plan_id, &items).await {
            tracing::error!(
                plan_id = self.plan_id,
                error = %e,
                retryable = e.is_retryable(),
                "Commit failed, local edits kept"
            );
            return Err(e.into());
        }

        self.store.mark_clean();
        self.last_saved_at = Some(now_millis());
        audit_log!(self.plan_id, "commit", format!("{} items", count));
        Ok(count)
    }

    /// Change the grid size on the backend, then locally.
    ///
    /// Out-of-range sizes are rejected before any request. Items outside the
    /// new bounds are kept.
    pub async fn resize(&mut self, width: i32, height: i32) -> Result<()> {
        let request = resize::validate_resize(width, height)?;
        self.backend.resize(self.plan_id, request).await?;
        resize::resize(&mut self.bounds, request.width, request.height)?;

        let hidden: usize = self
            .levels()
            .into_iter()
            .map(|floor| resize::out_of_bounds_count(&self.store, self.bounds, floor))
            .sum();
        tracing::info!(width, height, hidden, "Resized grid");
        audit_log!(self.plan_id, "resize", format!("{}x{}", width, height));
        Ok(())
    }

    /// Reload the availability feed.
    ///
    /// A failing feed is not an error: the overlay falls back to chair counts.
    /// Returns whether fresh data was loaded.
    pub async fn refresh_availability(&mut self, query: &AvailabilityQuery) -> bool {
        match self.backend.fetch_availability(query).await {
            Ok(tables) => {
                tracing::debug!(tables = tables.len(), "Availability refreshed");
                self.availability = tables;
                true
            }
            Err(e) => {
                tracing::warn!(error = %e, "Availability feed unavailable, using chair counts");
                self.availability.clear();
                false
            }
        }
    }

    // ========== Overlay ==========

    pub fn table_presentation(&self, x: i32, y: i32, floor: u32) -> Option<TablePresentation> {
        let item = self.store.get(x, y, floor)?;
        overlay::enrich(item, &self.store, &self.floors, self.bounds, &self.availability)
    }

    /// Visible tables of a floor with their availability
    pub fn floor_presentation(&self, floor: u32) -> Vec<TablePresentation> {
        self.visible_items(floor)
            .into_iter()
            .filter_map(|item| {
                overlay::enrich(item, &self.store, &self.floors, self.bounds, &self.availability)
            })
            .collect()
    }

    pub fn best_available_table(&self, party_size: u32) -> Option<TablePresentation> {
        overlay::best_available_table(
            &self.store,
            &self.floors,
            self.bounds,
            &self.availability,
            party_size,
        )
    }
}
