//! Resize Engine
//!
//! Only the grid bounds change on resize. Items that end up outside the new
//! bounds stay in the store and come back once the grid covers them again.

use crate::core::{EditorError, Result};
use crate::grid::{GridBounds, GridStore};
use shared::models::{MAX_GRID_SIZE, MIN_GRID_SIZE, ResizeRequest};

/// Check requested dimensions before anything is sent or changed
pub fn validate_resize(width: i32, height: i32) -> Result<ResizeRequest> {
    let bounds = GridBounds::new(width, height);
    if !bounds.is_valid() {
        return Err(EditorError::validation(format!(
            "Grid size must be between {MIN_GRID_SIZE} and {MAX_GRID_SIZE} cells, got {width}x{height}"
        )));
    }
    Ok(ResizeRequest { width, height })
}

/// Validate and apply new bounds locally. Invalid sizes leave `bounds` untouched.
pub fn resize(bounds: &mut GridBounds, width: i32, height: i32) -> Result<()> {
    let request = validate_resize(width, height)?;
    *bounds = GridBounds::new(request.width, request.height);
    Ok(())
}

/// Stored items on a floor that fall outside `bounds`
pub fn out_of_bounds_count(store: &GridStore, bounds: GridBounds, floor: u32) -> usize {
    store
        .items_on_floor(floor)
        .iter()
        .filter(|item| !bounds.contains(item.x, item.y))
        .count()
}
