//! Boolean occupancy raster of the warehouse floor.
//!
//! Built fresh from the obstacle list on every planning call — the grid
//! holds no state between calls, so it can never be stale (the cost is
//! re-rasterization each call, which is cheap at the default 30 × 30).
//! Only the planner consumes this; collision prediction works directly in
//! continuous space.

use agv_core::{Cell, FloorPlan, Obstacle};

/// A fixed-size boolean occupancy grid.
///
/// Cells covered by an obstacle footprint are blocked; everything else,
/// including cells under a vehicle, is free.
pub struct OccupancyGrid {
    floor: FloorPlan,
    /// Row-major blocked flags, length `floor.cell_count()`.
    blocked: Vec<bool>,
}

impl OccupancyGrid {
    /// Rasterize `obstacles` onto a fresh grid.
    ///
    /// Each obstacle blocks the cells within its `width/2 × depth/2`
    /// half-extents (in cells, rounded) around its rounded center cell.
    /// Footprint cells that fall outside the grid are silently skipped.
    pub fn build(floor: FloorPlan, obstacles: &[Obstacle]) -> Self {
        let mut blocked = vec![false; floor.cell_count()];

        for obs in obstacles {
            let center = floor.cell_of(obs.position);
            let (hw, hd) = obs.size.half_extents();
            let reach_x = (hw / floor.cell_m).round() as i32;
            let reach_y = (hd / floor.cell_m).round() as i32;

            for dy in -reach_y..=reach_y {
                for dx in -reach_x..=reach_x {
                    let cell = center.offset(dx, dy);
                    if floor.in_bounds(cell) {
                        blocked[floor.cell_index(cell)] = true;
                    }
                }
            }
        }

        Self { floor, blocked }
    }

    /// `true` if `cell` is inside the grid and not blocked.
    ///
    /// Out-of-bounds cells are not walkable, so the search never leaves the
    /// floor.
    #[inline]
    pub fn is_free(&self, cell: Cell) -> bool {
        self.floor.in_bounds(cell) && !self.blocked[self.floor.cell_index(cell)]
    }

    /// The floor plan this grid was rasterized against.
    #[inline]
    pub fn floor(&self) -> FloorPlan {
        self.floor
    }

    /// Number of blocked cells (diagnostics and tests).
    pub fn blocked_count(&self) -> usize {
        self.blocked.iter().filter(|&&b| b).count()
    }
}
