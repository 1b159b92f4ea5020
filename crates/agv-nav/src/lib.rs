//! `agv-nav` — obstacle rasterization, grid search, and path smoothing.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`grid`]    | `OccupancyGrid` — obstacle list → blocked-cell raster     |
//! | [`astar`]   | 8-connected A* over the grid, arena-allocated nodes       |
//! | [`smooth`]  | Catmull-Rom-style Bézier smoothing pass                   |
//! | [`planner`] | `Planner` trait, `GridPlanner`                            |
//!
//! # Pipeline
//!
//! ```text
//! plan(start, goal, obstacles)
//!   → OccupancyGrid::build        (full rebuild, no state between calls)
//!   → astar::search               (optimal cell path, or None)
//!   → smooth::smooth_path         (insert Bézier samples, keep endpoints)
//!   ↳ straight-line fallback      (21 evenly spaced points) when search fails
//! ```
//!
//! Planning is a total function: it always returns a non-empty path and
//! never errors (the fallback deliberately ignores obstacles — callers that
//! need obstacle-aware guarantees must inspect the result themselves).

pub mod astar;
pub mod grid;
pub mod planner;
pub mod smooth;


pub use grid::OccupancyGrid;
pub use planner::{GridPlanner, Planner};
pub use smooth::smooth_path;
