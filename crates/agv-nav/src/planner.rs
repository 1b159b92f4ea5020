//! Planning trait and the default grid planner.
//!
//! # Pluggability
//!
//! The stepper and hosts call planning via the [`Planner`] trait, so
//! applications can swap in custom implementations (lane-constrained
//! planners, precomputed flow fields) without touching the rest of the core.
//! The default [`GridPlanner`] is the rasterize → A* → smooth pipeline.

use agv_core::{FloorPlan, Obstacle, Position};

use crate::{astar, smooth_path, OccupancyGrid};

/// Number of points in the straight-line fallback path (endpoints included).
const FALLBACK_POINTS: u32 = 21;

// ── Planner trait ─────────────────────────────────────────────────────────────

/// Pluggable route-planning engine.
///
/// Planning is **total**: implementations always return a non-empty waypoint
/// sequence and never error.  Degenerate inputs degrade (same-cell start and
/// goal → single point; unreachable goal → best-effort path).
///
/// # Thread safety
///
/// Implementations must be `Send + Sync` so hosts can share one planner
/// across worker threads, each holding its own fleet state.
pub trait Planner: Send + Sync {
    /// Compute an obstacle-avoiding waypoint sequence from `start` to `goal`.
    fn plan(
        &self,
        floor: FloorPlan,
        start: Position,
        goal: Position,
        obstacles: &[Obstacle],
    ) -> Vec<Position>;
}

// ── GridPlanner ───────────────────────────────────────────────────────────────

/// The default planner: occupancy-grid A* with Bézier smoothing.
///
/// Every call rebuilds the grid from the obstacle snapshot, searches, and
/// smooths.  When the search fails (enclosed start, blocked goal), the
/// result degrades to a straight line of 21 evenly spaced points that
/// deliberately ignores obstacles — a best-effort answer, not a rejection.
/// Callers that need obstacle-aware guarantees must inspect the returned
/// path themselves.
pub struct GridPlanner;

impl Planner for GridPlanner {
    fn plan(
        &self,
        floor: FloorPlan,
        start: Position,
        goal: Position,
        obstacles: &[Obstacle],
    ) -> Vec<Position> {
        let start_cell = floor.cell_of(start);
        let goal_cell = floor.cell_of(goal);

        if start_cell == goal_cell {
            return vec![start];
        }

        let grid = OccupancyGrid::build(floor, obstacles);
        match astar::search(&grid, start_cell, goal_cell) {
            Some(cells) => {
                let waypoints = cells.into_iter().map(|c| floor.cell_center(c)).collect();
                smooth_path(waypoints)
            }
            None => straight_line(start, goal),
        }
    }
}

/// Evenly spaced straight-line path between two points, endpoints included.
fn straight_line(start: Position, goal: Position) -> Vec<Position> {
    let last = FALLBACK_POINTS - 1;
    (0..FALLBACK_POINTS)
        .map(|i| start.lerp(goal, i as f32 / last as f32))
        .collect()
}
