//! Per-snapshot R-tree over obstacle centers.
//!
//! Built once from the current obstacle snapshot (typically at the start of
//! a tick, alongside the fleet snapshot) and queried many times for "is
//! anything within r meters of this point".  Like the quadrant partition it
//! is ephemeral — never carried across snapshots, so it can never be stale.

use rstar::{PointDistance, RTree, RTreeObject, AABB};

use agv_core::{Obstacle, Position};

// ── R-tree entry ──────────────────────────────────────────────────────────────

/// Entry stored in the R-tree: an obstacle's center point plus the flag
/// needed to filter static-only queries.
#[derive(Clone)]
struct ObstacleEntry {
    point: [f32; 2],
    is_moving: bool,
}

impl RTreeObject for ObstacleEntry {
    type Envelope = AABB<[f32; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for ObstacleEntry {
    fn distance_2(&self, point: &[f32; 2]) -> f32 {
        let dx = self.point[0] - point[0];
        let dy = self.point[1] - point[1];
        dx * dx + dy * dy
    }
}

// ── ObstacleIndex ─────────────────────────────────────────────────────────────

/// Spatial index over obstacle center points.
///
/// Proximity is measured center-to-point: an obstacle is "within r" when its
/// center is, regardless of footprint extent.  Footprint-aware tests live on
/// [`Obstacle::blocks`]; the resolver's safety distances already dominate
/// typical footprint half-extents.
pub struct ObstacleIndex {
    tree: RTree<ObstacleEntry>,
}

impl ObstacleIndex {
    /// Bulk-load the index from an obstacle snapshot.
    pub fn build(obstacles: &[Obstacle]) -> Self {
        let entries: Vec<ObstacleEntry> = obstacles
            .iter()
            .map(|o| ObstacleEntry {
                point: [o.position.x, o.position.y],
                is_moving: o.is_moving,
            })
            .collect();
        Self { tree: RTree::bulk_load(entries) }
    }

    /// `true` if any obstacle center lies within `radius` meters of `pos`.
    pub fn any_within(&self, pos: Position, radius: f32) -> bool {
        self.tree
            .locate_within_distance([pos.x, pos.y], radius * radius)
            .next()
            .is_some()
    }

    /// As [`any_within`](Self::any_within), but counting static obstacles only.
    pub fn any_static_within(&self, pos: Position, radius: f32) -> bool {
        self.tree
            .locate_within_distance([pos.x, pos.y], radius * radius)
            .any(|e| !e.is_moving)
    }

    pub fn len(&self) -> usize {
        self.tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }
}
