//! Coarse 4-region spatial partition of the floor.
//!
//! # Why this exists
//!
//! Fleet-wide collision queries are O(N²) if every vehicle is checked against
//! every other.  Splitting the floor into four quadrants about its midpoint
//! and only checking vehicles in the same or an edge-adjacent quadrant cuts
//! the candidate set to a local neighborhood.
//!
//! This is an approximation: a fast vehicle near a quadrant boundary can in
//! principle change quadrant between the partition snapshot and the check.
//! The multi-step trajectory lookahead in the resolver provides the safety
//! margin that makes the miss window acceptable at warehouse fleet sizes.
//!
//! The partition is rebuilt from the fleet snapshot on every query and never
//! persisted between ticks.

use agv_core::Position;

use crate::VehicleState;

// ── Quadrant ──────────────────────────────────────────────────────────────────

/// One of the four floor regions (N/S × E/W about the floor midpoint).
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct Quadrant {
    /// `true` for the +x half (midpoint inclusive).
    pub east: bool,
    /// `true` for the +y half (midpoint inclusive).
    pub north: bool,
}

impl Quadrant {
    /// Classify `pos` relative to the floor midpoint `center`.
    #[inline]
    pub fn of(pos: Position, center: Position) -> Self {
        Self {
            east: pos.x >= center.x,
            north: pos.y >= center.y,
        }
    }

    /// `true` for the same quadrant or one sharing an edge.  The diagonally
    /// opposite quadrant (both axes differ) is excluded from the check set.
    #[inline]
    pub fn is_neighbor(self, other: Quadrant) -> bool {
        self.east == other.east || self.north == other.north
    }

    /// Bucket slot in `[0, 4)`.
    #[inline]
    fn slot(self) -> usize {
        (self.east as usize) | ((self.north as usize) << 1)
    }
}

// ── QuadrantPartition ─────────────────────────────────────────────────────────

/// Ephemeral quadrant → fleet-index buckets.
///
/// Buckets are fixed-slot arrays (not a hash map) so candidate iteration
/// order follows fleet order deterministically.
pub struct QuadrantPartition {
    buckets: [Vec<u32>; 4],
}

impl QuadrantPartition {
    /// Bucket every vehicle in `fleet` by its quadrant about `center`.
    pub fn build(fleet: &[VehicleState], center: Position) -> Self {
        let mut buckets: [Vec<u32>; 4] = Default::default();
        for (i, state) in fleet.iter().enumerate() {
            buckets[Quadrant::of(state.position, center).slot()].push(i as u32);
        }
        Self { buckets }
    }

    /// Fleet indices of all vehicles in `quadrant` or an edge-adjacent one,
    /// in fleet order within each bucket.
    pub fn neighborhood(&self, quadrant: Quadrant) -> impl Iterator<Item = usize> + '_ {
        [
            Quadrant { east: false, north: false },
            Quadrant { east: true, north: false },
            Quadrant { east: false, north: true },
            Quadrant { east: true, north: true },
        ]
        .into_iter()
        .filter(move |q| quadrant.is_neighbor(*q))
        .flat_map(move |q| self.buckets[q.slot()].iter().map(|&i| i as usize))
    }

    /// Number of vehicles bucketed into `quadrant`.
    pub fn count(&self, quadrant: Quadrant) -> usize {
        self.buckets[quadrant.slot()].len()
    }
}
