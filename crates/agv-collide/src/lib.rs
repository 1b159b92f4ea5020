//! `agv-collide` — collision prediction between vehicles in continuous space.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                 |
//! |--------------|----------------------------------------------------------|
//! | [`geometry`] | Strict CCW segment-intersection test                     |
//! | [`quadrant`] | 4-region spatial partition about the floor midpoint      |
//! | [`index`]    | `ObstacleIndex` — per-snapshot R-tree over obstacles     |
//! | [`resolver`] | `CollisionResolver`, `SafetyConfig`, `VehicleState`      |
//!
//! # Relationship to the planner
//!
//! This crate never touches the occupancy grid: all checks run directly in
//! continuous floor coordinates against vehicle/obstacle snapshots.  The
//! quadrant partition and the obstacle index are both ephemeral — rebuilt
//! from the current snapshot on every query/tick and never persisted.

pub mod geometry;
pub mod index;
pub mod quadrant;
pub mod resolver;

#[cfg(test)]
mod tests;

pub use geometry::segments_intersect;
pub use index::ObstacleIndex;
pub use quadrant::{Quadrant, QuadrantPartition};
pub use resolver::{CollisionResolver, SafetyConfig, VehicleState};
