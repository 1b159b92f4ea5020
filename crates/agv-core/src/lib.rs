//! `agv-core` — foundational types for the `agv_sim` motion core.
//!
//! This crate is a dependency of every other `agv-*` crate.  It intentionally
//! has no `agv-*` dependencies and minimal external ones (only `thiserror`,
//! plus optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                               |
//! |--------------|--------------------------------------------------------|
//! | [`ids`]      | `VehicleId`, `JobId`                                   |
//! | [`position`] | `Position`, planar distance and bearing math           |
//! | [`floor`]    | `FloorPlan`, `Cell` — world ↔ grid-cell mapping        |
//! | [`obstacle`] | `Obstacle`, `Footprint`, `ObstacleKind`                |
//! | [`vehicle`]  | `Vehicle`, `VehicleStatus`                             |
//! | [`job`]      | `Job`, `JobBoard` trait, `JobLedger`                   |
//! | [`clock`]    | `Tick`, `SimClock`                                     |
//! | [`error`]    | `CoreError`, `CoreResult`                              |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                      |
//! |---------|-------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.         |

pub mod clock;
pub mod error;
pub mod floor;
pub mod ids;
pub mod job;
pub mod obstacle;
pub mod position;
pub mod vehicle;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use clock::{SimClock, Tick};
pub use error::{CoreError, CoreResult};
pub use floor::{Cell, FloorPlan};
pub use ids::{JobId, VehicleId};
pub use job::{Job, JobBoard, JobLedger};
pub use obstacle::{Footprint, Obstacle, ObstacleKind};
pub use position::Position;
pub use vehicle::{Vehicle, VehicleStatus};
