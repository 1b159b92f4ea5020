//! Vehicle state — position, route, speed, battery, and job assignment.

use std::collections::VecDeque;

use crate::{JobId, Position, VehicleId};

// ── VehicleStatus ─────────────────────────────────────────────────────────────

/// The coarse lifecycle state of a vehicle.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VehicleStatus {
    /// Stationary, available for work (default state).
    #[default]
    Idle,
    /// Traversing its waypoint list.
    Moving,
    /// Battery below threshold; withdrawn from motion until recharged.
    Charging,
}

impl VehicleStatus {
    /// Human-readable label, useful for CSV column values and logs.
    pub fn as_str(self) -> &'static str {
        match self {
            VehicleStatus::Idle     => "idle",
            VehicleStatus::Moving   => "moving",
            VehicleStatus::Charging => "charging",
        }
    }
}

impl std::fmt::Display for VehicleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Vehicle ───────────────────────────────────────────────────────────────────

/// One AGV.
///
/// The `path` is the remaining waypoint list, nearest first.  The stepper
/// pops waypoints off the front as they are reached, so the front entry is
/// never the vehicle's own current position.
///
/// `battery` is kept private so the `[0, 100]` clamp cannot be bypassed; use
/// [`battery`](Self::battery) / [`set_battery`](Self::set_battery) /
/// [`drain_battery`](Self::drain_battery).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vehicle {
    pub id: VehicleId,
    pub position: Position,
    /// Remaining waypoints, nearest first.
    pub path: VecDeque<Position>,
    /// Nominal speed in m/s.
    pub speed: f32,
    pub status: VehicleStatus,
    battery: f32,
    /// The job this vehicle is currently carrying out, if any.
    pub current_job: Option<JobId>,
}

impl Vehicle {
    /// A fully charged, idle vehicle at `position` with no route.
    pub fn new(id: VehicleId, position: Position, speed: f32) -> Self {
        Self {
            id,
            position,
            path: VecDeque::new(),
            speed,
            status: VehicleStatus::Idle,
            battery: 100.0,
            current_job: None,
        }
    }

    /// Current battery level as a percentage in `[0, 100]`.
    #[inline]
    pub fn battery(&self) -> f32 {
        self.battery
    }

    /// Set the battery level, clamped to `[0, 100]`.
    #[inline]
    pub fn set_battery(&mut self, pct: f32) {
        self.battery = pct.clamp(0.0, 100.0);
    }

    /// Subtract `pct` percentage points from the battery, clamped at 0.
    #[inline]
    pub fn drain_battery(&mut self, pct: f32) {
        self.set_battery(self.battery - pct);
    }

    /// Replace the route with `path` and start moving (a non-empty path sets
    /// status to `Moving`; an empty one leaves the vehicle `Idle`).
    pub fn assign_path(&mut self, path: Vec<Position>) {
        self.path = path.into();
        self.status = if self.path.is_empty() {
            VehicleStatus::Idle
        } else {
            VehicleStatus::Moving
        };
    }

    /// `true` when there is at least one waypoint left to reach.
    #[inline]
    pub fn has_path(&self) -> bool {
        !self.path.is_empty()
    }
}
