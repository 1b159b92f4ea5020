//! The `Fleet` — all vehicles, indexed by `VehicleId`.

use agv_collide::VehicleState;
use agv_core::{Vehicle, VehicleId, VehicleStatus};

/// Vehicle storage.
///
/// Vehicles sit at the index matching their id (validated by
/// [`StepperBuilder`][crate::StepperBuilder]), so id lookup is direct
/// indexing.  The vector is `pub` for direct access on hot paths; prefer the
/// accessors elsewhere.
pub struct Fleet {
    pub vehicles: Vec<Vehicle>,
}

impl Fleet {
    /// Wrap a vehicle list.  Callers must ensure ids match indices; the
    /// stepper builder checks this for you.
    pub fn new(vehicles: Vec<Vehicle>) -> Self {
        Self { vehicles }
    }

    pub fn get(&self, id: VehicleId) -> Option<&Vehicle> {
        self.vehicles.get(id.index())
    }

    pub fn get_mut(&mut self, id: VehicleId) -> Option<&mut Vehicle> {
        self.vehicles.get_mut(id.index())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Vehicle> {
        self.vehicles.iter()
    }

    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    /// Pre-tick positional snapshot of every vehicle, in fleet order.
    pub fn snapshot(&self) -> Vec<VehicleState> {
        self.vehicles.iter().map(VehicleState::from).collect()
    }

    /// Number of vehicles currently in `status`.
    pub fn count_with_status(&self, status: VehicleStatus) -> usize {
        self.vehicles.iter().filter(|v| v.status == status).count()
    }
}
