//! Fluent builder for constructing a [`Stepper`].

use agv_collide::{CollisionResolver, SafetyConfig};
use agv_core::{FloorPlan, JobBoard, Obstacle, SimClock, Vehicle};

use crate::{Fleet, SimError, SimResult, StepConfig, Stepper};

/// Fluent builder for [`Stepper<J>`].
///
/// # Required inputs
///
/// - the fleet (`Vec<Vehicle>`, ids matching their slot)
/// - `J: JobBoard` — the job store (e.g. [`agv_core::JobLedger`])
///
/// # Optional inputs (have defaults)
///
/// | Method        | Default                  |
/// |---------------|--------------------------|
/// | `.config(c)`  | [`StepConfig::default`]  |
/// | `.floor(f)`   | 30 × 30 cells at 1 m     |
/// | `.safety(s)`  | [`SafetyConfig::default`]|
/// | `.obstacles(v)` | empty floor            |
///
/// # Example
///
/// ```rust,ignore
/// let mut stepper = StepperBuilder::new(vehicles, ledger)
///     .floor(FloorPlan::new(40, 1.0))
///     .obstacles(obstacles)
///     .build()?;
/// stepper.tick(0.1, 1.0, &mut NoopObserver)?;
/// ```
pub struct StepperBuilder<J: JobBoard> {
    vehicles: Vec<Vehicle>,
    jobs: J,
    config: StepConfig,
    floor: FloorPlan,
    safety: SafetyConfig,
    obstacles: Vec<Obstacle>,
}

impl<J: JobBoard> StepperBuilder<J> {
    /// Create a builder with the required inputs.
    pub fn new(vehicles: Vec<Vehicle>, jobs: J) -> Self {
        Self {
            vehicles,
            jobs,
            config: StepConfig::default(),
            floor: FloorPlan::default(),
            safety: SafetyConfig::default(),
            obstacles: Vec::new(),
        }
    }

    /// Override the tick-loop tunables.
    pub fn config(mut self, config: StepConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the floor bounds (quadrant partition midpoint derives from this).
    pub fn floor(mut self, floor: FloorPlan) -> Self {
        self.floor = floor;
        self
    }

    /// Override the safety clearances.
    pub fn safety(mut self, safety: SafetyConfig) -> Self {
        self.safety = safety;
        self
    }

    /// Supply the initial obstacle snapshot.
    pub fn obstacles(mut self, obstacles: Vec<Obstacle>) -> Self {
        self.obstacles = obstacles;
        self
    }

    /// Validate the fleet and assemble a ready-to-tick [`Stepper`].
    ///
    /// # Errors
    ///
    /// - [`SimError::VehicleIdMismatch`] if a vehicle's id does not equal its
    ///   slot index (direct-index lookup would silently break);
    /// - [`SimError::UnknownJob`] if a vehicle carries a job the board cannot
    ///   resolve a drop location for.
    pub fn build(self) -> SimResult<Stepper<J>> {
        for (slot, vehicle) in self.vehicles.iter().enumerate() {
            if vehicle.id.index() != slot {
                return Err(SimError::VehicleIdMismatch { slot, got: vehicle.id });
            }
            if let Some(job) = vehicle.current_job {
                if self.jobs.drop_location(job).is_none() {
                    return Err(SimError::UnknownJob { vehicle: vehicle.id, job });
                }
            }
        }

        Ok(Stepper {
            config: self.config,
            clock: SimClock::new(),
            fleet: Fleet::new(self.vehicles),
            obstacles: self.obstacles,
            jobs: self.jobs,
            resolver: CollisionResolver::with_config(self.floor, self.safety),
        })
    }
}
