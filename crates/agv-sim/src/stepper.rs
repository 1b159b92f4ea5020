//! The `Stepper` struct and its tick loop.

use agv_collide::{CollisionResolver, ObstacleIndex};
use agv_core::{JobBoard, Obstacle, SimClock, VehicleId, VehicleStatus};

use crate::{SimResult, StepObserver};
use crate::fleet::Fleet;

// ── StepConfig ────────────────────────────────────────────────────────────────

/// Tunables for the tick loop.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StepConfig {
    /// Battery drain in percentage points per simulated second at 1× speed.
    pub battery_drain_per_sec: f32,

    /// Battery percentage below which a vehicle withdraws to charge,
    /// regardless of path progress.
    pub charge_threshold: f32,

    /// How close to the job's drop location (meters) counts as delivered.
    pub drop_tolerance_m: f32,

    /// How many upcoming waypoints the replan trigger inspects.
    pub replan_lookahead: usize,

    /// Footprint margin (meters) for the replan trigger.
    pub replan_margin_m: f32,

    /// Fire `on_snapshot` every N ticks.  0 disables snapshots.
    pub snapshot_interval_ticks: u64,
}

impl Default for StepConfig {
    fn default() -> Self {
        Self {
            battery_drain_per_sec: 0.1,
            charge_threshold: 20.0,
            drop_tolerance_m: 0.5,
            replan_lookahead: 3,
            replan_margin_m: 0.5,
            snapshot_interval_ticks: 1,
        }
    }
}

// ── TickReport ────────────────────────────────────────────────────────────────

/// Per-tick tallies returned from [`Stepper::tick`] so hosts can drive UI
/// refresh without wiring up an observer.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Vehicles that advanced (interpolated or snapped to a waypoint).
    pub moved: usize,
    /// Vehicles halted by a failed safety check.
    pub halted: usize,
    /// Waypoints consumed across the fleet.
    pub waypoints_reached: usize,
    /// Jobs completed this tick.
    pub completed_jobs: usize,
}

// ── Stepper ───────────────────────────────────────────────────────────────────

/// The per-tick state-advance loop for all moving vehicles.
///
/// `Stepper<J>` owns the fleet, the obstacle snapshot, the job board, and
/// the collision resolver.  Create via
/// [`StepperBuilder`][crate::StepperBuilder].
///
/// The host owns planning: it assigns paths (from `agv-nav`'s `Planner` or
/// any compatible source) and re-plans when
/// [`should_replan`](Self::should_replan) says so.  The stepper only consumes
/// waypoints.
pub struct Stepper<J: JobBoard> {
    /// Tick-loop tunables.
    pub config: StepConfig,

    /// Simulation clock — tick counter plus accumulated simulated seconds.
    pub clock: SimClock,

    /// All vehicles, indexed by `VehicleId`.
    pub fleet: Fleet,

    /// Current obstacle snapshot.  Replace wholesale when the host's floor
    /// state changes; the stepper re-indexes it every tick.
    pub obstacles: Vec<Obstacle>,

    /// The job store.  Only `drop_location` and `complete` are ever called.
    pub jobs: J,

    /// Safety checks for move gating.
    pub resolver: CollisionResolver,
}

impl<J: JobBoard> Stepper<J> {
    /// Advance every moving vehicle by one tick of `delta_secs` wall seconds
    /// at the `sim_speed` multiplier.
    ///
    /// Safety reads within the tick see the fleet and obstacles as of the
    /// start of the tick, not the partially-updated state of
    /// earlier-processed vehicles.
    pub fn tick<O: StepObserver>(
        &mut self,
        delta_secs: f32,
        sim_speed: f32,
        observer: &mut O,
    ) -> SimResult<TickReport> {
        let now = self.clock.current_tick;
        observer.on_tick_start(now);

        // Phase ①: pre-tick snapshots, shared by every safety check below.
        let snapshot = self.fleet.snapshot();
        let obstacle_index = ObstacleIndex::build(&self.obstacles);

        let mut report = TickReport::default();

        // Phase ②+③: advance each vehicle, then settle its battery.
        for slot in 0..self.fleet.vehicles.len() {
            let vehicle = &mut self.fleet.vehicles[slot];
            if vehicle.status != VehicleStatus::Moving {
                continue;
            }
            let Some(&target) = vehicle.path.front() else {
                continue;
            };

            let travel = vehicle.speed * sim_speed * delta_secs;
            let distance = vehicle.position.distance(target);

            if distance <= travel {
                // Waypoint reached: snap and consume.
                vehicle.position = target;
                vehicle.path.pop_front();
                report.moved += 1;
                report.waypoints_reached += 1;
                observer.on_waypoint_reached(now, vehicle.id, target);

                if vehicle.path.is_empty() {
                    // Route exhausted: deliver if we are on the drop spot,
                    // then clear the moving state either way.
                    if let Some(job) = vehicle.current_job {
                        let delivered = self.jobs.drop_location(job).is_some_and(|drop| {
                            vehicle.position.distance(drop) <= self.config.drop_tolerance_m
                        });
                        if delivered {
                            self.jobs.complete(job)?;
                            vehicle.current_job = None;
                            report.completed_jobs += 1;
                            observer.on_job_completed(now, vehicle.id, job);
                        }
                    }
                    vehicle.status = VehicleStatus::Idle;
                    observer.on_status_change(now, vehicle.id, VehicleStatus::Idle);
                }
            } else {
                // Interpolate toward the waypoint and gate on safety.
                let candidate = vehicle.position.step_toward(target, travel);
                let safe = self.resolver.is_position_safe(
                    candidate,
                    &snapshot,
                    &obstacle_index,
                    Some(vehicle.id),
                );
                if safe {
                    vehicle.position = candidate;
                    report.moved += 1;
                } else {
                    // Halt for this tick; the host re-issues movement.
                    vehicle.status = VehicleStatus::Idle;
                    report.halted += 1;
                    observer.on_vehicle_halted(now, vehicle.id);
                    observer.on_status_change(now, vehicle.id, VehicleStatus::Idle);
                }
            }

            // Battery settles only for vehicles still moving after the move
            // phase.
            if vehicle.status == VehicleStatus::Moving {
                vehicle.drain_battery(self.config.battery_drain_per_sec * sim_speed * delta_secs);
                if vehicle.battery() < self.config.charge_threshold {
                    vehicle.status = VehicleStatus::Charging;
                    observer.on_status_change(now, vehicle.id, VehicleStatus::Charging);
                }
            }
        }

        if self.config.snapshot_interval_ticks > 0
            && now.0.is_multiple_of(self.config.snapshot_interval_ticks)
        {
            observer.on_snapshot(now, &self.fleet);
        }

        observer.on_tick_end(now, &report);
        self.clock.advance(delta_secs * sim_speed);
        Ok(report)
    }

    /// Does `vehicle`'s upcoming route need a fresh plan?
    ///
    /// Inspects the next `config.replan_lookahead` waypoints and reports
    /// `true` if any falls inside a current obstacle footprint expanded by
    /// `config.replan_margin_m`.  The stepper never replans itself — the
    /// host calls the planner and assigns the new path.
    pub fn should_replan(&self, vehicle: VehicleId) -> bool {
        let Some(vehicle) = self.fleet.get(vehicle) else {
            return false;
        };
        vehicle
            .path
            .iter()
            .take(self.config.replan_lookahead)
            .any(|wp| {
                self.obstacles
                    .iter()
                    .any(|o| o.blocks(*wp, self.config.replan_margin_m))
            })
    }
}
