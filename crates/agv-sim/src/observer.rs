//! Stepper observer trait for progress reporting and telemetry collection.

use agv_core::{JobId, Position, Tick, VehicleId, VehicleStatus};

use crate::{Fleet, TickReport};

/// Callbacks invoked by [`Stepper::tick`][crate::Stepper::tick] at key points
/// in the loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  These hooks are how position updates,
/// status transitions, and job completions reach the host — the stepper
/// itself never persists or renders anything.
///
/// # Example — halt logger
///
/// ```rust,ignore
/// struct HaltLogger;
///
/// impl StepObserver for HaltLogger {
///     fn on_vehicle_halted(&mut self, tick: Tick, vehicle: VehicleId) {
///         eprintln!("{tick}: {vehicle} halted on unsafe move");
///     }
/// }
/// ```
pub trait StepObserver {
    /// Called at the very start of each tick, before any vehicle is touched.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// A vehicle reached (and consumed) a waypoint.
    fn on_waypoint_reached(&mut self, _tick: Tick, _vehicle: VehicleId, _waypoint: Position) {}

    /// A vehicle arrived within drop tolerance and its job was completed.
    fn on_job_completed(&mut self, _tick: Tick, _vehicle: VehicleId, _job: JobId) {}

    /// A vehicle's candidate move failed the safety check and it was halted
    /// for this tick.
    fn on_vehicle_halted(&mut self, _tick: Tick, _vehicle: VehicleId) {}

    /// A vehicle's status changed (to Idle on route end/halt, to Charging on
    /// low battery).
    fn on_status_change(&mut self, _tick: Tick, _vehicle: VehicleId, _status: VehicleStatus) {}

    /// Called at snapshot intervals (every `config.snapshot_interval_ticks`)
    /// with read-only access to the whole fleet, so telemetry writers can
    /// record positions without the stepper knowing about output formats.
    fn on_snapshot(&mut self, _tick: Tick, _fleet: &Fleet) {}

    /// Called at the end of each tick with that tick's tallies.
    fn on_tick_end(&mut self, _tick: Tick, _report: &TickReport) {}
}

/// A [`StepObserver`] that does nothing.  Use when you need to call `tick`
/// but don't want callbacks.
pub struct NoopObserver;

impl StepObserver for NoopObserver {}
