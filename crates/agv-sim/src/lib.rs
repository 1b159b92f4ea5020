//! `agv-sim` — the per-tick control loop for the AGV fleet.
//!
//! # Tick phases
//!
//! ```text
//! tick(delta_secs, sim_speed)
//!   ① Snapshot — fleet positions/speeds and the obstacle index are captured
//!               once, so every safety read within the tick sees consistent
//!               pre-tick state even though writes land incrementally.
//!   ② Advance  — for each vehicle with status Moving and a non-empty path:
//!                 reach waypoint  → snap, pop; at end of path finish the
//!                                   job (within drop tolerance) and go Idle
//!                 else            → interpolate toward the waypoint, commit
//!                                   only if the position-safety check passes,
//!                                   otherwise halt to Idle for this tick
//!   ③ Battery  — vehicles still Moving drain at the configured rate;
//!               below the charge threshold they transition to Charging.
//! ```
//!
//! The tick method takes `&mut self`, so overlapping ticks are
//! unrepresentable — a host driving the stepper from a timer gets the
//! at-most-one-tick-in-flight guarantee from the borrow checker rather than
//! an in-progress flag.
//!
//! Replanning is signalled, never performed: [`Stepper::should_replan`]
//! tells the host a fresh plan is warranted; the host decides when to call
//! the planner and assign the result.

pub mod builder;
pub mod error;
pub mod fleet;
pub mod observer;
pub mod stepper;


pub use builder::StepperBuilder;
pub use error::{SimError, SimResult};
pub use fleet::Fleet;
pub use observer::{NoopObserver, StepObserver};
pub use stepper::{StepConfig, Stepper, TickReport};
