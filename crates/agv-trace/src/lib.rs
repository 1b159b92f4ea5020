//! `agv-trace` — telemetry output for stepper runs.
//!
//! # Crate layout
//!
//! | Module       | Contents                                              |
//! |--------------|-------------------------------------------------------|
//! | [`row`]      | Plain data rows written by backends                   |
//! | [`writer`]   | `TraceWriter` backend trait                           |
//! | [`csv`]      | `CsvTraceWriter` — two-file CSV backend               |
//! | [`observer`] | `TraceObserver` — bridges `StepObserver` to a writer  |
//! | [`error`]    | `TraceError`, `TraceResult<T>`                        |
//!
//! # Usage
//!
//! ```rust,ignore
//! let writer = CsvTraceWriter::new(Path::new("out"))?;
//! let mut trace = TraceObserver::new(writer);
//! for _ in 0..ticks {
//!     stepper.tick(0.1, 1.0, &mut trace)?;
//! }
//! trace.finish();
//! if let Some(err) = trace.take_error() {
//!     eprintln!("trace write failed: {err}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use crate::csv::CsvTraceWriter;
pub use error::{TraceError, TraceResult};
pub use observer::TraceObserver;
pub use row::{TickSummaryRow, VehicleSnapshotRow};
pub use writer::TraceWriter;
