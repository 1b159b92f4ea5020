//! The `TraceWriter` trait implemented by backend writers.

use crate::{TickSummaryRow, TraceResult, VehicleSnapshotRow};

/// Trait implemented by trace backends (CSV today; anything batch-shaped
/// tomorrow).
///
/// Methods are fallible here, but infallible from the observer's perspective
/// — errors are stored in [`TraceObserver`][crate::TraceObserver] and
/// retrieved with `take_error`.
pub trait TraceWriter {
    /// Write a batch of vehicle snapshots.
    fn write_snapshots(&mut self, rows: &[VehicleSnapshotRow]) -> TraceResult<()>;

    /// Write one tick summary row.
    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> TraceResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> TraceResult<()>;
}
