//! `TraceObserver<W>` — bridges `StepObserver` to a `TraceWriter`.

use agv_core::{JobId, Tick};
use agv_sim::{Fleet, StepObserver, TickReport};

use crate::row::{TickSummaryRow, VehicleSnapshotRow};
use crate::writer::TraceWriter;
use crate::TraceError;

/// A [`StepObserver`] that writes vehicle snapshots and tick summaries to any
/// [`TraceWriter`] backend.
///
/// Errors from the writer are stored internally because observer methods
/// have no return value.  After the run, call [`finish`](Self::finish) and
/// check for errors with [`take_error`](Self::take_error).
pub struct TraceObserver<W: TraceWriter> {
    writer: W,
    last_error: Option<TraceError>,
}

impl<W: TraceWriter> TraceObserver<W> {
    /// Create an observer backed by `writer`.
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Flush the backend.  Call once after the last tick.
    pub fn finish(&mut self) {
        let result = self.writer.finish();
        self.store_err(result);
    }

    /// Take the stored write error (if any) after the run.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<TraceError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: crate::TraceResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: TraceWriter> StepObserver for TraceObserver<W> {
    fn on_snapshot(&mut self, tick: Tick, fleet: &Fleet) {
        let rows: Vec<VehicleSnapshotRow> = fleet
            .iter()
            .map(|v| VehicleSnapshotRow {
                vehicle_id: v.id.0,
                tick: tick.0,
                x: v.position.x,
                y: v.position.y,
                status: v.status.as_str(),
                battery: v.battery(),
                job_id: v.current_job.unwrap_or(JobId::INVALID).0,
            })
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_snapshots(&rows);
            self.store_err(result);
        }
    }

    fn on_tick_end(&mut self, tick: Tick, report: &TickReport) {
        let row = TickSummaryRow {
            tick: tick.0,
            moved: report.moved as u64,
            halted: report.halted as u64,
            completed_jobs: report.completed_jobs as u64,
        };
        let result = self.writer.write_tick_summary(&row);
        self.store_err(result);
    }
}
