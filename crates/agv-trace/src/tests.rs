//! Integration tests for agv-trace.

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use crate::csv::CsvTraceWriter;
    use crate::row::{TickSummaryRow, VehicleSnapshotRow};
    use crate::writer::TraceWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn snap_row(vehicle_id: u32, tick: u64) -> VehicleSnapshotRow {
        VehicleSnapshotRow {
            vehicle_id,
            tick,
            x: vehicle_id as f32,
            y: 2.0,
            status: "moving",
            battery: 98.5,
            job_id: u32::MAX,
        }
    }

    fn summary_row(tick: u64) -> TickSummaryRow {
        TickSummaryRow { tick, moved: 2, halted: 1, completed_jobs: 0 }
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvTraceWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("vehicle_snapshots.csv").exists());
        assert!(dir.path().join("tick_summaries.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvTraceWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("vehicle_snapshots.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, ["vehicle_id", "tick", "x", "y", "status", "battery", "job_id"]);

        let mut rdr2 = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        let headers2: Vec<_> = rdr2.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers2, ["tick", "moved", "halted", "completed_jobs"]);
    }

    #[test]
    fn csv_snapshot_round_trip() {
        let dir = tmp();
        let mut w = CsvTraceWriter::new(dir.path()).unwrap();
        let rows = vec![snap_row(0, 5), snap_row(1, 5), snap_row(2, 5)];
        w.write_snapshots(&rows).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("vehicle_snapshots.csv")).unwrap();
        let read_rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(read_rows.len(), 3);
        assert_eq!(&read_rows[0][0], "0"); // vehicle_id
        assert_eq!(&read_rows[0][1], "5"); // tick
        assert_eq!(&read_rows[0][4], "moving");
        assert_eq!(&read_rows[2][0], "2");
    }

    #[test]
    fn csv_tick_summary_round_trip() {
        let dir = tmp();
        let mut w = CsvTraceWriter::new(dir.path()).unwrap();
        w.write_tick_summary(&summary_row(3)).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        let read_rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(read_rows.len(), 1);
        assert_eq!(&read_rows[0][0], "3"); // tick
        assert_eq!(&read_rows[0][1], "2"); // moved
        assert_eq!(&read_rows[0][2], "1"); // halted
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvTraceWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap(); // second call should not panic
    }

    #[test]
    fn csv_empty_snapshot_ok() {
        let dir = tmp();
        let mut w = CsvTraceWriter::new(dir.path()).unwrap();
        w.write_snapshots(&[]).unwrap();
    }
}

#[cfg(test)]
mod observer_tests {
    use agv_core::{JobLedger, Position, Vehicle, VehicleId};
    use agv_sim::StepperBuilder;
    use tempfile::TempDir;

    use crate::csv::CsvTraceWriter;
    use crate::observer::TraceObserver;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    #[test]
    fn integration_stepper_to_csv() {
        let dir = tmp();

        let mut v = Vehicle::new(VehicleId(0), Position::new(0.0, 0.0), 1.0);
        v.assign_path(vec![Position::new(10.0, 0.0)]);
        let parked = Vehicle::new(VehicleId(1), Position::new(20.0, 20.0), 1.0);

        let mut stepper = StepperBuilder::new(vec![v, parked], JobLedger::new())
            .build()
            .unwrap();

        let writer = CsvTraceWriter::new(dir.path()).unwrap();
        let mut trace = TraceObserver::new(writer);
        for _ in 0..4 {
            stepper.tick(1.0, 1.0, &mut trace).unwrap();
        }
        trace.finish();
        assert!(trace.take_error().is_none());

        // 4 ticks × 2 vehicles of snapshots, 4 summary rows.
        let mut snaps = csv::Reader::from_path(dir.path().join("vehicle_snapshots.csv")).unwrap();
        assert_eq!(snaps.records().count(), 8);
        let mut sums = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        let rows: Vec<_> = sums.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 4);
        assert_eq!(&rows[0][1], "1"); // one vehicle moved on tick 0
    }
}
