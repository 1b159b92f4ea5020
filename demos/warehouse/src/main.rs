//! warehouse — end-to-end demo of the agv_sim motion core.
//!
//! Six AGVs carry jobs across a 30 × 30 m floor laid out with rack aisles
//! and a few randomly scattered pallets.  The host loop here shows the
//! intended division of labor: the stepper advances vehicles and signals,
//! while this loop owns planning — fresh routes for idle vehicles, replans
//! when `should_replan` fires, and a sidestep via `wait_position` when a
//! conflict is predicted.

use std::path::Path;

use anyhow::Result;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use agv_collide::{ObstacleIndex, SafetyConfig};
use agv_core::{
    FloorPlan, Footprint, JobBoard, JobLedger, Obstacle, ObstacleKind, Position, Vehicle,
    VehicleId, VehicleStatus,
};
use agv_nav::{GridPlanner, Planner};
use agv_sim::StepperBuilder;
use agv_trace::{CsvTraceWriter, TraceObserver};

// ── Constants ─────────────────────────────────────────────────────────────────

const VEHICLE_COUNT: u32 = 6;
const SEED: u64 = 42;
const TICKS: u64 = 800;
const DELTA_SECS: f32 = 0.1;
const SIM_SPEED: f32 = 1.0;
const OUTPUT_DIR: &str = "output/warehouse";

// ── Floor layout ──────────────────────────────────────────────────────────────

/// Three rack aisles plus seeded pallet clutter.
fn build_obstacles(rng: &mut SmallRng) -> Vec<Obstacle> {
    let mut obstacles = Vec::new();

    // Rack columns at x = 8, 15, 22, leaving cross-aisles at the top and
    // bottom of the floor.
    for x in [8.0, 15.0, 22.0] {
        for y in (8..=20).step_by(3) {
            obstacles.push(Obstacle::new(
                Position::new(x, y as f32),
                Footprint::new(1.5, 2.5, 2.0),
                ObstacleKind::Rack,
            ));
        }
    }

    // A handful of pallets dropped in the west staging area.
    for _ in 0..4 {
        let x = rng.gen_range(4.0..6.0);
        let y = rng.gen_range(8.0..20.0);
        obstacles.push(Obstacle::new(
            Position::new(x, y),
            Footprint::new(0.8, 1.0, 0.8),
            ObstacleKind::Pallet,
        ));
    }

    obstacles
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== warehouse — agv_sim motion core demo ===");
    println!("Vehicles: {VEHICLE_COUNT}  |  Ticks: {TICKS}  |  Seed: {SEED}");
    println!();

    let mut rng = SmallRng::seed_from_u64(SEED);
    let floor = FloorPlan::default();
    let planner = GridPlanner;

    // Obstacles, fleet, and one delivery job per vehicle (west edge → east
    // side drop points between the aisles).
    let obstacles = build_obstacles(&mut rng);
    let mut ledger = JobLedger::new();
    let mut vehicles = Vec::new();
    for i in 0..VEHICLE_COUNT {
        let start = Position::new(1.0, 4.0 + i as f32 * 4.0);
        let drop = Position::new(26.0, 26.0 - i as f32 * 4.0);
        let job = ledger.push(start, drop);

        let mut vehicle = Vehicle::new(VehicleId(i), start, 1.2);
        vehicle.current_job = Some(job);
        vehicles.push(vehicle);
    }

    // Tight aisles: narrow the clearance envelope so corridor routes that
    // skirt the rack footprints still pass the positional safety check.
    let safety = SafetyConfig { base_distance_m: 1.0, ..SafetyConfig::default() };

    let mut stepper = StepperBuilder::new(vehicles, ledger)
        .floor(floor)
        .safety(safety)
        .obstacles(obstacles)
        .build()?;
    println!(
        "Floor: {} × {} cells  |  Obstacles: {}",
        floor.extent_cells,
        floor.extent_cells,
        stepper.obstacles.len()
    );

    std::fs::create_dir_all(OUTPUT_DIR)?;
    let writer = CsvTraceWriter::new(Path::new(OUTPUT_DIR))?;
    let mut trace = TraceObserver::new(writer);

    let mut replans = 0u32;
    let mut sidesteps = 0u32;

    for _ in 0..TICKS {
        // Host-side route management: decide every vehicle's new path (if
        // any) against the current state, then assign in a second pass.
        let obstacle_index = ObstacleIndex::build(&stepper.obstacles);
        let mut assignments: Vec<(VehicleId, Vec<Position>)> = Vec::new();

        for vehicle in stepper.fleet.iter() {
            let Some(job) = vehicle.current_job else {
                continue;
            };
            let Some(drop) = stepper.jobs.drop_location(job) else {
                continue;
            };

            match vehicle.status {
                // Halted or not yet routed: sidestep if a conflict is
                // predicted, otherwise (re)issue the route to the drop point.
                VehicleStatus::Idle => {
                    let colliding =
                        stepper
                            .resolver
                            .find_colliding(vehicle, &stepper.fleet.vehicles, &obstacle_index);
                    if !colliding.is_empty() {
                        let threats: Vec<&Vehicle> = colliding
                            .iter()
                            .filter_map(|&id| stepper.fleet.get(id))
                            .collect();
                        if let Some(wait) = stepper.resolver.wait_position(vehicle, &threats) {
                            sidesteps += 1;
                            assignments.push((vehicle.id, vec![wait]));
                            continue;
                        }
                    }
                    let path = planner.plan(floor, vehicle.position, drop, &stepper.obstacles);
                    assignments.push((vehicle.id, path));
                }

                // En route: replan when upcoming waypoints are blocked.
                VehicleStatus::Moving if stepper.should_replan(vehicle.id) => {
                    replans += 1;
                    let path = planner.plan(floor, vehicle.position, drop, &stepper.obstacles);
                    assignments.push((vehicle.id, path));
                }

                _ => {}
            }
        }

        for (id, path) in assignments {
            if let Some(vehicle) = stepper.fleet.get_mut(id) {
                vehicle.assign_path(path);
            }
        }

        stepper.tick(DELTA_SECS, SIM_SPEED, &mut trace)?;
    }

    trace.finish();
    if let Some(err) = trace.take_error() {
        eprintln!("trace write failed: {err}");
    }

    // ── Summary ───────────────────────────────────────────────────────────
    println!();
    println!("Clock: {}", stepper.clock);
    println!(
        "Jobs completed: {}/{}",
        stepper.jobs.completed_count(),
        VEHICLE_COUNT
    );
    println!("Replans: {replans}  |  Sidesteps: {sidesteps}");
    for vehicle in stepper.fleet.iter() {
        println!(
            "  {} at {}  {}  battery {:.1}%",
            vehicle.id,
            vehicle.position,
            vehicle.status,
            vehicle.battery()
        );
    }
    println!("Trace written to {OUTPUT_DIR}/");

    Ok(())
}
