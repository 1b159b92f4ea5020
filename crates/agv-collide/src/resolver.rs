//! Pairwise trajectory prediction and positional safety checks.

use agv_core::{FloorPlan, Position, Vehicle, VehicleId};

use crate::{segments_intersect, ObstacleIndex, Quadrant, QuadrantPartition};

// ── SafetyConfig ──────────────────────────────────────────────────────────────

/// Clearance thresholds for collision prediction.
///
/// # Flat vs. dynamic distance
///
/// The predictive multi-step check ([`CollisionResolver::check_collision`])
/// uses the flat [`base_distance_m`](Self::base_distance_m); the direct
/// positional check ([`CollisionResolver::is_position_safe`]) widens it by
/// [`speed_margin`](Self::speed_margin) seconds of the other vehicle's
/// travel.  The asymmetry is intentional: prediction already looks ahead
/// along the path, while the positional check sees only a single instant and
/// compensates with speed.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SafetyConfig {
    /// Minimum allowed separation between two entities, in meters.
    pub base_distance_m: f32,
    /// Extra clearance per m/s of the other vehicle's speed (seconds).
    pub speed_margin: f32,
    /// How many future waypoints the pairwise prediction compares.
    pub lookahead_steps: usize,
    /// Length of the evasive sidestep, in meters.
    pub sidestep_m: f32,
}

impl Default for SafetyConfig {
    fn default() -> Self {
        Self {
            base_distance_m: 2.0,
            speed_margin: 0.5,
            lookahead_steps: 10,
            sidestep_m: 1.0,
        }
    }
}

impl SafetyConfig {
    /// Speed-scaled clearance: `base + margin × speed`.
    #[inline]
    pub fn dynamic_distance(&self, speed: f32) -> f32 {
        self.base_distance_m + self.speed_margin * speed
    }
}

// ── VehicleState ──────────────────────────────────────────────────────────────

/// Position and speed of one vehicle as of the start of a tick.
///
/// The stepper snapshots the whole fleet into these before mutating anything,
/// so every safety check within a tick sees consistent pre-tick positions
/// (spatial reads are against the snapshot even though writes land
/// incrementally).
#[derive(Copy, Clone, Debug)]
pub struct VehicleState {
    pub id: VehicleId,
    pub position: Position,
    pub speed: f32,
}

impl From<&Vehicle> for VehicleState {
    fn from(v: &Vehicle) -> Self {
        Self { id: v.id, position: v.position, speed: v.speed }
    }
}

// ── CollisionResolver ─────────────────────────────────────────────────────────

/// Predicts vehicle-vehicle conflicts and proposes evasive placement.
///
/// Stateless apart from configuration — every query works on the snapshots
/// passed in, so the resolver can be shared freely.
#[derive(Copy, Clone, Debug, Default)]
pub struct CollisionResolver {
    pub config: SafetyConfig,
    pub floor: FloorPlan,
}

impl CollisionResolver {
    pub fn new(floor: FloorPlan) -> Self {
        Self { config: SafetyConfig::default(), floor }
    }

    pub fn with_config(floor: FloorPlan, config: SafetyConfig) -> Self {
        Self { config, floor }
    }

    /// Will `a` and `b` come within an unsafe distance of each other?
    ///
    /// Four checks, any of which short-circuits to `true`:
    ///
    /// 1. current positions already closer than the base safety distance;
    /// 2. the i-th future waypoints of each path closer than it, for
    ///    `i < min(lookahead, len(pathA), len(pathB))`;
    /// 3. the i-th path segments strictly crossing (CCW straddle test);
    /// 4. the midpoint of the i-th waypoint pair within the safety distance
    ///    of a static obstacle — a coarse proxy for both vehicles converging
    ///    on the same obstacle-adjacent gap.
    ///
    /// All thresholds here are the flat base distance; see [`SafetyConfig`]
    /// for why the speed-scaled margin applies only to the positional check.
    pub fn check_collision(&self, a: &Vehicle, b: &Vehicle, obstacles: &ObstacleIndex) -> bool {
        let safety = self.config.base_distance_m;

        if a.position.distance(b.position) < safety {
            return true;
        }

        let steps = self
            .config
            .lookahead_steps
            .min(a.path.len())
            .min(b.path.len());

        for i in 0..steps {
            let wa = a.path[i];
            let wb = b.path[i];

            if wa.distance(wb) < safety {
                return true;
            }

            if i > 0 && segments_intersect(a.path[i - 1], wa, b.path[i - 1], wb) {
                return true;
            }

            if obstacles.any_static_within(wa.midpoint(wb), safety) {
                return true;
            }
        }

        false
    }

    /// All vehicles in `fleet` whose trajectories conflict with `vehicle`.
    ///
    /// Partitions the floor into quadrants about its midpoint and runs the
    /// pairwise check only against vehicles in the same or an edge-adjacent
    /// quadrant, cutting the check set from the full fleet to a local
    /// neighborhood.
    pub fn find_colliding(
        &self,
        vehicle: &Vehicle,
        fleet: &[Vehicle],
        obstacles: &ObstacleIndex,
    ) -> Vec<VehicleId> {
        let center = self.floor.center();
        let states: Vec<VehicleState> = fleet.iter().map(VehicleState::from).collect();
        let partition = QuadrantPartition::build(&states, center);
        let home = Quadrant::of(vehicle.position, center);

        partition
            .neighborhood(home)
            .map(|i| &fleet[i])
            .filter(|other| other.id != vehicle.id)
            .filter(|other| self.check_collision(vehicle, other, obstacles))
            .map(|other| other.id)
            .collect()
    }

    /// Evasive placement: sidestep perpendicular to the nearest conflicting
    /// vehicle.
    ///
    /// Picks the nearest of `colliding` by Euclidean distance, takes the
    /// bearing toward it, rotates 90°, and offsets the vehicle's current
    /// position by the configured sidestep length.  A one-shot dodge, not a
    /// replanned detour.  Returns `None` when `colliding` is empty.
    pub fn wait_position(&self, vehicle: &Vehicle, colliding: &[&Vehicle]) -> Option<Position> {
        let nearest = colliding.iter().min_by(|a, b| {
            vehicle
                .position
                .distance_sq(a.position)
                .total_cmp(&vehicle.position.distance_sq(b.position))
        })?;

        let bearing = vehicle.position.bearing_to(nearest.position);
        Some(
            vehicle
                .position
                .offset_by(bearing + std::f32::consts::FRAC_PI_2, self.config.sidestep_m),
        )
    }

    /// Is `pos` clear of every other vehicle and every obstacle?
    ///
    /// A vehicle at `pos` must keep the speed-scaled dynamic distance from
    /// each fleet member (`exclude` skips the vehicle asking) and the base
    /// safety distance from every obstacle.  Used by the stepper before
    /// committing each interpolated move.
    pub fn is_position_safe(
        &self,
        pos: Position,
        fleet: &[VehicleState],
        obstacles: &ObstacleIndex,
        exclude: Option<VehicleId>,
    ) -> bool {
        let clear_of_fleet = fleet
            .iter()
            .filter(|s| Some(s.id) != exclude)
            .all(|s| pos.distance(s.position) >= self.config.dynamic_distance(s.speed));

        clear_of_fleet && !obstacles.any_within(pos, self.config.base_distance_m)
    }
}
