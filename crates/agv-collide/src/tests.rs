//! Unit tests for agv-collide.

#[cfg(test)]
mod helpers {
    use agv_core::{Footprint, Obstacle, ObstacleKind, Position, Vehicle, VehicleId};

    pub fn vehicle(id: u32, x: f32, y: f32) -> Vehicle {
        Vehicle::new(VehicleId(id), Position::new(x, y), 1.0)
    }

    pub fn vehicle_with_path(id: u32, x: f32, y: f32, path: &[(f32, f32)]) -> Vehicle {
        let mut v = vehicle(id, x, y);
        v.assign_path(path.iter().map(|&(px, py)| Position::new(px, py)).collect());
        v
    }

    pub fn pallet(x: f32, y: f32) -> Obstacle {
        Obstacle::new(
            Position::new(x, y),
            Footprint::new(1.0, 1.0, 1.0),
            ObstacleKind::Pallet,
        )
    }
}

// ── Segment intersection ──────────────────────────────────────────────────────

#[cfg(test)]
mod geometry {
    use agv_core::Position;

    use crate::segments_intersect;

    fn p(x: f32, y: f32) -> Position {
        Position::new(x, y)
    }

    #[test]
    fn perpendicular_crossing() {
        assert!(segments_intersect(
            p(0.0, 3.0), p(6.0, 3.0),
            p(3.0, 0.0), p(3.0, 6.0),
        ));
    }

    #[test]
    fn parallel_never_cross() {
        assert!(!segments_intersect(
            p(0.0, 0.0), p(5.0, 0.0),
            p(0.0, 1.0), p(5.0, 1.0),
        ));
    }

    #[test]
    fn disjoint_skew_segments() {
        assert!(!segments_intersect(
            p(0.0, 0.0), p(1.0, 1.0),
            p(3.0, 0.0), p(4.0, 2.0),
        ));
    }

    #[test]
    fn shared_endpoint_is_not_a_crossing() {
        // Strict straddle: touching at an endpoint does not count.
        assert!(!segments_intersect(
            p(0.0, 0.0), p(2.0, 2.0),
            p(2.0, 2.0), p(4.0, 0.0),
        ));
    }

    #[test]
    fn collinear_overlap_is_not_a_crossing() {
        assert!(!segments_intersect(
            p(0.0, 0.0), p(4.0, 0.0),
            p(2.0, 0.0), p(6.0, 0.0),
        ));
    }

    #[test]
    fn t_touch_is_not_a_crossing() {
        // One endpoint exactly on the other segment — zero orientation, strict
        // test rejects.
        assert!(!segments_intersect(
            p(0.0, 0.0), p(4.0, 0.0),
            p(2.0, 0.0), p(2.0, 3.0),
        ));
    }
}

// ── Quadrant partition ────────────────────────────────────────────────────────

#[cfg(test)]
mod quadrant {
    use agv_core::Position;

    use super::helpers::vehicle;
    use crate::{Quadrant, QuadrantPartition, VehicleState};

    const CENTER: Position = Position { x: 15.0, y: 15.0, z: 0.0 };

    #[test]
    fn classification() {
        let sw = Quadrant::of(Position::new(5.0, 5.0), CENTER);
        assert!(!sw.east && !sw.north);
        let ne = Quadrant::of(Position::new(20.0, 25.0), CENTER);
        assert!(ne.east && ne.north);
        // Midpoint itself lands in the north-east quadrant (inclusive bounds).
        let mid = Quadrant::of(CENTER, CENTER);
        assert!(mid.east && mid.north);
    }

    #[test]
    fn edge_adjacency_excludes_diagonal() {
        let sw = Quadrant { east: false, north: false };
        let se = Quadrant { east: true, north: false };
        let nw = Quadrant { east: false, north: true };
        let ne = Quadrant { east: true, north: true };

        assert!(sw.is_neighbor(sw));
        assert!(sw.is_neighbor(se));
        assert!(sw.is_neighbor(nw));
        assert!(!sw.is_neighbor(ne));
        assert!(!se.is_neighbor(nw));
    }

    #[test]
    fn partition_buckets_by_quadrant() {
        let fleet: Vec<VehicleState> = [
            vehicle(0, 5.0, 5.0),   // SW
            vehicle(1, 20.0, 5.0),  // SE
            vehicle(2, 5.0, 20.0),  // NW
            vehicle(3, 20.0, 20.0), // NE
            vehicle(4, 6.0, 6.0),   // SW
        ]
        .iter()
        .map(VehicleState::from)
        .collect();

        let partition = QuadrantPartition::build(&fleet, CENTER);
        assert_eq!(partition.count(Quadrant { east: false, north: false }), 2);
        assert_eq!(partition.count(Quadrant { east: true, north: true }), 1);

        // SW neighborhood: SW + SE + NW, never the diagonal NE vehicle (3).
        let hood: Vec<usize> = partition
            .neighborhood(Quadrant { east: false, north: false })
            .collect();
        assert_eq!(hood.len(), 4);
        assert!(!hood.contains(&3));
    }
}

// ── Obstacle index ────────────────────────────────────────────────────────────

#[cfg(test)]
mod index {
    use agv_core::Position;

    use super::helpers::pallet;
    use crate::ObstacleIndex;

    #[test]
    fn within_radius_of_center() {
        let index = ObstacleIndex::build(&[pallet(5.0, 5.0)]);
        assert!(index.any_within(Position::new(6.0, 5.0), 2.0));
        assert!(!index.any_within(Position::new(9.0, 5.0), 2.0));
    }

    #[test]
    fn static_filter_skips_moving() {
        let worker = pallet(5.0, 5.0).moving();
        let index = ObstacleIndex::build(&[worker]);
        assert!(index.any_within(Position::new(5.5, 5.0), 2.0));
        assert!(!index.any_static_within(Position::new(5.5, 5.0), 2.0));
    }

    #[test]
    fn empty_index() {
        let index = ObstacleIndex::build(&[]);
        assert!(index.is_empty());
        assert!(!index.any_within(Position::ORIGIN, 100.0));
    }
}

// ── Collision resolver ────────────────────────────────────────────────────────

#[cfg(test)]
mod resolver {
    use agv_core::{Position, Vehicle, VehicleId};

    use super::helpers::{pallet, vehicle, vehicle_with_path};
    use crate::{CollisionResolver, ObstacleIndex, VehicleState};

    fn resolver() -> CollisionResolver {
        CollisionResolver::default() // 30 × 30 floor, 2 m base distance
    }

    fn no_obstacles() -> ObstacleIndex {
        ObstacleIndex::build(&[])
    }

    /// The pairwise check must not care which vehicle comes first.
    fn check_both_ways(r: &CollisionResolver, a: &Vehicle, b: &Vehicle, obs: &ObstacleIndex) -> bool {
        let ab = r.check_collision(a, b, obs);
        let ba = r.check_collision(b, a, obs);
        assert_eq!(ab, ba, "check_collision must be symmetric");
        ab
    }

    #[test]
    fn immediate_proximity_collides() {
        let a = vehicle(0, 0.0, 0.0);
        let b = vehicle(1, 1.0, 0.0);
        assert!(check_both_ways(&resolver(), &a, &b, &no_obstacles()));
    }

    #[test]
    fn distant_idle_vehicles_clear() {
        let a = vehicle(0, 0.0, 0.0);
        let b = vehicle(1, 20.0, 20.0);
        assert!(!check_both_ways(&resolver(), &a, &b, &no_obstacles()));
    }

    #[test]
    fn converging_waypoints_collide_before_adjacency() {
        // Head-on at 1 m/s, 5 m apart, both routed through the same cell
        // within 3 steps.
        let a = vehicle_with_path(0, 0.0, 0.0, &[(1.0, 0.0), (2.0, 0.0), (2.5, 0.0)]);
        let b = vehicle_with_path(1, 5.0, 0.0, &[(4.0, 0.0), (3.0, 0.0), (2.5, 0.0)]);
        assert!(check_both_ways(&resolver(), &a, &b, &no_obstacles()));
    }

    #[test]
    fn crossing_segments_collide() {
        // Waypoints stay > 2 m apart at every step; only the second segment
        // pair strictly crosses.
        let a = vehicle_with_path(0, 0.0, 0.0, &[(0.0, 3.0), (6.0, 3.0)]);
        let b = vehicle_with_path(1, 8.0, 8.0, &[(3.0, 0.0), (3.0, 6.0)]);
        assert!(check_both_ways(&resolver(), &a, &b, &no_obstacles()));
    }

    #[test]
    fn shared_obstacle_gap_collides() {
        // Waypoint midpoint falls within the safety distance of a static
        // obstacle — both vehicles converging on the same gap.
        let a = vehicle_with_path(0, 0.0, 0.0, &[(4.0, 10.0)]);
        let b = vehicle_with_path(1, 12.0, 0.0, &[(8.0, 10.0)]);
        let obstacles = ObstacleIndex::build(&[pallet(6.0, 10.0)]);
        assert!(check_both_ways(&resolver(), &a, &b, &obstacles));
    }

    #[test]
    fn moving_obstacle_does_not_trigger_gap_check() {
        let a = vehicle_with_path(0, 0.0, 0.0, &[(4.0, 10.0)]);
        let b = vehicle_with_path(1, 12.0, 0.0, &[(8.0, 10.0)]);
        let obstacles = ObstacleIndex::build(&[pallet(6.0, 10.0).moving()]);
        assert!(!check_both_ways(&resolver(), &a, &b, &obstacles));
    }

    #[test]
    fn prediction_is_capped_at_lookahead() {
        // Parallel lanes 3 m apart for the first 12 steps; the conflict sits
        // past the 10-step horizon and must be ignored.
        let lane_a: Vec<(f32, f32)> = (1..=13).map(|i| (i as f32, 0.0)).collect();
        let mut lane_b: Vec<(f32, f32)> = (1..=13).map(|i| (i as f32, 3.0)).collect();
        lane_b[12] = (13.0, 0.0);
        let a = vehicle_with_path(0, 0.0, 0.0, &lane_a);
        let b = vehicle_with_path(1, 0.0, 3.0, &lane_b);
        assert!(!check_both_ways(&resolver(), &a, &b, &no_obstacles()));
    }

    #[test]
    fn find_colliding_skips_self_and_diagonal_quadrant() {
        let r = resolver();
        // Vehicle in the SW quadrant; conflicting neighbor routed head-on.
        let subject = vehicle_with_path(0, 14.0, 14.0, &[(15.0, 15.0)]);
        // Diagonal (NE) vehicle converging on the same point — excluded by
        // the partition even though the pairwise check would flag it.
        let diagonal = vehicle_with_path(1, 16.0, 16.0, &[(15.5, 15.5)]);
        let fleet = vec![subject.clone(), diagonal.clone()];
        assert!(r.check_collision(&subject, &diagonal, &no_obstacles()));
        assert!(r.find_colliding(&subject, &fleet, &no_obstacles()).is_empty());

        // The same conflict in an edge-adjacent quadrant is found.
        let adjacent = vehicle_with_path(2, 16.0, 14.0, &[(15.5, 14.5)]);
        let fleet = vec![subject.clone(), adjacent];
        assert_eq!(
            r.find_colliding(&subject, &fleet, &no_obstacles()),
            vec![VehicleId(2)]
        );
    }

    #[test]
    fn wait_position_sidesteps_perpendicular() {
        let r = resolver();
        let v = vehicle(0, 0.0, 0.0);
        let threat = vehicle(1, 4.0, 0.0);
        // Bearing toward threat is 0 → sidestep rotates to +90° → (0, 1).
        let wait = r.wait_position(&v, &[&threat]).unwrap();
        assert!(wait.distance(Position::new(0.0, 1.0)) < 1e-5);
        assert!((v.position.distance(wait) - 1.0).abs() < 1e-5);
    }

    #[test]
    fn wait_position_picks_nearest_threat() {
        let r = resolver();
        let v = vehicle(0, 0.0, 0.0);
        let near = vehicle(1, 0.0, 3.0); // bearing π/2 → sidestep at π → (−1, 0)
        let far = vehicle(2, 5.0, 0.0);
        let wait = r.wait_position(&v, &[&far, &near]).unwrap();
        assert!(wait.distance(Position::new(-1.0, 0.0)) < 1e-5);
    }

    #[test]
    fn wait_position_empty_is_none() {
        let r = resolver();
        let v = vehicle(0, 0.0, 0.0);
        assert!(r.wait_position(&v, &[]).is_none());
    }

    #[test]
    fn position_safety_monotonic_in_distance() {
        let r = resolver();
        let fleet: Vec<VehicleState> = [vehicle(1, 10.0, 10.0)].iter().map(VehicleState::from).collect();
        let obstacles = no_obstacles();

        // Inside the 2 m base distance: never safe (speed 1 → 2.5 m dynamic).
        assert!(!r.is_position_safe(Position::new(10.0, 11.0), &fleet, &obstacles, None));
        // Beyond the dynamic distance: safe.
        assert!(r.is_position_safe(Position::new(10.0, 13.0), &fleet, &obstacles, None));
    }

    #[test]
    fn faster_vehicles_need_wider_berth() {
        let r = resolver();
        let mut speedy = vehicle(1, 10.0, 10.0);
        let probe = Position::new(10.0, 12.7);

        speedy.speed = 0.5; // dynamic distance 2.25 m
        let fleet: Vec<VehicleState> = [speedy.clone()].iter().map(VehicleState::from).collect();
        assert!(r.is_position_safe(probe, &fleet, &no_obstacles(), None));

        speedy.speed = 2.0; // dynamic distance 3.0 m
        let fleet: Vec<VehicleState> = [speedy].iter().map(VehicleState::from).collect();
        assert!(!r.is_position_safe(probe, &fleet, &no_obstacles(), None));
    }

    #[test]
    fn exclude_skips_the_asking_vehicle() {
        let r = resolver();
        let me = vehicle(0, 5.0, 5.0);
        let fleet: Vec<VehicleState> = [me].iter().map(VehicleState::from).collect();
        let probe = Position::new(5.0, 5.1);
        assert!(!r.is_position_safe(probe, &fleet, &no_obstacles(), None));
        assert!(r.is_position_safe(probe, &fleet, &no_obstacles(), Some(VehicleId(0))));
    }

    #[test]
    fn obstacles_block_positions() {
        let r = resolver();
        let obstacles = ObstacleIndex::build(&[pallet(5.0, 5.0)]);
        assert!(!r.is_position_safe(Position::new(6.0, 5.0), &[], &obstacles, None));
        assert!(r.is_position_safe(Position::new(9.0, 5.0), &[], &obstacles, None));
    }
}
