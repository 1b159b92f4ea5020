//! Bézier smoothing pass over raw grid paths.
//!
//! Raw A* output turns in 45° increments.  This pass rounds those corners by
//! inserting cubic-Bézier samples after each interior waypoint, with control
//! points pulled toward the waypoint's neighbors (Catmull-Rom style).  The
//! first and last points pass through unchanged, so the vehicle still starts
//! and ends exactly where the raw path does.

use agv_core::Position;

/// Fractions along each segment at which extra samples are inserted
/// (t stepping by 0.25, strictly below 0.75 → two samples per segment).
const SAMPLE_STEPS: [f32; 2] = [0.25, 0.5];

/// Smooth a waypoint path.
///
/// For each interior waypoint `w` with neighbors `prev` and `next`, two
/// control points are computed — one 33 % of the way from `w` toward `prev`,
/// one 66 % of the way toward `next` — and samples of the cubic Bézier from
/// `w` to `next` are inserted after `w`.
///
/// Paths with fewer than 3 points are returned unchanged.
pub fn smooth_path(path: Vec<Position>) -> Vec<Position> {
    if path.len() < 3 {
        return path;
    }

    let mut out = Vec::with_capacity(path.len() * 3);
    out.push(path[0]);

    for i in 1..path.len() - 1 {
        let prev = path[i - 1];
        let curr = path[i];
        let next = path[i + 1];

        let c1 = curr.lerp(prev, 0.33);
        let c2 = curr.lerp(next, 0.66);

        out.push(curr);
        for t in SAMPLE_STEPS {
            out.push(cubic_bezier(curr, c1, c2, next, t));
        }
    }

    out.push(path[path.len() - 1]);
    out
}

/// Evaluate the cubic Bézier through `p0`, control points `c1`/`c2`, and `p1`.
fn cubic_bezier(p0: Position, c1: Position, c2: Position, p1: Position, t: f32) -> Position {
    let u = 1.0 - t;
    let (b0, b1, b2, b3) = (u * u * u, 3.0 * u * u * t, 3.0 * u * t * t, t * t * t);
    Position {
        x: b0 * p0.x + b1 * c1.x + b2 * c2.x + b3 * p1.x,
        y: b0 * p0.y + b1 * c1.y + b2 * c2.y + b3 * p1.y,
        z: b0 * p0.z + b1 * c1.z + b2 * c2.z + b3 * p1.z,
    }
}
