//! Planar segment-intersection primitives.

use agv_core::Position;

/// Signed area of the triangle `(a, b, c)` × 2 — the cross product of
/// `b − a` and `c − a`.  Positive when `c` lies counter-clockwise of the
/// directed line `a → b`, negative when clockwise, zero when collinear.
#[inline]
fn orientation(a: Position, b: Position, c: Position) -> f32 {
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
}

/// `true` if segment `p1`–`p2` crosses segment `q1`–`q2`.
///
/// Classic CCW straddle test: each segment's endpoints must lie strictly on
/// opposite sides of the other segment's supporting line.  Strictness means
/// collinear overlaps and shared endpoints do **not** count as crossings —
/// two vehicles whose predicted segments merely touch end-to-end are handled
/// by the distance checks instead.
pub fn segments_intersect(p1: Position, p2: Position, q1: Position, q2: Position) -> bool {
    let d1 = orientation(q1, q2, p1);
    let d2 = orientation(q1, q2, p2);
    let d3 = orientation(p1, p2, q1);
    let d4 = orientation(p1, p2, q2);

    ((d1 > 0.0 && d2 < 0.0) || (d1 < 0.0 && d2 > 0.0))
        && ((d3 > 0.0 && d4 < 0.0) || (d3 < 0.0 && d4 > 0.0))
}
