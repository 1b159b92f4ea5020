//! Floor-plan coordinate type and planar math.
//!
//! `Position` uses `f32` (single-precision) meters.  Warehouse floors span
//! tens of meters, so f32 gives sub-millimeter precision while halving memory
//! consumption vs. `f64`.
//!
//! The `z` component is carried for hosts that render vertical offsets (lift
//! forks, mezzanine levels) but is **ignored by all planning and collision
//! math** — every distance and bearing below is computed on the XY plane.

/// A point on the warehouse floor, in meters.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: f32,
    pub y: f32,
    /// Vertical offset.  Unused by the motion core; always 0 within it.
    pub z: f32,
}

impl Position {
    /// The floor origin.
    pub const ORIGIN: Position = Position { x: 0.0, y: 0.0, z: 0.0 };

    /// A floor point at `(x, y)` with `z = 0`.
    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y, z: 0.0 }
    }

    /// Planar (XY) Euclidean distance in meters.
    #[inline]
    pub fn distance(self, other: Position) -> f32 {
        self.distance_sq(other).sqrt()
    }

    /// Squared planar distance — cheaper than [`distance`](Self::distance)
    /// for threshold comparisons.
    #[inline]
    pub fn distance_sq(self, other: Position) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        dx * dx + dy * dy
    }

    /// Linear interpolation toward `other`; `t = 0` is `self`, `t = 1` is
    /// `other`.  `z` is interpolated as well so host-side offsets blend.
    #[inline]
    pub fn lerp(self, other: Position, t: f32) -> Position {
        Position {
            x: self.x + (other.x - self.x) * t,
            y: self.y + (other.y - self.y) * t,
            z: self.z + (other.z - self.z) * t,
        }
    }

    /// Move `travel` meters from `self` toward `target`.
    ///
    /// Returns `target` itself when it is within `travel` meters (never
    /// overshoots).
    pub fn step_toward(self, target: Position, travel: f32) -> Position {
        let dist = self.distance(target);
        if dist <= travel || dist == 0.0 {
            return target;
        }
        self.lerp(target, travel / dist)
    }

    /// Bearing from `self` to `other` in radians (`atan2` convention:
    /// 0 = +x axis, counter-clockwise positive).
    #[inline]
    pub fn bearing_to(self, other: Position) -> f32 {
        (other.y - self.y).atan2(other.x - self.x)
    }

    /// The point `dist` meters from `self` along `bearing` radians.
    #[inline]
    pub fn offset_by(self, bearing: f32, dist: f32) -> Position {
        Position {
            x: self.x + bearing.cos() * dist,
            y: self.y + bearing.sin() * dist,
            z: self.z,
        }
    }

    /// Midpoint of the segment `self`–`other`.
    #[inline]
    pub fn midpoint(self, other: Position) -> Position {
        self.lerp(other, 0.5)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}
