//! Floor hazards — racks, walls, pallets, and anything else a vehicle must
//! route around.

use crate::Position;

// ── Footprint ─────────────────────────────────────────────────────────────────

/// Axis-aligned extent of an obstacle in meters.
///
/// `width` spans the x axis and `depth` the y axis; `height` is carried for
/// host-side rendering and ignored by the motion core (vehicles cannot pass
/// under anything).
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Footprint {
    pub width: f32,
    pub height: f32,
    pub depth: f32,
}

impl Footprint {
    #[inline]
    pub fn new(width: f32, height: f32, depth: f32) -> Self {
        Self { width, height, depth }
    }

    /// Half-extents on the floor plane: `(width / 2, depth / 2)`.
    #[inline]
    pub fn half_extents(&self) -> (f32, f32) {
        (self.width * 0.5, self.depth * 0.5)
    }
}

// ── ObstacleKind ──────────────────────────────────────────────────────────────

/// What the hazard physically is.  Kinds are informational — the motion core
/// treats every obstacle the same way; hosts use the kind for rendering and
/// inventory bookkeeping.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum ObstacleKind {
    /// Storage racking (the default floor furniture).
    #[default]
    Rack,
    /// Structural wall or column.
    Wall,
    /// Loose pallet left on the floor.
    Pallet,
    /// Charging dock.
    ChargeDock,
    /// A human worker — typically `is_moving`.
    Worker,
}

impl ObstacleKind {
    /// Human-readable label, useful for CSV column values and logs.
    pub fn as_str(self) -> &'static str {
        match self {
            ObstacleKind::Rack       => "rack",
            ObstacleKind::Wall       => "wall",
            ObstacleKind::Pallet     => "pallet",
            ObstacleKind::ChargeDock => "charge_dock",
            ObstacleKind::Worker     => "worker",
        }
    }
}

impl std::fmt::Display for ObstacleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Obstacle ──────────────────────────────────────────────────────────────────

/// A static or dynamic floor hazard.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Obstacle {
    /// Center of the footprint on the floor.
    pub position: Position,
    pub size: Footprint,
    pub kind: ObstacleKind,
    /// Dynamic hazards (workers, other machinery) move between snapshots;
    /// the rasterizer and resolver treat them the same as static ones, but
    /// some checks apply only to static obstacles.
    pub is_moving: bool,
}

impl Obstacle {
    /// A static obstacle of `kind` centered at `position`.
    pub fn new(position: Position, size: Footprint, kind: ObstacleKind) -> Self {
        Self { position, size, kind, is_moving: false }
    }

    /// Mark the obstacle as dynamic.
    pub fn moving(mut self) -> Self {
        self.is_moving = true;
        self
    }

    /// `true` if `point` lies within the footprint's half-extents expanded by
    /// `margin` meters on each side.
    #[inline]
    pub fn blocks(&self, point: Position, margin: f32) -> bool {
        let (hw, hd) = self.size.half_extents();
        (point.x - self.position.x).abs() < hw + margin
            && (point.y - self.position.y).abs() < hd + margin
    }
}
