//! 8-connected A* over the occupancy grid.
//!
//! # Cost model
//!
//! Axis moves cost 1, diagonal moves √2.  The heuristic is the Euclidean
//! distance between cells, which never exceeds the true remaining cost under
//! this model (admissible and consistent), so the first time the goal cell is
//! popped its path is optimal.
//!
//! # Open set
//!
//! A binary min-heap ordered by ascending `f = g + h`.  Instead of an in-heap
//! decrease-key, a better `g` for an already-open cell pushes a fresh entry
//! and stale entries are skipped on pop via the closed set (lazy deletion —
//! the same stale-entry skip a textbook Dijkstra uses).  Ties on `f` break by
//! insertion sequence for deterministic results.
//!
//! # Node storage
//!
//! Search nodes live in a per-call arena (`Vec<Node>`) and reference their
//! predecessor by arena index, not by owned pointer.  The arena is discarded
//! when the call returns — no graph state survives between plans.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use rustc_hash::{FxHashMap, FxHashSet};

use agv_core::Cell;

use crate::OccupancyGrid;

/// Neighbor offsets with per-step costs: 4 axis moves at cost 1, 4 diagonal
/// moves at cost √2.
const NEIGHBORS: [(i32, i32, f32); 8] = [
    (1, 0, 1.0),
    (-1, 0, 1.0),
    (0, 1, 1.0),
    (0, -1, 1.0),
    (1, 1, std::f32::consts::SQRT_2),
    (1, -1, std::f32::consts::SQRT_2),
    (-1, 1, std::f32::consts::SQRT_2),
    (-1, -1, std::f32::consts::SQRT_2),
];

// ── Arena node ────────────────────────────────────────────────────────────────

/// One search node.  `parent` is an index into the arena (`None` for the
/// start node).
struct Node {
    cell: Cell,
    g: f32,
    parent: Option<u32>,
}

// ── Heap entry ────────────────────────────────────────────────────────────────

/// Open-set entry.  Ordered by `f`, then by insertion sequence so equal-cost
/// pops are deterministic.
struct OpenEntry {
    f: f32,
    seq: u32,
    node: u32,
}

impl PartialEq for OpenEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for OpenEntry {}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.f.total_cmp(&other.f).then(self.seq.cmp(&other.seq))
    }
}

// ── Search ────────────────────────────────────────────────────────────────────

/// Euclidean distance between two cells — the A* heuristic.
#[inline]
fn heuristic(a: Cell, b: Cell) -> f32 {
    let dx = (b.x - a.x) as f32;
    let dy = (b.y - a.y) as f32;
    (dx * dx + dy * dy).sqrt()
}

/// Find a minimum-cost cell path from `start` to `goal`.
///
/// Returns the full path including both endpoints, or `None` when the open
/// set empties without reaching `goal` (enclosed start, blocked or
/// out-of-bounds goal).  The caller decides what a `None` degrades to.
///
/// The start cell is expanded even if it rasterized as blocked — a vehicle
/// standing inside an inflated footprint can still plan its way out.
pub fn search(grid: &OccupancyGrid, start: Cell, goal: Cell) -> Option<Vec<Cell>> {
    if start == goal {
        return Some(vec![start]);
    }

    let mut arena: Vec<Node> = Vec::with_capacity(64);
    // Best-known arena node per cell, for the g-improvement check.
    let mut by_cell: FxHashMap<Cell, u32> = FxHashMap::default();
    let mut closed: FxHashSet<Cell> = FxHashSet::default();
    let mut heap: BinaryHeap<Reverse<OpenEntry>> = BinaryHeap::new();
    let mut seq = 0u32;

    arena.push(Node { cell: start, g: 0.0, parent: None });
    by_cell.insert(start, 0);
    heap.push(Reverse(OpenEntry { f: heuristic(start, goal), seq, node: 0 }));

    while let Some(Reverse(entry)) = heap.pop() {
        let cell = arena[entry.node as usize].cell;

        // Skip stale heap entries (lazy deletion).
        if !closed.insert(cell) {
            continue;
        }

        if cell == goal {
            return Some(reconstruct(&arena, entry.node));
        }

        let g = arena[entry.node as usize].g;
        for (dx, dy, step_cost) in NEIGHBORS {
            let next = cell.offset(dx, dy);
            if !grid.is_free(next) || closed.contains(&next) {
                continue;
            }

            let next_g = g + step_cost;
            if let Some(&known) = by_cell.get(&next) {
                if arena[known as usize].g <= next_g {
                    continue;
                }
            }

            let idx = arena.len() as u32;
            arena.push(Node { cell: next, g: next_g, parent: Some(entry.node) });
            by_cell.insert(next, idx);
            seq += 1;
            heap.push(Reverse(OpenEntry {
                f: next_g + heuristic(next, goal),
                seq,
                node: idx,
            }));
        }
    }

    None
}

/// Walk predecessor indices back to the start and reverse.
fn reconstruct(arena: &[Node], goal_node: u32) -> Vec<Cell> {
    let mut cells = Vec::new();
    let mut idx = goal_node;
    loop {
        let node = &arena[idx as usize];
        cells.push(node.cell);
        match node.parent {
            Some(p) => idx = p,
            None => break,
        }
    }
    cells.reverse();
    cells
}

/// Total cost of a cell path under the search cost model (1 per axis step,
/// √2 per diagonal step).
pub fn path_cost(path: &[Cell]) -> f32 {
    path.windows(2)
        .map(|pair| {
            let (dx, dy) = (pair[1].x - pair[0].x, pair[1].y - pair[0].y);
            if dx != 0 && dy != 0 { std::f32::consts::SQRT_2 } else { 1.0 }
        })
        .sum()
}
