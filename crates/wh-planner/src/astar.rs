//! Classic A* over a 4-connected grid.
//!
//! # Cost units
//!
//! Every move costs exactly 1 (uniform step cost); the heuristic is the
//! Manhattan distance, which is admissible and consistent on a 4-connected
//! grid with unit step cost, so the returned path is always shortest.
//!
//! # Tie-breaking
//!
//! The open set is a min-heap keyed by `(f, g, cell)`. `Cell`'s `Ord` is
//! lexicographic on `(x, y)`, giving a fully deterministic pop order even
//! when two entries share `f` and `g`. Neighbors are expanded in the fixed
//! order `(+1,0), (-1,0), (0,+1), (0,-1)` (`Cell::neighbors`), which matters
//! for bit-for-bit reproducibility across runs, not for correctness.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet};

use wh_core::{Cell, Grid};

/// Find a minimum-length 4-connected path from `start` to `goal`.
///
/// Returns `None` if either endpoint is out of bounds, non-transitable, or
/// unreachable. Returns a one-element path if `start == goal`.
pub fn plan(grid: &Grid, start: Cell, goal: Cell) -> Option<Vec<Cell>> {
    if !grid.transitable(start) || !grid.transitable(goal) {
        return None;
    }
    if start == goal {
        return Some(vec![start]);
    }

    // Heap entries are (f, g, cell); `Reverse` turns the max-heap into a
    // min-heap on f, then g, then cell (for determinism on exact ties).
    let mut open: BinaryHeap<Reverse<(u32, u32, Cell)>> = BinaryHeap::new();
    open.push(Reverse((heuristic(start, goal), 0, start)));

    let mut came_from: HashMap<Cell, Cell> = HashMap::new();
    let mut g_cost: HashMap<Cell, u32> = HashMap::new();
    g_cost.insert(start, 0);
    let mut closed: HashSet<Cell> = HashSet::new();

    while let Some(Reverse((_, g, current))) = open.pop() {
        // Stale heap entry: a cheaper path to `current` was already expanded.
        if closed.contains(&current) {
            continue;
        }
        closed.insert(current);

        if current == goal {
            return Some(reconstruct(&came_from, current));
        }

        for neighbor in current.neighbors() {
            if !grid.transitable(neighbor) {
                continue;
            }
            let new_g = g + 1;
            if new_g < *g_cost.get(&neighbor).unwrap_or(&u32::MAX) {
                g_cost.insert(neighbor, new_g);
                came_from.insert(neighbor, current);
                open.push(Reverse((new_g + heuristic(neighbor, goal), new_g, neighbor)));
            }
        }
    }

    None
}

#[inline]
fn heuristic(from: Cell, to: Cell) -> u32 {
    from.manhattan(to)
}

fn reconstruct(came_from: &HashMap<Cell, Cell>, goal: Cell) -> Vec<Cell> {
    let mut path = vec![goal];
    let mut current = goal;
    while let Some(&prev) = came_from.get(&current) {
        path.push(prev);
        current = prev;
    }
    path.reverse();
    path
}
