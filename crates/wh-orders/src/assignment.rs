//! Nearest-pickup assignment policy.

use wh_core::{Cell, Grid, Order, OrderId, ShelfTable, adjacent_transitable};

/// A candidate order chosen for assignment: its index within
/// [`crate::OrderQueue::pending`] (for remove/reinsert), its ID, and the
/// transitable cell the robot should path to for the pickup.
#[derive(Copy, Clone, Debug)]
pub struct Candidate {
    pub index: usize,
    pub order_id: OrderId,
    pub pickup: Cell,
}

/// Picks, for an idle robot, the pending order whose pickup cell is nearest
/// by Manhattan distance — scanning at most `scan_cap` pending orders in
/// release order, so one crowded queue can't make assignment unbounded.
#[derive(Copy, Clone, Debug)]
pub struct AssignmentPolicy {
    pub scan_cap: usize,
}

impl Default for AssignmentPolicy {
    fn default() -> Self {
        Self { scan_cap: 50 }
    }
}

impl AssignmentPolicy {
    pub fn new(scan_cap: usize) -> Self {
        Self { scan_cap }
    }

    /// Scan the first `scan_cap` entries of `pending` and return the nearest
    /// one to `robot_pos` whose shelf actually has a transitable adjacent
    /// cell. Ties broken by earliest scan position (release order).
    ///
    /// Does not mutate `pending` or any `Order` — the caller removes the
    /// chosen candidate and stamps its `assignment_tick`.
    pub fn best_candidate(
        &self,
        pending: &[OrderId],
        orders: &[Order],
        grid: &Grid,
        shelves: &ShelfTable,
        robot_pos: Cell,
    ) -> Option<Candidate> {
        let mut best: Option<(usize, Cell, u32)> = None;

        for (i, &order_id) in pending.iter().enumerate().take(self.scan_cap) {
            let Some(&shelf_home) = shelves.get(&orders[order_id.index()].shelf_id) else {
                continue;
            };
            let Some(pickup) = adjacent_transitable(grid, shelf_home) else {
                continue;
            };
            let dist = robot_pos.manhattan(pickup);
            let better = match best {
                None => true,
                Some((_, _, best_dist)) => dist < best_dist,
            };
            if better {
                best = Some((i, pickup, dist));
            }
        }

        best.map(|(index, pickup, _)| Candidate { index, order_id: pending[index], pickup })
    }
}
