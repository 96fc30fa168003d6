use wh_core::{Cell, CellKind, Grid, Order, OrderId, ShelfId, StationId, Tick};

use crate::{AssignmentPolicy, OrderQueue};

fn order(id: u32, shelf: u32, tick: u64) -> Order {
    Order::new(OrderId(id), ShelfId(shelf), StationId(0), Tick(tick))
}

mod queue {
    use super::*;

    #[test]
    fn release_moves_orders_whose_creation_tick_has_arrived() {
        let orders = vec![order(0, 0, 5), order(1, 0, 1), order(2, 0, 3)];
        let mut q = OrderQueue::new(&orders);
        assert_eq!(q.unreleased_len(), 3);

        q.release(&orders, Tick(3));
        // Orders 1 (tick 1) and 2 (tick 3) have arrived; order 0 (tick 5) has not.
        assert_eq!(q.pending(), &[OrderId(1), OrderId(2)]);
        assert_eq!(q.unreleased_len(), 1);
    }

    #[test]
    fn release_preserves_creation_order_for_ties() {
        let orders = vec![order(0, 0, 1), order(1, 0, 1), order(2, 0, 1)];
        let mut q = OrderQueue::new(&orders);
        q.release(&orders, Tick(1));
        assert_eq!(q.pending(), &[OrderId(0), OrderId(1), OrderId(2)]);
    }

    #[test]
    fn remove_then_reinsert_restores_original_order() {
        let orders = vec![order(0, 0, 0), order(1, 0, 0), order(2, 0, 0)];
        let mut q = OrderQueue::new(&orders);
        q.release(&orders, Tick(0));

        let removed = q.remove(1);
        assert_eq!(removed, OrderId(1));
        assert_eq!(q.pending(), &[OrderId(0), OrderId(2)]);

        q.reinsert(1, removed);
        assert_eq!(q.pending(), &[OrderId(0), OrderId(1), OrderId(2)]);
    }

    #[test]
    fn is_empty_once_everything_is_released_and_assigned() {
        let orders = vec![order(0, 0, 0)];
        let mut q = OrderQueue::new(&orders);
        assert!(!q.is_empty());
        q.release(&orders, Tick(0));
        assert!(!q.is_empty());
        q.remove(0);
        assert!(q.is_empty());
    }
}

mod assignment {
    use super::*;

    #[test]
    fn picks_the_nearest_pickup_cell() {
        // Two shelves; the one at (1,1) is much closer to a robot at the origin.
        let mut rows = vec![vec![CellKind::Free; 10]; 10];
        rows[5][5] = CellKind::Shelf;
        rows[1][1] = CellKind::Shelf;
        let grid = Grid::from_rows(rows).unwrap();

        let orders = vec![order(0, 0, 0), order(1, 1, 0)];
        let mut shelves = wh_core::ShelfTable::new();
        shelves.insert(ShelfId(0), Cell::new(5, 5));
        shelves.insert(ShelfId(1), Cell::new(1, 1));

        let mut q = OrderQueue::new(&orders);
        q.release(&orders, Tick(0));

        let policy = AssignmentPolicy::default();
        let candidate =
            policy.best_candidate(q.pending(), &orders, &grid, &shelves, Cell::new(0, 0)).unwrap();
        assert_eq!(candidate.order_id, OrderId(1));
    }

    #[test]
    fn scan_cap_limits_how_far_into_pending_it_looks() {
        // 3 orders; a scan cap of 1 only considers the first.
        let orders = vec![order(0, 0, 0), order(1, 1, 0)];
        let mut shelves = wh_core::ShelfTable::new();
        shelves.insert(ShelfId(0), Cell::new(9, 9));
        shelves.insert(ShelfId(1), Cell::new(0, 1));
        let mut rows = vec![vec![CellKind::Free; 10]; 10];
        rows[9][9] = CellKind::Shelf;
        rows[1][0] = CellKind::Shelf;
        let grid = Grid::from_rows(rows).unwrap();

        let mut q = OrderQueue::new(&orders);
        q.release(&orders, Tick(0));

        let policy = AssignmentPolicy::new(1);
        let candidate =
            policy.best_candidate(q.pending(), &orders, &grid, &shelves, Cell::new(0, 0)).unwrap();
        // Order 1's pickup is much closer, but the cap of 1 never looks past order 0.
        assert_eq!(candidate.order_id, OrderId(0));
    }

    #[test]
    fn skips_a_shelf_with_no_transitable_neighbor() {
        // Shelf at (1,1) fully boxed in by shelves on all 4 sides.
        let mut rows = vec![vec![CellKind::Free; 5]; 5];
        rows[1][1] = CellKind::Shelf;
        rows[0][1] = CellKind::Shelf;
        rows[2][1] = CellKind::Shelf;
        rows[1][0] = CellKind::Shelf;
        rows[1][2] = CellKind::Shelf;
        let grid = Grid::from_rows(rows).unwrap();

        let orders = vec![order(0, 0, 0)];
        let mut shelves = wh_core::ShelfTable::new();
        shelves.insert(ShelfId(0), Cell::new(1, 1));

        let mut q = OrderQueue::new(&orders);
        q.release(&orders, Tick(0));

        let policy = AssignmentPolicy::default();
        assert!(policy.best_candidate(q.pending(), &orders, &grid, &shelves, Cell::new(0, 0)).is_none());
    }
}
