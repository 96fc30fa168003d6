use wh_core::{Cell, CellKind, Grid, OrderId, RobotId};

use crate::state::{Leg, RobotState};
use crate::{Robot, try_advance_leg};
use crate::legs::LegOutcome;

fn open_grid(n: usize) -> Grid {
    Grid::from_rows(vec![vec![CellKind::Free; n]; n]).unwrap()
}

#[test]
fn new_robot_is_idle_at_its_spawn_cell() {
    let r = Robot::new(RobotId(0), Cell::new(2, 3));
    assert!(r.is_idle());
    assert_eq!(r.pos, Cell::new(2, 3));
    assert_eq!(r.propose_next_cell(), Cell::new(2, 3));
}

#[test]
fn assign_starts_the_pickup_leg() {
    let mut r = Robot::new(RobotId(0), Cell::new(0, 0));
    let route = vec![Cell::new(0, 0), Cell::new(1, 0), Cell::new(2, 0)];
    r.assign(OrderId(7), Cell::new(2, 0), Cell::new(5, 5), route.clone());
    assert!(!r.is_idle());
    assert_eq!(r.state.order_id(), Some(OrderId(7)));
    assert_eq!(r.propose_next_cell(), Cell::new(1, 0));
}

#[test]
fn commit_move_advances_position_and_leg_cursor() {
    let mut r = Robot::new(RobotId(0), Cell::new(0, 0));
    let route = vec![Cell::new(0, 0), Cell::new(1, 0), Cell::new(2, 0)];
    r.assign(OrderId(0), Cell::new(2, 0), Cell::new(5, 5), route);

    r.commit_move(Cell::new(1, 0));
    assert_eq!(r.pos, Cell::new(1, 0));
    assert_eq!(r.cells_moved, 1);
    assert_eq!(r.propose_next_cell(), Cell::new(2, 0));
}

#[test]
fn blocked_wait_increments_counter_without_moving() {
    let mut r = Robot::new(RobotId(0), Cell::new(0, 0));
    let route = vec![Cell::new(0, 0), Cell::new(1, 0)];
    r.assign(OrderId(0), Cell::new(1, 0), Cell::new(5, 5), route);

    r.commit_blocked_wait();
    assert_eq!(r.ticks_waited, 1);
    assert_eq!(r.pos, Cell::new(0, 0));
}

#[test]
fn busy_tick_only_counted_while_non_idle() {
    let mut r = Robot::new(RobotId(0), Cell::new(0, 0));
    r.account_busy_tick();
    assert_eq!(r.ticks_busy, 0);

    r.assign(OrderId(0), Cell::new(1, 0), Cell::new(5, 5), vec![Cell::new(0, 0), Cell::new(1, 0)]);
    r.account_busy_tick();
    assert_eq!(r.ticks_busy, 1);
}

#[test]
fn not_at_end_of_leg_is_a_no_op() {
    let grid = open_grid(5);
    let mut r = Robot::new(RobotId(0), Cell::new(0, 0));
    r.assign(
        OrderId(0),
        Cell::new(2, 0),
        Cell::new(4, 4),
        vec![Cell::new(0, 0), Cell::new(1, 0), Cell::new(2, 0)],
    );
    assert_eq!(try_advance_leg(&mut r, &grid), LegOutcome::NotAtEnd);
}

#[test]
fn idle_robot_is_a_no_op() {
    let grid = open_grid(5);
    let mut r = Robot::new(RobotId(0), Cell::new(0, 0));
    assert_eq!(try_advance_leg(&mut r, &grid), LegOutcome::NotAtEnd);
}

#[test]
fn reaching_pickup_transitions_to_to_station() {
    let grid = open_grid(5);
    let mut r = Robot::new(RobotId(0), Cell::new(2, 0));
    r.state = RobotState::ToPickup {
        order_id: OrderId(0),
        pickup: Cell::new(2, 0),
        dock: Cell::new(4, 4),
        leg: Leg::new(vec![Cell::new(0, 0), Cell::new(1, 0), Cell::new(2, 0)]),
    };

    match try_advance_leg(&mut r, &grid) {
        LegOutcome::Advanced => {}
        other => panic!("expected Advanced, got {other:?}"),
    }
    match &r.state {
        RobotState::ToStation { order_id, pickup, leg } => {
            assert_eq!(*order_id, OrderId(0));
            assert_eq!(*pickup, Cell::new(2, 0));
            assert_eq!(leg.route.last(), Some(&Cell::new(4, 4)));
        }
        other => panic!("expected ToStation, got {other:?}"),
    }
}

#[test]
fn reaching_dock_transitions_to_returning() {
    let grid = open_grid(5);
    let mut r = Robot::new(RobotId(0), Cell::new(4, 4));
    r.state = RobotState::ToStation {
        order_id: OrderId(0),
        pickup: Cell::new(2, 0),
        leg: Leg::new(vec![Cell::new(3, 4), Cell::new(4, 4)]),
    };

    assert_eq!(try_advance_leg(&mut r, &grid), LegOutcome::Advanced);
    match &r.state {
        RobotState::Returning { order_id, leg } => {
            assert_eq!(*order_id, OrderId(0));
            assert_eq!(leg.route.last(), Some(&Cell::new(2, 0)));
        }
        other => panic!("expected Returning, got {other:?}"),
    }
}

#[test]
fn reaching_pickup_on_return_completes_the_order_and_goes_idle() {
    let grid = open_grid(5);
    let mut r = Robot::new(RobotId(0), Cell::new(2, 0));
    r.state = RobotState::Returning {
        order_id: OrderId(9),
        leg: Leg::new(vec![Cell::new(3, 0), Cell::new(2, 0)]),
    };

    assert_eq!(try_advance_leg(&mut r, &grid), LegOutcome::Completed(OrderId(9)));
    assert!(r.is_idle());
}

#[test]
fn failed_replan_holds_state_and_position() {
    // Wall off the dock entirely so the ToPickup -> ToStation replan fails.
    let mut rows = vec![vec![CellKind::Free; 5]; 5];
    for row in rows.iter_mut() {
        row[3] = CellKind::Blocked;
    }
    let grid = Grid::from_rows(rows).unwrap();

    let mut r = Robot::new(RobotId(0), Cell::new(2, 0));
    let original_state = RobotState::ToPickup {
        order_id: OrderId(0),
        pickup: Cell::new(2, 0),
        dock: Cell::new(4, 4),
        leg: Leg::new(vec![Cell::new(1, 0), Cell::new(2, 0)]),
    };
    r.state = original_state.clone();

    assert_eq!(try_advance_leg(&mut r, &grid), LegOutcome::Held);
    assert_eq!(r.state, original_state);
}
