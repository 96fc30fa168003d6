//! Replanning a robot's next leg once the current one ends.

use wh_core::{Grid, OrderId};

use crate::robot::Robot;
use crate::state::{Leg, RobotState};

/// Result of a single [`try_advance_leg`] call.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LegOutcome {
    /// The robot wasn't at the end of its current leg; nothing to do.
    NotAtEnd,
    /// The robot moved to its next task phase with a freshly planned leg.
    Advanced,
    /// The return leg ended: the order is done. The caller is responsible
    /// for stamping the order's completion tick.
    Completed(OrderId),
    /// The robot was at the end of a leg but replanning failed. It stays in
    /// its current state, holding position, to retry next tick.
    Held,
}

/// If `robot` is at the end of its current leg, attempt to transition it to
/// the next task phase (or complete its order), replanning via `grid`.
///
/// A no-op (returns [`LegOutcome::NotAtEnd`]) for an idle robot or one not
/// yet at the end of its leg.
pub fn try_advance_leg(robot: &mut Robot, grid: &Grid) -> LegOutcome {
    let at_end = robot.state.leg().map(Leg::at_last_cell).unwrap_or(false);
    if !at_end {
        return LegOutcome::NotAtEnd;
    }

    match &robot.state {
        RobotState::Idle => LegOutcome::NotAtEnd,

        RobotState::ToPickup { order_id, pickup, dock, .. } => {
            let (order_id, pickup, dock) = (*order_id, *pickup, *dock);
            match wh_planner::plan(grid, robot.pos, dock) {
                Some(route) => {
                    robot.state = RobotState::ToStation { order_id, pickup, leg: Leg::new(route) };
                    LegOutcome::Advanced
                }
                None => LegOutcome::Held,
            }
        }

        RobotState::ToStation { order_id, pickup, .. } => {
            let (order_id, pickup) = (*order_id, *pickup);
            match wh_planner::plan(grid, robot.pos, pickup) {
                Some(route) => {
                    robot.state = RobotState::Returning { order_id, leg: Leg::new(route) };
                    LegOutcome::Advanced
                }
                None => LegOutcome::Held,
            }
        }

        RobotState::Returning { order_id, .. } => {
            let order_id = *order_id;
            robot.state = RobotState::Idle;
            LegOutcome::Completed(order_id)
        }
    }
}
