//! The robot task state machine and its route cursor.

use wh_core::{Cell, OrderId};

/// A planned route and the robot's position within it.
///
/// `route[0]` is the cell the robot was at when the leg was planned;
/// `route_idx` advances by one each tick the robot actually moves.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Leg {
    pub route: Vec<Cell>,
    pub route_idx: usize,
}

impl Leg {
    /// Build a fresh leg starting at `route_idx = 0`.
    ///
    /// `route` must be non-empty with `route[0]` equal to the robot's
    /// current position; callers only ever pass routes straight from the
    /// planner, which guarantees this.
    pub fn new(route: Vec<Cell>) -> Self {
        debug_assert!(!route.is_empty(), "a leg's route must have at least one cell");
        Self { route, route_idx: 0 }
    }

    /// `true` once the robot has reached the last cell of this leg.
    pub fn at_last_cell(&self) -> bool {
        self.route_idx == self.route.len() - 1
    }

    /// The next cell to move into, or `None` if already at the last cell.
    pub fn next_cell(&self) -> Option<Cell> {
        self.route.get(self.route_idx + 1).copied()
    }

    /// Advance the cursor by one cell, after a committed move.
    pub fn advance(&mut self) {
        self.route_idx += 1;
    }
}

/// A robot's current task phase.
///
/// Task fields (order, pickup cell, dock cell) live only in the non-`Idle`
/// variants that need them — there is no optional field that must be
/// `Some` exactly when the robot isn't idle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RobotState {
    /// No task. Waiting to be assigned an order.
    Idle,

    /// Carrying `order_id`, en route to `pickup`. `dock` is carried forward
    /// so it's available once the pickup leg ends.
    ToPickup { order_id: OrderId, pickup: Cell, dock: Cell, leg: Leg },

    /// Order in hand, en route to `dock`. `pickup` is carried forward for
    /// the return leg.
    ToStation { order_id: OrderId, pickup: Cell, leg: Leg },

    /// Delivered, heading back to `pickup` to close out the order.
    Returning { order_id: OrderId, leg: Leg },
}

impl RobotState {
    #[inline]
    pub fn is_idle(&self) -> bool {
        matches!(self, RobotState::Idle)
    }

    /// The order this robot is carrying out, if any.
    pub fn order_id(&self) -> Option<OrderId> {
        match self {
            RobotState::Idle => None,
            RobotState::ToPickup { order_id, .. }
            | RobotState::ToStation { order_id, .. }
            | RobotState::Returning { order_id, .. } => Some(*order_id),
        }
    }

    pub fn leg(&self) -> Option<&Leg> {
        match self {
            RobotState::Idle => None,
            RobotState::ToPickup { leg, .. }
            | RobotState::ToStation { leg, .. }
            | RobotState::Returning { leg, .. } => Some(leg),
        }
    }

    pub fn leg_mut(&mut self) -> Option<&mut Leg> {
        match self {
            RobotState::Idle => None,
            RobotState::ToPickup { leg, .. }
            | RobotState::ToStation { leg, .. }
            | RobotState::Returning { leg, .. } => Some(leg),
        }
    }
}
