//! The `Robot` record.

use wh_core::{Cell, OrderId, RobotId};

use crate::state::{Leg, RobotState};

/// A single robot: position, task state, and lifetime counters.
#[derive(Clone, Debug)]
pub struct Robot {
    pub robot_id: RobotId,
    pub pos: Cell,
    pub state: RobotState,

    /// Ticks spent blocked mid-route by a reservation conflict. Does not
    /// count idle ticks or ticks a robot wasn't trying to move.
    pub ticks_waited: u64,
    /// Total cells successfully moved into over the robot's lifetime.
    pub cells_moved: u64,
    /// Ticks this robot was non-idle, counted once per tick regardless of
    /// whether it moved.
    pub ticks_busy: u64,
}

impl Robot {
    /// A freshly-spawned, idle robot at `pos`.
    pub fn new(robot_id: RobotId, pos: Cell) -> Self {
        Self { robot_id, pos, state: RobotState::Idle, ticks_waited: 0, cells_moved: 0, ticks_busy: 0 }
    }

    #[inline]
    pub fn is_idle(&self) -> bool {
        self.state.is_idle()
    }

    /// Attach `order_id` to this (idle) robot and start its pickup leg.
    ///
    /// `route` must start at `self.pos` and end at `pickup` — the caller
    /// (the assignment policy, via the planner) guarantees this.
    pub fn assign(&mut self, order_id: OrderId, pickup: Cell, dock: Cell, route: Vec<Cell>) {
        debug_assert!(self.is_idle(), "assign called on a robot that already has a task");
        self.state = RobotState::ToPickup { order_id, pickup, dock, leg: Leg::new(route) };
    }

    /// The cell this robot wants to occupy next tick: the next cell on its
    /// current leg, or its current position if idle, at the end of a leg
    /// pending replan, or deliberately waiting.
    pub fn propose_next_cell(&self) -> Cell {
        self.state.leg().and_then(Leg::next_cell).unwrap_or(self.pos)
    }

    /// Commit a successful move to `to`: advance position, the leg cursor,
    /// and the lifetime move counter.
    pub fn commit_move(&mut self, to: Cell) {
        self.pos = to;
        self.cells_moved += 1;
        if let Some(leg) = self.state.leg_mut() {
            leg.advance();
        }
    }

    /// Record that this robot wanted to move but was denied by the
    /// reservation table, and stayed at `self.pos` instead.
    pub fn commit_blocked_wait(&mut self) {
        self.ticks_waited += 1;
    }

    /// Count this tick as busy if the robot is non-idle. Called once per
    /// tick regardless of whether the robot moved.
    pub fn account_busy_tick(&mut self) {
        if !self.is_idle() {
            self.ticks_busy += 1;
        }
    }
}
