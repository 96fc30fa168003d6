//! `wh-reservation` — the space-time reservation table.
//!
//! # Design
//!
//! Two maps, both keyed by the tick at which a cell is occupied:
//!
//! - **Vertex reservations**: `(Cell, Tick) -> RobotId`. Booking `(cell, t)`
//!   means "this robot occupies `cell` at tick `t`".
//! - **Edge reservations**: `(Cell, Cell, Tick) -> RobotId`, directed, keyed
//!   by the *arrival* tick. Booking `(from, to, t)` means "this robot moves
//!   from `from` to `to`, arriving at `t`".
//!
//! A move `from -> to` arriving at `t` is legal iff `(to, t)` is unbooked
//! (no vertex conflict) **and** `(to, from, t)` is unbooked (no swap — the
//! opposite-direction edge at the same tick would mean two robots trading
//! places across one edge in one tick).
//!
//! Reservations are monotonic: nothing is ever revoked, only added (and
//! optionally pruned once a tick is safely in the past — see
//! [`ReservationTable::prune_before`]).
//!
//! # Why this is not a shared/locked resource
//!
//! The table is driven by a single thread processing robots in ascending
//! `RobotId` order within a tick; that total order is the tie-breaker for
//! contention. No interior mutability or locking is needed.

use std::collections::HashMap;

use wh_core::{Cell, RobotId, Tick};

/// The space-time reservation table. See the module docs for the model.
#[derive(Default)]
pub struct ReservationTable {
    vertices: HashMap<(Cell, Tick), RobotId>,
    edges: HashMap<(Cell, Cell, Tick), RobotId>,
}

impl ReservationTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// `true` iff moving `from -> to`, arriving at `t`, is legal right now:
    /// the destination vertex is free at `t` and the opposite edge isn't
    /// booked at `t` (no head-on swap).
    pub fn can_move(&self, from: Cell, to: Cell, t: Tick) -> bool {
        !self.vertices.contains_key(&(to, t)) && !self.edges.contains_key(&(to, from, t))
    }

    /// Book the move `from -> to` arriving at `t`.
    ///
    /// Precondition: [`ReservationTable::can_move`] returned `true` for the
    /// same arguments within this tick's resolution pass. Not re-checked
    /// here — the simulator is the single writer and is responsible for
    /// calling `can_move` first.
    pub fn commit_move(&mut self, robot: RobotId, from: Cell, to: Cell, t: Tick) {
        self.vertices.insert((to, t), robot);
        self.edges.insert((from, to, t), robot);
    }

    /// Book `robot` remaining at `cell` through tick `t`.
    ///
    /// Idempotent: committing the same `(robot, cell, t)` twice leaves the
    /// table in the same state (the second insert just overwrites itself).
    pub fn commit_wait(&mut self, robot: RobotId, cell: Cell, t: Tick) {
        self.vertices.insert((cell, t), robot);
    }

    /// Drop every reservation strictly before `t`.
    ///
    /// Pure memory hygiene — reservations at past ticks are never queried
    /// again, so this changes no observable behavior. Optional: the
    /// simulator calls this once per tick, but nothing breaks if it never
    /// does.
    pub fn prune_before(&mut self, t: Tick) {
        self.vertices.retain(|&(_, tick), _| tick >= t);
        self.edges.retain(|&(_, _, tick), _| tick >= t);
    }

    #[cfg(test)]
    pub(crate) fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[cfg(test)]
    pub(crate) fn edge_count(&self) -> usize {
        self.edges.len()
    }
}
