//! The `Simulator` struct and its per-tick loop.

use wh_core::{Grid, Order, ShelfTable, SimConfig, StationTable, Tick};
use wh_orders::{AssignmentPolicy, OrderQueue};
use wh_reservation::ReservationTable;
use wh_robot::{LegOutcome, Robot, try_advance_leg};

use crate::{Metrics, SimObserver};

/// The main simulation runner.
///
/// Holds all mutable simulation state and drives the eight-step tick loop:
/// release pending orders, assign idle robots, advance any robot at the end
/// of its current leg, propose a next cell for every robot, resolve
/// proposals against the reservation table in ascending `RobotId` order,
/// tally a deadlock tick if nothing moved, account busy ticks, and advance
/// the clock.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Simulator {
    pub config: SimConfig,
    pub grid: Grid,
    pub shelves: ShelfTable,
    pub stations: StationTable,
    pub orders: Vec<Order>,
    pub order_queue: OrderQueue,
    pub assignment_policy: AssignmentPolicy,
    pub reservations: ReservationTable,
    pub robots: Vec<Robot>,
    pub current_tick: Tick,

    deadlock: u64,
    stop_events: u64,
}

impl Simulator {
    pub(crate) fn new_internal(
        config: SimConfig,
        grid: Grid,
        shelves: ShelfTable,
        stations: StationTable,
        orders: Vec<Order>,
        order_queue: OrderQueue,
        assignment_policy: AssignmentPolicy,
        reservations: ReservationTable,
        robots: Vec<Robot>,
    ) -> Self {
        Self {
            config,
            grid,
            shelves,
            stations,
            orders,
            order_queue,
            assignment_policy,
            reservations,
            robots,
            current_tick: Tick::ZERO,
            deadlock: 0,
            stop_events: 0,
        }
    }

    /// Run until `config.ticks` is reached, calling observer hooks at every
    /// tick boundary.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) {
        while self.current_tick.0 < self.config.ticks {
            let now = self.current_tick;
            observer.on_tick_start(now);
            self.step();
            observer.on_tick_end(now);
        }
        observer.on_sim_end(self.current_tick);
    }

    /// Run exactly `n` ticks from the current position, ignoring
    /// `config.ticks`. Useful for tests and incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            let now = self.current_tick;
            observer.on_tick_start(now);
            self.step();
            observer.on_tick_end(now);
        }
    }

    /// Aggregate statistics as of the current tick.
    pub fn metrics(&self) -> Metrics {
        Metrics::compute(&self.robots, &self.orders, self.current_tick, self.deadlock, self.stop_events)
    }

    /// Execute a single tick: release, assign, busy accounting, leg
    /// transitions, propose + resolve, deadlock heuristic, advance.
    ///
    /// Busy accounting runs before leg transitions so a robot whose
    /// `Returning` leg ends this tick (and flips to `Idle`) still gets this
    /// tick counted busy — it was busy for the whole tick up to that point.
    pub fn step(&mut self) {
        let now = self.current_tick;
        let next = now + 1;

        self.release(now);
        self.assign(now);

        for robot in &mut self.robots {
            robot.account_busy_tick();
        }
        self.advance_legs(now);

        let moved_any = self.resolve(next);
        if !moved_any && self.robots.iter().any(|r| !r.is_idle()) {
            self.deadlock += 1;
        }

        self.current_tick = next;
        self.reservations.prune_before(next);
    }

    fn release(&mut self, now: Tick) {
        self.order_queue.release(&self.orders, now);
    }

    /// Pair idle robots with pending orders, in ascending `RobotId`.
    fn assign(&mut self, now: Tick) {
        for i in 0..self.robots.len() {
            if !self.robots[i].is_idle() {
                continue;
            }
            let pos = self.robots[i].pos;

            let Some(candidate) = self.assignment_policy.best_candidate(
                self.order_queue.pending(),
                &self.orders,
                &self.grid,
                &self.shelves,
                pos,
            ) else {
                continue;
            };

            let order_id = self.order_queue.remove(candidate.index);
            self.orders[order_id.index()].assignment_tick = Some(now);

            let dock = self.stations.get(&self.orders[order_id.index()].station_id).copied();
            let route = dock.and_then(|dock| {
                wh_planner::plan(&self.grid, pos, candidate.pickup).map(|route| (dock, route))
            });

            match route {
                Some((dock, route)) => self.robots[i].assign(order_id, candidate.pickup, dock, route),
                None => {
                    self.orders[order_id.index()].assignment_tick = None;
                    self.order_queue.reinsert(candidate.index, order_id);
                }
            }
        }
    }

    /// Replan any robot that reached the end of its current leg.
    fn advance_legs(&mut self, now: Tick) {
        for robot in &mut self.robots {
            if let LegOutcome::Completed(order_id) = try_advance_leg(robot, &self.grid) {
                self.orders[order_id.index()].completion_tick = Some(now);
            }
        }
    }

    /// Propose and resolve a next cell for every robot, in ascending
    /// `RobotId`. Returns `true` iff at least one robot actually moved.
    fn resolve(&mut self, arrival: Tick) -> bool {
        let mut moved_any = false;
        for i in 0..self.robots.len() {
            let robot_id = self.robots[i].robot_id;
            let pos = self.robots[i].pos;
            let proposed = self.robots[i].propose_next_cell();

            if proposed == pos {
                self.reservations.commit_wait(robot_id, pos, arrival);
                continue;
            }

            if self.reservations.can_move(pos, proposed, arrival) {
                self.reservations.commit_move(robot_id, pos, proposed, arrival);
                self.robots[i].commit_move(proposed);
                moved_any = true;
            } else {
                self.robots[i].commit_blocked_wait();
                self.stop_events += 1;
                self.reservations.commit_wait(robot_id, pos, arrival);
            }
        }
        moved_any
    }
}
