//! Fluent builder for constructing a [`Simulator`].

use wh_core::{Cell, Grid, Order, RobotId, ShelfTable, SimConfig, StationTable};
use wh_orders::{AssignmentPolicy, OrderQueue};
use wh_reservation::ReservationTable;
use wh_robot::Robot;

use crate::{SimError, SimResult, Simulator};

/// Fluent builder for [`Simulator`].
///
/// # Required inputs
///
/// - [`SimConfig`] — seed, robot count, tick budget.
/// - `grid`, `shelves`, `stations` — the static layout.
/// - `spawn_points` — robot *i* spawns at `spawn_points[i]`; must have at
///   least `config.robots` entries.
/// - `orders` — the full order list, indexed by `OrderId`.
///
/// # Optional inputs
///
/// | Method       | Default |
/// |--------------|---------|
/// | `.scan_cap(n)` | `50` — the assignment policy's pending-queue scan cap |
pub struct SimBuilder {
    config: SimConfig,
    grid: Grid,
    shelves: ShelfTable,
    stations: StationTable,
    spawn_points: Vec<Cell>,
    orders: Vec<Order>,
    scan_cap: Option<usize>,
}

impl SimBuilder {
    pub fn new(
        config: SimConfig,
        grid: Grid,
        shelves: ShelfTable,
        stations: StationTable,
        spawn_points: Vec<Cell>,
        orders: Vec<Order>,
    ) -> Self {
        Self { config, grid, shelves, stations, spawn_points, orders, scan_cap: None }
    }

    /// Override the assignment policy's pending-queue scan cap (default 50).
    pub fn scan_cap(mut self, cap: usize) -> Self {
        self.scan_cap = Some(cap);
        self
    }

    /// Validate inputs and return a ready-to-run [`Simulator`].
    pub fn build(self) -> SimResult<Simulator> {
        if self.spawn_points.len() < self.config.robots {
            return Err(SimError::InsufficientSpawnPoints {
                needed: self.config.robots,
                available: self.spawn_points.len(),
            });
        }

        let robots = (0..self.config.robots)
            .map(|i| Robot::new(RobotId(i as u32), self.spawn_points[i]))
            .collect();

        let order_queue = OrderQueue::new(&self.orders);
        let assignment_policy = AssignmentPolicy::new(self.scan_cap.unwrap_or(50));

        Ok(Simulator::new_internal(
            self.config,
            self.grid,
            self.shelves,
            self.stations,
            self.orders,
            order_queue,
            assignment_policy,
            ReservationTable::new(),
            robots,
        ))
    }
}
