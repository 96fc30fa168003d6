//! End-of-run metrics aggregation.

use wh_core::{Order, Tick};
use wh_robot::Robot;

/// Aggregate statistics computed once, at the end of a run.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Metrics {
    pub final_tick: u64,
    pub robots: usize,
    pub orders_total: usize,
    pub orders_completed: usize,
    /// Mean of `completion_tick - creation_tick` over completed orders.
    /// `None` if no order completed.
    pub avg_order_time: Option<f64>,
    /// `orders_completed / (final_tick / 1000)`, `0.0` if `final_tick == 0`.
    pub throughput_per_1000_ticks: f64,
    /// Mean over robots of `ticks_waited`.
    pub avg_wait_ticks: f64,
    /// Mean over robots of `ticks_busy / max(1, final_tick)`.
    pub avg_utilization: f64,
    /// Always `0`: no resolution path in this engine ever lets a vertex or
    /// swap conflict through. Kept for schema compatibility.
    pub vertex_collisions: u64,
    pub edge_swaps: u64,
    pub deadlock: u64,
    pub stop_events: u64,
    pub total_cells_moved: u64,
}

impl Metrics {
    pub(crate) fn compute(
        robots: &[Robot],
        orders: &[Order],
        final_tick: Tick,
        deadlock: u64,
        stop_events: u64,
    ) -> Metrics {
        let completed: Vec<&Order> = orders.iter().filter(|o| o.is_completed()).collect();

        let avg_order_time = if completed.is_empty() {
            None
        } else {
            let total: u64 = completed
                .iter()
                .map(|o| o.completion_tick.unwrap() - o.creation_tick)
                .sum();
            Some(total as f64 / completed.len() as f64)
        };

        let throughput_per_1000_ticks = if final_tick.0 == 0 {
            0.0
        } else {
            completed.len() as f64 / (final_tick.0 as f64 / 1000.0)
        };

        let robot_count = robots.len().max(1) as f64;
        let avg_wait_ticks = robots.iter().map(|r| r.ticks_waited as f64).sum::<f64>() / robot_count;
        let avg_utilization = robots
            .iter()
            .map(|r| r.ticks_busy as f64 / final_tick.0.max(1) as f64)
            .sum::<f64>()
            / robot_count;

        let total_cells_moved = robots.iter().map(|r| r.cells_moved).sum();

        Metrics {
            final_tick: final_tick.0,
            robots: robots.len(),
            orders_total: orders.len(),
            orders_completed: completed.len(),
            avg_order_time,
            throughput_per_1000_ticks,
            avg_wait_ticks,
            avg_utilization,
            vertex_collisions: 0,
            edge_swaps: 0,
            deadlock,
            stop_events,
            total_cells_moved,
        }
    }
}
