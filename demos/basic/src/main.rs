//! wh-demo-basic — smallest runnable example for the warehouse fleet
//! movement engine.
//!
//! A 14x10 aisle grid, 3 robots, 2 pick stations, and a dozen orders spread
//! across the first 40 ticks. Scale comment: swap `ROBOT_COUNT` and the hand
//! built layout below for a loaded-from-file grid plus a generated order
//! stream to run at warehouse scale.

use std::time::Instant;

use anyhow::Result;

use wh_core::{Cell, CellKind, Grid, Order, OrderId, ShelfId, ShelfTable, SimConfig, StationId, StationTable, Tick};
use wh_sim::{SimBuilder, SimObserver};

// ── Constants ─────────────────────────────────────────────────────────────────

const ROBOT_COUNT: usize = 3;
const TOTAL_TICKS: u64 = 300;
const SEED: u64 = 42;

// ── Layout ────────────────────────────────────────────────────────────────────

/// Builds a bordered 14x10 grid with two interior shelf aisles.
fn build_layout() -> (Grid, ShelfTable, StationTable, Vec<Cell>) {
    let width = 14;
    let height = 10;
    let mut rows = vec![vec![CellKind::Free; width]; height];

    for x in 0..width {
        rows[0][x] = CellKind::Blocked;
        rows[height - 1][x] = CellKind::Blocked;
    }
    for row in rows.iter_mut() {
        row[0] = CellKind::Blocked;
        row[width - 1] = CellKind::Blocked;
    }

    // Two shelf aisles at x = 4 and x = 9, rows 2..=7, leaving row 1 and the
    // rightmost/leftmost columns clear for travel.
    let mut shelves = ShelfTable::new();
    let mut next_shelf = 0u32;
    for &aisle_x in &[4usize, 9usize] {
        for y in 2..8 {
            rows[y][aisle_x] = CellKind::Shelf;
            shelves.insert(ShelfId(next_shelf), Cell::new(aisle_x as i32, y as i32));
            next_shelf += 1;
        }
    }

    // Two pick stations along the bottom aisle.
    let mut stations = StationTable::new();
    rows[8][2] = CellKind::Station;
    stations.insert(StationId(0), Cell::new(2, 8));
    rows[8][11] = CellKind::Station;
    stations.insert(StationId(1), Cell::new(11, 8));

    let grid = Grid::from_rows(rows).expect("hand built layout rows are well formed");

    let spawn_points = vec![Cell::new(1, 1), Cell::new(6, 1), Cell::new(12, 1)];

    (grid, shelves, stations, spawn_points)
}

/// A dozen orders staggered across the first 40 ticks, alternating between
/// the two aisles and the two stations.
fn build_orders(n_shelves: u32) -> Vec<Order> {
    (0..12u32)
        .map(|i| {
            let shelf = ShelfId(i % n_shelves);
            let station = StationId(i % 2);
            Order::new(OrderId(i), shelf, station, Tick(i as u64 * 4))
        })
        .collect()
}

// ── Progress observer ─────────────────────────────────────────────────────────

struct ProgressObserver {
    report_every: u64,
}

impl SimObserver for ProgressObserver {
    fn on_tick_end(&mut self, tick: Tick) {
        if tick.0 % self.report_every == 0 {
            println!("  tick {:>4}", tick.0);
        }
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== wh-demo-basic — warehouse fleet movement engine ===");
    println!("Robots: {ROBOT_COUNT}  |  Ticks: {TOTAL_TICKS}  |  Seed: {SEED}");
    println!();

    // 1. Build the grid, shelf/station tables, and spawn points.
    let (grid, shelves, stations, spawn_points) = build_layout();
    println!("Grid: {} shelves, {} stations", shelves.len(), stations.len());

    // 2. Build the order list.
    let orders = build_orders(shelves.len() as u32);
    println!("Orders: {}", orders.len());

    // 3. Sim config.
    let config = SimConfig { seed: SEED, robots: ROBOT_COUNT, ticks: TOTAL_TICKS };
    println!();

    // 4. Build the simulator.
    let mut sim = SimBuilder::new(config, grid, shelves, stations, spawn_points, orders).build()?;

    // 5. Run, printing progress every 50 ticks.
    let t0 = Instant::now();
    sim.run(&mut ProgressObserver { report_every: 50 });
    let elapsed = t0.elapsed();

    // 6. Summary.
    let metrics = sim.metrics();
    println!();
    println!("Simulation complete in {:.3} ms", elapsed.as_secs_f64() * 1e3);
    println!();
    println!("{:<26} {:>10}", "orders_completed", metrics.orders_completed);
    println!("{:<26} {:>10}", "orders_total", metrics.orders_total);
    println!(
        "{:<26} {:>10}",
        "avg_order_time",
        metrics.avg_order_time.map(|t| format!("{t:.1}")).unwrap_or_else(|| "n/a".to_string())
    );
    println!("{:<26} {:>10.3}", "throughput_per_1000_ticks", metrics.throughput_per_1000_ticks);
    println!("{:<26} {:>10.2}", "avg_wait_ticks", metrics.avg_wait_ticks);
    println!("{:<26} {:>10.3}", "avg_utilization", metrics.avg_utilization);
    println!("{:<26} {:>10}", "deadlock_ticks", metrics.deadlock);
    println!("{:<26} {:>10}", "stop_events", metrics.stop_events);
    println!("{:<26} {:>10}", "total_cells_moved", metrics.total_cells_moved);

    println!();
    println!("{:<8} {:<10} {:<8}", "robot", "pos", "idle");
    println!("{}", "-".repeat(28));
    for robot in &sim.robots {
        println!(
            "{:<8} ({:>2},{:>2})  {:<8}",
            robot.robot_id.0,
            robot.pos.x,
            robot.pos.y,
            if robot.is_idle() { "yes" } else { "no" }
        );
    }

    Ok(())
}
