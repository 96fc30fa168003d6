//! `wh-sim` — the per-tick simulation loop.
//!
//! # Eight-step tick loop
//!
//! ```text
//! for tick in 0..config.ticks:
//!   ① Release    — move orders from unreleased to pending as their
//!                   creation_tick arrives.
//!   ② Assign     — pair idle robots with pending orders (wh-orders).
//!   ③ Busy       — count this tick as busy for every non-idle robot,
//!                   before leg transitions can flip one to idle.
//!   ④ Legs       — replan any robot at the end of its current route leg
//!                   (wh-robot); a completed return leg stamps the order's
//!                   completion tick.
//!   ⑤ Propose    — each robot proposes its next cell.
//!   ⑥ Resolve    — in ascending RobotId, arbitrate proposals against the
//!                   reservation table (wh-reservation); commit moves or
//!                   waits.
//!   ⑦ Deadlock   — tally a tick where nothing moved but someone is busy.
//!   ⑧ Advance    — current_tick += 1.
//! ```
//!
//! # Quick-start
//!
//! ```rust,ignore
//! let mut sim = SimBuilder::new(config, grid, shelves, stations, spawn_points, orders)
//!     .build()?;
//! sim.run(&mut NoopObserver);
//! let metrics = sim.metrics();
//! ```

pub mod builder;
pub mod error;
pub mod metrics;
pub mod observer;
pub mod sim;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use metrics::Metrics;
pub use observer::{NoopObserver, SimObserver};
pub use sim::Simulator;
