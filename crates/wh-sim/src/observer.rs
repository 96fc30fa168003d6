//! Simulation observer trait for progress reporting.

use wh_core::Tick;

/// Callbacks invoked by [`Simulator::run`][crate::Simulator::run] at tick
/// boundaries.
///
/// All methods have default no-op implementations so implementors only
/// override what they care about.
pub trait SimObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called at the end of each tick, after metrics counters for that tick
    /// have been updated.
    fn on_tick_end(&mut self, _tick: Tick) {}

    /// Called once after the final tick completes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
