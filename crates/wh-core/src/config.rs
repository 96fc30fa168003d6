//! Top-level simulation configuration.
//!
//! A warehouse tick has no real-world duration, so this carries none of the
//! wall-clock mapping fields a calendar-driven simulation would need.

/// Configuration handed to [`wh_sim::SimBuilder`](../wh_sim/struct.SimBuilder.html).
///
/// Constructed directly by the caller — file or CLI loading, and scenario
/// directory conventions, are an external collaborator's concern.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Master seed. Unused by the core algorithms (routing and resolution
    /// are fully deterministic given fixed inputs); preserved purely so
    /// output metrics can report which seed produced them.
    pub seed: u64,

    /// Number of robots to simulate. Must not exceed `spawn_points.len()`.
    pub robots: usize,

    /// Total number of ticks to run.
    pub ticks: u64,
}
