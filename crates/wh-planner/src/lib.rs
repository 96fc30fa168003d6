//! `wh-planner` — A* shortest-path planning over the warehouse grid.
//!
//! # Crate layout
//!
//! | Module    | Contents                          |
//! |-----------|-------------------------------------|
//! | [`astar`] | `plan` — the A* search itself       |
//!
//! # Pluggability and isolation
//!
//! `plan` is a pure function of `(grid, start, goal)`. It never reads the
//! reservation table, so replans stay stable regardless of when they run;
//! this is what lets `wh-sim` recompute a robot's route mid-simulation
//! without the planner needing to know anything about other robots. An
//! application parallelizing planning across several idle robots in one
//! tick only needs a shared `&Grid` per call — no lock, no interior
//! mutability.

pub mod astar;


pub use astar::plan;
