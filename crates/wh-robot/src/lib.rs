//! `wh-robot` — the per-robot task state machine.
//!
//! # What lives here
//!
//! | Module    | Contents                                                |
//! |-----------|---------------------------------------------------------|
//! | [`state`] | `RobotState`, `Leg` — the tagged FSM and its route cursor |
//! | [`robot`] | `Robot` — position, state, and per-robot counters        |
//! | [`legs`]  | `try_advance_leg` — replans a robot when its leg ends     |
//!
//! # State machine
//!
//! ```text
//! Idle ──(assigned)──▶ ToPickup ──(reached pickup)──▶ ToStation
//!   ▲                                                     │
//!   │                                                     ▼
//! (completes order) ◀──(reached pickup again)── Returning ◀──(reached dock)
//! ```
//!
//! A robot is a tagged variant per [design note](crate): task fields
//! (`order_id`, pickup cell, dock cell, the active [`state::Leg`]) live only
//! inside the non-`Idle` variants, so there is no "this field must be `Some`
//! exactly when the robot isn't idle" invariant to maintain by convention —
//! the type system maintains it.

pub mod legs;
pub mod robot;
pub mod state;

#[cfg(test)]
mod tests;

pub use legs::{LegOutcome, try_advance_leg};
pub use robot::Robot;
pub use state::{Leg, RobotState};
