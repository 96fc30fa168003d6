//! `wh-core` — foundational types for the warehouse fleet movement engine.
//!
//! This crate is a dependency of every other `wh-*` crate. It intentionally
//! has no `wh-*` dependencies and minimal external ones (only `thiserror`,
//! plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                                |
//! |-------------|-----------------------------------------------------------|
//! | [`cell`]    | `Cell`, 4-connected neighbor order, Manhattan distance  |
//! | [`grid`]    | `CellKind`, `Grid`, `ShelfTable`, `StationTable`        |
//! | [`time`]    | `Tick`                                                  |
//! | [`ids`]     | `RobotId`, `ShelfId`, `StationId`, `OrderId`            |
//! | [`order`]   | `Order`, `RobotId`-indexed domain records               |
//! | [`config`]  | `SimConfig`                                             |
//! | [`error`]   | `GridError`, `GridResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to the boundary input/output types. |

pub mod cell;
pub mod config;
pub mod error;
pub mod grid;
pub mod ids;
pub mod order;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use cell::Cell;
pub use config::SimConfig;
pub use error::{GridError, GridResult};
pub use grid::{CellKind, Grid, ShelfTable, StationTable, adjacent_transitable};
pub use ids::{OrderId, RobotId, ShelfId, StationId};
pub use order::Order;
pub use time::Tick;
