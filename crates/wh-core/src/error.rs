//! Construction-time error taxonomy.
//!
//! These are the only `Result`-bearing failures in the layout layer:
//! construction aborts with `Err`, while anything that can happen mid-run
//! (a robot finding no route, a scan hitting its cap) costs at most a tick
//! and is handled as a retry by the simulator, never surfaced as a `Result`.
//! See `wh-sim::error` for the simulator's own construction-time errors that
//! build on top of these.

use thiserror::Error;

/// Errors raised while constructing a [`crate::Grid`] or the layout that
/// accompanies it.
#[derive(Debug, Error)]
pub enum GridError {
    #[error("grid is not rectangular: row {row} has {got} cells, expected {expected}")]
    NonRectangular { row: usize, expected: usize, got: usize },

    #[error("unknown cell kind {0}: expected one of 0 (free), 1 (shelf), 2 (station), 3 (blocked)")]
    UnknownCellKind(i64),
}

/// Shorthand result type for `wh-core` construction.
pub type GridResult<T> = Result<T, GridError>;
