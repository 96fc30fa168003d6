//! Construction-time errors for the simulator.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("{available} spawn points for {needed} robots")]
    InsufficientSpawnPoints { needed: usize, available: usize },

    #[error("grid or layout construction error: {0}")]
    Grid(#[from] wh_core::GridError),
}

pub type SimResult<T> = Result<T, SimError>;
