//! The warehouse grid: cell kinds, the immutable grid itself, and the
//! shelf/station lookup tables that sit alongside it.

use std::collections::HashMap;

use crate::{Cell, GridError, GridResult, ShelfId, StationId};

/// The kind of a single grid cell.
///
/// Wire encoding: `0=Free, 1=Shelf, 2=Station, 3=Blocked`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellKind {
    Free,
    Shelf,
    Station,
    Blocked,
}

impl CellKind {
    /// `true` for `Free` and `Station` — the only kinds a robot may occupy.
    #[inline]
    pub fn is_transitable(self) -> bool {
        matches!(self, CellKind::Free | CellKind::Station)
    }
}

impl TryFrom<i64> for CellKind {
    type Error = GridError;
    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(CellKind::Free),
            1 => Ok(CellKind::Shelf),
            2 => Ok(CellKind::Station),
            3 => Ok(CellKind::Blocked),
            other => Err(GridError::UnknownCellKind(other)),
        }
    }
}

/// Mapping from shelf ID to its (non-transitable) home cell.
pub type ShelfTable = HashMap<ShelfId, Cell>;

/// Mapping from station ID to its (transitable) dock cell.
pub type StationTable = HashMap<StationId, Cell>;

/// A fixed 2D array of [`CellKind`]s, immutable for the lifetime of a run.
///
/// Storage is row-major: `cells[y * width + x]`.
#[derive(Clone, Debug)]
pub struct Grid {
    width: i32,
    height: i32,
    cells: Vec<CellKind>,
}

impl Grid {
    /// Build a grid from row-major kind rows.
    ///
    /// `rows[y][x]` is the kind of cell `(x, y)`. Every row must have the
    /// same length; an empty `rows` produces a `0x0` grid.
    pub fn from_rows(rows: Vec<Vec<CellKind>>) -> GridResult<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.len());

        let mut cells = Vec::with_capacity(width * height);
        for (row, kinds) in rows.into_iter().enumerate() {
            if kinds.len() != width {
                return Err(GridError::NonRectangular { row, expected: width, got: kinds.len() });
            }
            cells.extend(kinds);
        }

        Ok(Self { width: width as i32, height: height as i32, cells })
    }

    /// `(width, height)` of the grid.
    #[inline]
    pub fn dims(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    #[inline]
    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.x < self.width && cell.y >= 0 && cell.y < self.height
    }

    /// The kind of `cell`. Panics if out of bounds — callers should check
    /// [`Grid::in_bounds`] first, which every caller in this workspace does.
    #[inline]
    pub fn kind(&self, cell: Cell) -> CellKind {
        self.cells[(cell.y * self.width + cell.x) as usize]
    }

    /// `true` iff `cell` is in bounds and [`CellKind::is_transitable`].
    #[inline]
    pub fn transitable(&self, cell: Cell) -> bool {
        self.in_bounds(cell) && self.kind(cell).is_transitable()
    }
}

/// The first in-bounds, transitable neighbor of `cell` in the fixed
/// `(+1,0), (-1,0), (0,+1), (0,-1)` order.
///
/// Used to turn a shelf's (non-transitable) home cell into the transitable
/// cell a robot actually parks at to perform the pickup.
pub fn adjacent_transitable(grid: &Grid, cell: Cell) -> Option<Cell> {
    cell.neighbors().into_iter().find(|&n| grid.transitable(n))
}
