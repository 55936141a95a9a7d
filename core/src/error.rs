use thiserror::Error;

use crate::{Cell, CellCount, Coord2};

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Cannot fit {mines} mines on a board of size {size:?}")]
    InvalidConfiguration { size: Coord2, mines: CellCount },
    #[error("{coords:?} is outside a board of size {size:?}")]
    OutOfBounds { coords: Coord2, size: Coord2 },
    #[error("Game already over, no new moves are accepted")]
    GameOver,
    #[error("Cell {coords:?} is marked")]
    MarkedCellChecked { coords: Coord2, cell: Cell },
    #[error("Cannot mark cell {coords:?}, it is already free")]
    AlreadyFreed { coords: Coord2, cell: Cell },
    #[error("Mine was hit at {coords:?}")]
    MineHit { coords: Coord2, cell: Cell },
    #[error("Generated layout does not match the board configuration")]
    InvalidLayout,
}

impl GameError {
    /// The designed loss signal, as opposed to a rejected move.
    pub const fn is_mine_hit(&self) -> bool {
        matches!(self, Self::MineHit { .. })
    }

    pub const fn coords(&self) -> Option<Coord2> {
        use GameError::*;
        match *self {
            OutOfBounds { coords, .. }
            | MarkedCellChecked { coords, .. }
            | AlreadyFreed { coords, .. }
            | MineHit { coords, .. } => Some(coords),
            InvalidConfiguration { .. } | GameOver | InvalidLayout => None,
        }
    }
}

pub type Result<T> = core::result::Result<T, GameError>;
