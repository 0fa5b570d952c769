use thiserror::Error;

use crate::{CellCount, Coord2};

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Board must be at least 1x1")]
    InvalidDimensions,
    #[error("Too many mines, requested {requested} but the board has {capacity} cells")]
    TooManyMines {
        requested: CellCount,
        capacity: CellCount,
    },
    #[error("Invalid coordinates {0:?}")]
    InvalidCoords(Coord2),
}

impl GameError {
    /// Whether the error comes from an unplayable board configuration.
    pub const fn is_configuration(self) -> bool {
        matches!(self, Self::InvalidDimensions | Self::TooManyMines { .. })
    }
}

pub type Result<T> = core::result::Result<T, GameError>;
