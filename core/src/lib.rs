#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use cell::*;
pub use error::*;
pub use field::*;
pub use generator::*;
pub use session::*;
pub use types::*;

mod cell;
mod error;
mod field;
mod generator;
mod session;
mod types;

/// Validated board configuration: playable size and mine count.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: Coord2,
    pub mines: CellCount,
}

impl GameConfig {
    pub const fn new_unchecked(size: Coord2, mines: CellCount) -> Self {
        Self { size, mines }
    }

    /// Fails when either side is zero or when the mines would not leave at least one safe cell.
    pub fn new(size: Coord2, mines: CellCount) -> Result<Self> {
        if size.0 == 0 || size.1 == 0 {
            return Err(GameError::InvalidDimensions);
        }
        let capacity = mult(size.0, size.1);
        if mines >= capacity {
            return Err(GameError::TooManyMines {
                requested: mines,
                capacity,
            });
        }
        Ok(Self::new_unchecked(size, mines))
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }

    pub const fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mines
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Preset::default().config()
    }
}

/// Fixed board presets offered when starting a new game.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Preset {
    #[default]
    Beginner,
    Intermediate,
    Expert,
}

impl Preset {
    pub const ALL: [Preset; 3] = [Self::Beginner, Self::Intermediate, Self::Expert];

    pub const fn config(self) -> GameConfig {
        use Preset::*;
        match self {
            Beginner => GameConfig::new_unchecked((9, 9), 10),
            Intermediate => GameConfig::new_unchecked((16, 16), 40),
            Expert => GameConfig::new_unchecked((30, 16), 99),
        }
    }
}

/// A request to start a new game, either from a preset or from player-entered dimensions.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum NewGameRequest {
    Preset(Preset),
    Custom {
        rows: Coord,
        columns: Coord,
        mines: CellCount,
    },
}

impl NewGameRequest {
    pub const DEFAULT_CUSTOM: Self = Self::Custom {
        rows: 9,
        columns: 12,
        mines: 50,
    };

    /// Resolve into a validated configuration, rows map to height and columns to width.
    pub fn config(self) -> Result<GameConfig> {
        match self {
            Self::Preset(preset) => Ok(preset.config()),
            Self::Custom {
                rows,
                columns,
                mines,
            } => GameConfig::new((columns, rows), mines),
        }
    }
}

impl From<Preset> for NewGameRequest {
    fn from(preset: Preset) -> Self {
        Self::Preset(preset)
    }
}
