use serde::{Deserialize, Serialize};

use crate::*;

/// Why a cell was revealed, used to tell player moves from the end-of-game uncovering.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevealReason {
    #[default]
    Unrevealed,
    PlayerClick,
    GameOver,
}

/// Player-visible state of one playable cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub reason: RevealReason,
    pub flagged: bool,
    pub exploded: bool,
}

impl Cell {
    pub const fn is_revealed(self) -> bool {
        !matches!(self.reason, RevealReason::Unrevealed)
    }

    /// Reveal the cell, player clicks clear the flag but game-over reveals keep it visible.
    pub(crate) fn reveal(&mut self, reason: RevealReason) {
        if matches!(reason, RevealReason::PlayerClick) {
            self.flagged = false;
        }
        self.reason = reason;
    }
}

/// Snapshot of a cell handed to front ends.
///
/// `value` is only filled once the cell is revealed or the game is over, so a
/// renderer cannot leak mine positions by accident.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellView {
    pub x: Coord,
    pub y: Coord,
    pub revealed: bool,
    pub flagged: bool,
    pub exploded: bool,
    pub reason: RevealReason,
    pub value: Option<CellValue>,
}

impl CellView {
    pub(crate) fn new((x, y): Coord2, cell: Cell, value: CellValue, uncovered: bool) -> Self {
        Self {
            x,
            y,
            revealed: cell.is_revealed(),
            flagged: cell.flagged,
            exploded: cell.exploded,
            reason: cell.reason,
            value: (uncovered || cell.is_revealed()).then_some(value),
        }
    }

    pub const fn coords(&self) -> Coord2 {
        (self.x, self.y)
    }

    pub fn is_mine(&self) -> bool {
        self.value.is_some_and(CellValue::is_mine)
    }

    pub fn is_flagged_correctly(&self) -> bool {
        self.flagged && self.is_mine()
    }

    pub fn is_flagged_incorrectly(&self) -> bool {
        self.flagged && matches!(self.value, Some(CellValue::Count(_)))
    }

    pub const fn is_revealed_due_to_game_over(&self) -> bool {
        matches!(self.reason, RevealReason::GameOver)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn player_reveal_clears_flag() {
        let mut cell = Cell {
            flagged: true,
            ..Default::default()
        };

        cell.reveal(RevealReason::PlayerClick);

        assert!(cell.is_revealed());
        assert!(!cell.flagged);
    }

    #[test]
    fn game_over_reveal_keeps_flag() {
        let mut cell = Cell {
            flagged: true,
            ..Default::default()
        };

        cell.reveal(RevealReason::GameOver);

        assert!(cell.is_revealed());
        assert!(cell.flagged);
    }

    #[test]
    fn view_hides_value_while_covered() {
        let view = CellView::new((1, 2), Cell::default(), CellValue::Mine, false);
        assert_eq!(view.value, None);
        assert!(!view.is_mine());

        let view = CellView::new((1, 2), Cell::default(), CellValue::Mine, true);
        assert!(view.is_mine());
        assert_eq!(view.coords(), (1, 2));
    }

    #[test]
    fn flag_correctness_needs_uncovered_value() {
        let flagged = Cell {
            flagged: true,
            ..Default::default()
        };

        let mine = CellView::new((0, 0), flagged, CellValue::Mine, true);
        assert!(mine.is_flagged_correctly());
        assert!(!mine.is_flagged_incorrectly());

        let safe = CellView::new((0, 0), flagged, CellValue::Count(2), true);
        assert!(safe.is_flagged_incorrectly());

        let hidden = CellView::new((0, 0), flagged, CellValue::Count(2), false);
        assert!(!hidden.is_flagged_incorrectly());
    }
}
