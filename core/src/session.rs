use alloc::collections::{BTreeSet, VecDeque};
use alloc::vec::Vec;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - InProgress -> Won
/// - InProgress -> Lost
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    #[default]
    InProgress,
    Won,
    Lost,
}

impl Status {
    pub const fn is_in_progress(self) -> bool {
        matches!(self, Self::InProgress)
    }

    /// Indicates the game has ended and no moves can be made anymore
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Cells changed by a reveal plus the status after it.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RevealResult {
    pub changed: Vec<CellView>,
    pub status: Status,
}

impl RevealResult {
    fn unchanged(status: Status) -> Self {
        Self {
            changed: Vec::new(),
            status,
        }
    }

    pub fn has_update(&self) -> bool {
        !self.changed.is_empty()
    }
}

/// One game from the first move to win or loss, replaced wholesale on a new game.
///
/// Serializable for snapshots only: a session is never rebuilt from outside
/// data, so the grid shapes always agree with the board size.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Session {
    minefield: Minefield,
    cells: Array2<Cell>,
    status: Status,
    flags_left: CellCount,
    elapsed_secs: u32,
}

impl Session {
    pub fn new(minefield: Minefield) -> Self {
        let size = minefield.size();
        let flags_left = minefield.mine_count();
        Self {
            minefield,
            cells: Array2::default(size.to_nd_index()),
            status: Status::default(),
            flags_left,
            elapsed_secs: 0,
        }
    }

    /// Generate a random minefield for `config` and start playing on it.
    pub fn new_game(config: GameConfig, seed: u64) -> Result<Self> {
        let minefield = RandomMinefieldGenerator::new(seed).generate(config)?;
        log::debug!(
            "New game {}x{} with {} mines (seed {})",
            config.size.0,
            config.size.1,
            config.mines,
            seed
        );
        Ok(Self::new(minefield))
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        self.status.is_finished()
    }

    pub fn size(&self) -> Coord2 {
        self.minefield.size()
    }

    pub fn total_mines(&self) -> CellCount {
        self.minefield.mine_count()
    }

    /// How many flags can still be placed
    pub fn flags_left(&self) -> CellCount {
        self.flags_left
    }

    pub fn elapsed_secs(&self) -> u32 {
        self.elapsed_secs
    }

    /// The underlying mine layout, for replays and tests.
    pub fn minefield(&self) -> &Minefield {
        &self.minefield
    }

    pub fn cell_at(&self, coords: Coord2) -> Option<CellView> {
        self.minefield.contains(coords).then(|| self.view(coords))
    }

    pub fn cells(&self) -> impl Iterator<Item = CellView> + '_ {
        self.minefield.coords().map(|coords| self.view(coords))
    }

    /// One-second timer hook, only counts while the game is in progress.
    pub fn tick(&mut self) -> u32 {
        if self.status.is_in_progress() {
            self.elapsed_secs = self.elapsed_secs.saturating_add(1);
        }
        self.elapsed_secs
    }

    pub fn reveal(&mut self, coords: Coord2) -> RevealResult {
        let Some(value) = self.minefield.get(coords) else {
            log::warn!("Ignoring reveal outside the board at {:?}", coords);
            return RevealResult::unchanged(self.status);
        };

        let cell = self.cells[coords.to_nd_index()];
        if !self.status.is_in_progress() || cell.flagged || cell.is_revealed() {
            return RevealResult::unchanged(self.status);
        }

        let mut changed = Vec::new();
        match value {
            CellValue::Mine => self.explode(coords, &mut changed),
            CellValue::Count(0) => self.flood_fill(coords, &mut changed),
            CellValue::Count(count) => {
                self.cells[coords.to_nd_index()].reveal(RevealReason::PlayerClick);
                changed.push(coords);
                log::debug!("Revealed cell at {:?}, mine count: {}", coords, count);
            }
        }

        if self.status.is_in_progress() && self.is_cleared() {
            self.status = Status::Won;
            log::debug!("Game won after {}s", self.elapsed_secs);
        }

        RevealResult {
            changed: changed.into_iter().map(|pos| self.view(pos)).collect(),
            status: self.status,
        }
    }

    pub fn toggle_flag(&mut self, coords: Coord2) -> Option<CellView> {
        let coords = match self.minefield.validate_coords(coords) {
            Ok(coords) => coords,
            Err(err) => {
                log::warn!("Ignoring flag: {}", err);
                return None;
            }
        };

        if self.status.is_in_progress() {
            let cell = &mut self.cells[coords.to_nd_index()];
            match (cell.is_revealed(), cell.flagged) {
                (true, _) => {}
                (false, true) => {
                    cell.flagged = false;
                    self.flags_left += 1;
                }
                (false, false) if self.flags_left == 0 => {
                    log::debug!("No flags left for {:?}", coords);
                }
                (false, false) => {
                    cell.flagged = true;
                    self.flags_left -= 1;
                }
            }
        }

        Some(self.view(coords))
    }

    fn view(&self, coords: Coord2) -> CellView {
        CellView::new(
            coords,
            self.cells[coords.to_nd_index()],
            self.minefield[coords],
            self.status.is_finished(),
        )
    }

    /// Ends the game on `coords` and uncovers everything else, keeping flags visible.
    fn explode(&mut self, coords: Coord2, changed: &mut Vec<Coord2>) {
        let cell = &mut self.cells[coords.to_nd_index()];
        cell.reveal(RevealReason::PlayerClick);
        cell.exploded = true;
        changed.push(coords);
        self.status = Status::Lost;
        log::debug!("Hit mine at {:?}, game lost", coords);

        for pos in self.minefield.coords() {
            let cell = &mut self.cells[pos.to_nd_index()];
            if !cell.is_revealed() {
                cell.reveal(RevealReason::GameOver);
                changed.push(pos);
            }
        }
    }

    /// Breadth-first expansion through zero cells, revealing the non-zero cells on its edge.
    fn flood_fill(&mut self, start: Coord2, changed: &mut Vec<Coord2>) {
        let mut visited = BTreeSet::from([start]);
        let mut to_visit = VecDeque::from([start]);
        log::trace!("Starting flood-fill from {:?}", start);

        while let Some(visit_coords) = to_visit.pop_front() {
            let cell = &mut self.cells[visit_coords.to_nd_index()];
            if !cell.is_revealed() {
                // a revealed cell cannot hold a flag
                if cell.flagged {
                    self.flags_left += 1;
                }
                cell.reveal(RevealReason::PlayerClick);
                changed.push(visit_coords);
                log::trace!("Flood revealed cell at {:?}", visit_coords);
            }

            if self.minefield[visit_coords].is_zero() {
                for pos in self.minefield.neighbors(visit_coords) {
                    if visited.insert(pos) {
                        to_visit.push_back(pos);
                    }
                }
            }
        }
        log::debug!("Flood-fill from {:?} revealed {} cells", start, changed.len());
    }

    /// Every mine still covered and every safe cell uncovered.
    fn is_cleared(&self) -> bool {
        self.minefield
            .coords()
            .all(|pos| self.minefield[pos].is_mine() != self.cells[pos.to_nd_index()].is_revealed())
    }
}
