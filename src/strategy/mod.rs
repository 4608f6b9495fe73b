//! Targeting strategies.
//!
//! A strategy picks where to fire next against an opponent board, one
//! coordinate per call, and is told the true outcome of each shot so it can
//! adapt. Three tiers exist:
//! - `EasyStrategy`: uniform random over unfired cells
//! - `MediumStrategy`: parity scan plus adjacency hunting with axis bias
//! - `HardStrategy`: directional hunt state machine over a scored heatmap

use rand::rngs::SmallRng;
use rand::Rng;

use crate::board::Board;
use crate::common::{CellState, Coord};
use crate::config::{Difficulty, BOARD_SIZE};

mod easy;
mod hard;
mod medium;

pub use easy::EasyStrategy;
pub use hard::HardStrategy;
pub use medium::MediumStrategy;

/// Interface implemented by the difficulty tiers.
///
/// A strategy never mutates the board it targets; it reads board state where
/// its tier allows and keeps its own record of cells not yet fired at. Within
/// one match it never returns the same coordinate twice.
pub trait Strategy {
    /// Choose the next cell to fire at, or `None` once every candidate has
    /// been spent (the caller treats this as a turn handover, not an error).
    fn select_target(&mut self, rng: &mut SmallRng, board: &Board) -> Option<Coord>;

    /// Inform the strategy of the true result of its last shot.
    fn handle_shot_result(&mut self, _shot: Coord, _outcome: CellState) {}

    /// Drop a cell from the candidate set without firing at it. A strategy
    /// instance swapped in mid-match absorbs the board's already-resolved
    /// cells this way.
    fn exclude(&mut self, at: Coord);

    /// Restore the full candidate grid and clear all adaptive state, ready
    /// for a new match.
    fn reset(&mut self);
}

/// Build the strategy for a difficulty tier.
pub fn strategy_for(difficulty: Difficulty) -> Box<dyn Strategy> {
    match difficulty {
        Difficulty::Easy => Box::new(EasyStrategy::new()),
        Difficulty::Medium => Box::new(MediumStrategy::new()),
        Difficulty::Hard => Box::new(HardStrategy::new()),
    }
}

/// The cells a strategy has not yet fired upon. Shrinks monotonically over a
/// match; shadows the board's ground truth rather than querying it.
#[derive(Debug, Clone)]
pub struct CandidateSet {
    cells: Vec<Coord>,
}

impl CandidateSet {
    /// Every cell of the grid.
    pub fn full_grid() -> Self {
        let mut cells = Vec::with_capacity((BOARD_SIZE * BOARD_SIZE) as usize);
        for x in 0..BOARD_SIZE {
            for y in 0..BOARD_SIZE {
                cells.push(Coord::new(x, y));
            }
        }
        CandidateSet { cells }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, at: Coord) -> bool {
        self.cells.contains(&at)
    }

    pub fn iter(&self) -> impl Iterator<Item = Coord> + '_ {
        self.cells.iter().copied()
    }

    /// Remove `at` if present; reports whether it was.
    pub fn remove(&mut self, at: Coord) -> bool {
        match self.cells.iter().position(|&c| c == at) {
            Some(idx) => {
                self.cells.swap_remove(idx);
                true
            }
            None => false,
        }
    }

    /// Draw a uniformly random candidate and remove it.
    pub fn take_random(&mut self, rng: &mut SmallRng) -> Option<Coord> {
        if self.cells.is_empty() {
            return None;
        }
        let idx = rng.random_range(0..self.cells.len());
        Some(self.cells.swap_remove(idx))
    }

    /// Draw a uniformly random candidate satisfying `pred` and remove it.
    pub fn take_random_where<F>(&mut self, rng: &mut SmallRng, pred: F) -> Option<Coord>
    where
        F: Fn(Coord) -> bool,
    {
        let matching: Vec<usize> = self
            .cells
            .iter()
            .enumerate()
            .filter(|&(_, &c)| pred(c))
            .map(|(i, _)| i)
            .collect();
        if matching.is_empty() {
            return None;
        }
        let idx = matching[rng.random_range(0..matching.len())];
        Some(self.cells.swap_remove(idx))
    }

    /// Remove `center` and all eight surrounding cells.
    pub fn purge_neighborhood(&mut self, center: Coord) {
        self.remove(center);
        for n in center.neighbors8() {
            self.remove(n);
        }
    }
}
