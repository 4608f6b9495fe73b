use rand::rngs::SmallRng;

use crate::board::Board;
use crate::common::Coord;
use crate::strategy::{CandidateSet, Strategy};

/// Pure random fire. Draws uniformly from the unfired cells and learns
/// nothing from outcomes.
pub struct EasyStrategy {
    candidates: CandidateSet,
}

impl EasyStrategy {
    pub fn new() -> Self {
        EasyStrategy {
            candidates: CandidateSet::full_grid(),
        }
    }
}

impl Default for EasyStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for EasyStrategy {
    fn select_target(&mut self, rng: &mut SmallRng, _board: &Board) -> Option<Coord> {
        self.candidates.take_random(rng)
    }

    fn exclude(&mut self, at: Coord) {
        self.candidates.remove(at);
    }

    fn reset(&mut self) {
        self.candidates = CandidateSet::full_grid();
    }
}
