use rand::rngs::SmallRng;

use crate::board::Board;
use crate::common::{CellState, Coord};
use crate::strategy::{CandidateSet, Strategy};

/// Parity scan with adjacency hunting.
///
/// Search phase fires at checkerboard cells (`x + y` even), which halves the
/// expected shot count since every ship of length >= 2 covers one. Once a hit
/// lands, the orthogonal neighbors of the most recent hit are queued as
/// potential targets; with two hits on record the ship's axis is inferred and
/// queue entries on that axis move to the front.
pub struct MediumStrategy {
    candidates: CandidateSet,
    hits: Vec<Coord>,
    potential_targets: Vec<Coord>,
    hunting: bool,
}

impl MediumStrategy {
    pub fn new() -> Self {
        MediumStrategy {
            candidates: CandidateSet::full_grid(),
            hits: Vec::new(),
            potential_targets: Vec::new(),
            hunting: false,
        }
    }

    fn enqueue_adjacent(&mut self, center: Coord) {
        for target in center.orthogonal_neighbors() {
            if target.in_bounds()
                && !self.potential_targets.contains(&target)
                && self.candidates.contains(target)
            {
                self.potential_targets.push(target);
            }
        }
    }

    /// With two or more hits recorded, infer the hunted ship's axis from the
    /// two most recent ones and move queue entries sharing that axis with the
    /// earliest hit to the front.
    fn prioritize_axis(&mut self) {
        let n = self.hits.len();
        if n < 2 {
            return;
        }
        let (a, b) = (self.hits[n - 2], self.hits[n - 1]);
        let first = self.hits[0];
        if a.y == b.y {
            self.potential_targets.sort_by_key(|t| t.y != first.y);
        } else if a.x == b.x {
            self.potential_targets.sort_by_key(|t| t.x != first.x);
        }
    }

    /// The orthogonally-connected block of recorded hits around `shot`.
    /// Under the no-touch placement rule this is exactly the destroyed ship,
    /// never a cell of a still-live one.
    fn destroyed_block(&self, shot: Coord) -> Vec<Coord> {
        let mut block = vec![shot];
        let mut frontier = vec![shot];
        while let Some(cell) = frontier.pop() {
            for &h in &self.hits {
                if !block.contains(&h) && h.touches(cell) {
                    block.push(h);
                    frontier.push(h);
                }
            }
        }
        block
    }
}

impl Default for MediumStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for MediumStrategy {
    fn select_target(&mut self, rng: &mut SmallRng, _board: &Board) -> Option<Coord> {
        if self.candidates.is_empty() {
            return None;
        }

        if self.hunting {
            if let Some(&last) = self.hits.last() {
                self.enqueue_adjacent(last);
                self.prioritize_axis();
                if !self.potential_targets.is_empty() {
                    let shot = self.potential_targets.remove(0);
                    if self.candidates.remove(shot) {
                        return Some(shot);
                    }
                    // stale queue head; fall back to the search phase
                }
            }
        }

        self.candidates
            .take_random_where(rng, |c| c.parity_even())
            .or_else(|| self.candidates.take_random(rng))
    }

    fn handle_shot_result(&mut self, shot: Coord, outcome: CellState) {
        match outcome {
            CellState::Hit => {
                self.hits.push(shot);
                self.hunting = true;
            }
            CellState::Destroyed => {
                let block = self.destroyed_block(shot);
                for &cell in &block {
                    self.candidates.purge_neighborhood(cell);
                }
                self.potential_targets
                    .retain(|t| !block.iter().any(|&cell| cell.touches(*t)));
                self.hits.retain(|h| !block.contains(h));
                self.hunting = !self.hits.is_empty();
            }
            CellState::Miss => {
                self.potential_targets.retain(|&t| t != shot);
            }
            CellState::Empty | CellState::Ship => {}
        }
    }

    fn exclude(&mut self, at: Coord) {
        self.candidates.remove(at);
    }

    fn reset(&mut self) {
        self.candidates = CandidateSet::full_grid();
        self.hits.clear();
        self.potential_targets.clear();
        self.hunting = false;
    }
}
