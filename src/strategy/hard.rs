use log::debug;
use rand::rngs::SmallRng;

use crate::board::Board;
use crate::common::{CellState, Coord, CARDINALS};
use crate::config::INTEL_SHOT_INTERVAL;
use crate::strategy::{CandidateSet, Strategy};

/// How far the opposite-direction walk may step out from the first hit
/// before giving up.
const OPPOSITE_WALK_CAP: usize = 10;

/// Heatmap weight for checkerboard cells.
const PARITY_WEIGHT: i32 = 2;

/// Heatmap weight per `Hit` cell in a candidate's 8-neighborhood.
const HIT_NEIGHBOR_WEIGHT: i32 = 40;

/// Directional hunt over a scored heatmap.
///
/// After a first hit the four cardinal offsets around it are probed one per
/// call; a second hit locks the direction, which is then extended from the
/// most recent hit. A miss (or a dead end) flips the walk to the opposite
/// side of the first hit. Destroying a ship resets the hunt and purges the
/// destroyed cell's neighborhood from the candidates.
///
/// Outside a hunt, every remaining candidate is scored: parity bonus, open
/// water in the four cardinals (longer runs fit longer ships), and a heavy
/// bonus next to unresolved hits. With intel enabled, every
/// `INTEL_SHOT_INTERVAL`th call skips all of that and fires at a known ship
/// cell. That knob is what puts Hard above pure inference.
pub struct HardStrategy {
    candidates: CandidateSet,
    first_hit: Option<Coord>,
    last_hit: Option<Coord>,
    current_dir: Option<(i32, i32)>,
    tried_dirs: Vec<(i32, i32)>,
    searching_direction: bool,
    direction_found: bool,
    calls: u32,
    intel_enabled: bool,
}

impl HardStrategy {
    pub fn new() -> Self {
        Self::with_intel(true)
    }

    /// Construct with the direct-intel knob set explicitly. Disabling it
    /// leaves a strategy that plays on observed outcomes alone.
    pub fn with_intel(intel_enabled: bool) -> Self {
        HardStrategy {
            candidates: CandidateSet::full_grid(),
            first_hit: None,
            last_hit: None,
            current_dir: None,
            tried_dirs: Vec::new(),
            searching_direction: false,
            direction_found: false,
            calls: 0,
            intel_enabled,
        }
    }

    fn reset_hunt(&mut self) {
        self.first_hit = None;
        self.last_hit = None;
        self.current_dir = None;
        self.tried_dirs.clear();
        self.searching_direction = false;
        self.direction_found = false;
    }

    /// Fire at a known ship cell still in the candidate set, if any.
    fn intel_shot(&mut self, board: &Board) -> Option<Coord> {
        let shot = self
            .candidates
            .iter()
            .find(|&c| board.state_at(c) == Some(CellState::Ship))?;
        self.candidates.remove(shot);
        debug!("intel shot at {}", shot);
        Some(shot)
    }

    /// Probe the next untried cardinal offset around the first hit. Offsets
    /// that are off-board or already fired at still count as tried.
    fn probe_next_direction(&mut self) -> Option<Coord> {
        let first = self.first_hit?;
        for dir in CARDINALS {
            if self.tried_dirs.contains(&dir) {
                continue;
            }
            self.tried_dirs.push(dir);
            let probe = first.offset(dir.0, dir.1);
            if self.candidates.remove(probe) {
                self.current_dir = Some(dir);
                return Some(probe);
            }
        }
        None
    }

    /// Walk out from the first hit in the opposite of the current direction
    /// until an unfired in-bounds cell turns up, capped at
    /// `OPPOSITE_WALK_CAP` steps.
    fn probe_opposite_direction(&mut self) -> Option<Coord> {
        let first = self.first_hit?;
        let (dx, dy) = self.current_dir?;
        let opposite = (-dx, -dy);
        if self.tried_dirs.contains(&opposite) {
            return None;
        }
        let mut shot = first.offset(opposite.0, opposite.1);
        let mut steps = 0;
        while steps < OPPOSITE_WALK_CAP && !(shot.in_bounds() && self.candidates.contains(shot)) {
            shot = shot.offset(opposite.0, opposite.1);
            steps += 1;
        }
        if self.candidates.remove(shot) {
            self.tried_dirs.push(opposite);
            self.current_dir = Some(opposite);
            self.direction_found = true;
            return Some(shot);
        }
        None
    }

    /// Score every candidate and fire at the best one; earlier candidates
    /// win ties. Falls back to a uniform draw if the set empties mid-scan.
    fn heatmap_shot(&mut self, rng: &mut SmallRng, board: &Board) -> Option<Coord> {
        let mut best: Option<(Coord, i32)> = None;
        for cell in self.candidates.iter() {
            let mut score = if cell.parity_even() { PARITY_WEIGHT } else { 0 };
            for (dx, dy) in CARDINALS {
                score += open_run(board, cell, dx, dy);
            }
            for n in cell.neighbors8() {
                if board.state_at(n) == Some(CellState::Hit) {
                    score += HIT_NEIGHBOR_WEIGHT;
                }
            }
            match best {
                Some((_, top)) if top >= score => {}
                _ => best = Some((cell, score)),
            }
        }
        match best {
            Some((shot, _)) => {
                self.candidates.remove(shot);
                Some(shot)
            }
            None => self.candidates.take_random(rng),
        }
    }
}

/// Contiguous run of unresolved (`Empty` or `Ship`) cells starting one step
/// from `from`, stopping at the board edge or any resolved cell.
fn open_run(board: &Board, from: Coord, dx: i32, dy: i32) -> i32 {
    let mut run = 0;
    let mut cur = from.offset(dx, dy);
    while matches!(
        board.state_at(cur),
        Some(CellState::Empty | CellState::Ship)
    ) {
        run += 1;
        cur = cur.offset(dx, dy);
    }
    run
}

impl Default for HardStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for HardStrategy {
    fn select_target(&mut self, rng: &mut SmallRng, board: &Board) -> Option<Coord> {
        if self.candidates.is_empty() {
            return None;
        }

        self.calls += 1;
        if self.intel_enabled && self.calls % INTEL_SHOT_INTERVAL == 0 {
            if let Some(shot) = self.intel_shot(board) {
                return Some(shot);
            }
        }

        if self.first_hit.is_some() && self.searching_direction && !self.direction_found {
            if let Some(shot) = self.probe_next_direction() {
                return Some(shot);
            }
        }

        if self.direction_found {
            if let (Some((dx, dy)), Some(last)) = (self.current_dir, self.last_hit) {
                let next = last.offset(dx, dy);
                if self.candidates.remove(next) {
                    return Some(next);
                }
                if let Some(shot) = self.probe_opposite_direction() {
                    return Some(shot);
                }
            }
        }

        self.heatmap_shot(rng, board)
    }

    fn handle_shot_result(&mut self, shot: Coord, outcome: CellState) {
        match outcome {
            CellState::Hit => {
                if self.first_hit.is_none() {
                    self.first_hit = Some(shot);
                    self.last_hit = Some(shot);
                    self.searching_direction = true;
                    self.direction_found = false;
                } else if let Some(dir) = self.current_dir {
                    self.last_hit = Some(shot);
                    if !self.direction_found {
                        debug!("direction locked: ({}, {})", dir.0, dir.1);
                    }
                    self.direction_found = true;
                }
            }
            CellState::Miss => {
                if self.direction_found && self.current_dir.is_some() {
                    // dead end; re-probe from the first hit, opposite side
                    self.searching_direction = true;
                    self.direction_found = false;
                }
            }
            CellState::Destroyed => {
                self.reset_hunt();
                self.candidates.purge_neighborhood(shot);
            }
            CellState::Empty | CellState::Ship => {}
        }
    }

    fn exclude(&mut self, at: Coord) {
        self.candidates.remove(at);
    }

    fn reset(&mut self) {
        self.candidates = CandidateSet::full_grid();
        self.reset_hunt();
        self.calls = 0;
    }
}
