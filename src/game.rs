//! Match orchestration: session state for human-facing games and an
//! AI-vs-AI duel runner.

use log::info;
use rand::rngs::SmallRng;
use serde::Serialize;

use crate::board::Board;
use crate::common::{CellState, Coord};
use crate::config::{Difficulty, GameMode, GameSettings, BOARD_SIZE};
use crate::placement::place_fleet;
use crate::ship::Orientation;
use crate::strategy::{strategy_for, Strategy};

/// One of the two seats in a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Side {
    One,
    Two,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::One => Side::Two,
            Side::Two => Side::One,
        }
    }

    const fn index(self) -> usize {
        match self {
            Side::One => 0,
            Side::Two => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStatus {
    InProgress,
    Won(Side),
}

/// One match. Side One is the local player; in single-player mode Side Two
/// is the computer, with its fleet pre-placed and a strategy bound to the
/// selected difficulty. In hotseat mode both boards start empty for manual
/// placement and no strategy exists.
///
/// Turn rules are the caller's: a `Miss` ends the firing player's turn,
/// `Hit`/`Destroyed` grant another shot. `ai_turn` applies them for the
/// computer seat.
pub struct Session {
    settings: GameSettings,
    boards: [Board; 2],
    strategy: Option<Box<dyn Strategy>>,
    status: MatchStatus,
}

impl Session {
    pub fn new(settings: GameSettings, rng: &mut SmallRng) -> Self {
        let mut boards = [Board::new(), Board::new()];
        let strategy = match settings.mode {
            GameMode::SinglePlayer => {
                place_fleet(&mut boards[Side::Two.index()], rng);
                Some(strategy_for(settings.difficulty))
            }
            GameMode::Hotseat => None,
        };
        Session {
            settings,
            boards,
            strategy,
            status: MatchStatus::InProgress,
        }
    }

    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    pub fn status(&self) -> MatchStatus {
        self.status
    }

    pub fn board(&self, side: Side) -> &Board {
        &self.boards[side.index()]
    }

    /// Mutable board access for the placement phase.
    pub fn board_mut(&mut self, side: Side) -> &mut Board {
        &mut self.boards[side.index()]
    }

    /// Violations a proposed placement would incur on `side`'s board, when
    /// placement hints are enabled in the settings.
    pub fn placement_hints(
        &self,
        side: Side,
        size: usize,
        orientation: Orientation,
        origin: Coord,
    ) -> Option<Vec<Coord>> {
        self.settings
            .placement_hints
            .then(|| self.boards[side.index()].placement_violations(size, orientation, origin))
    }

    /// Resolve `shooter`'s shot against the opposing board and update the
    /// match status.
    pub fn fire(&mut self, shooter: Side, at: Coord) -> CellState {
        let target = shooter.opponent().index();
        let outcome = self.boards[target].resolve_shot(at);
        if !self.boards[target].ships().is_empty()
            && self.boards[target].all_ships_destroyed()
            && self.status == MatchStatus::InProgress
        {
            self.status = MatchStatus::Won(shooter);
        }
        outcome
    }

    /// Run the computer's whole turn: keep firing while shots land, stop on
    /// the first miss, an exhausted strategy, or match end. Returns the
    /// shots taken with their outcomes, in order.
    pub fn ai_turn(&mut self, rng: &mut SmallRng) -> Vec<(Coord, CellState)> {
        let mut shots = Vec::new();
        let Some(strategy) = self.strategy.as_mut() else {
            return shots;
        };
        let player = Side::One.index();
        while self.status == MatchStatus::InProgress {
            let Some(shot) = strategy.select_target(rng, &self.boards[player]) else {
                break;
            };
            let outcome = self.boards[player].resolve_shot(shot);
            strategy.handle_shot_result(shot, outcome);
            shots.push((shot, outcome));
            if !self.boards[player].ships().is_empty() && self.boards[player].all_ships_destroyed()
            {
                self.status = MatchStatus::Won(Side::Two);
                break;
            }
            if outcome == CellState::Miss {
                break;
            }
        }
        shots
    }

    /// Replace the computer's strategy mid-match. The new instance absorbs
    /// every cell already resolved on the player's board so it never
    /// re-fires there.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        if self.strategy.is_none() {
            return;
        }
        let mut strategy = strategy_for(difficulty);
        let player = &self.boards[Side::One.index()];
        for x in 0..BOARD_SIZE {
            for y in 0..BOARD_SIZE {
                let at = Coord::new(x, y);
                if !matches!(player.state_at(at), Some(CellState::Empty | CellState::Ship)) {
                    strategy.exclude(at);
                }
            }
        }
        self.settings.difficulty = difficulty;
        self.strategy = Some(strategy);
    }
}

/// Summary of one AI-vs-AI duel.
#[derive(Debug, Clone, Serialize)]
pub struct DuelReport {
    /// `None` when both strategies exhausted their candidates without a
    /// kill, which only happens on degenerate boards.
    pub winner: Option<Side>,
    /// Shots fired by each side.
    pub shots: [usize; 2],
    /// Full rounds played.
    pub turns: usize,
}

/// Pit two strategies against each other on freshly placed fleets, honoring
/// the extra-shot rule, and report the result.
pub fn run_duel(rng: &mut SmallRng, one: Difficulty, two: Difficulty) -> DuelReport {
    let mut boards = [Board::new(), Board::new()];
    place_fleet(&mut boards[0], rng);
    place_fleet(&mut boards[1], rng);
    let mut strategies = [strategy_for(one), strategy_for(two)];

    let mut shots = [0usize; 2];
    let mut turns = 0usize;
    let mut winner = None;

    'duel: loop {
        turns += 1;
        let mut any_shot = false;
        for attacker in 0..2 {
            let defender = 1 - attacker;
            loop {
                let Some(shot) = strategies[attacker].select_target(rng, &boards[defender]) else {
                    break;
                };
                any_shot = true;
                shots[attacker] += 1;
                let outcome = boards[defender].resolve_shot(shot);
                strategies[attacker].handle_shot_result(shot, outcome);
                if boards[defender].all_ships_destroyed() {
                    winner = Some(if attacker == 0 { Side::One } else { Side::Two });
                    break 'duel;
                }
                if outcome == CellState::Miss {
                    break;
                }
            }
        }
        if !any_shot {
            break;
        }
    }

    info!(
        "duel over after {} rounds: winner {:?}, shots {:?}",
        turns, winner, shots
    );
    DuelReport {
        winner,
        shots,
        turns,
    }
}
