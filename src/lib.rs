//! Targeting engine for a Battleship-style game: board and fleet state,
//! randomized placement, and the opponent strategies that decide where to
//! fire next.

mod board;
mod common;
mod config;
mod game;
mod logging;
mod placement;
mod ship;
pub mod strategy;

pub use board::Board;
pub use common::{CellState, Coord, CARDINALS};
pub use config::{
    Difficulty, GameMode, GameSettings, BOARD_SIZE, FLEET_SIZES, INTEL_SHOT_INTERVAL, NUM_SHIPS,
    PLACEMENT_ATTEMPTS,
};
pub use game::{run_duel, DuelReport, MatchStatus, Session, Side};
pub use logging::init_logging;
pub use placement::{auto_place, place_fleet};
pub use ship::{Orientation, Ship};
pub use strategy::{
    strategy_for, CandidateSet, EasyStrategy, HardStrategy, MediumStrategy, Strategy,
};
