//! Randomized placement of the standard ten-ship fleet.

use log::debug;
use rand::Rng;

use crate::board::Board;
use crate::common::Coord;
use crate::config::{BOARD_SIZE, FLEET_SIZES, PLACEMENT_ATTEMPTS};
use crate::ship::Orientation;

/// Clear the board and place the fixed fleet at random legal positions.
///
/// Each ship gets up to `PLACEMENT_ATTEMPTS` random (origin, orientation)
/// draws; the first legal one wins. If any ship exhausts its draws the whole
/// operation aborts, the board is cleared again and `false` is returned.
/// The standard fleet almost always fits, so a `false` here is a spurious
/// cap exhaustion and callers retry.
pub fn auto_place<R: Rng>(board: &mut Board, rng: &mut R) -> bool {
    board.clear();
    for &size in FLEET_SIZES.iter() {
        let mut placed = false;
        for _ in 0..PLACEMENT_ATTEMPTS {
            let orientation = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let origin = Coord::new(
                rng.random_range(0..BOARD_SIZE),
                rng.random_range(0..BOARD_SIZE),
            );
            if board.place_ship(size, orientation, origin) {
                placed = true;
                break;
            }
        }
        if !placed {
            debug!("fleet placement ran out of attempts on size {}", size);
            board.clear();
            return false;
        }
    }
    true
}

/// Retry `auto_place` until it succeeds. This is how the computer-controlled
/// fleet is built.
pub fn place_fleet<R: Rng>(board: &mut Board, rng: &mut R) {
    while !auto_place(board, rng) {}
}
