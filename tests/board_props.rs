use flotilla::{place_fleet, Board, CellState, Coord, BOARD_SIZE, NUM_SHIPS};
use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

fn snapshot(board: &Board) -> Vec<CellState> {
    let mut states = Vec::new();
    for x in 0..BOARD_SIZE {
        for y in 0..BOARD_SIZE {
            states.push(board.state_at(Coord::new(x, y)).unwrap());
        }
    }
    states
}

fn random_board(seed: u64) -> Board {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut board = Board::new();
    place_fleet(&mut board, &mut rng);
    board
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn resolve_shot_idempotent(seed in any::<u64>(), x in 0..BOARD_SIZE, y in 0..BOARD_SIZE) {
        let mut board = random_board(seed);
        let first = board.resolve_shot(Coord::new(x, y));
        let after = snapshot(&board);
        let second = board.resolve_shot(Coord::new(x, y));
        prop_assert_eq!(first, second);
        prop_assert_eq!(snapshot(&board), after);
    }

    #[test]
    fn placed_fleets_never_touch(seed in any::<u64>()) {
        let board = random_board(seed);
        prop_assert_eq!(board.ships().len(), NUM_SHIPS);
        prop_assert!(!board.has_adjacent_ships());
        for ship in board.ships() {
            for &cell in ship.cells() {
                prop_assert!(cell.in_bounds());
            }
        }
    }

    #[test]
    fn out_of_bounds_shots_never_mutate(seed in any::<u64>(), x in BOARD_SIZE..2 * BOARD_SIZE, y in -BOARD_SIZE..0) {
        let mut board = random_board(seed);
        let before = snapshot(&board);
        prop_assert_eq!(board.resolve_shot(Coord::new(x, 0)), CellState::Miss);
        prop_assert_eq!(board.resolve_shot(Coord::new(0, y)), CellState::Miss);
        prop_assert_eq!(board.resolve_shot(Coord::new(x, y)), CellState::Miss);
        prop_assert_eq!(snapshot(&board), before);
    }

    #[test]
    fn destroyed_ships_stay_destroyed(seed in any::<u64>()) {
        let mut board = random_board(seed);
        let mut rng = SmallRng::seed_from_u64(seed ^ 0x9e3779b9);
        // sink everything in random order
        let mut cells: Vec<Coord> = Vec::new();
        for ship in board.ships() {
            cells.extend_from_slice(ship.cells());
        }
        while !cells.is_empty() {
            let idx = rng.random_range(0..cells.len());
            let at = cells.swap_remove(idx);
            board.resolve_shot(at);
        }
        prop_assert!(board.all_ships_destroyed());
        for ship in board.ships() {
            prop_assert!(ship.is_destroyed());
            prop_assert_eq!(ship.hits(), ship.size());
            for &cell in ship.cells() {
                prop_assert_eq!(board.state_at(cell), Some(CellState::Destroyed));
            }
        }
    }
}
