use flotilla::{auto_place, place_fleet, Board, CellState, Coord, BOARD_SIZE, FLEET_SIZES, NUM_SHIPS};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn ship_cell_count(board: &Board) -> usize {
    let mut count = 0;
    for x in 0..BOARD_SIZE {
        for y in 0..BOARD_SIZE {
            if board.state_at(Coord::new(x, y)) == Some(CellState::Ship) {
                count += 1;
            }
        }
    }
    count
}

fn board_is_empty(board: &Board) -> bool {
    if !board.ships().is_empty() {
        return false;
    }
    for x in 0..BOARD_SIZE {
        for y in 0..BOARD_SIZE {
            if board.state_at(Coord::new(x, y)) != Some(CellState::Empty) {
                return false;
            }
        }
    }
    true
}

#[test]
fn test_auto_place_all_or_nothing() {
    let mut rng = SmallRng::seed_from_u64(7);
    let mut board = Board::new();
    let total_cells: usize = FLEET_SIZES.iter().sum();

    for _ in 0..1000 {
        if auto_place(&mut board, &mut rng) {
            assert_eq!(board.ships().len(), NUM_SHIPS);
            assert!(!board.has_adjacent_ships());
            assert_eq!(ship_cell_count(&board), total_cells);

            let mut placed: Vec<usize> = board.ships().iter().map(|s| s.size()).collect();
            placed.sort_unstable_by(|a, b| b.cmp(a));
            let mut expected = FLEET_SIZES.to_vec();
            expected.sort_unstable_by(|a, b| b.cmp(a));
            assert_eq!(placed, expected);

            for ship in board.ships() {
                assert_eq!(ship.cells().len(), ship.size());
                for &cell in ship.cells() {
                    assert!(cell.in_bounds());
                }
            }
        } else {
            assert!(board_is_empty(&board));
        }
    }
}

#[test]
fn test_place_fleet_retries_until_success() {
    let mut rng = SmallRng::seed_from_u64(99);
    for _ in 0..50 {
        let mut board = Board::new();
        place_fleet(&mut board, &mut rng);
        assert_eq!(board.ships().len(), NUM_SHIPS);
        assert!(!board.has_adjacent_ships());
    }
}
