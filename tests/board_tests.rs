use flotilla::{Board, CellState, Coord, Orientation, BOARD_SIZE};

fn snapshot(board: &Board) -> Vec<CellState> {
    let mut states = Vec::new();
    for x in 0..BOARD_SIZE {
        for y in 0..BOARD_SIZE {
            states.push(board.state_at(Coord::new(x, y)).unwrap());
        }
    }
    states
}

#[test]
fn test_place_hit_and_sink() {
    let mut board = Board::new();
    assert!(board.place_ship(3, Orientation::Horizontal, Coord::new(0, 0)));

    assert_eq!(board.resolve_shot(Coord::new(0, 0)), CellState::Hit);
    assert_eq!(board.resolve_shot(Coord::new(1, 0)), CellState::Hit);
    assert!(!board.all_ships_destroyed());

    assert_eq!(board.resolve_shot(Coord::new(2, 0)), CellState::Destroyed);
    for x in 0..3 {
        assert_eq!(
            board.state_at(Coord::new(x, 0)),
            Some(CellState::Destroyed)
        );
    }
    assert!(board.all_ships_destroyed());
}

#[test]
fn test_sink_auto_surrounds_with_misses() {
    let mut board = Board::new();
    assert!(board.place_ship(2, Orientation::Vertical, Coord::new(4, 4)));
    board.resolve_shot(Coord::new(4, 4));
    assert_eq!(board.resolve_shot(Coord::new(4, 5)), CellState::Destroyed);

    // every empty neighbor of the ship reads Miss afterwards
    for x in 3..=5 {
        for y in 3..=6 {
            let at = Coord::new(x, y);
            let expected = if x == 4 && (4..=5).contains(&y) {
                CellState::Destroyed
            } else {
                CellState::Miss
            };
            assert_eq!(board.state_at(at), Some(expected), "at {}", at);
        }
    }
}

#[test]
fn test_repeat_shot_is_idempotent() {
    let mut board = Board::new();
    assert!(board.place_ship(2, Orientation::Horizontal, Coord::new(0, 0)));

    assert_eq!(board.resolve_shot(Coord::new(0, 0)), CellState::Hit);
    let after_first = snapshot(&board);

    // re-query returns the recorded state and changes nothing
    assert_eq!(board.resolve_shot(Coord::new(0, 0)), CellState::Hit);
    assert_eq!(snapshot(&board), after_first);

    // the repeat did not advance the hit count: one more hit sinks it
    assert_eq!(board.resolve_shot(Coord::new(1, 0)), CellState::Destroyed);
}

#[test]
fn test_out_of_bounds_shot_is_a_silent_miss() {
    let mut board = Board::new();
    assert!(board.place_ship(1, Orientation::Horizontal, Coord::new(9, 9)));
    let before = snapshot(&board);

    assert_eq!(board.resolve_shot(Coord::new(-1, 3)), CellState::Miss);
    assert_eq!(board.resolve_shot(Coord::new(3, 10)), CellState::Miss);
    assert_eq!(snapshot(&board), before);
}

#[test]
fn test_placement_rejects_touching_ships() {
    let mut board = Board::new();
    assert!(board.place_ship(3, Orientation::Horizontal, Coord::new(0, 0)));

    // orthogonally adjacent
    assert!(!board.place_ship(1, Orientation::Horizontal, Coord::new(3, 0)));
    // diagonally adjacent
    assert!(!board.place_ship(1, Orientation::Horizontal, Coord::new(3, 1)));
    // far enough away
    assert!(board.place_ship(1, Orientation::Horizontal, Coord::new(4, 0)));
}

#[test]
fn test_failed_placement_leaves_board_unchanged() {
    let mut board = Board::new();
    assert!(board.place_ship(3, Orientation::Horizontal, Coord::new(0, 0)));
    let before = snapshot(&board);

    assert!(!board.place_ship(2, Orientation::Horizontal, Coord::new(3, 0)));
    assert_eq!(snapshot(&board), before);
    assert_eq!(board.ships().len(), 1);
}

#[test]
fn test_placement_violations_adjacency_scenario() {
    let mut board = Board::new();
    assert!(board.place_ship(3, Orientation::Horizontal, Coord::new(0, 0)));

    let violations =
        board.placement_violations(2, Orientation::Horizontal, Coord::new(3, 0));
    assert!(!violations.is_empty());
    assert!(violations.contains(&Coord::new(3, 0)));

    let violations =
        board.placement_violations(2, Orientation::Horizontal, Coord::new(5, 0));
    assert!(violations.is_empty());
}

#[test]
fn test_placement_violations_out_of_bounds() {
    let board = Board::new();
    let violations =
        board.placement_violations(2, Orientation::Horizontal, Coord::new(9, 0));
    assert_eq!(violations, vec![Coord::new(10, 0)]);
}

#[test]
fn test_has_adjacent_ships_flags_unchecked_fleets() {
    let mut board = Board::new();
    assert!(board.place_ship_unchecked(1, Orientation::Horizontal, Coord::new(0, 0)));
    assert!(board.place_ship_unchecked(1, Orientation::Horizontal, Coord::new(1, 1)));
    assert!(board.has_adjacent_ships());

    let mut legal = Board::new();
    assert!(legal.place_ship(1, Orientation::Horizontal, Coord::new(0, 0)));
    assert!(legal.place_ship(1, Orientation::Horizontal, Coord::new(5, 5)));
    assert!(!legal.has_adjacent_ships());
}

#[test]
fn test_place_ship_unchecked_still_rejects_overlap() {
    let mut board = Board::new();
    assert!(board.place_ship_unchecked(3, Orientation::Horizontal, Coord::new(0, 0)));
    assert!(!board.place_ship_unchecked(2, Orientation::Vertical, Coord::new(1, 0)));
    assert!(!board.place_ship_unchecked(2, Orientation::Horizontal, Coord::new(9, 5)));
}

#[test]
fn test_all_ships_destroyed_turns_true_once() {
    let mut board = Board::new();
    assert!(board.place_ship(1, Orientation::Horizontal, Coord::new(0, 0)));
    assert!(board.place_ship(1, Orientation::Horizontal, Coord::new(5, 5)));

    assert!(!board.all_ships_destroyed());
    board.resolve_shot(Coord::new(0, 0));
    assert!(!board.all_ships_destroyed());
    board.resolve_shot(Coord::new(5, 5));
    assert!(board.all_ships_destroyed());
}
