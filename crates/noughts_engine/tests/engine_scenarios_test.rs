//! End-to-end scenarios against the public engine API.

use noughts_engine::{
    evaluate, select, validate, Board, Cell, Coordinate, GameOutcome, InvalidMove, Player,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Validates and applies each `(column, row)` in turn, alternating from X.
fn play(moves: &[(usize, usize)]) -> Board {
    let mut board = Board::new();
    let mut player = Player::X;
    for &(column, row) in moves {
        let coord = Coordinate::new(column, row);
        validate(&board, coord).expect("Scripted move should be legal");
        board.set(coord, player).expect("Validated move should apply");
        player = player.opponent();
    }
    board
}

#[test]
fn test_left_column_win() {
    // X A1, O B1, X A2, O B2, X A3
    let board = play(&[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
    assert_eq!(evaluate(&board), GameOutcome::Win(Player::X));
}

#[test]
fn test_game_is_open_until_the_winning_move() {
    let board = play(&[(0, 0), (1, 0), (0, 1), (1, 1)]);
    assert_eq!(evaluate(&board), GameOutcome::InProgress);
}

#[test]
fn test_alternating_fill_without_line_is_draw() {
    // x o x / x o o / o x x
    let board = play(&[
        (0, 0),
        (1, 0),
        (2, 0),
        (1, 1),
        (0, 1),
        (2, 1),
        (1, 2),
        (0, 2),
        (2, 2),
    ]);
    assert!(board.empty_coordinates().is_empty());
    assert_eq!(evaluate(&board), GameOutcome::Draw);
}

#[test]
fn test_off_board_column_rejected() {
    let board = Board::new();
    let coord = Coordinate::new(3, 0);
    assert_eq!(validate(&board, coord), Err(InvalidMove::OutOfRange(coord)));
}

#[test]
fn test_occupied_corner_rejected() {
    let mut board = Board::new();
    board.set(Coordinate::new(0, 0), Player::X).unwrap();
    assert_eq!(
        validate(&board, Coordinate::new(0, 0)),
        Err(InvalidMove::CellOccupied(Coordinate::new(0, 0)))
    );
}

#[test]
fn test_computer_takes_last_empty_cell() {
    let x = Cell::Occupied(Player::X);
    let o = Cell::Occupied(Player::O);
    let board = Board::from_rows([[x, o, x], [x, o, o], [o, x, Cell::Empty]]);

    let mut rng = StdRng::from_os_rng();
    for _ in 0..20 {
        assert_eq!(select(&board, &mut rng), Ok(Coordinate::new(2, 2)));
    }
}

#[test]
fn test_win_iff_a_line_is_complete() {
    // Every board reachable from alternating play, bounded to six moves.
    fn explore(board: &Board, player: Player, depth: usize) {
        let has_line = noughts_engine::rules::LINES.iter().any(|line| {
            let cells: Vec<Cell> = line.iter().map(|&c| board.get(c).unwrap()).collect();
            cells[0] != Cell::Empty && cells.iter().all(|&c| c == cells[0])
        });
        let outcome = evaluate(board);
        assert_eq!(outcome.winner().is_some(), has_line, "{:?}", board);
        if outcome == GameOutcome::Draw {
            assert!(board.is_full());
        }
        if outcome.is_over() || depth == 0 {
            return;
        }
        for coord in board.empty_coordinates() {
            let mut next = board.clone();
            next.set(coord, player).unwrap();
            explore(&next, player.opponent(), depth - 1);
        }
    }

    explore(&Board::new(), Player::X, 6);
}
