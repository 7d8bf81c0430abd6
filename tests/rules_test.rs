//! Tests for the pure game rules.

use strum::IntoEnumIterator;
use tictactoe_replay::rules;
use tictactoe_replay::{Board, GameStatus, MoveError, Player, Square};

mod common;

/// Classic 8 winning lines for a 3x3 board, in scan order.
const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Builds a board by applying marks in order, panicking on rejects.
fn board_with(moves: &[(Player, usize)]) -> Board {
    let mut board = Board::default();
    for &(player, pos) in moves {
        board = rules::apply_move(&board, pos, player).expect("legal move");
    }
    board
}

#[test]
fn test_opponent_is_involution() {
    for player in Player::iter() {
        assert_ne!(player.opponent(), player);
        assert_eq!(player.opponent().opponent(), player);
    }
}

#[test]
fn test_apply_move_returns_new_board() {
    common::init_tracing();
    let board = Board::default();
    let next = rules::apply_move(&board, 4, Player::X).expect("center is empty");

    // Input board untouched, output differs only at the played square.
    assert!(board.is_blank());
    assert_eq!(next.get(4), Some(Square::Occupied(Player::X)));
    for pos in (0..board.len()).filter(|&p| p != 4) {
        assert_eq!(next.get(pos), Some(Square::Empty));
    }
}

#[test]
fn test_apply_move_rejects_occupied_square() {
    let board = board_with(&[(Player::X, 4)]);
    let result = rules::apply_move(&board, 4, Player::O);
    assert_eq!(result, Err(MoveError::SquareOccupied(4)));
}

#[test]
fn test_apply_move_rejects_out_of_bounds() {
    let board = Board::default();
    let result = rules::apply_move(&board, 9, Player::X);
    assert_eq!(result, Err(MoveError::OutOfBounds { index: 9, len: 9 }));
}

#[test]
fn test_every_winning_line_is_detected() {
    for line in LINES {
        let moves: Vec<_> = line.iter().map(|&pos| (Player::O, pos)).collect();
        let board = board_with(&moves);

        let win = rules::winning_line(&board).expect("line should win");
        assert_eq!(win.player, Player::O);
        assert_eq!(win.line, line.to_vec());
    }
}

#[test]
fn test_no_winner_on_blank_or_mixed_board() {
    assert_eq!(rules::winning_line(&Board::default()), None);

    // Two in a row is not a win.
    let board = board_with(&[(Player::X, 0), (Player::X, 1), (Player::O, 2)]);
    assert_eq!(rules::winning_line(&board), None);
    assert_eq!(rules::status(&board), GameStatus::InProgress);
}

#[test]
fn test_winner_scan_order_is_deterministic() {
    // apply_move does not enforce turn order, so a board with two full
    // lines can be built directly; the scan reports rows before
    // columns and earlier rows first.
    let board = board_with(&[
        (Player::X, 0),
        (Player::X, 1),
        (Player::X, 2),
        (Player::O, 3),
        (Player::O, 4),
        (Player::O, 5),
    ]);
    let win = rules::winning_line(&board).expect("two full lines");
    assert_eq!(win.player, Player::X);
    assert_eq!(win.line, vec![0, 1, 2]);
}

#[test]
fn test_full_board_without_line_is_draw() {
    // X O X / X O O / O X X - no three in a row.
    let board = board_with(&[
        (Player::X, 0),
        (Player::O, 1),
        (Player::X, 2),
        (Player::X, 3),
        (Player::O, 4),
        (Player::O, 5),
        (Player::O, 6),
        (Player::X, 7),
        (Player::X, 8),
    ]);
    assert!(board.is_full());
    assert_eq!(rules::winning_line(&board), None);
    assert_eq!(rules::status(&board), GameStatus::Draw);
}

#[test]
fn test_diff_square_finds_the_played_square() {
    let prev = board_with(&[(Player::X, 0)]);
    let next = rules::apply_move(&prev, 4, Player::O).expect("empty square");

    let pos = rules::diff_square(&prev, &next).expect("one square differs");
    assert_eq!(pos, 4);
    assert_eq!(rules::row_col(pos, next.size()), (2, 2));
}

#[test]
fn test_diff_square_none_for_identical_or_divergent_boards() {
    let board = board_with(&[(Player::X, 0)]);
    assert_eq!(rules::diff_square(&board, &board), None);

    // More than one differing square: not successive snapshots.
    let far = board_with(&[(Player::X, 0), (Player::O, 1), (Player::X, 2)]);
    assert_eq!(rules::diff_square(&board, &far), None);

    // Size mismatch.
    assert_eq!(rules::diff_square(&board, &Board::new(4)), None);
}

#[test]
fn test_row_col_is_size_general() {
    assert_eq!(rules::row_col(0, 3), (1, 1));
    assert_eq!(rules::row_col(8, 3), (3, 3));
    // Same position index lands elsewhere on a wider board.
    assert_eq!(rules::row_col(5, 4), (2, 2));
}

#[test]
fn test_winning_line_on_larger_board() {
    // Anti-diagonal of a 4x4 board.
    let mut board = Board::new(4);
    for pos in [3, 6, 9, 12] {
        board = rules::apply_move(&board, pos, Player::X).expect("legal move");
    }
    let win = rules::winning_line(&board).expect("full anti-diagonal");
    assert_eq!(win.line, vec![3, 6, 9, 12]);
}

#[test]
fn test_board_render() {
    let board = board_with(&[(Player::X, 4), (Player::O, 6)]);
    assert_eq!(board.render(), ".|.|.\n-+-+-\n.|X|.\n-+-+-\nO|.|.");
}
