//! Game rules as pure functions over board snapshots.
//!
//! Nothing in this module holds state: every function maps input boards
//! to values, so rules stay testable in isolation from any timeline or
//! rendering concern.

use crate::error::MoveError;
use crate::types::{Board, GameStatus, Player, Square, Win};
use tracing::instrument;

/// Places `player`'s mark at `pos`, returning a new board.
///
/// The input board is left untouched. Terminal state is not checked
/// here; callers that care (see [`crate::Timeline::play`]) check
/// [`status`] first.
///
/// # Errors
///
/// Returns [`MoveError::OutOfBounds`] if `pos` is not on the board and
/// [`MoveError::SquareOccupied`] if the square is already taken.
#[instrument]
pub fn apply_move(board: &Board, pos: usize, player: Player) -> Result<Board, MoveError> {
    if pos >= board.len() {
        return Err(MoveError::OutOfBounds {
            index: pos,
            len: board.len(),
        });
    }
    if !board.is_empty(pos) {
        return Err(MoveError::SquareOccupied(pos));
    }
    Ok(board.with_square(pos, Square::Occupied(player)))
}

/// All winning lines for a board of side length `size`.
///
/// Rows first, then columns, then the main diagonal, then the
/// anti-diagonal. The order is fixed so winner detection is
/// deterministic; for size 3 this yields the classic 8 lines.
fn lines(size: usize) -> Vec<Vec<usize>> {
    let mut lines = Vec::with_capacity(2 * size + 2);
    for row in 0..size {
        lines.push((0..size).map(|col| row * size + col).collect());
    }
    for col in 0..size {
        lines.push((0..size).map(|row| row * size + col).collect());
    }
    lines.push((0..size).map(|i| i * size + i).collect());
    lines.push((0..size).map(|i| i * size + (size - 1 - i)).collect());
    lines
}

/// Checks the board for a winner.
///
/// Scans the winning lines in a fixed order and returns the first line
/// whose squares are all occupied by the same player, along with that
/// player. Under legal play at most one line can be full, so the scan
/// order is not observable beyond determinism.
pub fn winning_line(board: &Board) -> Option<Win> {
    for line in lines(board.size()) {
        let Some(Square::Occupied(player)) = board.get(line[0]) else {
            continue;
        };
        if line
            .iter()
            .all(|&pos| board.get(pos) == Some(Square::Occupied(player)))
        {
            return Some(Win { player, line });
        }
    }
    None
}

/// Derives the game status from a board.
pub fn status(board: &Board) -> GameStatus {
    if let Some(win) = winning_line(board) {
        GameStatus::Won(win)
    } else if board.is_full() {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}

/// Finds the single square where two successive snapshots differ.
///
/// Returns `None` when the boards are identical, and also when they
/// are not successive snapshots of one game (different sizes, or more
/// than one differing square) - a case a well-formed timeline never
/// produces.
pub fn diff_square(prev: &Board, next: &Board) -> Option<usize> {
    if prev.size() != next.size() {
        return None;
    }
    let mut diff = None;
    for (pos, (a, b)) in prev.squares().iter().zip(next.squares()).enumerate() {
        if a != b {
            if diff.is_some() {
                return None;
            }
            diff = Some(pos);
        }
    }
    diff
}

/// Converts a square position to 1-based (row, column) for display.
pub fn row_col(pos: usize, size: usize) -> (usize, usize) {
    (pos / size + 1, pos % size + 1)
}
