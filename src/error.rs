//! Error types for move application and history navigation.
//!
//! Both errors are local, recoverable conditions: a rejected call
//! leaves the game state exactly as it was.

use crate::types::Player;
use derive_more::{Display, Error};

/// Error that can occur when validating or applying a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// The position is not on the board.
    #[display("Position {index} is out of bounds (board has {len} squares)")]
    OutOfBounds {
        /// The offending position.
        index: usize,
        /// Number of squares on the board.
        len: usize,
    },

    /// The square at the position is already occupied.
    #[display("Square {_0} is already occupied")]
    SquareOccupied(#[error(not(source))] usize),

    /// It's not this player's turn.
    #[display("It is not {_0}'s turn")]
    WrongPlayer(#[error(not(source))] Player),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,
}

/// Error that can occur when jumping to a history entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum JumpError {
    /// The requested move index is not in the history.
    #[display("Move index {index} is out of range (history has {len} entries)")]
    IndexOutOfRange {
        /// The requested move index.
        index: usize,
        /// Number of history entries.
        len: usize,
    },
}
