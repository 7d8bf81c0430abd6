//! Core domain types for the tic-tac-toe timeline.

use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

/// An immutable board snapshot.
///
/// The side length is fixed at construction; squares are stored in
/// row-major order. Placing a mark never mutates a board, it produces
/// a fresh snapshot (see [`crate::rules::apply_move`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Side length.
    size: usize,
    /// Squares in row-major order (0..size*size).
    squares: Vec<Square>,
}

impl Board {
    /// Side length of the classic game.
    pub const DEFAULT_SIZE: usize = 3;

    /// Creates a new empty board with the given side length.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            squares: vec![Square::Empty; size * size],
        }
    }

    /// Side length of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of squares on the board.
    pub fn len(&self) -> usize {
        self.squares.len()
    }

    /// Returns true if no square has been played yet.
    pub fn is_blank(&self) -> bool {
        self.squares.iter().all(|&s| s == Square::Empty)
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: usize) -> Option<Square> {
        self.squares.get(pos).copied()
    }

    /// Checks if the square at the given position is empty.
    pub fn is_empty(&self, pos: usize) -> bool {
        matches!(self.get(pos), Some(Square::Empty))
    }

    /// Checks if every square is occupied.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|&s| s != Square::Empty)
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    /// Returns a copy of this board with `square` placed at `pos`.
    ///
    /// Callers go through [`crate::rules::apply_move`], which validates
    /// the position first.
    pub(crate) fn with_square(&self, pos: usize, square: Square) -> Self {
        let mut squares = self.squares.clone();
        squares[pos] = square;
        Self {
            size: self.size,
            squares,
        }
    }

    /// Formats the board as a human-readable grid.
    pub fn render(&self) -> String {
        let mut result = String::new();
        let rule: String = vec!["-"; self.size].join("+");
        for row in 0..self.size {
            for col in 0..self.size {
                match self.squares[row * self.size + col] {
                    Square::Empty => result.push('.'),
                    Square::Occupied(player) => result.push_str(&player.to_string()),
                }
                if col < self.size - 1 {
                    result.push('|');
                }
            }
            if row < self.size - 1 {
                result.push('\n');
                result.push_str(&rule);
                result.push('\n');
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SIZE)
    }
}

/// A decided game: the winner and the line that won it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Win {
    /// The winning player.
    pub player: Player,
    /// Positions of the winning line, in board order.
    pub line: Vec<usize>,
}

/// Current status of the game, derived from the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Win),
    /// Game ended in a draw.
    Draw,
}

impl GameStatus {
    /// Returns true if no further moves are accepted.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// Returns the win if there is one.
    pub fn win(&self) -> Option<&Win> {
        match self {
            GameStatus::Won(win) => Some(win),
            _ => None,
        }
    }
}
