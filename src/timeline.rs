//! The game timeline: board snapshots with a movable cursor.

use crate::error::{JumpError, MoveError};
use crate::rules;
use crate::types::{Board, GameStatus, Player};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Display order for the moves projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    /// Oldest move first.
    Ascending,
    /// Newest move first.
    Descending,
}

impl SortOrder {
    /// The opposite order.
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }
}

/// One entry of the moves projection, ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveEntry {
    /// Index of the history entry this row refers to.
    pub move_index: usize,
    /// True if the cursor is at this entry.
    pub current: bool,
    /// Display label ("Go to ..." or "You are at ...").
    pub label: String,
}

/// Ordered sequence of board snapshots forming the game's history,
/// plus a cursor marking the current position.
///
/// Entry 0 is always the empty board. Playing from a cursor that is
/// not the last entry discards every later snapshot before appending -
/// the history is a single timeline, not a branching tree. Jumping
/// only moves the cursor and never discards anything.
///
/// Whose turn it is is never stored; it is derived from the cursor
/// parity, so navigation can never desynchronize it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct Timeline {
    /// Board snapshots, oldest first.
    boards: Vec<Board>,
    /// Index of the current snapshot.
    cursor: usize,
    /// Display order for [`Timeline::moves`].
    order: SortOrder,
}

impl Timeline {
    /// Creates a timeline for a fresh game on a board of the given
    /// side length.
    #[instrument]
    pub fn new(size: usize) -> Self {
        Self {
            boards: vec![Board::new(size)],
            cursor: 0,
            order: SortOrder::Ascending,
        }
    }

    /// Number of history entries (always at least 1).
    pub fn len(&self) -> usize {
        self.boards.len()
    }

    /// The board at the cursor.
    pub fn current_board(&self) -> &Board {
        &self.boards[self.cursor]
    }

    /// The player to move, derived from cursor parity: X on even
    /// entries, O on odd.
    pub fn to_move(&self) -> Player {
        if self.cursor % 2 == 0 {
            Player::X
        } else {
            Player::O
        }
    }

    /// Status of the game at the cursor.
    pub fn status(&self) -> GameStatus {
        rules::status(self.current_board())
    }

    /// Plays a move at the cursor.
    ///
    /// On success the history is truncated to the cursor, the new
    /// snapshot is appended, and the cursor advances to it.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::GameOver`] if the game at the cursor is
    /// already won or drawn, [`MoveError::WrongPlayer`] if `player` is
    /// not the one to move, and otherwise whatever
    /// [`rules::apply_move`] rejects.
    #[instrument(skip(self), fields(cursor = self.cursor))]
    pub fn play(&mut self, player: Player, pos: usize) -> Result<(), MoveError> {
        if self.status().is_terminal() {
            warn!("move rejected: game is over");
            return Err(MoveError::GameOver);
        }
        if player != self.to_move() {
            warn!(to_move = %self.to_move(), "move rejected: out of turn");
            return Err(MoveError::WrongPlayer(player));
        }
        let next = rules::apply_move(self.current_board(), pos, player)?;
        if self.cursor + 1 < self.boards.len() {
            debug!(
                discarded = self.boards.len() - self.cursor - 1,
                "discarding future snapshots"
            );
            self.boards.truncate(self.cursor + 1);
        }
        self.boards.push(next);
        self.cursor = self.boards.len() - 1;
        Ok(())
    }

    /// Moves the cursor to the given history entry.
    ///
    /// Navigation never truncates and is allowed whether or not the
    /// game is over.
    ///
    /// # Errors
    ///
    /// Returns [`JumpError::IndexOutOfRange`] if there is no such
    /// entry.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, move_index: usize) -> Result<(), JumpError> {
        if move_index >= self.boards.len() {
            return Err(JumpError::IndexOutOfRange {
                index: move_index,
                len: self.boards.len(),
            });
        }
        self.cursor = move_index;
        Ok(())
    }

    /// Flips the display order of [`Timeline::moves`]. Stored history
    /// and cursor are untouched.
    pub fn toggle_order(&mut self) {
        self.order = self.order.toggled();
    }

    /// Status line for the game at the cursor.
    ///
    /// One of `"Next player: X"`, `"Next player: O"`, `"Winner: X"`,
    /// `"Winner: O"`, `"DRAW"`.
    pub fn status_text(&self) -> String {
        match self.status() {
            GameStatus::Won(win) => format!("Winner: {}", win.player),
            GameStatus::Draw => "DRAW".to_string(),
            GameStatus::InProgress => format!("Next player: {}", self.to_move()),
        }
    }

    /// Projects the history into display rows, in the configured
    /// order.
    ///
    /// Computed fresh on every call. Each row carries the label for
    /// its entry: the "You are at ..." form when the cursor is on it,
    /// the "Go to ..." form otherwise; entries after the first name
    /// the 1-based row and column of the move that produced them.
    pub fn moves(&self) -> Vec<MoveEntry> {
        let mut entries: Vec<MoveEntry> = self
            .boards
            .iter()
            .enumerate()
            .map(|(i, board)| {
                let current = i == self.cursor;
                let label = if i == 0 {
                    if current {
                        "You are at game start".to_string()
                    } else {
                        "Go to game start".to_string()
                    }
                } else {
                    match rules::diff_square(&self.boards[i - 1], board) {
                        Some(pos) => {
                            let (row, col) = rules::row_col(pos, board.size());
                            if current {
                                format!("You are at move #{i}. Row: {row}, Col: {col}")
                            } else {
                                format!("Go to move # {i}. Row: {row}, Col: {col}")
                            }
                        }
                        // Successive snapshots always differ in exactly
                        // one square, so this arm is unreachable through
                        // play(); keep the row rather than panic.
                        None => {
                            if current {
                                format!("You are at move #{i}")
                            } else {
                                format!("Go to move # {i}")
                            }
                        }
                    }
                };
                MoveEntry {
                    move_index: i,
                    current,
                    label,
                }
            })
            .collect();
        if self.order == SortOrder::Descending {
            entries.reverse();
        }
        entries
    }
}

impl Default for Timeline {
    fn default() -> Self {
        Self::new(Board::DEFAULT_SIZE)
    }
}
