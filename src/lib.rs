//! Pure tic-tac-toe game logic with a navigable move timeline.
//!
//! # Architecture
//!
//! - **[`rules`]**: pure functions over immutable [`Board`] snapshots -
//!   applying a move, finding the winning line, deriving the game
//!   status, and diffing successive snapshots.
//! - **[`Timeline`]**: the game's history - an ordered sequence of
//!   snapshots with a cursor, append-on-play, jump-to-any-point
//!   navigation, and a display-ready moves projection.
//!
//! Rendering, input handling, and opponents of any kind live outside
//! this crate; a presentation layer drives a [`Timeline`] and displays
//! what it reads back.
//!
//! # Example
//!
//! ```
//! use tictactoe_replay::{Player, Timeline};
//!
//! let mut game = Timeline::default();
//! game.play(Player::X, 4)?;
//! game.play(Player::O, 0)?;
//! assert_eq!(game.status_text(), "Next player: X");
//!
//! // Step back to before O's reply; the history is preserved.
//! game.jump_to(1)?;
//! assert_eq!(game.len(), 3);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
pub mod rules;
mod timeline;
mod types;

pub use error::{JumpError, MoveError};
pub use timeline::{MoveEntry, SortOrder, Timeline};
pub use types::{Board, GameStatus, Player, Square, Win};
