//! Pure Go game model.
//!
//! Provides the board (with capture, suicide and simple ko rules), a move
//! tree with a current-position cursor, the end-of-game status overlay, and
//! result records. No protocol or I/O code lives here.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod game;
mod result;
mod types;

pub use board::Board;
pub use game::GoGame;
pub use result::{GameResult, ParseResultError};
pub use types::{Color, FinalStatus, Move, MoveError, MoveKind, Point};
