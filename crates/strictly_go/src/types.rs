//! Core domain types for Go.

use serde::{Deserialize, Serialize};

/// Stone color, also used for the side to move.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Color {
    /// Black (moves first in even games).
    Black,
    /// White.
    White,
}

impl Color {
    /// Returns the opposite color.
    pub fn opponent(self) -> Self {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    /// One-letter form used in result records ("B" / "W").
    pub fn initial(self) -> char {
        match self {
            Color::Black => 'B',
            Color::White => 'W',
        }
    }
}

/// An intersection on the board, zero-based, `(0, 0)` is the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[display("({x}, {y})")]
pub struct Point {
    /// Column, counted from the left edge.
    pub x: usize,
    /// Row, counted from the top edge.
    pub y: usize,
}

impl Point {
    /// Creates a new point.
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

/// What a move does on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum MoveKind {
    /// A stone placed on an intersection.
    #[display("{_0}")]
    Place(Point),
    /// The player passed.
    #[display("pass")]
    Pass,
}

/// A single ply in the game tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[display("{color} {kind}")]
pub struct Move {
    /// The color that moved.
    pub color: Color,
    /// Placement or pass.
    pub kind: MoveKind,
}

impl Move {
    /// A stone placement.
    pub fn place(color: Color, point: Point) -> Self {
        Self {
            color,
            kind: MoveKind::Place(point),
        }
    }

    /// A pass.
    pub fn pass(color: Color) -> Self {
        Self {
            color,
            kind: MoveKind::Pass,
        }
    }

    /// Returns the placed point, `None` for a pass.
    pub fn point(&self) -> Option<Point> {
        match self.kind {
            MoveKind::Place(p) => Some(p),
            MoveKind::Pass => None,
        }
    }

    /// Returns true if this move is a pass.
    pub fn is_pass(&self) -> bool {
        matches!(self.kind, MoveKind::Pass)
    }
}

/// End-of-game classification of an intersection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum FinalStatus {
    /// Empty intersection counted for White.
    WhiteTerritory,
    /// Empty intersection counted for Black.
    BlackTerritory,
    /// White stone that will be removed.
    DeadWhiteStone,
    /// Black stone that will be removed.
    DeadBlackStone,
}

impl FinalStatus {
    /// Dead-stone status for a stone of the given color.
    pub fn dead(color: Color) -> Self {
        match color {
            Color::White => FinalStatus::DeadWhiteStone,
            Color::Black => FinalStatus::DeadBlackStone,
        }
    }
}

/// Error that can occur when committing a move to the model.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// The point lies outside the board.
    #[display("Point {} is off the board", _0)]
    OutOfBounds(#[error(not(source))] Point),

    /// The intersection already holds a stone.
    #[display("Point {} is already occupied", _0)]
    Occupied(#[error(not(source))] Point),

    /// The stone would have no liberties and captures nothing.
    #[display("Move at {} is suicide", _0)]
    Suicide(#[error(not(source))] Point),

    /// The move would repeat the previous position.
    #[display("Move at {} retakes a ko", _0)]
    Ko(#[error(not(source))] Point),
}
