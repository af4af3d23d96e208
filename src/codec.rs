//! Translation between board points and GTP vertex strings.
//!
//! GTP counts rows from the bottom edge starting at 1, while the game model
//! counts them from the top edge starting at 0. Columns use letters with `I`
//! skipped.

use serde::{Deserialize, Serialize};
use strictly_go::Point;
use tracing::trace;

/// Column letters; `I` is left out so it cannot be confused with `1`.
pub const BOARD_LETTERS: &str = "ABCDEFGHJKLMNOPQRSTUVWXYZ";

/// Largest board the column alphabet can address.
pub const MAX_BOARD_SIZE: usize = BOARD_LETTERS.len();

/// A GTP vertex: an intersection or one of the two move sentinels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Vertex {
    /// An intersection.
    Point(Point),
    /// A pass, `(-1, -1)` in integer form.
    Pass,
    /// A resignation, `(-3, -3)` in integer form.
    Resign,
}

impl Vertex {
    /// Integer form of a pass.
    pub const PASS_XY: (i32, i32) = (-1, -1);
    /// Integer form of a resignation.
    pub const RESIGN_XY: (i32, i32) = (-3, -3);

    /// Builds a vertex from integer coordinates, honoring the sentinels.
    ///
    /// # Panics
    ///
    /// Panics on any other negative coordinate.
    pub fn from_xy(x: i32, y: i32) -> Self {
        match (x, y) {
            Self::PASS_XY => Vertex::Pass,
            Self::RESIGN_XY => Vertex::Resign,
            (x, y) if x >= 0 && y >= 0 => Vertex::Point(Point::new(x as usize, y as usize)),
            (x, y) => panic!("({x}, {y}) is neither a board point nor a move sentinel"),
        }
    }

    /// Integer form, with `(-1, -1)` for pass and `(-3, -3)` for resign.
    pub fn to_xy(self) -> (i32, i32) {
        match self {
            Vertex::Point(p) => (p.x as i32, p.y as i32),
            Vertex::Pass => Self::PASS_XY,
            Vertex::Resign => Self::RESIGN_XY,
        }
    }

    /// The point, if this vertex is one.
    pub fn point(self) -> Option<Point> {
        match self {
            Vertex::Point(p) => Some(p),
            _ => None,
        }
    }
}

impl From<Point> for Vertex {
    fn from(point: Point) -> Self {
        Vertex::Point(point)
    }
}

/// Encodes a vertex for a board of the given size.
///
/// # Panics
///
/// Panics if the point lies outside the board or the board is larger than
/// [`MAX_BOARD_SIZE`].
pub fn encode(vertex: Vertex, board_size: usize) -> String {
    match vertex {
        Vertex::Pass => "pass".to_string(),
        Vertex::Resign => "resign".to_string(),
        Vertex::Point(p) => {
            assert!(
                p.x < board_size && p.y < board_size && board_size <= MAX_BOARD_SIZE,
                "point {p} is outside a {board_size}x{board_size} board"
            );
            let column = BOARD_LETTERS.as_bytes()[p.x] as char;
            format!("{}{}", column, board_size - p.y)
        }
    }
}

/// Decodes a vertex token; `None` if it is not a vertex of this board.
///
/// Never panics: engines sometimes emit stray characters, and callers skip
/// tokens that fail to decode.
pub fn decode(token: &str, board_size: usize) -> Option<Vertex> {
    let token = token.trim();
    if token.eq_ignore_ascii_case("pass") {
        return Some(Vertex::Pass);
    }
    if token.eq_ignore_ascii_case("resign") {
        return Some(Vertex::Resign);
    }

    let mut chars = token.chars();
    let letter = chars.next()?.to_ascii_uppercase();
    let x = BOARD_LETTERS.find(letter)?;
    let row: usize = chars.as_str().parse().ok()?;

    if x >= board_size || row == 0 || row > board_size {
        trace!(token, board_size, "Vertex outside the board");
        return None;
    }
    Some(Vertex::Point(Point::new(x, board_size - row)))
}
