//! The GTP commands this client emits.

use strictly_go::Color;

/// Classification requested with `final_status_list`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum StatusCategory {
    /// Empty points counted for White.
    WhiteTerritory,
    /// Empty points counted for Black.
    BlackTerritory,
    /// Stones the engine considers dead.
    Dead,
}

/// A single GTP command. `Display` yields the wire form, without newline.
#[derive(Debug, Clone, PartialEq, derive_more::Display)]
pub enum Command {
    /// Set the board size.
    #[display("boardsize {_0}")]
    BoardSize(usize),
    /// Set komi, already truncated to one decimal.
    #[display("komi {}", format_komi(*_0))]
    Komi(f64),
    /// Empty the board.
    #[display("clear_board")]
    ClearBoard,
    /// Ask the engine to place handicap stones.
    #[display("fixed_handicap {_0}")]
    FixedHandicap(u32),
    /// Play a move; the vertex is already encoded.
    #[display("play {color} {vertex}")]
    Play {
        /// Color that moves.
        color: Color,
        /// Encoded vertex.
        vertex: String,
    },
    /// Ask the engine for a move.
    #[display("genmove {_0}")]
    GenMove(Color),
    /// Take back the last move.
    #[display("undo")]
    Undo,
    /// Set the playing strength.
    #[display("level {_0}")]
    Level(u32),
    /// Ask for the final status of points.
    #[display("final_status_list {_0}")]
    FinalStatusList(StatusCategory),
    /// Ask for the score.
    #[display("final_score")]
    FinalScore,
    /// Ask for an ASCII diagram of the board.
    #[display("showboard")]
    ShowBoard,
    /// Ask for the engine name.
    #[display("name")]
    Name,
    /// Ask for the engine version.
    #[display("version")]
    Version,
}

/// Formats komi with one decimal, truncating toward zero.
pub fn format_komi(komi: f64) -> String {
    let truncated = (komi * 10.0).trunc() / 10.0;
    // Avoid sending "-0.0" for small negative values.
    let truncated = if truncated == 0.0 { 0.0 } else { truncated };
    format!("{truncated:.1}")
}
