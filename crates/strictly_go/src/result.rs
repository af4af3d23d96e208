//! Game result records in the usual `B+3.5` / `W+R` notation.

use super::types::Color;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameResult {
    /// Won on points by the given margin.
    Score {
        /// Winning color.
        winner: Color,
        /// Point difference, komi included.
        margin: f64,
    },
    /// Won by resignation of the opponent.
    Resignation {
        /// Winning color.
        winner: Color,
    },
    /// Won on time.
    Time {
        /// Winning color.
        winner: Color,
    },
    /// Won by forfeit.
    Forfeit {
        /// Winning color.
        winner: Color,
    },
    /// Won with the margin unknown (`B+`).
    Win {
        /// Winning color.
        winner: Color,
    },
    /// Equal score.
    Draw,
}

impl GameResult {
    /// The winning color, `None` for a draw.
    pub fn winner(&self) -> Option<Color> {
        match *self {
            GameResult::Score { winner, .. }
            | GameResult::Resignation { winner }
            | GameResult::Time { winner }
            | GameResult::Forfeit { winner }
            | GameResult::Win { winner } => Some(winner),
            GameResult::Draw => None,
        }
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            GameResult::Score { winner, margin } => write!(f, "{}+{}", winner.initial(), margin),
            GameResult::Resignation { winner } => write!(f, "{}+R", winner.initial()),
            GameResult::Time { winner } => write!(f, "{}+T", winner.initial()),
            GameResult::Forfeit { winner } => write!(f, "{}+F", winner.initial()),
            GameResult::Win { winner } => write!(f, "{}+", winner.initial()),
            GameResult::Draw => write!(f, "0"),
        }
    }
}

/// A result string that could not be understood.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Unrecognized game result: {input:?}")]
pub struct ParseResultError {
    /// The rejected input.
    pub input: String,
}

impl ParseResultError {
    fn new(input: &str) -> Self {
        Self {
            input: input.to_string(),
        }
    }
}

impl FromStr for GameResult {
    type Err = ParseResultError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        if text == "0" || text.eq_ignore_ascii_case("draw") || text.eq_ignore_ascii_case("jigo") {
            return Ok(GameResult::Draw);
        }

        let (side, detail) = text.split_once('+').ok_or_else(|| ParseResultError::new(s))?;
        let winner = match side {
            "B" | "b" => Color::Black,
            "W" | "w" => Color::White,
            _ => return Err(ParseResultError::new(s)),
        };

        let detail = detail.trim();
        let result = match detail.to_ascii_lowercase().as_str() {
            "" => GameResult::Win { winner },
            "r" | "resign" => GameResult::Resignation { winner },
            "t" | "time" => GameResult::Time { winner },
            "f" | "forfeit" => GameResult::Forfeit { winner },
            _ => {
                let margin: f64 = detail.parse().map_err(|_| ParseResultError::new(s))?;
                if !margin.is_finite() || margin < 0.0 {
                    return Err(ParseResultError::new(s));
                }
                GameResult::Score { winner, margin }
            }
        };
        Ok(result)
    }
}
