//! Which side the local player holds and which side the engine holds.

use crate::model::GameModel;
use strictly_go::Color;
use tracing::debug;

/// Player/engine color assignment.
///
/// Only the player's color is stored; the engine always plays the opposite
/// color. The game model's side-to-move is never consulted to derive it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorSession {
    player: Color,
}

impl ColorSession {
    /// Creates a session where the local player holds `player`.
    pub fn new(player: Color) -> Self {
        Self { player }
    }

    /// The local player's color.
    pub fn player_color(&self) -> Color {
        self.player
    }

    /// The engine's color: the complement of the player's.
    pub fn engine_color(&self) -> Color {
        self.player.opponent()
    }

    /// Replaces the player's color.
    pub fn set_player_color(&mut self, player: Color) {
        self.player = player;
    }

    /// Swaps sides: the engine now plays what the player played.
    pub fn switch_colors(&mut self) {
        self.player = self.player.opponent();
        debug!(player = %self.player, "Colors switched");
    }

    /// Returns true if the model says the engine is to move.
    pub fn is_engine_turn(&self, model: &impl GameModel) -> bool {
        model.next_player() == self.engine_color()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_color_is_complement() {
        let mut colors = ColorSession::new(Color::Black);
        assert_eq!(colors.engine_color(), Color::White);
        colors.switch_colors();
        assert_eq!(colors.player_color(), Color::White);
        assert_eq!(colors.engine_color(), Color::Black);
    }

    #[test]
    fn test_engine_turn_follows_model() {
        let colors = ColorSession::new(Color::White);
        let game = strictly_go::GoGame::new(9, 0.0);
        assert!(colors.is_engine_turn(&game));
    }
}
