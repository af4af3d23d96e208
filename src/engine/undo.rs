//! Taking back moves, with a replay fallback for engines that cannot undo.

use super::GtpEngine;
use crate::command::Command;
use crate::error::GtpError;
use crate::model::GameModel;
use crate::transport::Transport;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Extra condition that must hold before undo takes back two plies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DoubleUndoGuard {
    /// No extra condition.
    Always,
    /// The game must hold at least two moves.
    #[default]
    TwoPlies,
}

impl<T: Transport, G: GameModel> GtpEngine<T, G> {
    /// Takes back the last move.
    ///
    /// With `allow_double_undo`, when the player is to move (the engine has
    /// already answered) the engine's answer is taken back as well, so the
    /// player gets to replay their own move.
    ///
    /// Engines that answer `cannot undo` are handled by removing the plies
    /// from the model and replaying the remaining game on a cleared engine
    /// board. Returns `Ok(false)` if there was nothing to undo or the engine
    /// refused for another reason.
    ///
    /// Unlike [`GtpEngine::resync`], the replay keeps the current color
    /// assignment instead of inferring it from the last move.
    #[instrument(skip(self))]
    pub fn undo(&mut self, allow_double_undo: bool) -> Result<bool, GtpError> {
        if self.game.current_move().is_none() {
            debug!("Nothing to undo");
            return Ok(false);
        }

        let double = allow_double_undo
            && self.game.next_player() == self.colors.player_color()
            && self.double_undo_guard_holds();

        let response = self.execute(Command::Undo)?;
        if response.is_success() {
            self.game.undo();
            if double {
                if self.execute(Command::Undo)?.is_success() {
                    self.game.undo();
                } else {
                    warn!("Second undo refused, took back one ply");
                }
            }
            return Ok(true);
        }

        if response.is_cannot_undo() {
            info!(double, "Engine cannot undo, replaying the game instead");
            if self.game.undo().is_none() {
                return Ok(false);
            }
            if double {
                self.game.undo();
            }
            self.replay_game()?;
            return Ok(true);
        }

        warn!(body = response.body(), "Undo refused");
        Ok(false)
    }

    fn double_undo_guard_holds(&self) -> bool {
        match self.double_undo_guard {
            DoubleUndoGuard::Always => true,
            DoubleUndoGuard::TwoPlies => self.game.moves_to_current().len() >= 2,
        }
    }
}
