//! Player moves and engine-generated moves.

use super::GtpEngine;
use crate::codec::{self, Vertex};
use crate::command::Command;
use crate::error::GtpError;
use crate::model::GameModel;
use crate::response::Response;
use crate::transport::Transport;
use strictly_go::{Color, Move};
use tracing::{debug, info, instrument, warn};

impl<T: Transport, G: GameModel> GtpEngine<T, G> {
    /// Plays a move for the local player and records it on success.
    pub fn play(&mut self, vertex: Vertex) -> Result<bool, GtpError> {
        let color = self.colors.player_color();
        self.play_move(vertex, color, true)
    }

    /// Plays `vertex` for `color` on the engine.
    ///
    /// Returns `Ok(false)` if the engine refused the move; the model is then
    /// left untouched. With `apply_to_model`, an accepted move is committed
    /// to the model.
    ///
    /// # Panics
    ///
    /// Panics if the point lies outside the board, or if `vertex` is
    /// [`Vertex::Resign`], which is not a move the engine can be told to play.
    #[instrument(skip(self), fields(board_size = self.board_size))]
    pub fn play_move(
        &mut self,
        vertex: Vertex,
        color: Color,
        apply_to_model: bool,
    ) -> Result<bool, GtpError> {
        let response = self.send_play(vertex, color)?;
        if !response.is_success() {
            debug!(body = response.body(), "Engine refused move");
            return Ok(false);
        }
        if apply_to_model {
            self.commit(vertex, color)?;
        }
        Ok(true)
    }

    /// Asks the engine to move for its color and records the answer.
    ///
    /// Returns the engine's vertex, including [`Vertex::Pass`] and
    /// [`Vertex::Resign`]. A refused command or an unreadable answer yields
    /// `Ok(None)` and leaves the model untouched.
    ///
    /// Blocks for as long as the engine thinks.
    #[instrument(skip(self), fields(engine = %self.colors.engine_color()))]
    pub fn gen_move(&mut self) -> Result<Option<Vertex>, GtpError> {
        let engine = self.colors.engine_color();
        if self.game.next_player() != engine {
            warn!(
                to_move = %self.game.next_player(),
                "Asking engine to move out of turn"
            );
        }

        let response = self.execute(Command::GenMove(engine))?;
        if !response.is_success() {
            warn!(body = response.body(), "genmove refused");
            return Ok(None);
        }

        let Some(vertex) = response
            .first_token()
            .and_then(|token| codec::decode(token, self.board_size))
        else {
            warn!(body = response.body(), "Unreadable genmove answer");
            return Ok(None);
        };

        self.commit(vertex, engine)?;
        info!(vertex = %codec::encode(vertex, self.board_size), "Engine moved");
        Ok(Some(vertex))
    }

    /// Sends `play` after checking the vertex against the board.
    pub(super) fn send_play(&mut self, vertex: Vertex, color: Color) -> Result<Response, GtpError> {
        match vertex {
            Vertex::Point(p) => assert!(
                p.x < self.board_size && p.y < self.board_size,
                "point {p} is outside the {0}x{0} board",
                self.board_size
            ),
            Vertex::Pass => {}
            Vertex::Resign => panic!("resign cannot be sent with play"),
        }

        let vertex = codec::encode(vertex, self.board_size);
        self.execute(Command::Play { color, vertex })
    }

    /// Records an engine-accepted vertex on the model.
    ///
    /// If the model refuses it, the move is taken back on the engine (by
    /// `undo`, or by replaying the game if that is refused) before the error
    /// is returned, so both sides still hold the same position.
    fn commit(&mut self, vertex: Vertex, color: Color) -> Result<(), GtpError> {
        match vertex {
            Vertex::Point(point) => {
                let Err(source) = self.game.commit_move(Move::place(color, point)) else {
                    return Ok(());
                };
                warn!(error = %source, "Model refused an engine-accepted move, taking it back");
                if !self.execute(Command::Undo)?.is_success() {
                    self.replay_game()?;
                }
                Err(GtpError::ModelRejected { vertex, source })
            }
            Vertex::Pass => {
                self.game.pass(color);
                Ok(())
            }
            Vertex::Resign => {
                self.game.resign(color);
                Ok(())
            }
        }
    }
}
