//! Session setup: board size, komi, handicap and replay of an existing game.

use super::GtpEngine;
use crate::codec::{MAX_BOARD_SIZE, Vertex};
use crate::command::Command;
use crate::config::GameSettings;
use crate::error::GtpError;
use crate::model::GameModel;
use crate::response::Response;
use crate::transport::Transport;
use strictly_go::{Color, MoveKind};
use tracing::{debug, info, instrument, warn};

impl<T: Transport, G: GameModel> GtpEngine<T, G> {
    /// Starts a new game and returns the handicap the engine accepted.
    ///
    /// The requested handicap is lowered one stone at a time until the
    /// engine accepts it. Accepted handicap stones are placed on the new
    /// game model as black setup stones, and with more than one stone White
    /// is given the first move.
    ///
    /// # Panics
    ///
    /// Panics if the board size is outside `1..=25`.
    #[instrument(skip(self), fields(player = %settings.player_color()))]
    pub fn new_game(&mut self, settings: &GameSettings) -> Result<u32, GtpError> {
        let size = *settings.board_size();
        self.game = G::create(size, *settings.komi());
        self.colors.set_player_color(*settings.player_color());

        let (accepted, response) = self.prepare_board(size, *settings.komi(), *settings.handicap())?;

        if let Some(response) = response {
            for vertex in response.vertices(size) {
                let Vertex::Point(point) = vertex else {
                    continue;
                };
                if let Err(e) = self.game.add_stone(point, Color::Black) {
                    warn!(error = %e, "Ignoring handicap stone");
                }
            }
        }

        self.game.set_handicap(accepted);
        if accepted > 1 {
            self.game.switch_next_player();
        }

        info!(accepted, "New game started");
        Ok(accepted)
    }

    /// Replaces the game model and brings the engine to its current position.
    ///
    /// The local player's color is inferred from the last move of the game:
    /// the player is whoever did not play it. For an empty game the player
    /// takes the side to move.
    #[instrument(skip(self, game))]
    pub fn resync(&mut self, game: G) -> Result<(), GtpError> {
        self.game = game;
        self.resync_current()
    }

    pub(super) fn resync_current(&mut self) -> Result<(), GtpError> {
        self.colors.set_player_color(self.game.next_player());
        let moves = self.replay_game()?;
        if let Some(last) = moves.last() {
            self.colors.set_player_color(last.color.opponent());
        }
        Ok(())
    }

    /// Rebuilds the engine's board from scratch out of the game model.
    ///
    /// Replays the moves from the root to the cursor without touching the
    /// model. Every replayed command must succeed.
    #[instrument(skip(self))]
    pub(super) fn replay_game(&mut self) -> Result<Vec<strictly_go::Move>, GtpError> {
        let expected = self.game.handicap();
        let (accepted, _) =
            self.prepare_board(self.game.board_size(), self.game.komi(), expected)?;
        if accepted != expected {
            warn!(expected, accepted, "Engine handicap differs from the game");
            return Err(GtpError::HandicapMismatch { expected, accepted });
        }

        let moves = self.game.moves_to_current();
        for (i, mv) in moves.iter().enumerate() {
            let vertex = match mv.kind {
                MoveKind::Place(point) => Vertex::Point(point),
                MoveKind::Pass => Vertex::Pass,
            };
            let response = self.send_play(vertex, mv.color)?;
            if !response.is_success() {
                return Err(GtpError::ReplayRejected {
                    move_number: i + 1,
                    mv: *mv,
                    response: response.body().to_string(),
                });
            }
        }

        info!(moves = moves.len(), "Engine resynchronized");
        Ok(moves)
    }

    /// Sends the setup commands and negotiates the handicap.
    ///
    /// Returns the accepted handicap and, if it is non-zero, the engine's
    /// response listing the stones.
    fn prepare_board(
        &mut self,
        size: usize,
        komi: f64,
        handicap: u32,
    ) -> Result<(u32, Option<Response>), GtpError> {
        assert!(
            (1..=MAX_BOARD_SIZE).contains(&size),
            "board size {size} is outside 1..={MAX_BOARD_SIZE}"
        );
        self.board_size = size;

        // Setup commands are best effort.
        for command in [Command::BoardSize(size), Command::Komi(komi), Command::ClearBoard] {
            let response = self.execute(command)?;
            if !response.is_success() {
                debug!(body = response.body(), "Setup command refused");
            }
        }

        self.negotiate_handicap(handicap)
    }

    fn negotiate_handicap(&mut self, requested: u32) -> Result<(u32, Option<Response>), GtpError> {
        let mut handicap = requested;
        while handicap > 0 {
            let response = self.execute(Command::FixedHandicap(handicap))?;
            if response.is_success() {
                return Ok((handicap, Some(response)));
            }
            warn!(handicap, body = response.body(), "Handicap refused, lowering");
            handicap -= 1;
        }
        Ok((0, None))
    }
}
