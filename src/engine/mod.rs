//! A GTP engine session: transport, game model and color assignment.
//!
//! Every operation is a sequence of blocking request/response exchanges.
//! The game model is changed only after the command that justifies the
//! change has succeeded, so the model and the engine never drift apart
//! through a refused command.

mod moves;
mod negotiation;
mod scoring;
mod undo;

pub use undo::DoubleUndoGuard;

use crate::colors::ColorSession;
use crate::command::Command;
use crate::config::GameSettings;
use crate::error::GtpError;
use crate::model::GameModel;
use crate::response::Response;
use crate::transport::Transport;
use strictly_go::{Color, GoGame};
use tracing::{debug, instrument};

/// A session with one GTP engine.
///
/// `T` delivers commands, `G` is the game model kept in lockstep with the
/// engine's board.
#[derive(Debug)]
pub struct GtpEngine<T, G = GoGame> {
    transport: T,
    game: G,
    colors: ColorSession,
    board_size: usize,
    double_undo_guard: DoubleUndoGuard,
}

impl<T: Transport, G: GameModel> GtpEngine<T, G> {
    /// Starts a new game on the engine behind `transport`.
    #[instrument(skip(transport))]
    pub fn start(transport: T, settings: &GameSettings) -> Result<Self, GtpError> {
        let mut engine = Self {
            transport,
            game: G::create(*settings.board_size(), *settings.komi()),
            colors: ColorSession::new(*settings.player_color()),
            board_size: *settings.board_size(),
            double_undo_guard: DoubleUndoGuard::default(),
        };
        engine.new_game(settings)?;
        Ok(engine)
    }

    /// Brings the engine behind `transport` to the current position of `game`.
    #[instrument(skip(transport, game))]
    pub fn resume(transport: T, game: G) -> Result<Self, GtpError> {
        let mut engine = Self {
            transport,
            board_size: game.board_size(),
            colors: ColorSession::new(game.next_player()),
            game,
            double_undo_guard: DoubleUndoGuard::default(),
        };
        engine.resync_current()?;
        Ok(engine)
    }

    /// Sets the extra condition for taking back two plies at once.
    pub fn with_double_undo_guard(mut self, guard: DoubleUndoGuard) -> Self {
        self.double_undo_guard = guard;
        self
    }

    /// Sends one command and parses the response.
    #[instrument(skip_all, fields(command = %command))]
    pub(crate) fn execute(&mut self, command: Command) -> Result<Response, GtpError> {
        let wire = command.to_string();
        let raw = self.transport.send(&wire)?;
        let response = Response::parse(&raw);
        debug!(
            success = response.is_success(),
            body = response.body(),
            "GTP exchange"
        );
        Ok(response)
    }

    /// The game model.
    pub fn game(&self) -> &G {
        &self.game
    }

    /// Ends the session and hands back the game model.
    pub fn into_game(self) -> G {
        self.game
    }

    /// Board size of the current session.
    pub fn board_size(&self) -> usize {
        self.board_size
    }

    /// The local player's color.
    pub fn player_color(&self) -> Color {
        self.colors.player_color()
    }

    /// The engine's color.
    pub fn engine_color(&self) -> Color {
        self.colors.engine_color()
    }

    /// Returns true if the model says the engine is to move.
    pub fn is_engine_turn(&self) -> bool {
        self.colors.is_engine_turn(&self.game)
    }

    /// Swaps sides between the player and the engine.
    pub fn switch_colors(&mut self) {
        self.colors.switch_colors();
    }

    /// The configured double-undo guard.
    pub fn double_undo_guard(&self) -> DoubleUndoGuard {
        self.double_undo_guard
    }

    /// Sets the engine's playing strength.
    #[instrument(skip(self))]
    pub fn set_level(&mut self, level: u32) -> Result<bool, GtpError> {
        Ok(self.execute(Command::Level(level))?.is_success())
    }

    /// ASCII diagram of the engine's board.
    #[instrument(skip(self))]
    pub fn ascii_board(&mut self) -> Result<Option<String>, GtpError> {
        self.query(Command::ShowBoard)
    }

    /// The engine's self-reported name.
    #[instrument(skip(self))]
    pub fn engine_name(&mut self) -> Result<Option<String>, GtpError> {
        self.query(Command::Name)
    }

    /// The engine's self-reported version.
    #[instrument(skip(self))]
    pub fn engine_version(&mut self) -> Result<Option<String>, GtpError> {
        self.query(Command::Version)
    }

    fn query(&mut self, command: Command) -> Result<Option<String>, GtpError> {
        let response = self.execute(command)?;
        Ok(response
            .is_success()
            .then(|| response.body().to_string()))
    }
}
