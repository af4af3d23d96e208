//! The narrow interface through which the protocol core reads and mutates
//! the game model.

use strictly_go::{Color, FinalStatus, GameResult, GoGame, Move, MoveError, Point};

/// Game tree with a cursor, as seen by the protocol core.
///
/// The core trusts the model for legality and capture resolution; it only
/// asks it to record what the engine has accepted.
pub trait GameModel {
    /// Creates an empty game.
    fn create(board_size: usize, komi: f64) -> Self
    where
        Self: Sized;

    /// Board edge length.
    fn board_size(&self) -> usize;

    /// Komi.
    fn komi(&self) -> f64;

    /// Recorded number of handicap stones.
    fn handicap(&self) -> u32;

    /// Records the number of handicap stones.
    fn set_handicap(&mut self, handicap: u32);

    /// Puts a stone on the current board without any rule checks.
    fn add_stone(&mut self, point: Point, color: Color) -> Result<(), MoveError>;

    /// Commits a played move and advances the cursor.
    fn commit_move(&mut self, mv: Move) -> Result<(), MoveError>;

    /// Records a pass.
    fn pass(&mut self, color: Color);

    /// Records a resignation by `color`.
    fn resign(&mut self, color: Color);

    /// Removes the move under the cursor; `None` at the root.
    fn undo(&mut self) -> Option<Move>;

    /// Tags an intersection with its end-of-game status.
    fn set_final_status(&mut self, point: Point, status: FinalStatus);

    /// Records the game result.
    fn set_result(&mut self, result: GameResult);

    /// The move under the cursor; `None` at the root.
    fn current_move(&self) -> Option<Move>;

    /// Moves from the tree root to the cursor, in play order.
    fn moves_to_current(&self) -> Vec<Move>;

    /// Side to move at the cursor.
    fn next_player(&self) -> Color;

    /// Flips the side to move at the cursor.
    fn switch_next_player(&mut self);

    /// Stone color on the current board.
    fn color_at(&self, point: Point) -> Option<Color>;
}

impl GameModel for GoGame {
    fn create(board_size: usize, komi: f64) -> Self {
        GoGame::new(board_size, komi)
    }

    fn board_size(&self) -> usize {
        self.size()
    }

    fn komi(&self) -> f64 {
        GoGame::komi(self)
    }

    fn handicap(&self) -> u32 {
        GoGame::handicap(self)
    }

    fn set_handicap(&mut self, handicap: u32) {
        GoGame::set_handicap(self, handicap)
    }

    fn add_stone(&mut self, point: Point, color: Color) -> Result<(), MoveError> {
        GoGame::add_stone(self, point, color)
    }

    fn commit_move(&mut self, mv: Move) -> Result<(), MoveError> {
        self.play(mv)
    }

    fn pass(&mut self, color: Color) {
        GoGame::pass(self, color)
    }

    fn resign(&mut self, color: Color) {
        GoGame::resign(self, color)
    }

    fn undo(&mut self) -> Option<Move> {
        GoGame::undo(self)
    }

    fn set_final_status(&mut self, point: Point, status: FinalStatus) {
        GoGame::set_final_status(self, point, status)
    }

    fn set_result(&mut self, result: GameResult) {
        GoGame::set_result(self, result)
    }

    fn current_move(&self) -> Option<Move> {
        GoGame::current_move(self)
    }

    fn moves_to_current(&self) -> Vec<Move> {
        GoGame::moves_to_current(self)
    }

    fn next_player(&self) -> Color {
        GoGame::next_player(self)
    }

    fn switch_next_player(&mut self) {
        GoGame::switch_next_player(self)
    }

    fn color_at(&self, point: Point) -> Option<Color> {
        self.board().get(point)
    }
}
