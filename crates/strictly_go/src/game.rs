//! Game tree with a current-position cursor.
//!
//! Every node stores the board reached after its move, so moving the cursor
//! back is free and undo never has to recompute captures. Setup stones (for
//! instance handicap stones) are written directly into the board of the
//! node under the cursor.

use super::board::Board;
use super::result::GameResult;
use super::types::{Color, FinalStatus, Move, MoveError, MoveKind, Point};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Node {
    parent: Option<usize>,
    children: Vec<usize>,
    mv: Option<Move>,
    board: Board,
    to_move: Color,
}

/// A Go game: settings, move tree, cursor and result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoGame {
    nodes: Vec<Node>,
    current: usize,
    komi: f64,
    handicap: u32,
    result: Option<GameResult>,
}

impl GoGame {
    /// Creates an empty game with Black to move.
    #[instrument]
    pub fn new(size: usize, komi: f64) -> Self {
        Self {
            nodes: vec![Node {
                parent: None,
                children: Vec::new(),
                mv: None,
                board: Board::new(size),
                to_move: Color::Black,
            }],
            current: 0,
            komi,
            handicap: 0,
            result: None,
        }
    }

    /// Board edge length.
    pub fn size(&self) -> usize {
        self.board().size()
    }

    /// Komi.
    pub fn komi(&self) -> f64 {
        self.komi
    }

    /// Number of handicap stones.
    pub fn handicap(&self) -> u32 {
        self.handicap
    }

    /// Records the handicap.
    pub fn set_handicap(&mut self, handicap: u32) {
        self.handicap = handicap;
    }

    /// The recorded result, if any.
    pub fn result(&self) -> Option<GameResult> {
        self.result
    }

    /// Records the result.
    pub fn set_result(&mut self, result: GameResult) {
        self.result = Some(result);
    }

    /// Board at the current position.
    pub fn board(&self) -> &Board {
        &self.nodes[self.current].board
    }

    /// Color to play at the current position.
    pub fn next_player(&self) -> Color {
        self.nodes[self.current].to_move
    }

    /// Flips the color to play at the current position.
    pub fn switch_next_player(&mut self) {
        let node = &mut self.nodes[self.current];
        node.to_move = node.to_move.opponent();
    }

    /// The move that led to the current position, `None` at the root.
    pub fn current_move(&self) -> Option<Move> {
        self.nodes[self.current].mv
    }

    /// Returns true if the cursor is on the root node.
    pub fn is_at_root(&self) -> bool {
        self.nodes[self.current].parent.is_none()
    }

    /// Number of moves from the root to the current position.
    pub fn move_number(&self) -> usize {
        self.moves_to_current().len()
    }

    /// Moves from the root to the current position, in play order.
    pub fn moves_to_current(&self) -> Vec<Move> {
        let mut moves = Vec::new();
        let mut cursor = Some(self.current);
        while let Some(i) = cursor {
            let node = &self.nodes[i];
            if let Some(mv) = node.mv {
                moves.push(mv);
            }
            cursor = node.parent;
        }
        moves.reverse();
        moves
    }

    /// Places a setup stone on the current board, ignoring the rules.
    #[instrument(skip(self))]
    pub fn add_stone(&mut self, point: Point, color: Color) -> Result<(), MoveError> {
        self.nodes[self.current].board.set(point, Some(color))
    }

    /// Plays a move for `color`, advancing the cursor.
    ///
    /// Replaying a move that already exists as a child of the current node
    /// follows that branch instead of creating a duplicate.
    #[instrument(skip(self), fields(move_number = self.move_number()))]
    pub fn play(&mut self, mv: Move) -> Result<(), MoveError> {
        if let Some(&child) = self.nodes[self.current]
            .children
            .iter()
            .find(|c| self.nodes[**c].mv == Some(mv))
        {
            self.current = child;
            return Ok(());
        }

        let mut board = self.board().clone();
        board.clear_final_status();

        if let MoveKind::Place(point) = mv.kind {
            board.place(point, mv.color)?;
            let repeats = self.nodes[self.current]
                .parent
                .is_some_and(|p| self.nodes[p].board.same_position(&board));
            if repeats {
                return Err(MoveError::Ko(point));
            }
        }

        let index = self.nodes.len();
        self.nodes.push(Node {
            parent: Some(self.current),
            children: Vec::new(),
            mv: Some(mv),
            board,
            to_move: mv.color.opponent(),
        });
        self.nodes[self.current].children.push(index);
        self.current = index;
        debug!(%mv, "Move committed");
        Ok(())
    }

    /// Records a pass for `color`.
    pub fn pass(&mut self, color: Color) {
        if let Err(e) = self.play(Move::pass(color)) {
            debug!(error = %e, "Pass not recorded");
        }
    }

    /// Records a resignation: the opponent of `color` wins.
    #[instrument(skip(self))]
    pub fn resign(&mut self, color: Color) {
        self.result = Some(GameResult::Resignation {
            winner: color.opponent(),
        });
    }

    /// Removes the current node from the tree and moves the cursor to its parent.
    ///
    /// Returns the removed move, or `None` at the root.
    #[instrument(skip(self))]
    pub fn undo(&mut self) -> Option<Move> {
        let removed = self.current;
        let parent = self.nodes[removed].parent?;
        let mv = self.nodes[removed].mv;

        self.nodes[parent].children.retain(|c| *c != removed);
        self.current = parent;
        if removed + 1 == self.nodes.len() && self.nodes[removed].children.is_empty() {
            self.nodes.pop();
        }
        debug!(?mv, "Move removed");
        mv
    }

    /// Tags a point of the current board with a final status.
    pub fn set_final_status(&mut self, point: Point, status: FinalStatus) {
        self.nodes[self.current].board.set_final_status(point, status);
    }
}
