//! End-of-game status and score.

use super::GtpEngine;
use crate::codec::Vertex;
use crate::command::{Command, StatusCategory};
use crate::error::GtpError;
use crate::model::GameModel;
use crate::transport::Transport;
use strictly_go::{FinalStatus, GameResult};
use strum::IntoEnumIterator;
use tracing::{debug, info, instrument, warn};

impl<T: Transport, G: GameModel> GtpEngine<T, G> {
    /// Tags territory and dead stones on the model as the engine sees them.
    ///
    /// Dead points are tagged by the color of the stone on the model's board;
    /// a dead point without a stone is ignored. Returns the number of tagged
    /// points. This can take the engine a long time.
    #[instrument(skip(self))]
    pub fn collect_final_status(&mut self) -> Result<usize, GtpError> {
        let mut tagged = 0;
        for category in StatusCategory::iter() {
            let response = self.execute(Command::FinalStatusList(category))?;
            if !response.is_success() {
                warn!(%category, body = response.body(), "final_status_list refused");
                continue;
            }

            for vertex in response.vertices(self.board_size) {
                let Vertex::Point(point) = vertex else {
                    continue;
                };
                let status = match category {
                    StatusCategory::WhiteTerritory => FinalStatus::WhiteTerritory,
                    StatusCategory::BlackTerritory => FinalStatus::BlackTerritory,
                    StatusCategory::Dead => match self.game.color_at(point) {
                        Some(color) => FinalStatus::dead(color),
                        None => {
                            debug!(%point, "Dead mark on an empty point");
                            continue;
                        }
                    },
                };
                self.game.set_final_status(point, status);
                tagged += 1;
            }
        }

        info!(tagged, "Final status collected");
        Ok(tagged)
    }

    /// Asks the engine for the score and records it as the game result.
    ///
    /// Returns `None`, leaving the model untouched, if the engine refused or
    /// the score could not be parsed.
    #[instrument(skip(self))]
    pub fn compute_final_score(&mut self) -> Result<Option<GameResult>, GtpError> {
        let response = self.execute(Command::FinalScore)?;
        if !response.is_success() {
            warn!(body = response.body(), "final_score refused");
            return Ok(None);
        }

        match response.first_token().map(str::parse::<GameResult>) {
            Some(Ok(result)) => {
                self.game.set_result(result);
                info!(%result, "Final score recorded");
                Ok(Some(result))
            }
            Some(Err(e)) => {
                warn!(error = %e, "Unreadable final score");
                Ok(None)
            }
            None => {
                warn!("Empty final score");
                Ok(None)
            }
        }
    }
}
