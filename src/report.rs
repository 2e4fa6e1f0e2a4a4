use serde::{Deserialize, Serialize};

use crate::clock::{PlayerTimeSummary, time_summary};
use crate::swings::{SwingCounts, SwingThresholds, count_swings, evaluation_series};
use crate::timecontrol::parse_time_control;
use crate::types::{Game, PerColor};

/// The full per-game record handed to reporting and aggregation layers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameInsights {
    pub white: Option<String>,
    pub black: Option<String>,
    pub result: Option<String>,
    pub swings: SwingCounts,
    /// Evaluation trace in pawns, one entry per annotated ply.
    pub evaluations: Vec<f64>,
    /// Present only when the game carries a parseable TimeControl tag and
    /// both players recorded clock readings.
    pub time: Option<PerColor<PlayerTimeSummary>>,
}

impl GameInsights {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Derives every per-game statistic this crate knows about.
///
/// A game whose TimeControl tag is missing or unparseable simply reports no
/// time summary. A game that advertises a time control but never produced a
/// clock reading for some color is downgraded the same way, with a warning;
/// callers that need the hard error should call [`time_summary`] directly.
pub fn analyze_game(game: &Game, thresholds: SwingThresholds) -> GameInsights {
    let time = game
        .time_control
        .as_deref()
        .and_then(parse_time_control)
        .and_then(
            |tc| match time_summary(game, tc.base_seconds, tc.increment_seconds) {
                Ok(summary) => Some(summary),
                Err(error) => {
                    log::warn!("dropping time summary: {error}");
                    None
                }
            },
        );

    GameInsights {
        white: game.white.clone(),
        black: game.black.clone(),
        result: game.result.clone(),
        swings: count_swings(game, thresholds),
        evaluations: evaluation_series(game),
        time,
    }
}
