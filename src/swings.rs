use serde::{Deserialize, Serialize};

use crate::annotation::{SERIES_MATE_SENTINEL, SWING_MATE_SENTINEL, parse_eval};
use crate::types::{Game, PerColor};

/// Inclusive lower bounds, in pawns, for classifying an evaluation swing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SwingThresholds {
    pub mistake: f64,
    pub blunder: f64,
}

impl Default for SwingThresholds {
    fn default() -> Self {
        Self {
            mistake: 0.75,
            blunder: 1.8,
        }
    }
}

/// Mistake and blunder tallies per player.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwingCounts {
    pub mistakes: PerColor<u32>,
    pub blunders: PerColor<u32>,
}

/// Counts mistakes and blunders over the main line.
///
/// Consecutive parsed evaluations are paired; the absolute difference is
/// classified against `thresholds` (blunder first) and attributed to the
/// mover of the ply that produced the later evaluation. Plies without a
/// parseable evaluation carry the previous value forward rather than
/// resetting it.
pub fn count_swings(game: &Game, thresholds: SwingThresholds) -> SwingCounts {
    let mut counts = SwingCounts::default();
    let mut prev_eval: Option<f64> = None;

    for (mover, ply) in game.mainline() {
        let Some(current) = parse_eval(&ply.comment, SWING_MATE_SENTINEL) else {
            continue;
        };

        if let Some(prev) = prev_eval {
            let swing = (current - prev).abs();
            if swing >= thresholds.blunder {
                *counts.blunders.get_mut(mover) += 1;
            } else if swing >= thresholds.mistake {
                *counts.mistakes.get_mut(mover) += 1;
            }
        }

        prev_eval = Some(current);
    }

    counts
}

/// The game's evaluation trace: one entry per ply with a parseable
/// evaluation, in pawns from White's perspective, mates collapsed to
/// [`SERIES_MATE_SENTINEL`] with the mating side's sign.
pub fn evaluation_series(game: &Game) -> Vec<f64> {
    game.plies
        .iter()
        .filter_map(|ply| parse_eval(&ply.comment, SERIES_MATE_SENTINEL))
        .collect()
}
