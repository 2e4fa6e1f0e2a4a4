use serde::{Deserialize, Serialize};
use shakmaty::Color;

use crate::annotation::parse_clock;
use crate::error::InsightsError;
use crate::types::{Game, PerColor};

/// Raw per-player clock data recovered from one traversal of the main line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveTimes {
    /// Seconds spent thinking per recorded move. The first recorded move
    /// for a color is always 0 (there is no earlier reading to diff
    /// against). Later entries can be negative when a client granted more
    /// time than the increment between two readings; values pass through
    /// unclamped.
    pub move_times: PerColor<Vec<i64>>,
    /// Raw clock readings (seconds remaining), in move order.
    pub clock_readings: PerColor<Vec<u64>>,
}

/// Reconstructs per-move thinking times from `[%clk ...]` readings.
///
/// A ply without a parseable reading contributes nothing; it is not
/// recorded as a zero-time move.
pub fn extract_move_times(game: &Game, increment_seconds: u64) -> MoveTimes {
    let mut times = MoveTimes::default();

    for (mover, ply) in game.mainline() {
        let Some(reading) = parse_clock(&ply.comment) else {
            continue;
        };

        let spent = match times.clock_readings.get(mover).last() {
            Some(&prev) => prev as i64 + increment_seconds as i64 - reading as i64,
            None => 0,
        };

        times.move_times.get_mut(mover).push(spent);
        times.clock_readings.get_mut(mover).push(reading);
    }

    times
}

/// Aggregated time usage for one player.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerTimeSummary {
    pub total_time_minutes: f64,
    /// At least half of the base allotment was consumed (inclusive bound).
    pub used_half_time: bool,
    /// The final recorded reading was at or below the increment.
    pub ran_out_of_time: bool,
    /// Mean seconds per recorded move.
    pub time_per_move: f64,
}

/// Summarizes both players' time usage under a base + increment control.
///
/// Fails with [`InsightsError::NoClockData`] when either color has no
/// recorded reading; the missing denominator is surfaced, never defaulted.
pub fn time_summary(
    game: &Game,
    base_seconds: u64,
    increment_seconds: u64,
) -> Result<PerColor<PlayerTimeSummary>, InsightsError> {
    let times = extract_move_times(game, increment_seconds);

    Ok(PerColor {
        white: summarize_color(&times, Color::White, base_seconds, increment_seconds)?,
        black: summarize_color(&times, Color::Black, base_seconds, increment_seconds)?,
    })
}

fn summarize_color(
    times: &MoveTimes,
    color: Color,
    base_seconds: u64,
    increment_seconds: u64,
) -> Result<PlayerTimeSummary, InsightsError> {
    let last_reading = times
        .clock_readings
        .get(color)
        .last()
        .copied()
        .ok_or(InsightsError::NoClockData { color })?;

    // Non-empty whenever clock_readings is: both lists grow in lockstep.
    let move_times = times.move_times.get(color);
    let total: i64 = move_times.iter().sum();

    Ok(PlayerTimeSummary {
        total_time_minutes: total as f64 / 60.0,
        used_half_time: total as f64 >= base_seconds as f64 / 2.0,
        ran_out_of_time: last_reading <= increment_seconds,
        time_per_move: total as f64 / move_times.len() as f64,
    })
}
