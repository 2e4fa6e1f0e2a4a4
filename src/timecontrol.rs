use serde::{Deserialize, Serialize};

/// A `base+increment` time control, in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeControl {
    pub base_seconds: u64,
    pub increment_seconds: u64,
}

/// Parses a PGN `TimeControl` tag of the `"600+5"` form.
///
/// A bare `"600"` defaults the increment to 0. Unknown (`"?"`), unlimited
/// (`"-"`), multi-stage and free-text values yield `None`; time accounting
/// is simply unavailable for such games.
pub fn parse_time_control(raw: &str) -> Option<TimeControl> {
    let input = raw.trim();

    match input.split_once('+') {
        Some((base, increment)) => Some(TimeControl {
            base_seconds: base.trim().parse().ok()?,
            increment_seconds: increment.trim().parse().ok()?,
        }),
        None => Some(TimeControl {
            base_seconds: input.parse().ok()?,
            increment_seconds: 0,
        }),
    }
}
