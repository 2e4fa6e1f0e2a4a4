use std::sync::LazyLock;

use regex::Regex;

/// Mate sentinel used for the per-move evaluation series.
pub const SERIES_MATE_SENTINEL: f64 = 5.0;

/// Mate sentinel used by the mistake/blunder pass.
///
/// Deliberately distinct from [`SERIES_MATE_SENTINEL`]: the swing pass only
/// compares delta magnitudes, and unifying the two constants changes which
/// mate-adjacent moves get classified. Keep them separate.
pub const SWING_MATE_SENTINEL: f64 = 100.0;

const EVAL_MARKER: &str = "[%eval";

static CLOCK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[%clk (\d+):(\d+):(\d+)\]").unwrap());

/// Extracts the engine evaluation from a move comment, in pawns from
/// White's perspective.
///
/// The payload sits between the `[%eval` marker and the next `]`. A
/// `#`-prefixed signed integer announces forced mate and maps to
/// `mate_sentinel` carrying the sign of the mating side (a non-positive
/// count favors Black). Anything malformed yields `None`; the ply is
/// simply skipped for evaluation purposes.
pub fn parse_eval(comment: &str, mate_sentinel: f64) -> Option<f64> {
    let start = comment.find(EVAL_MARKER)? + EVAL_MARKER.len();
    let rest = &comment[start..];
    let end = rest.find(']')?;
    let value = rest[..end].trim();

    if let Some(mate) = value.strip_prefix('#') {
        let moves: i64 = mate.parse().ok()?;
        return Some(if moves > 0 {
            mate_sentinel
        } else {
            -mate_sentinel
        });
    }

    value.parse::<f64>().ok()
}

/// Extracts a clock reading from a `[%clk H:MM:SS]` tag anywhere in the
/// comment, as total seconds remaining. Hours may have one or more digits.
pub fn parse_clock(comment: &str) -> Option<u64> {
    let caps = CLOCK_RE.captures(comment)?;
    let hours: u64 = caps[1].parse().ok()?;
    let minutes: u64 = caps[2].parse().ok()?;
    let seconds: u64 = caps[3].parse().ok()?;
    Some(hours * 3600 + minutes * 60 + seconds)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_eval_decimal() {
        assert_eq!(parse_eval("[%eval 0.33]", SERIES_MATE_SENTINEL), Some(0.33));
        assert_eq!(parse_eval("[%eval -1.5]", SERIES_MATE_SENTINEL), Some(-1.5));
        assert_eq!(parse_eval("[%eval 12]", SERIES_MATE_SENTINEL), Some(12.0));
    }

    #[test]
    fn test_parse_eval_ignores_surrounding_text() {
        assert_eq!(
            parse_eval("good move [%eval 0.25] [%clk 1:30:43]", 5.0),
            Some(0.25)
        );
    }

    #[test]
    fn test_parse_eval_mate_maps_to_sentinel_by_sign() {
        assert_eq!(parse_eval("[%eval #3]", SERIES_MATE_SENTINEL), Some(5.0));
        assert_eq!(parse_eval("[%eval #-3]", SERIES_MATE_SENTINEL), Some(-5.0));
        assert_eq!(parse_eval("[%eval #1]", SWING_MATE_SENTINEL), Some(100.0));
        assert_eq!(
            parse_eval("[%eval #-12]", SWING_MATE_SENTINEL),
            Some(-100.0)
        );
    }

    #[test]
    fn test_parse_eval_mate_zero_favors_black() {
        assert_eq!(parse_eval("[%eval #0]", SERIES_MATE_SENTINEL), Some(-5.0));
    }

    #[test]
    fn test_parse_eval_mate_magnitude_does_not_matter() {
        assert_eq!(
            parse_eval("[%eval #1]", SERIES_MATE_SENTINEL),
            parse_eval("[%eval #40]", SERIES_MATE_SENTINEL)
        );
    }

    #[test]
    fn test_parse_eval_absent() {
        assert_eq!(parse_eval("just words", 5.0), None);
        assert_eq!(parse_eval("", 5.0), None);
        assert_eq!(parse_eval("[%clk 0:05:00]", 5.0), None);
    }

    #[test]
    fn test_parse_eval_malformed_degrades_to_none() {
        assert_eq!(parse_eval("[%eval abc]", 5.0), None);
        assert_eq!(parse_eval("[%eval ]", 5.0), None);
        assert_eq!(parse_eval("[%eval 0.5", 5.0), None);
        assert_eq!(parse_eval("[%eval #x]", 5.0), None);
        assert_eq!(parse_eval("[%eval", 5.0), None);
    }

    #[test]
    fn test_parse_clock_converts_to_seconds() {
        assert_eq!(parse_clock("[%clk 0:05:00]"), Some(300));
        assert_eq!(parse_clock("[%clk 1:30:43]"), Some(5443));
        assert_eq!(parse_clock("[%clk 12:00:07]"), Some(43207));
    }

    #[test]
    fn test_parse_clock_multi_digit_hours() {
        assert_eq!(parse_clock("[%clk 10:01:02]"), Some(36062));
    }

    #[test]
    fn test_parse_clock_found_anywhere_in_comment() {
        assert_eq!(parse_clock("[%eval 0.3] [%clk 0:00:59]"), Some(59));
    }

    #[test]
    fn test_parse_clock_absent_or_malformed() {
        assert_eq!(parse_clock(""), None);
        assert_eq!(parse_clock("[%eval 0.3]"), None);
        assert_eq!(parse_clock("[%clk 5:00]"), None);
        assert_eq!(parse_clock("[%clk abc]"), None);
    }
}
