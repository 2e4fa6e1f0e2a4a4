use shakmaty::Color;
use shakmaty::san::SanError;
use thiserror::Error;

/// Errors surfaced by ingestion and summary computations.
///
/// Annotation-level problems (a malformed `[%eval ...]` or `[%clk ...]` tag)
/// are recovered locally by skipping the affected ply and never reach this
/// type.
#[derive(Debug, Error)]
pub enum InsightsError {
    /// The PGN source contained no game at all.
    #[error("no game found in PGN input")]
    NoGame,

    /// A per-color summary was requested for a color that never produced a
    /// clock reading.
    #[error("no clock readings recorded for {color:?}")]
    NoClockData { color: Color },

    /// A main-line SAN could not be applied to the replayed position.
    #[error("illegal move in main line: {0}")]
    IllegalSan(#[from] SanError),

    #[error("failed to read PGN input: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid file pattern: {0}")]
    Pattern(#[from] glob::PatternError),
}
