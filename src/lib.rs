//! Move-by-move statistics for annotated chess games.
//!
//! Lichess-style PGN exports embed engine evaluations (`[%eval ...]`) and
//! clock states (`[%clk ...]`) in move comments. This crate ingests such
//! games and derives per-player statistics from the main line:
//!
//! - mistake and blunder counts from evaluation swings ([`count_swings`])
//! - per-move thinking times and time-trouble flags from clock deltas
//!   ([`time_summary`])
//! - middlegame/endgame detection from board material and king activity
//!   ([`is_middlegame`], [`is_endgame`])
//!
//! [`analyze_game`] bundles the swing counts, the evaluation trace and the
//! time summary into one serializable record per game.

pub mod annotation;
pub mod clock;
pub mod error;
pub mod phase;
pub mod reader;
pub mod report;
pub mod swings;
pub mod timecontrol;
pub mod types;
pub mod visitor;

pub use annotation::{SERIES_MATE_SENTINEL, SWING_MATE_SENTINEL, parse_clock, parse_eval};
pub use clock::{MoveTimes, PlayerTimeSummary, extract_move_times, time_summary};
pub use error::InsightsError;
pub use phase::{PhaseTransitions, detect_phase_transitions, is_endgame, is_middlegame};
pub use reader::{GameStream, collect_pgn_paths, read_first_game};
pub use report::{GameInsights, analyze_game};
pub use swings::{SwingCounts, SwingThresholds, count_swings, evaluation_series};
pub use timecontrol::{TimeControl, parse_time_control};
pub use types::{Game, PerColor, Ply};
pub use visitor::GameVisitor;
