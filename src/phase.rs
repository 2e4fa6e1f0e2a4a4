use serde::{Deserialize, Serialize};
use shakmaty::{Chess, Color, Position, Square};

use crate::error::InsightsError;
use crate::types::Game;

const CENTRAL_SQUARES: [Square; 4] = [Square::D4, Square::E4, Square::D5, Square::E5];

/// Below this many total pieces the position reads as an endgame; above it,
/// a queen on the board still reads as a middlegame.
const SPARSE_BOARD_PIECES: usize = 10;

/// Positions before this full-move number are never classified middlegame.
const MIN_MIDDLEGAME_FULLMOVES: u32 = 5;

/// Heuristic middlegame test: past the opening moves, at least one queen
/// still on the board, and most material still present.
pub fn is_middlegame(pos: &impl Position) -> bool {
    if pos.fullmoves().get() < MIN_MIDDLEGAME_FULLMOVES {
        return false;
    }

    let board = pos.board();
    !board.queens().is_empty() && board.occupied().count() > SPARSE_BOARD_PIECES
}

/// Heuristic endgame test: queens traded, material reduced, or a king
/// already active on a central square. Not exclusive with
/// [`is_middlegame`]; both can hold for the same position.
pub fn is_endgame(pos: &impl Position) -> bool {
    let board = pos.board();
    let kings_active = [Color::White, Color::Black].iter().any(|&color| {
        board
            .king_of(color)
            .is_some_and(|square| CENTRAL_SQUARES.contains(&square))
    });

    board.queens().is_empty() || board.occupied().count() < SPARSE_BOARD_PIECES || kings_active
}

/// First ply (1-based) at which each phase was detected, if any.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseTransitions {
    pub middlegame_at: Option<u32>,
    pub endgame_at: Option<u32>,
}

/// Replays the main line from the standard starting position and latches
/// the first ply at which each phase predicate holds. Scanning stops once
/// the endgame is reached. The predicates themselves stay stateless; all
/// latching lives here.
pub fn detect_phase_transitions(game: &Game) -> Result<PhaseTransitions, InsightsError> {
    let mut pos = Chess::default();
    let mut transitions = PhaseTransitions::default();

    for (idx, ply) in game.plies.iter().enumerate() {
        let m = ply.san.san.to_move(&pos)?;
        pos.play_unchecked(m);

        let ply_number = idx as u32 + 1;
        if transitions.middlegame_at.is_none() && is_middlegame(&pos) {
            transitions.middlegame_at = Some(ply_number);
        }
        if is_endgame(&pos) {
            transitions.endgame_at = Some(ply_number);
            break;
        }
    }

    Ok(transitions)
}
