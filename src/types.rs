use pgn_reader::SanPlus;
use serde::{Deserialize, Serialize};
use shakmaty::Color;

/// One half-move of the main line with its attached comment text.
#[derive(Debug, Clone)]
pub struct Ply {
    pub san: SanPlus,
    /// Concatenation of all `{ ... }` comments following the move,
    /// whitespace-trimmed and space-joined. Empty when the move carried no
    /// comment.
    pub comment: String,
}

/// A parsed game: the header tags the analyzers need plus the flattened
/// main line. Variations are dropped at ingestion; ply 1 sits at index 0
/// and is always White's move.
#[derive(Debug, Clone, Default)]
pub struct Game {
    pub white: Option<String>,
    pub black: Option<String>,
    pub result: Option<String>,
    pub time_control: Option<String>,
    pub plies: Vec<Ply>,
}

impl Game {
    /// Walks the main line in ply order, pairing each ply with its mover.
    pub fn mainline(&self) -> impl Iterator<Item = (Color, &Ply)> {
        self.plies
            .iter()
            .enumerate()
            .map(|(idx, ply)| (Color::from_white(idx % 2 == 0), ply))
    }
}

/// A pair of values keyed by player color.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerColor<T> {
    pub white: T,
    pub black: T,
}

impl<T> PerColor<T> {
    pub fn get(&self, color: Color) -> &T {
        match color {
            Color::White => &self.white,
            Color::Black => &self.black,
        }
    }

    pub fn get_mut(&mut self, color: Color) -> &mut T {
        match color {
            Color::White => &mut self.white,
            Color::Black => &mut self.black,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ply(san: &str) -> Ply {
        Ply {
            san: san.parse().unwrap(),
            comment: String::new(),
        }
    }

    #[test]
    fn test_mainline_alternates_starting_with_white() {
        let game = Game {
            plies: vec![ply("e4"), ply("e5"), ply("Nf3")],
            ..Game::default()
        };

        let colors: Vec<Color> = game.mainline().map(|(color, _)| color).collect();
        assert_eq!(colors, vec![Color::White, Color::Black, Color::White]);
    }

    #[test]
    fn test_mainline_preserves_ply_order() {
        let game = Game {
            plies: vec![ply("d4"), ply("d5")],
            ..Game::default()
        };

        let sans: Vec<String> = game
            .mainline()
            .map(|(_, ply)| ply.san.to_string())
            .collect();
        assert_eq!(sans, vec!["d4", "d5"]);
    }

    #[test]
    fn test_per_color_indexing() {
        let mut counts = PerColor::<u32>::default();
        *counts.get_mut(Color::White) += 2;
        *counts.get_mut(Color::Black) += 1;

        assert_eq!(*counts.get(Color::White), 2);
        assert_eq!(*counts.get(Color::Black), 1);
        assert_eq!(counts.white, 2);
        assert_eq!(counts.black, 1);
    }
}
