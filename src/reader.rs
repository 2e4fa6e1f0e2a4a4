use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use pgn_reader::Reader;
use zstd::stream::read::Decoder as ZstdDecoder;

use crate::error::InsightsError;
use crate::types::Game;
use crate::visitor::GameVisitor;

pub type PgnInput = Box<dyn Read + Send>;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum CompressionMode {
    Plain,
    Zstd,
}

impl CompressionMode {
    fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("zst") => Self::Zstd,
            _ => Self::Plain,
        }
    }
}

/// Pulls successive games out of one PGN source.
pub struct GameStream {
    reader: Reader<PgnInput>,
    visitor: GameVisitor,
}

impl GameStream {
    /// Opens a `.pgn` file; `.pgn.zst` inputs are decompressed on the fly.
    ///
    /// No extra BufReader layer is added: pgn-reader buffers the underlying
    /// reader itself and recommends against double buffering.
    pub fn open(path: &Path) -> Result<Self, InsightsError> {
        let file = File::open(path)?;
        let input: PgnInput = match CompressionMode::from_path(path) {
            CompressionMode::Plain => Box::new(file),
            CompressionMode::Zstd => Box::new(ZstdDecoder::new(file)?),
        };
        Ok(Self::from_read(input))
    }

    pub fn from_read(input: impl Read + Send + 'static) -> Self {
        Self {
            reader: Reader::new(Box::new(input) as PgnInput),
            visitor: GameVisitor::new(),
        }
    }

    /// Next game in the source, or `None` at end of input.
    pub fn next_game(&mut self) -> Result<Option<Game>, InsightsError> {
        match self.reader.read_game(&mut self.visitor)? {
            Some(()) => Ok(self.visitor.current_game.take()),
            None => Ok(None),
        }
    }
}

impl Iterator for GameStream {
    type Item = Result<Game, InsightsError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_game().transpose()
    }
}

/// Reads the first game of a source, failing with
/// [`InsightsError::NoGame`] when the source holds none.
pub fn read_first_game(input: impl Read + Send + 'static) -> Result<Game, InsightsError> {
    GameStream::from_read(input)
        .next_game()?
        .ok_or(InsightsError::NoGame)
}

/// Expands a literal path or glob pattern into the list of PGN files to
/// read. Unreadable glob entries are skipped with a warning.
pub fn collect_pgn_paths(pattern: &str) -> Result<Vec<PathBuf>, InsightsError> {
    if pattern.contains('*') || pattern.contains('?') {
        let mut paths = Vec::new();
        for entry in glob::glob(pattern)? {
            match entry {
                Ok(path) => paths.push(path),
                Err(error) => log::warn!("skipping unreadable glob entry: {error}"),
            }
        }
        Ok(paths)
    } else {
        Ok(vec![PathBuf::from(pattern)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_GAMES: &str = r#"[White "Ann"]
[Black "Ben"]
[Result "1-0"]

1. e4 e5 1-0

[White "Cleo"]
[Black "Dan"]
[Result "0-1"]

1. d4 d5 2. c4 0-1
"#;

    #[test]
    fn test_stream_reads_games_in_order() {
        let mut stream = GameStream::from_read(TWO_GAMES.as_bytes());

        let first = stream.next_game().unwrap().unwrap();
        assert_eq!(first.white.as_deref(), Some("Ann"));
        assert_eq!(first.plies.len(), 2);

        let second = stream.next_game().unwrap().unwrap();
        assert_eq!(second.white.as_deref(), Some("Cleo"));
        assert_eq!(second.plies.len(), 3);

        assert!(stream.next_game().unwrap().is_none());
    }

    #[test]
    fn test_stream_iterator_adapter() {
        let games: Vec<Game> = GameStream::from_read(TWO_GAMES.as_bytes())
            .collect::<Result<_, _>>()
            .unwrap();

        assert_eq!(games.len(), 2);
        assert_eq!(games[1].black.as_deref(), Some("Dan"));
    }

    #[test]
    fn test_read_first_game_on_empty_input_is_an_error() {
        let result = read_first_game(&b""[..]);
        assert!(matches!(result, Err(InsightsError::NoGame)));
    }

    #[test]
    fn test_compression_mode_from_extension() {
        assert_eq!(
            CompressionMode::from_path(Path::new("games/lichess.pgn")),
            CompressionMode::Plain
        );
        assert_eq!(
            CompressionMode::from_path(Path::new("games/lichess.pgn.zst")),
            CompressionMode::Zstd
        );
        assert_eq!(
            CompressionMode::from_path(Path::new("GAMES/LICHESS.PGN.ZST")),
            CompressionMode::Zstd
        );
    }

    #[test]
    fn test_open_reads_zstd_compressed_pgn() {
        let compressed = zstd::stream::encode_all(TWO_GAMES.as_bytes(), 0).unwrap();
        let path = std::env::temp_dir().join(format!("pgn-insights-{}.pgn.zst", std::process::id()));
        std::fs::write(&path, compressed).unwrap();

        let mut stream = GameStream::open(&path).unwrap();
        let game = stream.next_game().unwrap().unwrap();
        assert_eq!(game.white.as_deref(), Some("Ann"));

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_open_reads_plain_pgn() {
        let path = std::env::temp_dir().join(format!("pgn-insights-{}.pgn", std::process::id()));
        std::fs::write(&path, TWO_GAMES).unwrap();

        let games: Vec<Game> = GameStream::open(&path)
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(games.len(), 2);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_collect_pgn_paths_literal_path() {
        let paths = collect_pgn_paths("games/round1.pgn").unwrap();
        assert_eq!(paths, vec![PathBuf::from("games/round1.pgn")]);
    }

    #[test]
    fn test_collect_pgn_paths_unmatched_glob_is_empty() {
        let paths = collect_pgn_paths("/nonexistent-pgn-insights-dir/*.pgn").unwrap();
        assert!(paths.is_empty());
    }
}
