use std::mem;
use std::ops::ControlFlow;

use pgn_reader::{Outcome, RawComment, RawTag, SanPlus, Skip, Visitor};

use crate::types::{Game, Ply};

/// Streaming PGN visitor (pgn-reader) that materializes one [`Game`] per
/// input game: the header tags the analyzers consume plus the main line
/// with its comments. Variations are skipped entirely.
pub struct GameVisitor {
    headers: HeaderFields,
    result_marker: Option<String>,
    pub current_game: Option<Game>,
}

#[derive(Default)]
struct HeaderFields {
    white: String,
    black: String,
    result: String,
    time_control: String,
}

impl HeaderFields {
    fn clear(&mut self) {
        *self = Self::default();
    }

    fn opt_take(field: &mut String) -> Option<String> {
        if field.is_empty() {
            None
        } else {
            Some(mem::take(field))
        }
    }

    fn set_known_tag(&mut self, key: &[u8], value: RawTag<'_>) {
        let slot: &mut String = match key {
            b"White" => &mut self.white,
            b"Black" => &mut self.black,
            b"Result" => &mut self.result,
            b"TimeControl" => &mut self.time_control,
            _ => return,
        };

        if !slot.is_empty() {
            return;
        }

        let bytes = value.as_bytes();
        if bytes.is_empty() {
            return;
        }

        *slot = String::from_utf8_lossy(bytes).into_owned();
    }
}

impl GameVisitor {
    pub fn new() -> Self {
        Self {
            headers: HeaderFields::default(),
            result_marker: None,
            current_game: None,
        }
    }
}

impl Visitor for GameVisitor {
    type Tags = ();
    type Movetext = Vec<Ply>;
    type Output = ();

    fn begin_tags(&mut self) -> ControlFlow<Self::Output, Self::Tags> {
        self.headers.clear();
        self.result_marker = None;
        self.current_game = None;
        ControlFlow::Continue(())
    }

    fn tag(
        &mut self,
        _: &mut Self::Tags,
        key: &[u8],
        value: RawTag<'_>,
    ) -> ControlFlow<Self::Output> {
        self.headers.set_known_tag(key, value);
        ControlFlow::Continue(())
    }

    fn begin_movetext(&mut self, _: Self::Tags) -> ControlFlow<Self::Output, Self::Movetext> {
        ControlFlow::Continue(Vec::with_capacity(96))
    }

    fn begin_variation(&mut self, _: &mut Self::Movetext) -> ControlFlow<Self::Output, Skip> {
        ControlFlow::Continue(Skip(true))
    }

    fn san(&mut self, movetext: &mut Self::Movetext, san: SanPlus) -> ControlFlow<Self::Output> {
        movetext.push(Ply {
            san,
            comment: String::new(),
        });
        ControlFlow::Continue(())
    }

    fn comment(
        &mut self,
        movetext: &mut Self::Movetext,
        comment: RawComment<'_>,
    ) -> ControlFlow<Self::Output> {
        // A comment before the first move annotates the starting position,
        // not a ply; the walkers start at ply 1, so it is dropped.
        if let Some(ply) = movetext.last_mut() {
            let text = String::from_utf8_lossy(comment.as_bytes());
            let trimmed = text.trim();
            if !trimmed.is_empty() {
                if !ply.comment.is_empty() {
                    ply.comment.push(' ');
                }
                ply.comment.push_str(trimmed);
            }
        }
        ControlFlow::Continue(())
    }

    fn outcome(&mut self, _: &mut Self::Movetext, outcome: Outcome) -> ControlFlow<Self::Output> {
        self.result_marker = Some(outcome.to_string());
        ControlFlow::Continue(())
    }

    fn end_game(&mut self, movetext: Self::Movetext) -> Self::Output {
        self.current_game = Some(Game {
            white: HeaderFields::opt_take(&mut self.headers.white),
            black: HeaderFields::opt_take(&mut self.headers.black),
            result: HeaderFields::opt_take(&mut self.headers.result)
                .or_else(|| self.result_marker.take()),
            time_control: HeaderFields::opt_take(&mut self.headers.time_control),
            plies: movetext,
        });
    }
}
