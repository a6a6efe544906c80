use nscomplete_core::fragment::is_word_char;
use nscomplete_core::Session;
use nu_ansi_term::Color;
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};
use std::borrow::Cow;
use tracing::warn;

/// Line-editor helper: Tab completion and inline hints from the session
pub struct ReplHelper {
    session: Session,
}

impl ReplHelper {
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    fn candidates(&self, word: &str) -> Vec<String> {
        self.session.completions(word).unwrap_or_else(|err| {
            warn!(error = %err, "completion unavailable");
            Vec::new()
        })
    }
}

impl Helper for ReplHelper {}

impl Completer for ReplHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let (start, word) = extract_word_at_position(line, pos);

        let pairs = self
            .candidates(word)
            .into_iter()
            .map(|candidate| Pair {
                // List only the member part; the line shows the rest
                display: candidate
                    .rsplit('.')
                    .next()
                    .unwrap_or(&candidate)
                    .to_string(),
                replacement: candidate,
            })
            .collect();

        Ok((start, pairs))
    }
}

impl Hinter for ReplHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<Self::Hint> {
        if pos < line.len() {
            return None;
        }

        let (_, word) = extract_word_at_position(line, pos);
        if word.len() < 2 {
            return None;
        }

        // Show the remaining part of the first candidate
        self.candidates(word)
            .into_iter()
            .next()
            .map(|candidate| candidate[word.len()..].to_string())
            .filter(|rest| !rest.is_empty())
    }
}

impl Highlighter for ReplHelper {
    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Cow::Owned(Color::DarkGray.paint(hint).to_string())
    }
}

impl Validator for ReplHelper {}

/// The identifier or dotted path ending at `pos`, with its start offset
pub fn extract_word_at_position(line: &str, pos: usize) -> (usize, &str) {
    let before_cursor = &line[..pos];

    let start = before_cursor
        .char_indices()
        .rev()
        .find(|&(_, c)| !is_word_char(c) && c != '.')
        .map(|(i, c)| i + c.len_utf8())
        .unwrap_or(0);

    (start, &before_cursor[start..])
}
