use serde::Serialize;

use crate::catalog::ModelSpec;
use crate::consts::WORDS_PER_PAGE;

use super::types::TokenStrategy;

/// Size, token and context figures for one piece of text against one model.
///
/// Only `analyze_text` builds these; every figure is derived from the text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct TextStatistics {
    words: i64,
    characters: i64,
    lines: i64,
    estimated_tokens: i64,
    strategy: TokenStrategy,
    character_size: f64,
    token_size: f64,
    total_size: f64,
    context_utilization: f64,
    estimated_pages: i64,
}

impl TextStatistics {
    pub(crate) fn words(&self) -> i64 {
        self.words
    }

    pub(crate) fn characters(&self) -> i64 {
        self.characters
    }

    pub(crate) fn lines(&self) -> i64 {
        self.lines
    }

    pub(crate) fn estimated_tokens(&self) -> i64 {
        self.estimated_tokens
    }

    pub(crate) fn strategy(&self) -> TokenStrategy {
        self.strategy
    }

    pub(crate) fn character_size(&self) -> f64 {
        self.character_size
    }

    pub(crate) fn token_size(&self) -> f64 {
        self.token_size
    }

    pub(crate) fn total_size(&self) -> f64 {
        self.total_size
    }

    /// Percent of the context window; above 100 means the text does not fit
    pub(crate) fn context_utilization(&self) -> f64 {
        self.context_utilization
    }

    pub(crate) fn estimated_pages(&self) -> i64 {
        self.estimated_pages
    }
}

/// Unicode White_Space minus NEL (U+0085), plus the byte order mark (U+FEFF)
fn is_separator(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}'
}

/// Whitespace-split word count.
///
/// Splitting empty text still produces one (empty) segment, so blank input counts
/// as one word.
fn count_words(text: &str) -> i64 {
    let words = text.split(is_separator).filter(|w| !w.is_empty()).count();
    words.max(1) as i64
}

/// Analyze `text` for the given model. Its context window must already be validated as positive.
pub(crate) fn analyze_text(
    text: &str,
    spec: &ModelSpec,
    strategy: TokenStrategy,
) -> TextStatistics {
    let words = count_words(text);
    let characters = text.encode_utf16().count() as i64;
    let lines = text.split('\n').count() as i64;

    let estimated_tokens = strategy.estimate(words, characters, spec);

    let character_size = characters as f64 * spec.bytes_per_character;
    let token_size = estimated_tokens as f64 * spec.bytes_per_token;

    let context_utilization = (estimated_tokens as f64 / spec.context_window as f64) * 100.0;

    TextStatistics {
        words,
        characters,
        lines,
        estimated_tokens,
        strategy,
        character_size,
        token_size,
        total_size: character_size + token_size,
        context_utilization,
        estimated_pages: (words + WORDS_PER_PAGE - 1) / WORDS_PER_PAGE,
    }
}
