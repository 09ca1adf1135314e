use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::catalog::ModelSpec;
use crate::consts::CHARS_PER_TOKEN;

/// How token counts are approximated from text.
///
/// One strategy is chosen per run; the two are not numerically equivalent, so a
/// single report never mixes them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub(crate) enum TokenStrategy {
    /// ceil(words * model tokensPerWord) (default)
    #[default]
    WordRatio,
    /// ceil(characters / 4)
    CharRatio,
}

impl TokenStrategy {
    pub(crate) fn estimate(self, words: i64, characters: i64, spec: &ModelSpec) -> i64 {
        match self {
            TokenStrategy::WordRatio => (words as f64 * spec.tokens_per_word).ceil() as i64,
            TokenStrategy::CharRatio => (characters + CHARS_PER_TOKEN - 1) / CHARS_PER_TOKEN,
        }
    }

    pub(crate) fn name(self) -> &'static str {
        match self {
            TokenStrategy::WordRatio => "word-ratio",
            TokenStrategy::CharRatio => "char-ratio",
        }
    }

    /// Human description including the ratio in effect for `spec`
    pub(crate) fn describe(self, spec: &ModelSpec) -> String {
        match self {
            TokenStrategy::WordRatio => {
                format!("{} ({} tokens/word)", self.name(), spec.tokens_per_word)
            }
            TokenStrategy::CharRatio => {
                format!("{} ({CHARS_PER_TOKEN} chars/token)", self.name())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::PricingProfile;

    fn spec(tokens_per_word: f64) -> ModelSpec {
        ModelSpec {
            id: "m".to_string(),
            name: "M".to_string(),
            context_window: 1000,
            tokens_per_word,
            bytes_per_token: 4.0,
            bytes_per_character: 1.0,
            description: String::new(),
            pricing: PricingProfile::default(),
        }
    }

    #[test]
    fn word_ratio_rounds_up() {
        assert_eq!(TokenStrategy::WordRatio.estimate(2, 11, &spec(1.3)), 3);
        assert_eq!(TokenStrategy::WordRatio.estimate(10, 0, &spec(1.3)), 13);
        assert_eq!(TokenStrategy::WordRatio.estimate(0, 0, &spec(1.3)), 0);
    }

    #[test]
    fn char_ratio_rounds_up_and_ignores_words() {
        assert_eq!(TokenStrategy::CharRatio.estimate(99, 0, &spec(1.3)), 0);
        assert_eq!(TokenStrategy::CharRatio.estimate(99, 1, &spec(1.3)), 1);
        assert_eq!(TokenStrategy::CharRatio.estimate(99, 4, &spec(1.3)), 1);
        assert_eq!(TokenStrategy::CharRatio.estimate(99, 5, &spec(1.3)), 2);
    }

    #[test]
    fn char_ratio_is_non_decreasing_in_characters() {
        let s = spec(1.3);
        let mut previous = 0;
        for chars in 0..2_000 {
            let tokens = TokenStrategy::CharRatio.estimate(0, chars, &s);
            assert!(tokens >= previous);
            previous = tokens;
        }
    }

    #[test]
    fn describe_names_ratio() {
        assert_eq!(
            TokenStrategy::WordRatio.describe(&spec(1.3)),
            "word-ratio (1.3 tokens/word)"
        );
        assert_eq!(
            TokenStrategy::CharRatio.describe(&spec(1.3)),
            "char-ratio (4 chars/token)"
        );
    }

    #[test]
    fn deserializes_kebab_case() {
        let s: TokenStrategy = serde_json::from_str(r#""char-ratio""#).unwrap();
        assert_eq!(s, TokenStrategy::CharRatio);
        assert!(serde_json::from_str::<TokenStrategy>(r#""bpe""#).is_err());
    }
}
