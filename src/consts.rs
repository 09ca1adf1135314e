/// Model used when neither the CLI nor the config names one
pub(crate) const DEFAULT_MODEL: &str = "o3-mini";

/// Words that fit on one A4 page
pub(crate) const WORDS_PER_PAGE: i64 = 500;

/// Fixed heuristic used by the character-ratio token strategy
pub(crate) const CHARS_PER_TOKEN: i64 = 4;

/// Prices in the catalog are quoted per this many tokens
pub(crate) const TOKENS_PER_PRICE_UNIT: f64 = 1_000_000.0;

pub(crate) const CURRENCY_SYMBOL: &str = "$";

pub(crate) const DEFAULT_OUTPUT: &str = "result.md";

/// Written in place of the summary when the completion has no content
pub(crate) const SUMMARY_PLACEHOLDER: &str = "No summary generated.";

pub(crate) const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";
pub(crate) const DEFAULT_API_KEY_ENV: &str = "OPENAI_API_KEY";
pub(crate) const DEFAULT_TIMEOUT_SECS: u64 = 120;
