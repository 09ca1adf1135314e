//! CLI argument definitions
//!
//! Global CLI options and configuration merging logic.

use std::io::IsTerminal;
use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::config::{Config, ConfigColorMode};
use crate::consts::{
    DEFAULT_API_BASE, DEFAULT_API_KEY_ENV, DEFAULT_MODEL, DEFAULT_OUTPUT, DEFAULT_TIMEOUT_SECS,
};
use crate::core::TokenStrategy;

use super::commands::Commands;

#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq)]
pub(crate) enum ColorMode {
    /// Auto-detect based on terminal (default)
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Debug, Parser)]
#[command(name = "docscope")]
#[command(
    about = "Estimate document size, context window use and cost for LLM summarization",
    version
)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,

    /// Model identifier from the catalog [default: o3-mini]
    #[arg(short, long, global = true, value_name = "ID")]
    pub(crate) model: Option<String>,

    /// Model catalog JSON file
    #[arg(long, global = true, value_name = "PATH")]
    pub(crate) catalog: Option<PathBuf>,

    /// Token estimation strategy [default: word-ratio]
    #[arg(long, global = true, value_enum)]
    pub(crate) strategy: Option<TokenStrategy>,

    /// Output as JSON
    #[arg(short, long, global = true)]
    pub(crate) json: bool,

    /// Locale for number formatting (e.g., "en", "de", "fr")
    #[arg(long, global = true, value_name = "LOCALE")]
    pub(crate) locale: Option<String>,

    /// Color output mode
    #[arg(long, global = true, value_enum, default_value = "auto")]
    pub(crate) color: ColorMode,

    /// Disable colored output (shorthand for --color=never)
    #[arg(long, global = true)]
    pub(crate) no_color: bool,

    /// Enable debug logging on stderr
    #[arg(long, global = true)]
    pub(crate) debug: bool,

    #[arg(skip)]
    pub(crate) api_base: Option<String>,
    #[arg(skip)]
    pub(crate) api_key_env: Option<String>,
    #[arg(skip)]
    pub(crate) timeout_secs: Option<u64>,
    #[arg(skip)]
    pub(crate) default_output: Option<PathBuf>,
}

impl Cli {
    /// Merge config file values into CLI (CLI args take precedence)
    pub(crate) fn with_config(mut self, config: Config) -> Self {
        // For boolean flags, config only applies if CLI is false (default)
        if !self.json && config.json {
            self.json = true;
        }
        if !self.no_color && config.no_color {
            self.no_color = true;
        }
        if !self.debug && config.debug {
            self.debug = true;
        }

        if let Some(color) = config.color
            && self.color == ColorMode::Auto
        {
            self.color = match color {
                ConfigColorMode::Auto => ColorMode::Auto,
                ConfigColorMode::Always => ColorMode::Always,
                ConfigColorMode::Never => ColorMode::Never,
            };
        }

        // Optional values: only apply if CLI didn't set them
        if self.model.is_none() {
            self.model = config.model;
        }
        if self.catalog.is_none() {
            self.catalog = config.catalog;
        }
        if self.strategy.is_none() {
            self.strategy = config.strategy;
        }
        if self.locale.is_none() {
            self.locale = config.locale;
        }

        self.api_base = config.api_base;
        self.api_key_env = config.api_key_env;
        self.timeout_secs = config.timeout_secs;
        self.default_output = config.output;

        self
    }

    pub(crate) fn model_id(&self) -> &str {
        self.model.as_deref().unwrap_or(DEFAULT_MODEL)
    }

    pub(crate) fn token_strategy(&self) -> TokenStrategy {
        self.strategy.unwrap_or_default()
    }

    pub(crate) fn api_base(&self) -> &str {
        self.api_base.as_deref().unwrap_or(DEFAULT_API_BASE)
    }

    pub(crate) fn api_key_env(&self) -> &str {
        self.api_key_env.as_deref().unwrap_or(DEFAULT_API_KEY_ENV)
    }

    pub(crate) fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS))
    }

    /// Summary path: `-o` wins, then config `output`, then result.md
    pub(crate) fn output_path(&self, explicit: Option<PathBuf>) -> PathBuf {
        explicit
            .or_else(|| self.default_output.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT))
    }

    pub(crate) fn use_color(&self) -> bool {
        if self.no_color {
            return false;
        }
        match self.color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => std::io::stdout().is_terminal(),
        }
    }
}
