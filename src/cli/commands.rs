//! CLI subcommand definitions

use std::path::PathBuf;

use clap::Subcommand;

/// Main CLI commands
#[derive(Debug, Subcommand)]
pub(crate) enum Commands {
    /// Analyze a document against the selected model (no API call)
    Analyze {
        /// Text file to analyze
        file: PathBuf,
    },
    /// Summarize a document with the selected model and report compression and cost
    Summarize {
        /// Text file to summarize
        input: PathBuf,

        /// Where to write the summary [default: result.md]
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
    /// Price a token count with the selected model
    Cost {
        /// Input token count
        #[arg(short, long, allow_negative_numbers = true)]
        tokens: i64,

        /// Generated token count; switches the total to input + output
        #[arg(long, allow_negative_numbers = true)]
        output_tokens: Option<i64>,
    },
    /// List the models in the catalog
    Models,
}
