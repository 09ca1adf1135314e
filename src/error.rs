use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("Model {id} not found in {catalog}")]
    ModelNotFound { id: String, catalog: String },

    #[error("Model {id} has an invalid context window ({value}); it must be positive")]
    InvalidContextWindow { id: String, value: i64 },

    #[error("Model {id} has an invalid {field} ({value}); it must be a non-negative number")]
    InvalidModelRatio {
        id: String,
        field: &'static str,
        value: f64,
    },

    #[error("Failed to read model catalog {}: {source}", path.display())]
    CatalogRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse model catalog {}: {source}", path.display())]
    CatalogParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Unsupported locale: {input}")]
    UnsupportedLocale { input: String },

    #[error("Missing API key: set the {var} environment variable")]
    MissingApiKey { var: String },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Failed to read {}: {source}", path.display())]
    ReadInput {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", path.display())]
    WriteOutput {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Completion request failed: {0}")]
    Completion(#[from] CompletionError),
}

#[derive(Debug, Error)]
pub(crate) enum CompletionError {
    #[error("endpoint returned HTTP {0}")]
    Status(u16),

    #[error("{0}")]
    Transport(ureq::Error),

    #[error("malformed response: {0}")]
    Malformed(serde_json::Error),

    #[error("response contained no choices")]
    NoChoices,
}

impl From<ureq::Error> for CompletionError {
    fn from(e: ureq::Error) -> Self {
        match e {
            ureq::Error::StatusCode(code) => CompletionError::Status(code),
            other => CompletionError::Transport(other),
        }
    }
}
