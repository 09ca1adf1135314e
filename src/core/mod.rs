//! Core module - text analysis shared by every command

mod analyzer;
mod compression;
mod types;

pub(crate) use analyzer::{TextStatistics, analyze_text};
pub(crate) use compression::Compression;
pub(crate) use types::TokenStrategy;
