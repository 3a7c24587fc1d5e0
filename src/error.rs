//! Error types for the Pokedex CLI
//!
//! Provides unified error handling using thiserror.
//!
//! Note that cache lookups and inserts are total operations: a miss is a
//! normal `None`, not an error, so the cache contributes no variants here.
//! The only failure sources are the network fetch and the terminal.

use thiserror::Error;

// == CLI Error Enum ==
/// Unified error type for the Pokedex CLI.
#[derive(Error, Debug)]
pub enum CliError {
    /// HTTP request failed or returned an error status
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body was not the expected JSON document
    #[error("failed to parse API response: {0}")]
    Json(#[from] serde_json::Error),

    /// Terminal input could not be read
    #[error("readline error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),
}

// == Result Type Alias ==
/// Convenience Result type for the Pokedex CLI.
pub type Result<T> = std::result::Result<T, CliError>;
