//! Error types

use thiserror::Error;

/// Main error type for metric collection.
///
/// "No metric" is never an error: the core signals it with `None`.
/// These variants cover caller defects and collaborator failures only.
#[derive(Error, Debug)]
pub enum Error {
    #[error("GitHub API error: {0}")]
    GitHub(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
