use std::path::PathBuf;

use thiserror::Error;

/// Custom error types for pickbox
#[derive(Debug, Error)]
pub enum PickError {
    #[error("No options to choose from.\n\nPass a FILE or pipe one option per line on stdin.")]
    NoOptions,

    #[error("Invalid options input: {0}")]
    InvalidOptions(String),

    #[error("Invalid config file {}: {message}", path.display())]
    InvalidConfig { path: PathBuf, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
