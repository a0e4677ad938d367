use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Custom error types for wordstat
#[derive(Debug, Error)]
pub enum WordStatError {
    #[error("No file path given. Pass a FILE argument or set `input.path` in the config file.")]
    InvalidPath,

    #[error("Could not find file for given path: {}", path.display())]
    FileNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid config: {0}")]
    Config(String),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
