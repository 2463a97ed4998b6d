//! Greeter error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading names or producing greetings
#[derive(Debug, Error)]
pub enum GreetError {
    #[error("Names directory {path} is missing or unreadable")]
    Path {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Names directory {path} is not a directory")]
    NotADirectory { path: PathBuf },

    #[error("Failed to read a name from {path}: {reason}")]
    Read { path: PathBuf, reason: String },

    #[error("Invalid file pattern '{pattern}'")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("Cannot pick a random name from an empty list")]
    EmptyInput,

    #[error("Need at least 2 names to greet each other, got {count}")]
    InsufficientInput { count: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for greeter operations
pub type Result<T> = std::result::Result<T, GreetError>;
