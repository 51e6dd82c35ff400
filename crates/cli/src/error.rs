// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

use crate::label::LabelError;

/// Target pattern error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Target pattern failed to parse
    #[error("invalid target pattern: {0}")]
    Pattern(#[source] LabelError),

    /// Label in the input stream failed to parse
    #[error("invalid label on line {line}: {source}")]
    Label {
        line: usize,
        #[source]
        source: LabelError,
    },

    /// Configuration file not found or invalid
    #[error("config error: {message}")]
    Config {
        message: String,
        path: Option<PathBuf>,
    },

    /// Invalid command-line arguments
    #[error("argument error: {0}")]
    Argument(String),

    /// File I/O error
    #[error("io error: {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing command output failed
    #[error("output error: {0}")]
    Output(#[source] std::io::Error),
}

/// Result type using the crate Error
pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Command succeeded (or the label matched)
    Success = 0,
    /// The label did not match the pattern
    NoMatch = 1,
    /// Configuration, argument, or syntax error
    ConfigError = 2,
    /// Internal or I/O error
    InternalError = 3,
}

impl From<&Error> for ExitCode {
    fn from(err: &Error) -> Self {
        match err {
            Error::Pattern(_) | Error::Label { .. } => ExitCode::ConfigError,
            Error::Config { .. } | Error::Argument(_) => ExitCode::ConfigError,
            Error::Io { .. } | Error::Output(_) => ExitCode::InternalError,
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
