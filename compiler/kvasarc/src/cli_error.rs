//! Failures of the command-line driver itself.
//!
//! Lexical errors in the input are not `CliError`s: they are reported by the
//! `lex` and `check` commands as part of their normal output.

use std::io;

/// An error that stops a command before it can produce output.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("cannot find file '{path}'")]
    NotFound { path: String },

    #[error("permission denied reading '{path}'")]
    PermissionDenied { path: String },

    #[error("'{path}' contains invalid UTF-8 data")]
    InvalidUtf8 { path: String },

    #[error("error reading '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("missing file path\nUsage: kvasar {command} <file.kv>")]
    MissingPath { command: &'static str },

    #[error("unknown option '{option}' for `{command}`")]
    UnknownOption {
        command: &'static str,
        option: String,
    },

    #[error("unknown command: {0}")]
    UnknownCommand(String),
}

impl CliError {
    /// Map a failed read of `path` to a user-facing error.
    pub fn from_io(path: &str, err: io::Error) -> Self {
        let path = path.to_owned();
        match err.kind() {
            io::ErrorKind::NotFound => Self::NotFound { path },
            io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            io::ErrorKind::InvalidData => Self::InvalidUtf8 { path },
            _ => Self::Io { path, source: err },
        }
    }

    /// Whether the usage text should follow the error message.
    pub fn wants_usage(&self) -> bool {
        matches!(self, Self::UnknownCommand(_))
    }
}

#[cfg(test)]
mod tests;
