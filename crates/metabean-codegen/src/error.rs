// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Generator errors.
//!
//! Parsing and validation produce spanned `darling`/`syn` errors, exactly as
//! a derive macro would. Source mode converts them into [`GenError`] carrying
//! the file and line so the CLI can report them.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Error raised while generating one source file.
#[derive(Debug, Error)]
pub enum GenError {
    /// Malformed bean declaration or violated bean rule.
    #[error("{}:{line}: {message}", file.display())]
    Source {
        /// File being processed.
        file:    PathBuf,
        /// 1-based line of the offending code.
        line:    usize,
        /// Human readable description.
        message: String
    },

    /// Reading or writing a file failed.
    #[error("{}: {source}", file.display())]
    Io {
        /// File being processed.
        file:   PathBuf,
        /// Underlying error.
        #[source]
        source: io::Error
    },

    /// Invalid configuration text.
    #[error("config line {line}: {message}")]
    Config {
        /// 1-based line in the ini text.
        line:    usize,
        /// Human readable description.
        message: String
    },

    /// Invalid file search pattern.
    #[error("invalid path pattern `{pattern}`: {message}")]
    Pattern {
        /// Pattern text.
        pattern: String,
        /// Human readable description.
        message: String
    },

    /// Unknown configuration profile name.
    #[error("unknown config profile `{0}`")]
    UnknownProfile(String)
}

impl GenError {
    /// Error at a line of `file`.
    pub fn at(file: impl Into<PathBuf>, line: usize, message: impl Into<String>) -> Self {
        Self::Source {
            file: file.into(),
            line,
            message: message.into()
        }
    }

    /// Convert spanned parse errors, keeping the first error's position.
    pub fn from_darling(file: impl Into<PathBuf>, err: darling::Error) -> Self {
        let file = file.into();
        let errors: Vec<darling::Error> = err.into_iter().collect();
        let line = errors
            .first()
            .map(|first| first.span().start().line)
            .unwrap_or(0);
        let message = errors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        Self::Source {
            file,
            line,
            message
        }
    }

    /// Convert a `syn` error, keeping its position.
    pub fn from_syn(file: impl Into<PathBuf>, err: &syn::Error) -> Self {
        Self::Source {
            file:    file.into(),
            line:    err.span().start().line,
            message: err.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_error_formats_position() {
        let err = GenError::at("src/person.rs", 12, "bad field");
        assert_eq!(err.to_string(), "src/person.rs:12: bad field");
    }

    #[test]
    fn unknown_profile_message() {
        let err = GenError::UnknownProfile("guava".into());
        assert_eq!(err.to_string(), "unknown config profile `guava`");
    }
}
