// src/error.rs
//! Error types for extraction, persistence and configuration.

use std::path::PathBuf;
use thiserror::Error;

/// Failure to reach a page.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("HTTP {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("transport error for {url}: {message}")]
    Transport { url: String, message: String },

    #[error("cannot resolve link {href:?} against {base}")]
    BadUrl { base: String, href: String },
}

/// Failure to turn page text into stats.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("malformed line (no quoted section): {0}")]
    MalformedLine(String),

    #[error("no parenthesized value found: {0}")]
    MissingValueGroup(String),

    #[error("table has no header cells")]
    EmptyHeaders,

    #[error("table {table:?}: row for {entity:?} has {actual} cells, header has {expected}")]
    RaggedRow {
        table: String,
        entity: String,
        expected: usize,
        actual: usize,
    },

    #[error("table {table:?}: row {row} has no creature name")]
    UnnamedRow { table: String, row: usize },
}

impl ParseError {
    /// Stable tag for the failure kind.
    pub fn kind(&self) -> &'static str {
        match self {
            ParseError::MalformedLine(_) => "malformed-line",
            ParseError::MissingValueGroup(_) => "missing-value-group",
            ParseError::EmptyHeaders => "empty-headers",
            ParseError::RaggedRow { .. } => "ragged-row",
            ParseError::UnnamedRow { .. } => "unnamed-row",
        }
    }
}

/// RecordStore failures.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("cannot access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not a valid record file: {reason}", .path.display())]
    Format { path: PathBuf, reason: String },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("config line {line}: bad value {value:?} for {key}")]
    BadValue { line: usize, key: String, value: String },

    #[error("config line {line}: unknown key {key:?}")]
    UnknownKey { line: usize, key: String },

    #[error("config line {line}: expected key = value")]
    Syntax { line: usize },
}

/// Crate-level error.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("{entity}: {source}")]
    Parse {
        entity: String,
        #[source]
        source: ParseError,
    },

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("source {0} has no URL configured")]
    SourceDisabled(&'static str),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_error_kinds_are_stable() {
        assert_eq!(ParseError::MalformedLine(s!("x")).kind(), "malformed-line");
        assert_eq!(ParseError::MissingValueGroup(s!("x")).kind(), "missing-value-group");
        assert_eq!(ParseError::EmptyHeaders.kind(), "empty-headers");
    }

    #[test]
    fn parse_error_display_names_the_entity() {
        let e = Error::Parse {
            entity: s!("Rex"),
            source: ParseError::MissingValueGroup(s!("Bite \"x\"")),
        };
        assert!(e.to_string().starts_with("Rex: no parenthesized value"));
    }
}
