//! Error types for STC decoding.
//!
//! Every failure surfaces as a single [`Error`] value. Parsing never recovers: the
//! first violated rule aborts the decode and no partial value is returned.
//!
//! ## Error Categories
//!
//! - **Line errors**: a line that cannot be read as `key: value`
//!   ([`Error::MissingColon`], [`Error::InvalidKeySegment`], [`Error::InvalidValueLiteral`])
//! - **String block errors**: fences that never close or enclose nothing
//! - **Shape errors**: assignments that cannot form a single tree
//!   (duplicates, leaf/container conflicts, sparse or mixed lists)
//! - **Engine errors**: [`Error::EngineUnavailable`] when the requested engine was not compiled in
//!
//! Parse errors carry the 1-based line they were found on when a single line is
//! to blame, and render it as a `Line N: ` prefix.
//!
//! ## Examples
//!
//! ```rust
//! use serde_stc::{decode_with_options, DecodeOptions, ErrorKind};
//!
//! let err = decode_with_options("a.b: 1\na.b: 2", &DecodeOptions::fallback()).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::DuplicateLeafAssignment);
//! assert_eq!(err.line(), Some(2));
//! assert!(err.to_string().starts_with("Line 2: "));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors that can occur while decoding STC.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A non-blank line outside a string block has no `:` separator.
    #[error("{}missing `:` separator in line {content:?}", loc(.line))]
    MissingColon {
        line: Option<usize>,
        content: String,
    },

    /// A key path segment is empty, not an identifier, or a malformed `$N` index.
    #[error("{}invalid key `{key}`: {reason}", loc(.line))]
    InvalidKeySegment {
        line: Option<usize>,
        key: String,
        reason: String,
    },

    /// A value token is none of the accepted literal forms.
    #[error("{}invalid value `{value}`: {reason}", loc(.line))]
    InvalidValueLiteral {
        line: Option<usize>,
        value: String,
        reason: String,
    },

    /// Input ended inside a string block. The line is where the block was opened.
    #[error("{}string block for `{path}` is never closed", loc(.line))]
    UnterminatedStringBlock { line: Option<usize>, path: String },

    /// A string block was closed right after it was opened.
    #[error(
        "{}empty string block must hold one blank line: write `key: ```\\n\\n```` instead of `key: ```\\n````",
        loc(.line)
    )]
    MalformedEmptyStringBlock { line: Option<usize> },

    /// The same key path was given a value twice.
    #[error("{}key `{path}` is assigned more than once", loc(.line))]
    DuplicateLeafAssignment { line: Option<usize>, path: String },

    /// A key path holds a value and is also extended by another key path.
    #[error(
        "{}key `{path}` is set both to a value and to list items or map entries",
        loc(.line)
    )]
    ConflictingContainerAndLeaf { line: Option<usize>, path: String },

    /// A list does not use every index from `$0` up to its length exactly once.
    #[error("`{path}` is a list of {len} items but its indices are not exactly $0..${last}", last = .len.saturating_sub(1))]
    ListGapOrDuplicate { path: String, len: usize },

    /// The direct children of one container mix `$N` indices with names.
    #[error("`{path}` is set both as a list and as a map")]
    MixedListDictKeys { path: String },

    /// The requested decoding engine is not available in this build.
    #[error("decoding engine unavailable: {0}")]
    EngineUnavailable(String),

    /// IO error while reading the source text
    #[error("IO error: {0}")]
    Io(String),

    /// Custom error, raised while deserializing into a typed value
    #[error("Error: {0}")]
    Custom(String),
}

/// The kind of an [`Error`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    MissingColon,
    InvalidKeySegment,
    InvalidValueLiteral,
    UnterminatedStringBlock,
    MalformedEmptyStringBlock,
    DuplicateLeafAssignment,
    ConflictingContainerAndLeaf,
    ListGapOrDuplicate,
    MixedListDictKeys,
    EngineUnavailable,
    Io,
    Custom,
}

fn loc(line: &Option<usize>) -> String {
    match line {
        Some(line) => format!("Line {}: ", line),
        None => String::new(),
    }
}

impl Error {
    /// Creates a missing-colon error for the given line content.
    pub fn missing_colon(line: usize, content: &str) -> Self {
        Error::MissingColon {
            line: Some(line),
            content: content.to_string(),
        }
    }

    /// Creates an invalid key error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_stc::Error;
    ///
    /// let err = Error::invalid_key("a..b", "empty segment");
    /// assert!(err.to_string().contains("a..b"));
    /// assert_eq!(err.line(), None);
    /// ```
    pub fn invalid_key(key: &str, reason: &str) -> Self {
        Error::InvalidKeySegment {
            line: None,
            key: key.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Creates an invalid value error.
    pub fn invalid_value(value: &str, reason: &str) -> Self {
        Error::InvalidValueLiteral {
            line: None,
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn unterminated_string_block(line: usize, path: &str) -> Self {
        Error::UnterminatedStringBlock {
            line: Some(line),
            path: path.to_string(),
        }
    }

    pub fn malformed_empty_string_block(line: usize) -> Self {
        Error::MalformedEmptyStringBlock { line: Some(line) }
    }

    pub fn duplicate_leaf(path: &str) -> Self {
        Error::DuplicateLeafAssignment {
            line: None,
            path: path.to_string(),
        }
    }

    pub fn conflicting_container_and_leaf(path: &str) -> Self {
        Error::ConflictingContainerAndLeaf {
            line: None,
            path: path.to_string(),
        }
    }

    pub fn list_gap_or_duplicate(path: &str, len: usize) -> Self {
        Error::ListGapOrDuplicate {
            path: path.to_string(),
            len,
        }
    }

    pub fn mixed_list_dict_keys(path: &str) -> Self {
        Error::MixedListDictKeys {
            path: path.to_string(),
        }
    }

    /// Creates an engine-unavailable error.
    pub fn engine_unavailable(msg: &str) -> Self {
        Error::EngineUnavailable(msg.to_string())
    }

    /// Creates a custom error with a display message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_stc::Error;
    ///
    /// let err = Error::custom("something went wrong");
    /// assert!(err.to_string().contains("something went wrong"));
    /// ```
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Creates an I/O error for source reading failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Attaches a line number to an error that does not carry one yet.
    ///
    /// Errors that already know their line, and errors that are never tied to a
    /// line, are returned unchanged.
    #[must_use]
    pub fn at_line(mut self, at: usize) -> Self {
        match &mut self {
            Error::MissingColon { line, .. }
            | Error::InvalidKeySegment { line, .. }
            | Error::InvalidValueLiteral { line, .. }
            | Error::UnterminatedStringBlock { line, .. }
            | Error::MalformedEmptyStringBlock { line }
            | Error::DuplicateLeafAssignment { line, .. }
            | Error::ConflictingContainerAndLeaf { line, .. } => {
                line.get_or_insert(at);
            }
            _ => {}
        }
        self
    }

    /// Returns the 1-based line this error was found on, if a single line is to blame.
    #[must_use]
    pub fn line(&self) -> Option<usize> {
        match self {
            Error::MissingColon { line, .. }
            | Error::InvalidKeySegment { line, .. }
            | Error::InvalidValueLiteral { line, .. }
            | Error::UnterminatedStringBlock { line, .. }
            | Error::MalformedEmptyStringBlock { line }
            | Error::DuplicateLeafAssignment { line, .. }
            | Error::ConflictingContainerAndLeaf { line, .. } => *line,
            _ => None,
        }
    }

    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::MissingColon { .. } => ErrorKind::MissingColon,
            Error::InvalidKeySegment { .. } => ErrorKind::InvalidKeySegment,
            Error::InvalidValueLiteral { .. } => ErrorKind::InvalidValueLiteral,
            Error::UnterminatedStringBlock { .. } => ErrorKind::UnterminatedStringBlock,
            Error::MalformedEmptyStringBlock { .. } => ErrorKind::MalformedEmptyStringBlock,
            Error::DuplicateLeafAssignment { .. } => ErrorKind::DuplicateLeafAssignment,
            Error::ConflictingContainerAndLeaf { .. } => ErrorKind::ConflictingContainerAndLeaf,
            Error::ListGapOrDuplicate { .. } => ErrorKind::ListGapOrDuplicate,
            Error::MixedListDictKeys { .. } => ErrorKind::MixedListDictKeys,
            Error::EngineUnavailable(_) => ErrorKind::EngineUnavailable,
            Error::Io(_) => ErrorKind::Io,
            Error::Custom(_) => ErrorKind::Custom,
        }
    }

    /// Returns `true` if the error comes from malformed input rather than from the
    /// environment or from typed deserialization.
    #[must_use]
    pub fn is_parse_error(&self) -> bool {
        !matches!(
            self.kind(),
            ErrorKind::EngineUnavailable | ErrorKind::Io | ErrorKind::Custom
        )
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
