//! Key paths.
//!
//! A key path is the dotted left-hand side of an STC line. Each segment is either
//! a map key (`name`) or a list position (`$0`, `$1`, ...).
//!
//! ```rust
//! use serde_stc::{KeyPath, Segment};
//!
//! let path: KeyPath = "servers.$1.host".parse().unwrap();
//! assert_eq!(
//!     path.segments(),
//!     &[
//!         Segment::Name("servers".to_string()),
//!         Segment::Index(1),
//!         Segment::Name("host".to_string()),
//!     ]
//! );
//! assert_eq!(path.to_string(), "servers.$1.host");
//! ```

use crate::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// One segment of a [`KeyPath`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Segment {
    /// A map key, matching `[A-Za-z_][A-Za-z0-9_]*`.
    Name(String),
    /// A list position written as `$N`.
    Index(usize),
}

impl Segment {
    #[inline]
    #[must_use]
    pub const fn is_index(&self) -> bool {
        matches!(self, Segment::Index(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_name(&self) -> bool {
        matches!(self, Segment::Name(_))
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Name(name) => f.write_str(name),
            Segment::Index(index) => write!(f, "${}", index),
        }
    }
}

/// A non-empty, ordered sequence of [`Segment`]s.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct KeyPath(Vec<Segment>);

impl KeyPath {
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`; parsing never produces an empty path.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Renders the first `len` segments in dotted form.
    #[must_use]
    pub fn prefix(&self, len: usize) -> String {
        join(&self.0[..len.min(self.0.len())])
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&join(&self.0))
    }
}

impl FromStr for KeyPath {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_key_path(s)
    }
}

fn join(segments: &[Segment]) -> String {
    segments
        .iter()
        .map(|segment| segment.to_string())
        .collect::<Vec<_>>()
        .join(".")
}

/// Parses the dotted key text of a line into a [`KeyPath`].
///
/// # Errors
///
/// Returns [`Error::InvalidKeySegment`] if any segment is empty, is not an
/// identifier, or is a `$` not followed by decimal digits only.
pub fn parse_key_path(raw: &str) -> Result<KeyPath> {
    raw.split('.')
        .map(|piece| parse_segment(raw, piece))
        .collect::<Result<Vec<_>>>()
        .map(KeyPath)
}

fn parse_segment(key: &str, piece: &str) -> Result<Segment> {
    if piece.is_empty() {
        return Err(Error::invalid_key(key, "key segments must not be empty"));
    }

    if let Some(digits) = piece.strip_prefix('$') {
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::invalid_key(
                key,
                "list index must be `$` followed by decimal digits",
            ));
        }
        // Digits only, so the parse can only fail on overflow.
        return digits
            .parse::<usize>()
            .map(Segment::Index)
            .map_err(|_| Error::invalid_key(key, "list index is out of range"));
    }

    if !is_identifier(piece) {
        return Err(Error::invalid_key(
            key,
            "key segments must be identifiers (letters, digits, `_`, not starting with a digit)",
        ));
    }

    Ok(Segment::Name(piece.to_string()))
}

fn is_identifier(piece: &str) -> bool {
    let mut chars = piece.chars();
    match chars.next() {
        Some(c) if c == '_' || c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
}
