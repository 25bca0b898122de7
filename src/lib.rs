//! # serde_stc
//!
//! A decoder for STC, a small line-oriented text format for configuration and data.
//!
//! ## What is STC?
//!
//! STC writes a nested document as a flat list of `key.path: value` lines:
//!
//! ````text
//! server.host: ```
//! example.org
//! ```
//! server.port: 8080
//! server.tls: `true`
//! mirrors.$0: ```
//! eu.example.org
//! ```
//! mirrors.$1: ```
//! us.example.org
//! ```
//! ````
//!
//! - **Dotted paths** express nesting; `$N` segments make lists.
//! - **Order free**: lines may appear in any order, list positions come from the indices.
//! - **Self-describing strings**: text lives between backtick fences, and a fence is
//!   always longer than any backtick-only line it encloses, so no escaping is needed.
//! - **Strict**: duplicate keys, sparse lists and keys used as both value and container
//!   are errors, never silently merged.
//!
//! ## Quick Start
//!
//! ```rust
//! # #[cfg(feature = "native")] {
//! use serde_stc::{decode, Value};
//!
//! let value = decode("a.b: 1\na.c.$0: 2.5\na.c.$1: `false`").unwrap();
//!
//! let a = value.get("a").unwrap();
//! assert_eq!(a.get("b"), Some(&Value::Integer(1)));
//! assert_eq!(a.get("c").and_then(|c| c.get_index(1)), Some(&Value::Bool(false)));
//! # }
//! ```
//!
//! ### Typed decoding
//!
//! ```rust
//! # #[cfg(feature = "native")] {
//! use serde::Deserialize;
//! use serde_stc::from_str;
//!
//! #[derive(Deserialize, Debug, PartialEq)]
//! struct Server {
//!     host: String,
//!     port: u16,
//!     tls: bool,
//! }
//!
//! let server: Server = from_str("host: ```\nexample.org\n```\nport: 8080\ntls: `true`").unwrap();
//! assert_eq!(server.port, 8080);
//! # }
//! ```
//!
//! ## Engines
//!
//! Two interchangeable engines decode documents; see [`Engine`]. The primary engine is
//! compiled in by the default `native` feature. Without it, asking for
//! [`Engine::Primary`] fails with [`Error::EngineUnavailable`] and callers can pick
//! [`Engine::Fallback`] through [`DecodeOptions`].
//!
//! ## Logging
//!
//! Decoding reports progress through the [`log`] facade at `debug` and `trace` level.
//! No logger is installed by this crate.
//!
//! ## Format Reference
//!
//! See the [`grammar`] module.

pub mod de;
pub mod error;
pub mod grammar;
pub mod key;
pub mod literal;
pub mod macros;
pub mod map;
#[cfg(feature = "native")]
mod native;
pub mod options;
mod tree;
pub mod value;

pub use de::Decoder;
pub use error::{Error, ErrorKind, Result};
pub use key::{parse_key_path, KeyPath, Segment};
pub use literal::fence_len_for;
pub use map::StcMap;
pub use options::{DecodeOptions, Engine};
pub use value::Value;

use serde::de::DeserializeOwned;
use std::io;

/// Decodes STC text with the default options.
///
/// # Examples
///
/// ```rust
/// # #[cfg(feature = "native")] {
/// use serde_stc::{decode, Value};
///
/// assert_eq!(decode("{}").unwrap(), Value::default());
/// assert!(decode("a.$1: 1").is_err());
/// # }
/// ```
///
/// # Errors
///
/// Returns an error for any malformed line or inconsistent shape, and
/// [`Error::EngineUnavailable`] if the primary engine was not compiled in.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn decode(input: &str) -> Result<Value> {
    decode_with_options(input, &DecodeOptions::default())
}

/// Decodes STC text with the given options.
///
/// # Examples
///
/// ```rust
/// use serde_stc::{decode_with_options, DecodeOptions};
///
/// let value = decode_with_options("a: ```\n\n```", &DecodeOptions::fallback()).unwrap();
/// assert_eq!(value.get("a").and_then(|v| v.as_str()), Some(""));
/// ```
///
/// # Errors
///
/// See [`decode`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn decode_with_options(input: &str, options: &DecodeOptions) -> Result<Value> {
    match options.engine {
        Engine::Primary => decode_primary(input),
        Engine::Fallback => Decoder::from_str(input).decode(),
    }
}

#[cfg(feature = "native")]
fn decode_primary(input: &str) -> Result<Value> {
    native::decode(input)
}

#[cfg(not(feature = "native"))]
fn decode_primary(_input: &str) -> Result<Value> {
    Err(Error::engine_unavailable(
        "the primary engine requires the `native` feature; use `Engine::Fallback`",
    ))
}

/// Reads all of `reader` and decodes it with the default options.
///
/// # Examples
///
/// ```rust
/// # #[cfg(feature = "native")] {
/// use serde_stc::decode_from_reader;
/// use std::io::Cursor;
///
/// let value = decode_from_reader(Cursor::new(b"x: 1\ny: 2")).unwrap();
/// assert_eq!(value.get("y").and_then(|v| v.as_i64()), Some(2));
/// # }
/// ```
///
/// # Errors
///
/// Returns [`Error::Io`] if reading fails or the text is not UTF-8, otherwise
/// whatever [`decode`] returns.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn decode_from_reader<R>(reader: R) -> Result<Value>
where
    R: io::Read,
{
    decode_from_reader_with_options(reader, &DecodeOptions::default())
}

/// Reads all of `reader` and decodes it with the given options.
///
/// # Errors
///
/// See [`decode_from_reader`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn decode_from_reader_with_options<R>(mut reader: R, options: &DecodeOptions) -> Result<Value>
where
    R: io::Read,
{
    let mut string = String::new();
    reader
        .read_to_string(&mut string)
        .map_err(|e| Error::io(&e.to_string()))?;
    decode_with_options(&string, options)
}

/// Converts a decoded [`Value`] into any `T: DeserializeOwned`.
///
/// # Errors
///
/// Returns [`Error::Custom`] if the value does not fit `T`.
pub fn from_value<T>(value: Value) -> Result<T>
where
    T: DeserializeOwned,
{
    T::deserialize(value)
}

/// Deserialize an instance of type `T` from a string of STC text.
///
/// # Examples
///
/// ```rust
/// # #[cfg(feature = "native")] {
/// use serde_stc::from_str;
/// use serde::Deserialize;
///
/// #[derive(Deserialize, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let point: Point = from_str("x: 1\ny: 2").unwrap();
/// assert_eq!(point, Point { x: 1, y: 2 });
/// # }
/// ```
///
/// # Errors
///
/// Returns an error if the input is not valid STC or does not fit `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str<T>(s: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    from_value(decode(s)?)
}

/// Deserialize an instance of type `T` from an I/O stream of STC.
///
/// # Examples
///
/// ```rust
/// # #[cfg(feature = "native")] {
/// use serde_stc::from_reader;
/// use serde::Deserialize;
/// use std::io::Cursor;
///
/// #[derive(Deserialize, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let point: Point = from_reader(Cursor::new(b"x: 1\ny: 2")).unwrap();
/// assert_eq!(point, Point { x: 1, y: 2 });
/// # }
/// ```
///
/// # Errors
///
/// Returns an error if reading fails, the input is not valid STC, or it does not fit `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R, T>(reader: R) -> Result<T>
where
    R: io::Read,
    T: DeserializeOwned,
{
    from_value(decode_from_reader(reader)?)
}

/// Deserialize an instance of type `T` from bytes of STC text.
///
/// # Errors
///
/// Returns an error if the bytes are not valid UTF-8, not valid STC,
/// or do not fit `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_slice<T>(v: &[u8]) -> Result<T>
where
    T: DeserializeOwned,
{
    let s = std::str::from_utf8(v).map_err(|e| Error::custom(e.to_string()))?;
    from_str(s)
}
