//! Configuration options for STC decoding.
//!
//! - [`DecodeOptions`]: Main configuration struct
//! - [`Engine`]: Which decoding engine runs the document
//!
//! ## Examples
//!
//! ```rust
//! use serde_stc::{decode_with_options, DecodeOptions, Engine};
//!
//! let options = DecodeOptions::new().with_engine(Engine::Fallback);
//! let value = decode_with_options("a.$0: 1", &options).unwrap();
//! assert!(value.get("a").unwrap().is_list());
//! ```

use crate::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Selects the decoding engine.
///
/// Both engines accept the same documents and return equal values.
///
/// - **Primary**: the default. Collects every assignment first and builds the value
///   level by level. Compiled in by the `native` cargo feature.
/// - **Fallback**: the line-mode state machine in [`de`](crate::de). Always available.
///
/// # Examples
///
/// ```rust
/// use serde_stc::Engine;
///
/// assert_eq!("fallback".parse::<Engine>().unwrap(), Engine::Fallback);
/// assert_eq!(Engine::default().as_str(), "primary");
/// assert!(Engine::Fallback.is_available());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Engine {
    #[default]
    Primary,
    Fallback,
}

impl Engine {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Engine::Primary => "primary",
            Engine::Fallback => "fallback",
        }
    }

    /// Returns `true` if this engine was compiled into the crate.
    #[must_use]
    pub const fn is_available(&self) -> bool {
        match self {
            Engine::Primary => cfg!(feature = "native"),
            Engine::Fallback => true,
        }
    }
}

impl fmt::Display for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Engine {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "primary" => Ok(Engine::Primary),
            "fallback" => Ok(Engine::Fallback),
            other => Err(Error::custom(format!(
                "unknown engine `{}`, expected `primary` or `fallback`",
                other
            ))),
        }
    }
}

/// Configuration options for STC decoding.
///
/// # Examples
///
/// ```rust
/// use serde_stc::{DecodeOptions, Engine};
///
/// let options = DecodeOptions::new();
/// assert_eq!(options.engine, Engine::Primary);
///
/// let options = DecodeOptions::fallback();
/// assert_eq!(options.engine, Engine::Fallback);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct DecodeOptions {
    /// Engine used to decode the document
    pub engine: Engine,
}

impl DecodeOptions {
    /// Creates default options (primary engine).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options that always run the line-mode state machine.
    #[must_use]
    pub fn fallback() -> Self {
        Self::new().with_engine(Engine::Fallback)
    }

    /// Sets the decoding engine.
    #[must_use]
    pub fn with_engine(mut self, engine: Engine) -> Self {
        self.engine = engine;
        self
    }
}
