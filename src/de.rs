//! STC decoding.
//!
//! This module provides the [`Decoder`], the line-mode state machine that turns STC
//! text into a [`Value`]. It is the engine behind [`Engine::Fallback`](crate::Engine)
//! and the reference every other engine must agree with.
//!
//! ## Overview
//!
//! The input is split on `\n` and read in one of two modes:
//!
//! - **Normal**: each non-blank line is `key.path: value`. Finished values go
//!   straight into the tree; a bare backtick fence switches to string mode.
//! - **In string**: lines are collected verbatim until a line that is exactly the
//!   opening fence (trailing whitespace ignored). Longer or shorter backtick-only
//!   lines are content.
//!
//! ## Usage
//!
//! Most users should use the high-level functions in the crate root:
//!
//! ```rust
//! use serde_stc::de::Decoder;
//! use serde_stc::Value;
//!
//! let value = Decoder::from_str("greeting: ```\nhello\n```").decode().unwrap();
//! assert_eq!(value.get("greeting"), Some(&Value::from("hello")));
//! ```

use crate::key::{parse_key_path, KeyPath};
use crate::literal::{is_closing_fence, parse_value, Literal, ParsedValue};
use crate::tree::{Container, ROOT_LABEL};
use crate::{Error, Result, StcMap, Value};

/// The canonical spelling of an empty document.
pub(crate) const EMPTY_DOCUMENT: &str = "{}";

/// A string block that has been opened but not yet closed.
#[derive(Debug)]
struct StringBlock {
    path: KeyPath,
    fence_len: usize,
    content: String,
    opened_at: usize,
}

#[derive(Debug)]
enum Mode {
    Normal,
    InString(StringBlock),
}

/// The line-mode STC decoder.
///
/// Created via [`Decoder::from_str`] and consumed by [`Decoder::decode`].
pub struct Decoder<'a> {
    input: &'a str,
    tree: Container,
    mode: Mode,
}

impl<'a> Decoder<'a> {
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(input: &'a str) -> Self {
        Decoder {
            input,
            tree: Container::new(),
            mode: Mode::Normal,
        }
    }

    /// Reads every line and returns the finalized document.
    ///
    /// # Errors
    ///
    /// Returns the first rule violation found; see [`Error`] for the variants.
    pub fn decode(mut self) -> Result<Value> {
        log::debug!("decoding {} bytes of STC", self.input.len());
        if self.input.trim() == EMPTY_DOCUMENT {
            return Ok(Value::Map(StcMap::new()));
        }

        for (index, line) in self.input.split('\n').enumerate() {
            self.feed(index + 1, line)?;
        }

        if let Mode::InString(block) = &self.mode {
            return Err(Error::unterminated_string_block(
                block.opened_at,
                &block.path.to_string(),
            ));
        }

        let value = self.tree.finalize(ROOT_LABEL)?;
        log::debug!("decoded document with root {}", value.type_name());
        Ok(value)
    }

    fn feed(&mut self, line_no: usize, line: &str) -> Result<()> {
        self.mode = match std::mem::replace(&mut self.mode, Mode::Normal) {
            Mode::Normal => self.normal_line(line_no, line)?,
            Mode::InString(block) => self.string_line(line_no, line, block)?,
        };
        Ok(())
    }

    fn normal_line(&mut self, line_no: usize, line: &str) -> Result<Mode> {
        if line.trim().is_empty() {
            return Ok(Mode::Normal);
        }

        let (key, value) = line
            .split_once(':')
            .ok_or_else(|| Error::missing_colon(line_no, line))?;
        let path = parse_key_path(key.trim()).map_err(|e| e.at_line(line_no))?;

        match parse_value(value.trim()).map_err(|e| e.at_line(line_no))? {
            ParsedValue::Literal(literal) => {
                self.insert(line_no, &path, literal)?;
                Ok(Mode::Normal)
            }
            ParsedValue::StringBlockStart(fence_len) => {
                log::trace!(
                    "line {}: string block for `{}` opened with a {}-backtick fence",
                    line_no,
                    path,
                    fence_len
                );
                Ok(Mode::InString(StringBlock {
                    path,
                    fence_len,
                    content: String::new(),
                    opened_at: line_no,
                }))
            }
        }
    }

    fn string_line(
        &mut self,
        line_no: usize,
        line: &str,
        mut block: StringBlock,
    ) -> Result<Mode> {
        if !is_closing_fence(line, block.fence_len) {
            block.content.push_str(line);
            block.content.push('\n');
            return Ok(Mode::InString(block));
        }

        if block.content.is_empty() {
            return Err(Error::malformed_empty_string_block(line_no));
        }
        block.content.pop();
        log::trace!(
            "line {}: string block for `{}` closed with {} bytes",
            line_no,
            block.path,
            block.content.len()
        );
        self.insert(block.opened_at, &block.path, Literal::String(block.content))?;
        Ok(Mode::Normal)
    }

    fn insert(&mut self, line_no: usize, path: &KeyPath, literal: Literal) -> Result<()> {
        self.tree
            .insert(path, literal)
            .map_err(|e| e.at_line(line_no))
    }
}
