//! Value tokens and string block fences.
//!
//! The right-hand side of a line is one of:
//!
//! | Token | Meaning |
//! |-------|---------|
//! | `` `true` `` / `` `false` `` | boolean |
//! | `[]` / `{}` | empty list / empty map |
//! | `42`, `-7`, `3.5`, `1e-3` | integer or float |
//! | a run of 3 or more backticks | opens a string block closed by the same run |

use crate::{Error, Result, StcMap, Value};

/// The shortest fence that can open a string block.
pub const MIN_FENCE_LEN: usize = 3;

const LEGAL_FORMS: &str = "value must be one of:\n\
    - `true`, `false` for boolean\n\
    - `[]` for an empty list, `{}` for an empty map\n\
    - a number for integer or float\n\
    - a string block opened by a line of at least 3 backticks \
    (more backticks than the longest backtick-only line in the string)";

/// A single decoded value before it is placed in the tree.
#[derive(Clone, Debug, PartialEq)]
pub enum Literal {
    Integer(i64),
    Float(f64),
    Bool(bool),
    String(String),
    /// `[]`
    EmptyList,
    /// `{}`
    EmptyMap,
}

impl From<Literal> for Value {
    fn from(literal: Literal) -> Self {
        match literal {
            Literal::Integer(i) => Value::Integer(i),
            Literal::Float(f) => Value::Float(f),
            Literal::Bool(b) => Value::Bool(b),
            Literal::String(s) => Value::String(s),
            Literal::EmptyList => Value::List(Vec::new()),
            Literal::EmptyMap => Value::Map(StcMap::new()),
        }
    }
}

/// The result of reading a value token.
#[derive(Clone, Debug, PartialEq)]
pub enum ParsedValue {
    /// The token is a complete value.
    Literal(Literal),
    /// The token opens a string block; the payload is the fence length.
    StringBlockStart(usize),
}

/// Parses a trimmed value token.
///
/// # Examples
///
/// ```rust
/// use serde_stc::literal::{parse_value, Literal, ParsedValue};
///
/// assert_eq!(parse_value("`true`").unwrap(), ParsedValue::Literal(Literal::Bool(true)));
/// assert_eq!(parse_value("-12").unwrap(), ParsedValue::Literal(Literal::Integer(-12)));
/// assert_eq!(parse_value("````").unwrap(), ParsedValue::StringBlockStart(4));
/// assert!(parse_value("hello").is_err());
/// ```
///
/// # Errors
///
/// Returns [`Error::InvalidValueLiteral`] for anything that is not a literal or a
/// bare fence of at least [`MIN_FENCE_LEN`] backticks.
pub fn parse_value(raw: &str) -> Result<ParsedValue> {
    let literal = match raw {
        "`true`" => Some(Literal::Bool(true)),
        "`false`" => Some(Literal::Bool(false)),
        "[]" => Some(Literal::EmptyList),
        "{}" => Some(Literal::EmptyMap),
        _ => parse_number(raw),
    };
    if let Some(literal) = literal {
        return Ok(ParsedValue::Literal(literal));
    }

    let fence_len = backtick_run(raw);
    if fence_len < MIN_FENCE_LEN {
        return Err(Error::invalid_value(raw, LEGAL_FORMS));
    }
    if fence_len != raw.len() {
        return Err(Error::invalid_value(
            raw,
            "a string block fence must stand alone; put the content on the following lines",
        ));
    }
    Ok(ParsedValue::StringBlockStart(fence_len))
}

fn parse_number(raw: &str) -> Option<Literal> {
    // Keeps `inf`, `NaN` and friends out of the float grammar.
    let numeric = !raw.is_empty()
        && raw
            .bytes()
            .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'));
    if !numeric {
        return None;
    }

    if let Ok(i) = raw.parse::<i64>() {
        return Some(Literal::Integer(i));
    }
    raw.parse::<f64>().ok().map(Literal::Float)
}

fn backtick_run(s: &str) -> usize {
    s.bytes().take_while(|&b| b == b'`').count()
}

/// Returns `true` if `line`, ignoring trailing whitespace, is exactly a fence of `len` backticks.
#[must_use]
pub fn is_closing_fence(line: &str, len: usize) -> bool {
    let line = line.trim_end();
    line.len() == len && backtick_run(line) == len
}

/// Computes the fence length needed to wrap `content` in a string block.
///
/// The fence must be at least [`MIN_FENCE_LEN`] long and longer than every line of
/// `content` made only of backticks. Backtick runs inside other text do not count.
///
/// ```rust
/// use serde_stc::literal::fence_len_for;
///
/// assert_eq!(fence_len_for("plain"), 3);
/// assert_eq!(fence_len_for("a ````` b"), 3);
/// assert_eq!(fence_len_for("alpha\n````\nbeta"), 5);
/// ```
#[must_use]
pub fn fence_len_for(content: &str) -> usize {
    let longest = content
        .split('\n')
        .map(str::trim_end)
        .filter(|line| !line.is_empty() && backtick_run(line) == line.len())
        .map(str::len)
        .max()
        .unwrap_or(0);
    MIN_FENCE_LEN.max(longest + 1)
}

/// Builds a fence of `len` backticks.
#[must_use]
pub fn fence(len: usize) -> String {
    "`".repeat(len)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    fn literal(raw: &str) -> Literal {
        match parse_value(raw).unwrap() {
            ParsedValue::Literal(literal) => literal,
            other => panic!("expected literal for {:?}, got {:?}", raw, other),
        }
    }

    #[test]
    fn test_booleans_and_markers() {
        assert_eq!(literal("`true`"), Literal::Bool(true));
        assert_eq!(literal("`false`"), Literal::Bool(false));
        assert_eq!(literal("[]"), Literal::EmptyList);
        assert_eq!(literal("{}"), Literal::EmptyMap);
    }

    #[test]
    fn test_numbers() {
        assert_eq!(literal("10"), Literal::Integer(10));
        assert_eq!(literal("-3"), Literal::Integer(-3));
        assert_eq!(literal("+3"), Literal::Integer(3));
        assert_eq!(literal("10.3"), Literal::Float(10.3));
        assert_eq!(literal("1e3"), Literal::Float(1000.0));
        assert_eq!(literal(".5"), Literal::Float(0.5));
    }

    #[test]
    fn test_integer_overflow_becomes_float() {
        assert_eq!(
            literal("99999999999999999999"),
            Literal::Float(99999999999999999999.0)
        );
    }

    #[test]
    fn test_rejects_non_literals() {
        for bad in [
            "true", "`True`", "`123`", "``", "hello", "inf", "NaN", "1.2.3", "-", "", "[ ]",
        ] {
            let err = parse_value(bad).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidValueLiteral, "value {:?}", bad);
        }
    }

    #[test]
    fn test_fence_must_stand_alone() {
        for bad in ["```123```", "```text", "````x"] {
            let err = parse_value(bad).unwrap_err();
            assert!(err.to_string().contains("stand alone"), "value {:?}", bad);
        }
    }

    #[test]
    fn test_string_block_start() {
        assert_eq!(parse_value("```").unwrap(), ParsedValue::StringBlockStart(3));
        assert_eq!(
            parse_value("``````").unwrap(),
            ParsedValue::StringBlockStart(6)
        );
    }

    #[test]
    fn test_closing_fence_is_exact() {
        assert!(is_closing_fence("```", 3));
        assert!(is_closing_fence("```  \r", 3));
        assert!(!is_closing_fence("````", 3));
        assert!(!is_closing_fence("``", 3));
        assert!(!is_closing_fence(" ```", 3));
        assert!(!is_closing_fence("```x", 3));
    }

    #[test]
    fn test_fence_len_for() {
        assert_eq!(fence_len_for(""), 3);
        assert_eq!(fence_len_for("```"), 4);
        assert_eq!(fence_len_for("``\n```````\n`"), 8);
        assert_eq!(fence(4), "````");
    }

    #[test]
    fn test_literal_into_value() {
        assert_eq!(Value::from(Literal::EmptyList), Value::List(vec![]));
        assert_eq!(Value::from(Literal::EmptyMap), Value::Map(StcMap::new()));
        assert_eq!(Value::from(Literal::Integer(1)), Value::Integer(1));
    }
}
