//! STC Format Reference
//!
//! This module documents the STC text format as read by this library.
//!
//! # Overview
//!
//! STC stores a tree of maps, lists and scalars as a flat sequence of assignments.
//! Every assignment names the full path to one leaf, so a document can be built,
//! diffed and merged line by line.
//!
//! # Lines
//!
//! A document is split on `\n`. Outside a string block, every line is one of:
//!
//! - **Blank** (empty or whitespace only): ignored.
//! - **Assignment**: `key.path: value`, split on the *first* colon. Both halves are
//!   trimmed, so `a:1`, `a : 1` and `  a: 1  ` are the same line.
//!
//! A non-blank line without a colon is [`MissingColon`](crate::Error::MissingColon).
//!
//! # Key Paths
//!
//! ```text
//! path    := segment ("." segment)*
//! segment := name | index
//! name    := [A-Za-z_][A-Za-z0-9_]*
//! index   := "$" [0-9]+
//! ```
//!
//! - Empty segments (`a..b`, `.a`, `a.`) are rejected.
//! - Leading zeros are allowed in indices: `$007` is position 7.
//! - An index larger than the platform's `usize` is rejected.
//!
//! # Values
//!
//! | Type | Syntax | Example |
//! |------|--------|---------|
//! | Boolean | `` `true` `` or `` `false` `` | ``debug: `false` `` |
//! | Empty list | `[]` | `tags: []` |
//! | Empty map | `{}` | `env: {}` |
//! | Integer | fits in `i64` | `port: 8080` |
//! | Float | digits, `+`, `-`, `.`, `e`, `E` only | `ratio: 2.5e-1` |
//! | String | 3+ backticks alone after the `:`, then a string block | see below |
//!
//! The opening fence must stand alone on the value side. `` a: ```text `` or
//! `` a: ``` x `` is [`InvalidValueLiteral`](crate::Error::InvalidValueLiteral),
//! never a fence with an info string.
//!
//! A numeric token that parses as `i64` is an integer; otherwise it is a float if it
//! parses as one. `inf`, `NaN` and bare words are not values. Anything else is
//! [`InvalidValueLiteral`](crate::Error::InvalidValueLiteral).
//!
//! # String Blocks
//!
//! A value made only of three or more backticks opens a string block:
//!
//! ``````text
//! motd: ````
//! Welcome!
//! ```
//! not the end
//! ```
//! ````
//! ``````
//!
//! - The block closes on the first line that, ignoring trailing whitespace, is exactly
//!   the opening fence. Backtick-only lines of any other length are content.
//! - Content lines are kept verbatim, including leading whitespace and `\r`.
//! - The string is the content lines joined with `\n`; no trailing newline is added.
//! - A fence must be longer than every backtick-only line of the content.
//!   [`fence_len_for`](crate::fence_len_for) computes the shortest one.
//! - A block with no content lines is
//!   [`MalformedEmptyStringBlock`](crate::Error::MalformedEmptyStringBlock). The
//!   empty string is written as a block holding one blank line.
//! - A block still open at the end of input is
//!   [`UnterminatedStringBlock`](crate::Error::UnterminatedStringBlock).
//! - Text after the fence on the opening line (for example `` ```text ``) is
//!   [`InvalidValueLiteral`](crate::Error::InvalidValueLiteral).
//!
//! # Building the Tree
//!
//! Assignments may appear in any order. Each prefix of a path is a container whose
//! kind is decided by its child segments:
//!
//! - All names: a map. Keys keep their first-appearance order.
//! - All indices: a list. The indices must be exactly `$0..$N-1`, each once.
//! - Both: [`MixedListDictKeys`](crate::Error::MixedListDictKeys).
//!
//! A path may be assigned only once
//! ([`DuplicateLeafAssignment`](crate::Error::DuplicateLeafAssignment)), and a path
//! that holds a value may not also be extended
//! ([`ConflictingContainerAndLeaf`](crate::Error::ConflictingContainerAndLeaf)).
//! `[]` and `{}` are leaves, so `a: []` together with `a.$0: 1` is a conflict.
//!
//! The root follows the same rules and may be a list (`$0: 1`).
//!
//! # Empty Documents
//!
//! A document that is blank, or whose trimmed text is exactly `{}`, decodes to an
//! empty map.
//!
//! # Errors
//!
//! Line-level errors carry the 1-based line number of the offending line. Errors
//! about a value found in a string block point at the line that opened it. List and
//! map shape errors are found after all lines are read and name the container path
//! instead, with `<root>` for the document itself.
//!
//! # Example
//!
//! ````text
//! name: ```
//! edge-proxy
//! ```
//! listen.$0.port: 80
//! listen.$1.port: 443
//! listen.$1.tls: `true`
//! limits.rate: 12.5
//! limits.burst: 40
//! labels: {}
//! ````
//!
//! decodes to the JSON-equivalent
//!
//! ```json
//! {
//!   "name": "edge-proxy",
//!   "listen": [{"port": 80}, {"port": 443, "tls": true}],
//!   "limits": {"rate": 12.5, "burst": 40},
//!   "labels": {}
//! }
//! ```
