//! The primary decoding engine.
//!
//! Unlike the [`Decoder`](crate::de::Decoder), this engine keeps no intermediate tree.
//! It reads the whole document into a flat list of assignments, then builds the value
//! level by level: assignments are grouped on the segment at the current depth, each
//! group is checked for duplicate and conflicting leaves, and the group is turned into
//! its final map or list right away. Lists are ordered by sorting their indices.
//!
//! Both engines accept and reject the same documents and produce equal values.

use crate::de::EMPTY_DOCUMENT;
use crate::key::{parse_key_path, KeyPath, Segment};
use crate::literal::{is_closing_fence, parse_value, Literal, ParsedValue};
use crate::tree::{child_label, ROOT_LABEL};
use crate::{Error, Result, StcMap, Value};
use indexmap::IndexMap;

#[derive(Debug)]
struct Assignment {
    line: usize,
    path: KeyPath,
    value: Literal,
}

impl Assignment {
    fn ends_at(&self, depth: usize) -> bool {
        self.path.len() == depth + 1
    }
}

pub(crate) fn decode(input: &str) -> Result<Value> {
    log::debug!("decoding {} bytes of STC (primary engine)", input.len());
    if input.trim() == EMPTY_DOCUMENT {
        return Ok(Value::Map(StcMap::new()));
    }

    let assignments = collect(input)?;
    log::trace!("collected {} assignments", assignments.len());
    if assignments.is_empty() {
        return Ok(Value::Map(StcMap::new()));
    }

    let value = build(assignments, 0, ROOT_LABEL)?;
    log::debug!("decoded document with root {}", value.type_name());
    Ok(value)
}

fn collect(input: &str) -> Result<Vec<Assignment>> {
    let mut assignments = Vec::new();
    let mut lines = input
        .split('\n')
        .enumerate()
        .map(|(index, line)| (index + 1, line));

    while let Some((line_no, line)) = lines.next() {
        if line.trim().is_empty() {
            continue;
        }
        let (key, value) = line
            .split_once(':')
            .ok_or_else(|| Error::missing_colon(line_no, line))?;
        let path = parse_key_path(key.trim()).map_err(|e| e.at_line(line_no))?;

        let value = match parse_value(value.trim()).map_err(|e| e.at_line(line_no))? {
            ParsedValue::Literal(literal) => literal,
            ParsedValue::StringBlockStart(fence_len) => {
                Literal::String(read_block(&mut lines, line_no, fence_len, &path)?)
            }
        };
        assignments.push(Assignment {
            line: line_no,
            path,
            value,
        });
    }

    Ok(assignments)
}

/// Consumes lines up to and including the closing fence and returns the content.
fn read_block<'a, I>(
    lines: &mut I,
    opened_at: usize,
    fence_len: usize,
    path: &KeyPath,
) -> Result<String>
where
    I: Iterator<Item = (usize, &'a str)>,
{
    let mut content: Vec<&str> = Vec::new();
    for (line_no, line) in lines {
        if is_closing_fence(line, fence_len) {
            if content.is_empty() {
                return Err(Error::malformed_empty_string_block(line_no));
            }
            return Ok(content.join("\n"));
        }
        content.push(line);
    }
    Err(Error::unterminated_string_block(opened_at, &path.to_string()))
}

/// Builds the value for a group of assignments that share their first `depth` segments.
fn build(group: Vec<Assignment>, depth: usize, label: &str) -> Result<Value> {
    let mut children: IndexMap<Segment, Vec<Assignment>> = IndexMap::new();
    for assignment in group {
        let segment = assignment.path.segments()[depth].clone();
        children.entry(segment).or_default().push(assignment);
    }

    for members in children.values() {
        check_members(members, depth)?;
    }

    match children.keys().next() {
        Some(Segment::Index(_)) => build_list(children, depth, label),
        _ => build_map(children, depth, label),
    }
}

/// Rejects a leaf that is assigned twice or that other assignments extend,
/// reporting the assignment where the clash first shows in document order.
fn check_members(members: &[Assignment], depth: usize) -> Result<()> {
    let mut seen_leaf = false;
    let mut seen_deeper = false;
    for member in members {
        let prefix = member.path.prefix(depth + 1);
        if member.ends_at(depth) {
            if seen_leaf {
                return Err(Error::duplicate_leaf(&prefix).at_line(member.line));
            }
            if seen_deeper {
                return Err(
                    Error::conflicting_container_and_leaf(&prefix).at_line(member.line)
                );
            }
            seen_leaf = true;
        } else {
            if seen_leaf {
                return Err(
                    Error::conflicting_container_and_leaf(&prefix).at_line(member.line)
                );
            }
            seen_deeper = true;
        }
    }
    Ok(())
}

fn build_list(
    children: IndexMap<Segment, Vec<Assignment>>,
    depth: usize,
    label: &str,
) -> Result<Value> {
    let len = children.len();
    let mut entries = Vec::with_capacity(len);
    for (segment, members) in children {
        match segment {
            Segment::Index(index) => entries.push((index, members)),
            Segment::Name(_) => return Err(Error::mixed_list_dict_keys(label)),
        }
    }

    entries.sort_unstable_by_key(|(index, _)| *index);
    if entries
        .iter()
        .enumerate()
        .any(|(position, (index, _))| position != *index)
    {
        return Err(Error::list_gap_or_duplicate(label, len));
    }

    let items = entries
        .into_iter()
        .map(|(index, members)| {
            let child = child_label(label, &Segment::Index(index));
            member_value(members, depth, &child)
        })
        .collect::<Result<Vec<_>>>()?;
    log::trace!("built `{}` as a list of {} items", label, len);
    Ok(Value::List(items))
}

fn build_map(
    children: IndexMap<Segment, Vec<Assignment>>,
    depth: usize,
    label: &str,
) -> Result<Value> {
    if children.keys().any(Segment::is_index) {
        return Err(Error::mixed_list_dict_keys(label));
    }

    let mut map = StcMap::with_capacity(children.len());
    for (segment, members) in children {
        let child = child_label(label, &segment);
        let value = member_value(members, depth, &child)?;
        if let Segment::Name(name) = segment {
            map.insert(name, value);
        }
    }
    log::trace!("built `{}` as a map of {} entries", label, map.len());
    Ok(Value::Map(map))
}

/// A checked group is either one leaf or only assignments that go deeper.
fn member_value(mut members: Vec<Assignment>, depth: usize, label: &str) -> Result<Value> {
    if members.len() == 1 && members[0].ends_at(depth) {
        if let Some(leaf) = members.pop() {
            return Ok(leaf.value.into());
        }
    }
    build(members, depth + 1, label)
}
