//! The intermediate tree between line scanning and the final [`Value`].
//!
//! Assignments are inserted one path at a time into a [`Container`]. Once every line
//! has been read, [`Container::finalize`] decides for each container whether it is a
//! list (all keys `$N`) or a map (all keys names) and checks list indices.

use crate::key::{KeyPath, Segment};
use crate::literal::Literal;
use crate::{Error, Result, StcMap, Value};
use indexmap::map::Entry;
use indexmap::IndexMap;

/// Label used for the document root in error messages.
pub(crate) const ROOT_LABEL: &str = "<root>";

#[derive(Debug)]
enum Node {
    Leaf(Literal),
    Container(Container),
}

/// A node whose children are keyed by segment, in first-insertion order.
#[derive(Debug, Default)]
pub(crate) struct Container {
    children: IndexMap<Segment, Node>,
}

impl Container {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Inserts `value` at `path`, creating intermediate containers on demand.
    pub(crate) fn insert(&mut self, path: &KeyPath, value: Literal) -> Result<()> {
        let Some((last, parents)) = path.segments().split_last() else {
            return Err(Error::invalid_key("", "key path must not be empty"));
        };

        let mut current = self;
        for (depth, segment) in parents.iter().enumerate() {
            let node = current
                .children
                .entry(segment.clone())
                .or_insert_with(|| Node::Container(Container::new()));
            current = match node {
                Node::Container(container) => container,
                Node::Leaf(_) => {
                    return Err(Error::conflicting_container_and_leaf(
                        &path.prefix(depth + 1),
                    ))
                }
            };
        }

        match current.children.entry(last.clone()) {
            Entry::Occupied(entry) => match entry.get() {
                Node::Leaf(_) => Err(Error::duplicate_leaf(&path.to_string())),
                Node::Container(_) => {
                    Err(Error::conflicting_container_and_leaf(&path.to_string()))
                }
            },
            Entry::Vacant(entry) => {
                entry.insert(Node::Leaf(value));
                Ok(())
            }
        }
    }

    /// Converts this container into a map or a list.
    ///
    /// `path` names the container in error messages; the root uses [`ROOT_LABEL`].
    pub(crate) fn finalize(self, path: &str) -> Result<Value> {
        match self.children.keys().next() {
            None => Ok(Value::Map(StcMap::new())),
            Some(Segment::Index(_)) => self.finalize_list(path),
            Some(Segment::Name(_)) => self.finalize_map(path),
        }
    }

    fn finalize_list(self, path: &str) -> Result<Value> {
        let len = self.children.len();
        let mut in_range = true;
        for segment in self.children.keys() {
            match segment {
                Segment::Index(index) => in_range &= *index < len,
                Segment::Name(_) => return Err(Error::mixed_list_dict_keys(path)),
            }
        }
        // Keys are unique, so `len` indices all below `len` cover 0..len exactly.
        if !in_range {
            return Err(Error::list_gap_or_duplicate(path, len));
        }

        let mut items: Vec<Option<Value>> = (0..len).map(|_| None).collect();
        for (segment, node) in self.children {
            if let Segment::Index(index) = segment {
                let child_path = child_label(path, &segment);
                items[index] = Some(node.finalize(&child_path)?);
            }
        }
        log::trace!("finalized `{}` as a list of {} items", path, len);

        items
            .into_iter()
            .collect::<Option<Vec<_>>>()
            .map(Value::List)
            .ok_or_else(|| Error::list_gap_or_duplicate(path, len))
    }

    fn finalize_map(self, path: &str) -> Result<Value> {
        if self.children.keys().any(Segment::is_index) {
            return Err(Error::mixed_list_dict_keys(path));
        }

        let mut map = StcMap::with_capacity(self.children.len());
        for (segment, node) in self.children {
            let child_path = child_label(path, &segment);
            if let Segment::Name(name) = segment {
                map.insert(name, node.finalize(&child_path)?);
            }
        }
        log::trace!("finalized `{}` as a map of {} entries", path, map.len());
        Ok(Value::Map(map))
    }
}

impl Node {
    fn finalize(self, path: &str) -> Result<Value> {
        match self {
            Node::Leaf(literal) => Ok(literal.into()),
            Node::Container(container) => container.finalize(path),
        }
    }
}

/// Builds the dotted label of a child for error messages.
pub(crate) fn child_label(parent: &str, segment: &Segment) -> String {
    if parent == ROOT_LABEL {
        segment.to_string()
    } else {
        format!("{}.{}", parent, segment)
    }
}
