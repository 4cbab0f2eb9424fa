//! The redacted output tree.

use std::borrow::Cow;

use indexmap::IndexMap;

use crate::inspect::{erase, Inspect, Shape};

/// An insertion-ordered, string-keyed map of [`Node`]s.
///
/// Inserting an existing key replaces its value in place, so iteration order
/// always follows first insertion. Lookups and inserts are hashed.
///
/// Equality compares entries regardless of their order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Tree {
    entries: IndexMap<String, Node>,
}

/// A single value in a [`Tree`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    /// A leaf, stored as its string form.
    Scalar(String),
    /// A nested map (from a mapping or a composite).
    Mapping(Tree),
    /// The surviving elements of a sequence, in order.
    Sequence(Vec<Node>),
}

impl Tree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Inserts `node` under `key`, returning the value it replaced.
    pub fn insert<K>(&mut self, key: K, node: Node) -> Option<Node>
    where
        K: Into<String>,
    {
        self.entries.insert(key.into(), node)
    }

    pub fn get(&self, key: &str) -> Option<&Node> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Node)> + '_ {
        self.entries.iter().map(|(key, node)| (key.as_str(), node))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.keys().map(String::as_str)
    }
}

impl<K> FromIterator<(K, Node)> for Tree
where
    K: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, Node)>>(iter: I) -> Self {
        let mut tree = Tree::new();
        for (key, node) in iter {
            tree.insert(key, node);
        }
        tree
    }
}

impl Node {
    /// Shorthand for a scalar node.
    pub fn scalar<S: Into<String>>(value: S) -> Self {
        Node::Scalar(value.into())
    }

    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            Node::Scalar(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_mapping(&self) -> Option<&Tree> {
        match self {
            Node::Mapping(tree) => Some(tree),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[Node]> {
        match self {
            Node::Sequence(items) => Some(items),
            _ => None,
        }
    }
}

// A redacted tree can be inspected again, which makes redaction composable.
impl Inspect for Tree {
    fn shape(&self) -> Shape<'_> {
        Shape::mapping(
            self.entries
                .iter()
                .map(|(key, node)| (Cow::Borrowed(key.as_str()), erase(node))),
        )
    }
}

impl Inspect for Node {
    fn shape(&self) -> Shape<'_> {
        match self {
            Node::Scalar(value) => Shape::borrowed(value),
            Node::Mapping(tree) => tree.shape(),
            Node::Sequence(items) => items.shape(),
        }
    }
}

#[cfg(feature = "serde")]
mod serde_impls {
    use serde::{ser::SerializeMap, Serialize, Serializer};
    use serde_json::Value as JsonValue;

    use super::{Node, Tree};
    use crate::{ExclusionSet, Inspect, Redactor};

    impl Serialize for Tree {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let mut map = serializer.serialize_map(Some(self.len()))?;
            for (key, node) in self.iter() {
                map.serialize_entry(key, node)?;
            }
            map.end()
        }
    }

    impl Serialize for Node {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            match self {
                Node::Scalar(value) => serializer.serialize_str(value),
                Node::Mapping(tree) => tree.serialize(serializer),
                Node::Sequence(items) => serializer.collect_seq(items),
            }
        }
    }

    impl Tree {
        /// Converts the tree into a JSON object; scalars become JSON strings.
        pub fn to_json(&self) -> JsonValue {
            JsonValue::Object(
                self.iter()
                    .map(|(key, node)| (key.to_owned(), node.to_json()))
                    .collect(),
            )
        }
    }

    impl Node {
        pub fn to_json(&self) -> JsonValue {
            match self {
                Node::Scalar(value) => JsonValue::String(value.clone()),
                Node::Mapping(tree) => tree.to_json(),
                Node::Sequence(items) => JsonValue::Array(items.iter().map(Node::to_json).collect()),
            }
        }
    }
}
