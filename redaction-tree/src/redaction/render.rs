//! JSON-like rendering of redacted trees.
//!
//! Maps render as `{ "key": value, ... }`, sequences as `[ value, ... ]` and
//! every scalar as a quoted string. Backslashes and double quotes are escaped
//! in both keys and values; nothing else is.

use std::fmt::{self, Write};

use super::tree::{Node, Tree};

impl fmt::Display for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_tree(f, self)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_node(f, self)
    }
}

fn write_tree(f: &mut fmt::Formatter<'_>, tree: &Tree) -> fmt::Result {
    f.write_char('{')?;
    let last = tree.len().saturating_sub(1);
    for (index, (key, node)) in tree.iter().enumerate() {
        f.write_char(' ')?;
        write_quoted(f, key)?;
        f.write_str(": ")?;
        write_node(f, node)?;
        f.write_char(if index < last { ',' } else { ' ' })?;
    }
    f.write_char('}')
}

fn write_sequence(f: &mut fmt::Formatter<'_>, items: &[Node]) -> fmt::Result {
    f.write_char('[')?;
    let last = items.len().saturating_sub(1);
    for (index, node) in items.iter().enumerate() {
        f.write_char(' ')?;
        write_node(f, node)?;
        f.write_char(if index < last { ',' } else { ' ' })?;
    }
    f.write_char(']')
}

fn write_node(f: &mut fmt::Formatter<'_>, node: &Node) -> fmt::Result {
    match node {
        Node::Scalar(value) => write_quoted(f, value),
        Node::Mapping(tree) => write_tree(f, tree),
        Node::Sequence(items) => write_sequence(f, items),
    }
}

fn write_quoted(f: &mut fmt::Formatter<'_>, value: &str) -> fmt::Result {
    f.write_char('"')?;
    let mut rest = value;
    while let Some(position) = rest.find(['"', '\\']) {
        f.write_str(&rest[..position])?;
        f.write_char('\\')?;
        // Both escaped characters are a single byte.
        f.write_str(&rest[position..=position])?;
        rest = &rest[position + 1..];
    }
    f.write_str(rest)?;
    f.write_char('"')
}
