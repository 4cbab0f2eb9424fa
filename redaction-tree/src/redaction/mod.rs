//! Redaction: exclusion matching, traversal, and the output tree.
//!
//! - **`exclusion`**: which names are dropped (`ExclusionSet`)
//! - **`redactor`**: the depth-bounded walk (`Redactor`, `Arguments`)
//! - **`tree`**: the redacted output (`Tree`, `Node`)
//! - **`render`**: the JSON-like string form of a `Tree`

mod exclusion;
mod redactor;
mod render;
mod tree;

pub(crate) use redactor::depth_from_config;

pub use exclusion::{ExclusionSet, DEFAULT_EXCLUSIONS};
pub use redactor::{Arguments, RedactionConfig, Redactor, DEFAULT_MAX_DEPTH};
pub use tree::{Node, Tree};
