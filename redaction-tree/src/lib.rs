//! Depth-bounded, name-based redaction of object graphs for request logging.
//!
//! The crate turns an inspectable value into a [`Tree`]: an ordered map of
//! string leaves with every excluded name removed. It separates:
//! - **Inspection**: how a value looks to the redactor ([`Inspect`], [`Shape`]).
//! - **Redaction**: which names survive and how deep the walk goes
//!   ([`Redactor`], [`ExclusionSet`]).
//! - **Capture**: request logging built on top ([`capture`]).
//!
//! Key rules:
//! - A name is excluded when it contains any configured pattern, ignoring case.
//!   An excluded entry is dropped together with everything below it.
//! - Root entries sit at depth 0; an entry at depth `max_depth` or deeper is
//!   omitted, and so is a container left empty.
//! - Absent values are never logged. Sequence elements are named by their
//!   index, so index names take part in matching too.
//! - Every scalar is kept as its string form.
//!
//! ```rust
//! use redaction_tree::{Arguments, Inspect, Redactor};
//!
//! #[derive(Inspect)]
//! struct Login {
//!     username: String,
//!     password: String,
//!     remember: bool,
//! }
//!
//! let login = Login {
//!     username: "ada".into(),
//!     password: "hunter2".into(),
//!     remember: true,
//! };
//! let request_id = 7;
//! let arguments = Arguments::new()
//!     .with("login", &login)
//!     .with("requestId", &request_id);
//!
//! let tree = Redactor::default().redact_arguments(&arguments);
//! assert_eq!(
//!     tree.to_string(),
//!     r#"{ "login": { "remember": "true" }, "requestId": "7" }"#
//! );
//! ```
//!
//! What this crate does not do:
//! - perform I/O or configure logging
//! - hook into a particular web framework
//!
//! Integrations are behind feature flags: `serde` (JSON values, config
//! deserialization, response bodies) and `slog` (structured logging).

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::float_cmp_const,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::default_trait_access,
    clippy::doc_markdown,
    clippy::if_not_else,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::needless_pass_by_value,
    clippy::needless_ifs,
    clippy::use_self,
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::enum_glob_use,
    clippy::struct_excessive_bools,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::result_large_err,
    clippy::future_not_send,
    clippy::option_if_let_else,
    clippy::from_over_into,
    clippy::manual_inspect
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

pub use redaction_tree_derive::Inspect;

#[allow(unused_extern_crates)]
extern crate self as redaction_tree;

// Module declarations
pub mod capture;
mod error;
mod inspect;
#[cfg(feature = "serde")]
pub mod json;
mod redaction;
#[cfg(feature = "slog")]
pub mod slog;

// Re-exports
pub use error::Error;
pub use inspect::{Elements, Entries, Field, FieldValue, Inspect, Shape};
pub use redaction::{
    Arguments, ExclusionSet, Node, RedactionConfig, Redactor, Tree, DEFAULT_EXCLUSIONS,
    DEFAULT_MAX_DEPTH,
};
