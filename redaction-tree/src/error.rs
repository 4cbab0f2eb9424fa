//! Errors raised when configuring or invoking the redactor.
//!
//! All of these are caller-contract violations detected up front; a redaction
//! over a valid root cannot fail.

/// Error type for redactor construction and root validation.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The configured max depth was below zero.
    #[error("max depth must be zero or above (got {0})")]
    NegativeMaxDepth(i64),
    /// An exclusion pattern was empty and would match every name.
    #[error("excluded name patterns must not be empty")]
    EmptyPattern,
    /// The root value was not a mapping or composite.
    #[error("cannot redact a {0} root; expected a mapping or a composite")]
    UnsupportedRoot(&'static str),
    /// Converting a `Serialize` value for inspection failed.
    #[cfg(feature = "serde")]
    #[error("failed to convert value for inspection: {0}")]
    Serialize(#[from] serde_json::Error),
}
