//! Schema configuration errors
//!
//! Raised by [`SchemaBuilder::build`](super::SchemaBuilder::build) when a
//! declaration cannot be turned into a rule. Documents never produce these;
//! document problems are violations in an
//! [`ErrorCollector`](crate::report::ErrorCollector).

use thiserror::Error;

/// Result type for schema construction
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Schema construction errors. `field` is the dotted declaration path.
#[derive(Debug, Clone, Error)]
pub enum SchemaError {
    #[error("field '{field}': format applies to scalar fields only, not {kind}")]
    FormatOnStructuredType { field: String, kind: &'static str },

    #[error("field '{field}': invalid format pattern /{pattern}/: {source}")]
    InvalidPattern {
        field: String,
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("field '{field}': {kind} requires a declaration block")]
    MissingBlock { field: String, kind: &'static str },

    #[error("field '{field}': {kind} does not take a declaration block")]
    UnexpectedBlock { field: String, kind: &'static str },

    #[error("'{scope}': sequence declares no element type")]
    MissingElementType { scope: String },

    #[error("'{scope}': key '{field}' declared inside a sequence")]
    KeyInSequence { scope: String, field: String },

    #[error("'{scope}': element type declared inside a mapping")]
    ValueInMapping { scope: String },

    #[error("'{scope}': field name must not be empty")]
    EmptyFieldName { scope: String },
}
