//! Violation kinds recorded during a validation pass.
//!
//! Violations are reported, never raised: each one becomes an entry in the
//! [`ErrorCollector`](super::ErrorCollector) and the pass carries on.

use std::fmt;

use thiserror::Error;

use super::path::FieldPath;

/// What went wrong at a path. `Display` is the human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViolationKind {
    #[error("is required")]
    MissingRequiredField,

    #[error("is not a declared field")]
    UnexpectedField,

    #[error("expected {expected}, got {actual}")]
    TypeMismatch {
        expected: &'static str,
        actual: &'static str,
    },

    #[error("does not match format /{pattern}/")]
    FormatMismatch { pattern: String },

    #[error("expected an object, got {actual}")]
    NotAMapping { actual: &'static str },

    #[error("expected an array, got {actual}")]
    NotASequence { actual: &'static str },

    #[error("{0}")]
    CustomCheckFailure(String),

    #[error("exceeds the maximum nesting depth of {limit}")]
    DepthLimitExceeded { limit: usize },
}

impl ViolationKind {
    /// Stable machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            ViolationKind::MissingRequiredField => "MISSING_REQUIRED_FIELD",
            ViolationKind::UnexpectedField => "UNEXPECTED_FIELD",
            ViolationKind::TypeMismatch { .. } => "TYPE_MISMATCH",
            ViolationKind::FormatMismatch { .. } => "FORMAT_MISMATCH",
            ViolationKind::NotAMapping { .. } => "NOT_A_MAPPING",
            ViolationKind::NotASequence { .. } => "NOT_A_SEQUENCE",
            ViolationKind::CustomCheckFailure(_) => "CUSTOM_CHECK_FAILURE",
            ViolationKind::DepthLimitExceeded { .. } => "DEPTH_LIMIT_EXCEEDED",
        }
    }

    /// True for the kinds that stop descent into a branch.
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            ViolationKind::TypeMismatch { .. }
                | ViolationKind::NotAMapping { .. }
                | ViolationKind::NotASequence { .. }
                | ViolationKind::DepthLimitExceeded { .. }
        )
    }
}

/// A violation attributed to a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub path: FieldPath,
    pub kind: ViolationKind,
}

impl Violation {
    pub fn new(path: FieldPath, kind: ViolationKind) -> Self {
        Self { path, kind }
    }

    /// The bare message, without the path.
    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.path, self.kind)
    }
}
