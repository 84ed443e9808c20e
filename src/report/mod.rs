//! Validation reports: paths, violation kinds and the collector.

mod collector;
mod path;
mod violation;

pub use collector::ErrorCollector;
pub use path::{FieldPath, PathSegment};
pub use violation::{Violation, ViolationKind};
