//! Validated documents: the instance binding input to a schema, chained
//! field lookups, typed definitions, and the validatable convention.

mod definition;
mod document;
mod field;
mod validatable;

pub use definition::{Definition, Structured};
pub use document::StructuredValue;
pub use field::{Field, Lookup};
pub use validatable::{merge_reports, validate_all, Validatable};
