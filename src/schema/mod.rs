//! Schema definition model and the structural validator
//!
//! # Design Principles
//!
//! - Schemas are built once and shared read-only (`Arc<Schema>`)
//! - Closed schemas: undeclared keys are violations at every level
//! - Fields are optional unless declared required
//! - No coercion; kinds must match exactly (integers do satisfy `float`)
//! - Every violation in a document is reported in one pass
//! - Deterministic validation

mod builder;
mod errors;
mod types;
mod validator;

pub use builder::{FieldOptions, SchemaBuilder};
pub use errors::{SchemaError, SchemaResult};
pub use types::{CheckFn, CustomCheck, FieldType, Kind, Schema, SchemaNode, Shape};
pub use validator::{validate, CheckContext, Validator};
