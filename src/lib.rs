//! validates-structure - strict structural validation for dynamic data
//!
//! Declare a closed schema once, then check maps, arrays or JSON text
//! against it and get every violation back keyed by path.
//!
//! ```ignore
//! use validates_structure::prelude::*;
//!
//! let schema = SchemaBuilder::mapping("MyStructuredHash")
//!     .key_with("bepa", Kind::Mapping, FieldOptions::required(), |b| {
//!         b.key("cepa", Kind::Integer, FieldOptions::required().format("3"))
//!     })
//!     .build_shared()?;
//!
//! let doc = StructuredValue::new(schema, r#"{"bepa": {"cepa": 3}}"#);
//! assert!(doc.is_valid());
//! assert_eq!(doc["bepa"]["cepa"], 3);
//! ```

pub mod config;
pub mod observability;
pub mod report;
pub mod schema;
pub mod structured;
pub mod value;

pub use config::{ConfigError, ConfigResult, ValidatorConfig};
pub use report::{ErrorCollector, FieldPath, PathSegment, Violation, ViolationKind};
pub use schema::{
    CheckContext, FieldOptions, Kind, Schema, SchemaBuilder, SchemaError, SchemaResult,
};
pub use structured::{Definition, Field, Lookup, Structured, StructuredValue, Validatable};
pub use value::{Input, Key, RawValue};

/// Everything needed to declare schemas and validate documents.
pub mod prelude {
    pub use crate::report::{ErrorCollector, FieldPath, ViolationKind};
    pub use crate::schema::{CheckContext, FieldOptions, Kind, Schema, SchemaBuilder};
    pub use crate::structured::{
        Definition, Field, Lookup, Structured, StructuredValue, Validatable,
    };
    pub use crate::value::{Input, Key, RawValue};
}
