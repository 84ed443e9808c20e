//! Caller input and its normalized view.
//!
//! The caller's [`Input`] is stored untouched; [`normalize`] produces a
//! parallel `serde_json::Value` tree with canonical string keys that the
//! validator and the access layer work from.

mod input;
mod key;
mod normalize;

pub use input::{Input, RawValue};
pub use key::{FieldKey, Key};
pub use normalize::{kind_name, normalize, normalize_raw};
