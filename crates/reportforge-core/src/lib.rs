//! Core contracts for reportforge.
//!
//! This crate defines the field-node schema model, its resolved form, and the
//! error taxonomy shared by the generator and the CLI.

pub mod error;
pub mod schema;
pub mod types;
pub mod validation;

pub use error::{Error, Result};
pub use schema::{FieldKind, FieldNode, ResolvedField, schema_document_json_schema};
pub use types::FieldType;
pub use validation::resolve_schema;
