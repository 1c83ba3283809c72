//! Schema-driven record generation for reportforge.
//!
//! This crate turns a field-node schema into batches of fake records, with a
//! value generator per field type and recursion for nested objects and arrays.

pub mod clock;
pub mod engine;
pub mod errors;
pub mod generators;
pub mod model;
pub mod output;

pub use clock::{Clock, FixedClock, SystemClock};
pub use engine::{GenerationEngine, ReportService};
pub use errors::OutputError;
pub use model::{BatchResult, GenerateOptions, GeneratedValue, Record};
pub use output::{OutputFormat, write_batch};
