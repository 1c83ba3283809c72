pub mod json;

pub use json::{OutputFormat, write_batch};
