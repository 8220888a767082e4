//! Export formats for resolved mappings.

pub mod json;

pub use json::{to_json_string, write_fields, write_fields_pretty};
