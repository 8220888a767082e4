//! Core traits for formlens providers.

mod analyzer;

pub use analyzer::*;
