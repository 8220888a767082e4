//! formlens-core - Core library for formlens.
//!
//! This crate resolves the block graph emitted by a document-understanding
//! service into a mapping from form field labels to field values: blocks are
//! indexed and partitioned, key blocks are chased through their VALUE and
//! CHILD relationships, and child words and checkboxes are materialized into
//! flat text. A search facade and a JSON export sit on top of the mapping.
//!
//! # Example
//!
//! ```
//! use formlens_core::{resolve_blocks, Block, ResolveConfig};
//!
//! let blocks = vec![
//!     Block::key("k1").with_children(["kw"]).with_value_target(["v1"]),
//!     Block::value("v1").with_children(["vw1", "vw2"]),
//!     Block::word("kw", "Name:"),
//!     Block::word("vw1", "John"),
//!     Block::word("vw2", "Doe"),
//! ];
//!
//! let outcome = resolve_blocks(blocks, &ResolveConfig::default())?;
//! assert_eq!(outcome.fields.get("Name: "), Some(&["John Doe ".to_string()][..]));
//! assert_eq!(outcome.fields.search("name")?, outcome.fields.get("Name: "));
//! # Ok::<(), formlens_core::FormError>(())
//! ```

pub mod config;
pub mod error;
pub mod export;
pub mod fields;
pub mod resolve;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use config::{FailurePolicy, ResolveConfig};
pub use error::{FormError, FormResult};
pub use fields::{FieldEntry, FormFields};
pub use resolve::{
    block_text, child_ids, resolve, resolve_blocks, value_block, value_target, BlockIndex,
    KeyFailure, ResolveOutcome, SELECTED_MARKER,
};
pub use traits::{
    AnalysisResult, AnalyzeRequest, AnalyzerConfig, DocumentAnalyzer, DocumentMetadata,
    DocumentSource, FeatureType,
};
pub use types::{Block, BlockType, EntityType, Relationship, RelationshipType, SelectionStatus};
