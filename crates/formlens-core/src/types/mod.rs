//! Core data types for document analysis results.

mod block;

pub use block::{Block, BlockType, EntityType, Relationship, RelationshipType, SelectionStatus};
