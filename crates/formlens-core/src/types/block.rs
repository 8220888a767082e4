//! Block types for document analysis results.
//!
//! A document analysis result arrives as a flat sequence of [`Block`] records
//! connected by typed [`Relationship`] edges. The serde layout matches the
//! external wire schema byte-for-byte (PascalCase keys, SCREAMING_SNAKE_CASE
//! tags) so recorded responses deserialize without an adapter layer.

use serde::{Deserialize, Serialize};
use strum::Display;

/// Type tag of a block.
///
/// Only `KEY_VALUE_SET`, `WORD` and `SELECTION_ELEMENT` carry meaning for
/// key-value resolution; every other variant is inert content the resolver
/// skips. Unrecognized tags deserialize to [`BlockType::Other`] so newer
/// service output never fails to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum BlockType {
    Page,
    Line,
    Word,
    Table,
    Cell,
    MergedCell,
    KeyValueSet,
    SelectionElement,
    Query,
    QueryResult,
    Signature,
    Title,
    /// Any tag this crate does not recognize.
    #[serde(other)]
    Other,
}

/// Entity tag carried by `KEY_VALUE_SET` blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityType {
    Key,
    Value,
    #[serde(other)]
    Other,
}

/// Selection state of a `SELECTION_ELEMENT` block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SelectionStatus {
    Selected,
    NotSelected,
}

/// Type tag of a relationship edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RelationshipType {
    /// Content composition: the targets make up this block's text.
    Child,
    /// Key-to-value association.
    Value,
    #[serde(other)]
    Other,
}

/// A typed, ordered edge from one block to one or more target blocks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Relationship {
    /// Edge type.
    #[serde(rename = "Type")]
    pub relationship_type: RelationshipType,
    /// Target block ids, in document order.
    #[serde(default)]
    pub ids: Vec<String>,
}

impl Relationship {
    /// Create a CHILD relationship.
    pub fn child<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            relationship_type: RelationshipType::Child,
            ids: ids.into_iter().map(Into::into).collect(),
        }
    }

    /// Create a VALUE relationship.
    pub fn value<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            relationship_type: RelationshipType::Value,
            ids: ids.into_iter().map(Into::into).collect(),
        }
    }
}

/// An immutable node from a document analysis result.
///
/// Blocks are produced externally and never mutated after indexing; the
/// resolver works entirely through id lookups over an index of these records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Block {
    /// Opaque unique identifier.
    pub id: String,

    /// Type tag.
    pub block_type: BlockType,

    /// Recognized text, present for `WORD` blocks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Entity tags, present for `KEY_VALUE_SET` blocks.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub entity_types: Vec<EntityType>,

    /// Selection state, present for `SELECTION_ELEMENT` blocks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selection_status: Option<SelectionStatus>,

    /// Recognition confidence reported by the service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f32>,

    /// Page the block was detected on (1-indexed).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,

    /// Outgoing typed edges, in service order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub relationships: Vec<Relationship>,
}

impl Block {
    /// Create a bare block of the given type.
    pub fn new(id: impl Into<String>, block_type: BlockType) -> Self {
        Self {
            id: id.into(),
            block_type,
            text: None,
            entity_types: Vec::new(),
            selection_status: None,
            confidence: None,
            page: None,
            relationships: Vec::new(),
        }
    }

    /// Create a WORD block with recognized text.
    pub fn word(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::new(id, BlockType::Word)
        }
    }

    /// Create a SELECTION_ELEMENT block with the given state.
    pub fn selection(id: impl Into<String>, status: SelectionStatus) -> Self {
        Self {
            selection_status: Some(status),
            ..Self::new(id, BlockType::SelectionElement)
        }
    }

    /// Create a KEY_VALUE_SET block tagged as a key.
    pub fn key(id: impl Into<String>) -> Self {
        Self {
            entity_types: vec![EntityType::Key],
            ..Self::new(id, BlockType::KeyValueSet)
        }
    }

    /// Create a KEY_VALUE_SET block tagged as a value.
    pub fn value(id: impl Into<String>) -> Self {
        Self {
            entity_types: vec![EntityType::Value],
            ..Self::new(id, BlockType::KeyValueSet)
        }
    }

    /// Append a relationship edge.
    pub fn with_relationship(mut self, relationship: Relationship) -> Self {
        self.relationships.push(relationship);
        self
    }

    /// Append a CHILD relationship to the given targets.
    pub fn with_children<I, S>(self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.with_relationship(Relationship::child(ids))
    }

    /// Append a VALUE relationship to the given targets.
    pub fn with_value_target<I, S>(self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.with_relationship(Relationship::value(ids))
    }

    /// Set the reported confidence.
    pub fn with_confidence(mut self, confidence: f32) -> Self {
        self.confidence = Some(confidence);
        self
    }

    /// Set the page number.
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Whether this block is a `KEY_VALUE_SET` tagged as a key.
    pub fn is_key(&self) -> bool {
        self.block_type == BlockType::KeyValueSet
            && self.entity_types.contains(&EntityType::Key)
    }

    /// Whether this block is a `KEY_VALUE_SET` not tagged as a key.
    pub fn is_value(&self) -> bool {
        self.block_type == BlockType::KeyValueSet
            && !self.entity_types.contains(&EntityType::Key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_wire_schema() {
        let json = r#"{
            "Id": "k1",
            "BlockType": "KEY_VALUE_SET",
            "EntityTypes": ["KEY"],
            "Confidence": 98.5,
            "Relationships": [
                {"Type": "VALUE", "Ids": ["v1"]},
                {"Type": "CHILD", "Ids": ["w1", "w2"]}
            ]
        }"#;

        let block: Block = serde_json::from_str(json).unwrap();
        assert_eq!(block.id, "k1");
        assert_eq!(block.block_type, BlockType::KeyValueSet);
        assert!(block.is_key());
        assert_eq!(block.relationships.len(), 2);
        assert_eq!(block.relationships[0].relationship_type, RelationshipType::Value);
        assert_eq!(block.relationships[1].ids, vec!["w1", "w2"]);
    }

    #[test]
    fn test_deserialize_word_and_selection() {
        let word: Block =
            serde_json::from_str(r#"{"Id": "w1", "BlockType": "WORD", "Text": "Name:"}"#).unwrap();
        assert_eq!(word.text.as_deref(), Some("Name:"));

        let sel: Block = serde_json::from_str(
            r#"{"Id": "s1", "BlockType": "SELECTION_ELEMENT", "SelectionStatus": "SELECTED"}"#,
        )
        .unwrap();
        assert_eq!(sel.selection_status, Some(SelectionStatus::Selected));
    }

    #[test]
    fn test_unknown_block_type_is_tolerated() {
        let block: Block =
            serde_json::from_str(r#"{"Id": "x1", "BlockType": "LAYOUT_FIGURE"}"#).unwrap();
        assert_eq!(block.block_type, BlockType::Other);
    }

    #[test]
    fn test_unknown_relationship_type_is_tolerated() {
        let json = r#"{
            "Id": "c1",
            "BlockType": "CELL",
            "Relationships": [{"Type": "MERGED_CELL", "Ids": ["m1"]}]
        }"#;
        let block: Block = serde_json::from_str(json).unwrap();
        assert_eq!(
            block.relationships[0].relationship_type,
            RelationshipType::Other
        );
    }

    #[test]
    fn test_value_block_without_entity_tag() {
        // Some service versions omit EntityTypes on value blocks entirely.
        let block: Block =
            serde_json::from_str(r#"{"Id": "v1", "BlockType": "KEY_VALUE_SET"}"#).unwrap();
        assert!(block.is_value());
        assert!(!block.is_key());
    }

    #[test]
    fn test_serialize_round_trip() {
        let block = Block::key("k1")
            .with_value_target(["v1"])
            .with_children(["w1"])
            .with_confidence(99.0)
            .with_page(1);

        let json = serde_json::to_string(&block).unwrap();
        assert!(json.contains("\"BlockType\":\"KEY_VALUE_SET\""));
        assert!(json.contains("\"EntityTypes\":[\"KEY\"]"));

        let back: Block = serde_json::from_str(&json).unwrap();
        assert_eq!(back, block);
    }

    #[test]
    fn test_block_type_display() {
        assert_eq!(BlockType::KeyValueSet.to_string(), "KEY_VALUE_SET");
        assert_eq!(BlockType::SelectionElement.to_string(), "SELECTION_ELEMENT");
    }
}
