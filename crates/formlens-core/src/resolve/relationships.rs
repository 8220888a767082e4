//! Relationship traversal over the block graph.

use crate::error::{FormError, FormResult};
use crate::resolve::index::BlockIndex;
use crate::types::{Block, RelationshipType};

/// Find the value-block target id of a key block.
///
/// The service occasionally lists more than one candidate id across VALUE
/// entries; the last one encountered wins, matching observed service output.
/// A key block with no VALUE entry, or only empty ones, is a resolution
/// failure rather than an empty value.
pub fn value_target(key_block: &Block) -> FormResult<&str> {
    let mut target = None;
    for relationship in &key_block.relationships {
        if relationship.relationship_type == RelationshipType::Value {
            if let Some(id) = relationship.ids.last() {
                target = Some(id.as_str());
            }
        }
    }

    target.ok_or_else(|| FormError::MissingValueRelationship {
        key_id: key_block.id.clone(),
    })
}

/// Resolve the value block associated with a key block.
///
/// The target id must exist in the index and belong to the value partition;
/// either violation is surfaced as a distinct failure.
pub fn value_block<'a>(index: &'a BlockIndex, key_block: &Block) -> FormResult<&'a Block> {
    let target = value_target(key_block)?;

    let block = index
        .get(target)
        .ok_or_else(|| FormError::DanglingReference {
            referenced_by: key_block.id.clone(),
            target: target.to_string(),
        })?;

    if !index.is_value_block(target) {
        return Err(FormError::MisclassifiedValueTarget {
            key_id: key_block.id.clone(),
            target: target.to_string(),
        });
    }

    Ok(block)
}

/// Child target ids of a block, in document order.
///
/// Spans every CHILD entry in service order. A block with no CHILD entry
/// yields nothing; that is legal (a value block may have no visible text).
pub fn child_ids(block: &Block) -> impl Iterator<Item = &str> {
    block
        .relationships
        .iter()
        .filter(|r| r.relationship_type == RelationshipType::Child)
        .flat_map(|r| r.ids.iter().map(String::as_str))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Relationship;

    #[test]
    fn test_value_target_single() {
        let key = Block::key("k1").with_value_target(["v1"]);
        assert_eq!(value_target(&key).unwrap(), "v1");
    }

    #[test]
    fn test_value_target_last_wins_within_entry() {
        let key = Block::key("k1").with_value_target(["v1", "v2", "v3"]);
        assert_eq!(value_target(&key).unwrap(), "v3");
    }

    #[test]
    fn test_value_target_last_wins_across_entries() {
        let key = Block::key("k1")
            .with_value_target(["v1"])
            .with_value_target(["v2"]);
        assert_eq!(value_target(&key).unwrap(), "v2");
    }

    #[test]
    fn test_value_target_empty_trailing_entry_keeps_previous() {
        let key = Block::key("k1")
            .with_value_target(["v1"])
            .with_relationship(Relationship::value(Vec::<String>::new()));
        assert_eq!(value_target(&key).unwrap(), "v1");
    }

    #[test]
    fn test_missing_value_relationship() {
        let key = Block::key("k1").with_children(["w1"]);
        let err = value_target(&key).unwrap_err();
        assert!(matches!(
            err,
            FormError::MissingValueRelationship { ref key_id } if key_id == "k1"
        ));
    }

    #[test]
    fn test_only_empty_value_entries_is_missing() {
        let key = Block::key("k1").with_relationship(Relationship::value(Vec::<String>::new()));
        assert!(matches!(
            value_target(&key),
            Err(FormError::MissingValueRelationship { .. })
        ));
    }

    #[test]
    fn test_value_block_resolves() {
        let key = Block::key("k1").with_value_target(["v1"]);
        let index = BlockIndex::build(vec![key.clone(), Block::value("v1")]);
        assert_eq!(value_block(&index, &key).unwrap().id, "v1");
    }

    #[test]
    fn test_value_block_dangling_target() {
        let key = Block::key("k1").with_value_target(["missing"]);
        let index = BlockIndex::build(vec![key.clone()]);
        assert!(matches!(
            value_block(&index, &key),
            Err(FormError::DanglingReference { ref target, .. }) if target == "missing"
        ));
    }

    #[test]
    fn test_value_block_misclassified_target() {
        let key = Block::key("k1").with_value_target(["w1"]);
        let index = BlockIndex::build(vec![key.clone(), Block::word("w1", "oops")]);
        assert!(matches!(
            value_block(&index, &key),
            Err(FormError::MisclassifiedValueTarget { ref target, .. }) if target == "w1"
        ));
    }

    #[test]
    fn test_child_ids_ordered_across_entries() {
        let block = Block::value("v1")
            .with_children(["w1", "w2"])
            .with_children(["w3"]);
        let ids: Vec<_> = child_ids(&block).collect();
        assert_eq!(ids, vec!["w1", "w2", "w3"]);
    }

    #[test]
    fn test_child_ids_empty_without_child_entry() {
        let block = Block::value("v1").with_value_target(["x"]);
        assert_eq!(child_ids(&block).count(), 0);
    }
}
