//! Block indexing and key/value partitioning.

use std::collections::{HashMap, HashSet};

use crate::types::Block;

/// Arena-style lookup table over a block collection.
///
/// Built once from the flat block sequence, read-only afterward. Every block
/// is indexed by id; `KEY_VALUE_SET` blocks are additionally partitioned into
/// key blocks (entity-typed KEY, input order preserved) and value blocks
/// (everything else). Building never fails: relationships are not validated
/// here, and a duplicated id is resolved last-write-wins, including its
/// partition membership.
#[derive(Debug, Clone, Default)]
pub struct BlockIndex {
    blocks: HashMap<String, Block>,
    key_order: Vec<String>,
    value_ids: HashSet<String>,
}

impl BlockIndex {
    /// Build an index from a block sequence.
    pub fn build<I>(blocks: I) -> Self
    where
        I: IntoIterator<Item = Block>,
    {
        let mut index = Self::default();
        for block in blocks {
            index.insert(block);
        }
        index
    }

    fn insert(&mut self, block: Block) {
        let id = block.id.clone();

        // Last-write-wins for malformed input: drop any classification the
        // earlier occupant of this id earned.
        if self.blocks.contains_key(&id) {
            self.key_order.retain(|key_id| key_id != &id);
            self.value_ids.remove(&id);
        }

        if block.is_key() {
            self.key_order.push(id.clone());
        } else if block.is_value() {
            self.value_ids.insert(id.clone());
        }

        self.blocks.insert(id, block);
    }

    /// Look up a block by id.
    pub fn get(&self, id: &str) -> Option<&Block> {
        self.blocks.get(id)
    }

    /// Key blocks in the order they appeared in the input sequence.
    pub fn key_blocks(&self) -> impl Iterator<Item = &Block> {
        self.key_order.iter().filter_map(|id| self.blocks.get(id))
    }

    /// Whether the given id belongs to the value-block partition.
    pub fn is_value_block(&self, id: &str) -> bool {
        self.value_ids.contains(id)
    }

    /// Number of indexed blocks.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Whether the index holds no blocks.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Number of key blocks.
    pub fn key_count(&self) -> usize {
        self.key_order.len()
    }

    /// Number of value blocks.
    pub fn value_count(&self) -> usize {
        self.value_ids.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BlockType, SelectionStatus};

    #[test]
    fn test_partitions_key_value_set_blocks() {
        let index = BlockIndex::build(vec![
            Block::word("w1", "Name:"),
            Block::key("k1"),
            Block::value("v1"),
            Block::selection("s1", SelectionStatus::Selected),
            Block::key("k2"),
        ]);

        assert_eq!(index.len(), 5);
        assert_eq!(index.key_count(), 2);
        assert_eq!(index.value_count(), 1);
        assert!(index.is_value_block("v1"));
        assert!(!index.is_value_block("w1"));

        let key_ids: Vec<_> = index.key_blocks().map(|b| b.id.as_str()).collect();
        assert_eq!(key_ids, vec!["k1", "k2"]);
    }

    #[test]
    fn test_key_order_follows_input_order() {
        let index = BlockIndex::build(vec![
            Block::key("k2"),
            Block::value("v1"),
            Block::key("k1"),
        ]);
        let key_ids: Vec<_> = index.key_blocks().map(|b| b.id.as_str()).collect();
        assert_eq!(key_ids, vec!["k2", "k1"]);
    }

    #[test]
    fn test_duplicate_id_last_write_wins() {
        let index = BlockIndex::build(vec![Block::key("dup"), Block::word("dup", "later")]);

        assert_eq!(index.len(), 1);
        assert_eq!(index.key_count(), 0);
        assert_eq!(index.get("dup").unwrap().block_type, BlockType::Word);
    }

    #[test]
    fn test_duplicate_id_reclassifies_partition() {
        let index = BlockIndex::build(vec![Block::value("dup"), Block::key("dup")]);

        assert!(!index.is_value_block("dup"));
        assert_eq!(index.key_count(), 1);
    }

    #[test]
    fn test_empty_input() {
        let index = BlockIndex::build(Vec::new());
        assert!(index.is_empty());
        assert_eq!(index.key_count(), 0);
    }
}
