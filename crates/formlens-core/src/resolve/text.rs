//! Text materialization for content-bearing blocks.

use crate::error::{FormError, FormResult};
use crate::resolve::index::BlockIndex;
use crate::resolve::relationships::child_ids;
use crate::types::{Block, BlockType, SelectionStatus};

/// Marker appended for a selected selection element.
pub const SELECTED_MARKER: &str = "X ";

/// Materialize a block's child content into a flat string.
///
/// Child words contribute their text followed by a single space; selected
/// selection elements contribute the literal `"X "`; unselected ones and any
/// other block type contribute nothing. The result is left exactly as
/// concatenated (trailing space included) to match the external format
/// byte-for-byte; callers that want trimmed text trim it themselves.
///
/// A child id missing from the index is a dangling reference, never a silent
/// gap in the output.
pub fn block_text(index: &BlockIndex, block: &Block) -> FormResult<String> {
    let mut text = String::new();

    for child_id in child_ids(block) {
        let child = index
            .get(child_id)
            .ok_or_else(|| FormError::DanglingReference {
                referenced_by: block.id.clone(),
                target: child_id.to_string(),
            })?;

        match child.block_type {
            BlockType::Word => {
                if let Some(word) = &child.text {
                    text.push_str(word);
                    text.push(' ');
                }
            }
            BlockType::SelectionElement => {
                if child.selection_status == Some(SelectionStatus::Selected) {
                    text.push_str(SELECTED_MARKER);
                }
            }
            _ => {}
        }
    }

    Ok(text)
}
