//! Block graph resolution pipeline.
//!
//! A resolution pass runs in strict order: build the [`BlockIndex`], then for
//! every key block resolve its value block, materialize both sides to text,
//! and accumulate the pair into a [`FormFields`] mapping. The pass is a pure
//! function of its input graph; two passes over different collections share
//! nothing.

mod index;
mod relationships;
mod text;

pub use index::BlockIndex;
pub use relationships::{child_ids, value_block, value_target};
pub use text::{block_text, SELECTED_MARKER};

use crate::config::{FailurePolicy, ResolveConfig};
use crate::error::{FormError, FormResult};
use crate::fields::FormFields;
use crate::types::Block;

/// A key block that could not be resolved during a lenient pass.
#[derive(Debug)]
pub struct KeyFailure {
    /// Id of the key block that failed.
    pub key_id: String,
    /// Key text, when the key side materialized before the failure.
    pub key_text: Option<String>,
    /// The error that stopped resolution of this key.
    pub error: FormError,
}

/// Result of a resolution pass.
#[derive(Debug, Default)]
pub struct ResolveOutcome {
    /// The resolved key-value mapping.
    pub fields: FormFields,
    /// Keys that failed to resolve. Always empty under
    /// [`FailurePolicy::Strict`], which aborts on the first failure instead.
    pub failures: Vec<KeyFailure>,
}

impl ResolveOutcome {
    /// Whether every key block resolved.
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Resolve every key block in the index into the key-value mapping.
///
/// Under [`FailurePolicy::Strict`] (the default) the first unresolvable key
/// aborts the pass. Under [`FailurePolicy::Lenient`] the offending key is
/// skipped, logged, and recorded in the outcome so callers can still use the
/// parseable subset. Either way, no partially resolved entry is emitted.
pub fn resolve(index: &BlockIndex, config: &ResolveConfig) -> FormResult<ResolveOutcome> {
    let mut outcome = ResolveOutcome::default();

    for key_block in index.key_blocks() {
        match resolve_key(index, key_block) {
            Ok((key_text, value_text)) => outcome.fields.push(key_text, value_text),
            Err(error) => match config.failure_policy {
                FailurePolicy::Strict => return Err(error),
                FailurePolicy::Lenient => {
                    tracing::warn!(
                        key_id = %key_block.id,
                        error = %error,
                        "skipping unresolvable key block"
                    );
                    outcome.failures.push(KeyFailure {
                        key_id: key_block.id.clone(),
                        key_text: block_text(index, key_block).ok(),
                        error,
                    });
                }
            },
        }
    }

    tracing::debug!(
        resolved = outcome.fields.len(),
        failed = outcome.failures.len(),
        "resolution pass finished"
    );

    Ok(outcome)
}

/// Index a block collection and resolve it in one call.
pub fn resolve_blocks<I>(blocks: I, config: &ResolveConfig) -> FormResult<ResolveOutcome>
where
    I: IntoIterator<Item = Block>,
{
    resolve(&BlockIndex::build(blocks), config)
}

fn resolve_key(index: &BlockIndex, key_block: &Block) -> FormResult<(String, String)> {
    let value = value_block(index, key_block)?;
    let key_text = block_text(index, key_block)?;
    let value_text = block_text(index, value)?;
    Ok((key_text, value_text))
}
