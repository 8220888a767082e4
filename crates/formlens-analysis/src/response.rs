//! Wire envelope for document analysis responses.

use serde::{Deserialize, Serialize};

use formlens_core::{AnalysisResult, Block, DocumentMetadata, FormResult};

/// A complete analysis response as the service serializes it.
///
/// This is the closed, versioned external schema: a flat `Blocks` array plus
/// document-level metadata. Fields this crate does not model (geometry,
/// query answers) are ignored on the way in and the blocks themselves
/// tolerate unrecognized tags, so responses from newer service versions
/// still parse.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AnalyzeDocumentResponse {
    /// The flat block sequence.
    #[serde(default)]
    pub blocks: Vec<Block>,

    /// Document-level metadata.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_metadata: Option<DocumentMetadata>,

    /// Version of the analysis model that produced the response.
    #[serde(
        rename = "AnalyzeDocumentModelVersion",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub model_version: Option<String>,
}

impl AnalyzeDocumentResponse {
    /// Parse a response from a JSON string.
    pub fn from_json(json: &str) -> FormResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse a response from a reader.
    pub fn from_reader(reader: impl std::io::Read) -> FormResult<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Parse a response from an already-decoded JSON value.
    pub fn from_value(value: serde_json::Value) -> FormResult<Self> {
        Ok(serde_json::from_value(value)?)
    }

    /// Convert into the block collection the core consumes.
    pub fn into_result(self) -> AnalysisResult {
        AnalysisResult {
            blocks: self.blocks,
            metadata: self.document_metadata,
            model_version: self.model_version,
        }
    }
}
