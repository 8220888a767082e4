//! Replay provider for recorded analysis responses.

use async_trait::async_trait;
use std::path::Path;

use formlens_core::{AnalysisResult, AnalyzeRequest, DocumentAnalyzer, FormResult};

use crate::response::AnalyzeDocumentResponse;

/// A [`DocumentAnalyzer`] that replays a stored response.
///
/// Useful for offline pipelines and deterministic tests: analysis output is
/// captured once (the service bills per call) and resolved as many times as
/// needed without touching the network. The request handed to [`analyze`]
/// is ignored apart from logging.
///
/// [`analyze`]: DocumentAnalyzer::analyze
#[derive(Debug, Clone)]
pub struct RecordedAnalyzer {
    response: AnalyzeDocumentResponse,
}

impl RecordedAnalyzer {
    /// Create a provider replaying the given response.
    pub fn new(response: AnalyzeDocumentResponse) -> Self {
        Self { response }
    }

    /// Create a provider from an already-decoded JSON value.
    pub fn from_value(value: serde_json::Value) -> FormResult<Self> {
        Ok(Self::new(AnalyzeDocumentResponse::from_value(value)?))
    }

    /// Create a provider from a JSON response file.
    pub fn from_path(path: impl AsRef<Path>) -> FormResult<Self> {
        let file = std::fs::File::open(path.as_ref())?;
        Ok(Self::new(AnalyzeDocumentResponse::from_reader(
            std::io::BufReader::new(file),
        )?))
    }

    /// The recorded response.
    pub fn response(&self) -> &AnalyzeDocumentResponse {
        &self.response
    }
}

#[async_trait]
impl DocumentAnalyzer for RecordedAnalyzer {
    async fn analyze(&self, _request: AnalyzeRequest) -> FormResult<AnalysisResult> {
        tracing::debug!(
            blocks = self.response.blocks.len(),
            model_version = self.response.model_version.as_deref().unwrap_or("unknown"),
            "replaying recorded analysis response"
        );
        Ok(self.response.clone().into_result())
    }

    fn name(&self) -> &str {
        "recorded"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn response_value() -> serde_json::Value {
        json!({
            "Blocks": [
                {
                    "Id": "k1",
                    "BlockType": "KEY_VALUE_SET",
                    "EntityTypes": ["KEY"],
                    "Relationships": [
                        {"Type": "VALUE", "Ids": ["v1"]},
                        {"Type": "CHILD", "Ids": ["w1"]}
                    ]
                },
                {
                    "Id": "v1",
                    "BlockType": "KEY_VALUE_SET",
                    "EntityTypes": ["VALUE"],
                    "Relationships": [{"Type": "CHILD", "Ids": ["w2"]}]
                },
                {"Id": "w1", "BlockType": "WORD", "Text": "City:"},
                {"Id": "w2", "BlockType": "WORD", "Text": "Zurich"}
            ]
        })
    }

    #[tokio::test]
    async fn test_replays_recorded_blocks() {
        let analyzer = RecordedAnalyzer::from_value(response_value()).unwrap();
        assert_eq!(analyzer.name(), "recorded");

        let result = analyzer
            .analyze(AnalyzeRequest::forms(Vec::new()))
            .await
            .unwrap();
        assert_eq!(result.blocks.len(), 4);
    }

    #[tokio::test]
    async fn test_replay_is_repeatable() {
        let analyzer = RecordedAnalyzer::from_value(response_value()).unwrap();

        let first = analyzer.analyze(AnalyzeRequest::forms(Vec::new())).await.unwrap();
        let second = analyzer.analyze(AnalyzeRequest::forms(Vec::new())).await.unwrap();
        assert_eq!(first.blocks, second.blocks);
    }

    #[tokio::test]
    async fn test_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("response.json");
        std::fs::write(&path, response_value().to_string()).unwrap();

        let analyzer = RecordedAnalyzer::from_path(&path).unwrap();
        let result = analyzer
            .analyze(AnalyzeRequest::forms_at(&path))
            .await
            .unwrap();
        assert_eq!(result.blocks.len(), 4);
    }

    #[test]
    fn test_from_missing_path_is_io_error() {
        let err = RecordedAnalyzer::from_path("/no/such/response.json").unwrap_err();
        assert!(matches!(err, formlens_core::FormError::Io(_)));
    }
}
