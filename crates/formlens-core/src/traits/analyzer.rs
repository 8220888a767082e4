//! Document analyzer trait and related types.
//!
//! The analysis service that produces block collections is an external
//! collaborator. The core only defines the seam: a request/response shape and
//! an async trait a provider crate implements. Credential and session state
//! lives in an explicit [`AnalyzerConfig`] handed to the provider, never in
//! module-level globals.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::FormResult;
use crate::types::Block;

/// Analysis feature to request from the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FeatureType {
    Forms,
    Tables,
    Layout,
    Queries,
    Signatures,
}

/// Where the document bytes come from.
///
/// The core never decodes images; the source is passed through to the
/// provider untouched.
#[derive(Debug, Clone)]
pub enum DocumentSource {
    /// Raw document bytes.
    Bytes(Vec<u8>),
    /// A path the provider reads itself.
    Path(PathBuf),
}

/// A document analysis request.
#[derive(Debug, Clone)]
pub struct AnalyzeRequest {
    /// The document to analyze.
    pub document: DocumentSource,
    /// Features to request. Key-value extraction needs [`FeatureType::Forms`].
    pub features: Vec<FeatureType>,
}

impl AnalyzeRequest {
    /// Request forms analysis for the given document bytes.
    pub fn forms(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            document: DocumentSource::Bytes(bytes.into()),
            features: vec![FeatureType::Forms],
        }
    }

    /// Request forms analysis for a document at a path.
    pub fn forms_at(path: impl Into<PathBuf>) -> Self {
        Self {
            document: DocumentSource::Path(path.into()),
            features: vec![FeatureType::Forms],
        }
    }

    /// Add a feature to the request.
    pub fn with_feature(mut self, feature: FeatureType) -> Self {
        self.features.push(feature);
        self
    }
}

/// Document-level metadata reported alongside the blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DocumentMetadata {
    /// Number of pages analyzed.
    pub pages: u32,
}

/// The block collection a provider hands to the core.
#[derive(Debug, Clone, Default)]
pub struct AnalysisResult {
    /// The flat block sequence, in service order.
    pub blocks: Vec<Block>,
    /// Document-level metadata, when the service reports it.
    pub metadata: Option<DocumentMetadata>,
    /// Model version the service used.
    pub model_version: Option<String>,
}

impl AnalysisResult {
    /// Create a result from a bare block sequence.
    pub fn new(blocks: Vec<Block>) -> Self {
        Self {
            blocks,
            metadata: None,
            model_version: None,
        }
    }
}

/// Configuration for a document analysis provider.
///
/// Replaces ambient session state: a provider receives everything it needs to
/// build its client from this object.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Service region.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// Named credential profile.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,
    /// Endpoint override, mainly for local stacks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
}

impl AnalyzerConfig {
    /// Create an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the service region.
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Set the credential profile.
    pub fn with_profile(mut self, profile: impl Into<String>) -> Self {
        self.profile = Some(profile.into());
        self
    }

    /// Set the endpoint override.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Load configuration from `FORMLENS_*` environment variables.
    pub fn from_env() -> Self {
        Self {
            region: std::env::var("FORMLENS_REGION").ok(),
            profile: std::env::var("FORMLENS_PROFILE").ok(),
            endpoint: std::env::var("FORMLENS_ENDPOINT").ok(),
        }
    }
}

/// Core DocumentAnalyzer trait - all analysis providers implement this.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DocumentAnalyzer: Send + Sync {
    /// Analyze a document and return its block collection.
    async fn analyze(&self, request: AnalyzeRequest) -> FormResult<AnalysisResult>;

    /// Human-readable name for this provider.
    fn name(&self) -> &str;
}
