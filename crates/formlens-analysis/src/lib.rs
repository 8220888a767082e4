//! formlens-analysis - Document analysis providers for formlens.
//!
//! This crate owns the wire side of the analysis collaborator: the versioned
//! response envelope the service serializes, and providers implementing the
//! [`DocumentAnalyzer`] trait from formlens-core.
//!
//! # Example
//!
//! ```ignore
//! use formlens_analysis::RecordedAnalyzer;
//! use formlens_core::{resolve_blocks, AnalyzeRequest, DocumentAnalyzer, ResolveConfig};
//!
//! let analyzer = RecordedAnalyzer::from_path("fixtures/paystub.json")?;
//! let result = analyzer.analyze(AnalyzeRequest::forms_at("paystub.jpg")).await?;
//! let outcome = resolve_blocks(result.blocks, &ResolveConfig::default())?;
//! println!("{:?}", outcome.fields.search("pay date")?);
//! ```

mod recorded;
mod response;

pub use recorded::RecordedAnalyzer;
pub use response::AnalyzeDocumentResponse;

// Re-export core types for convenience
pub use formlens_core::traits::{
    AnalysisResult, AnalyzeRequest, AnalyzerConfig, DocumentAnalyzer, DocumentMetadata,
    DocumentSource, FeatureType,
};
