//! Error types for formlens operations.

use thiserror::Error;

/// Result type alias for formlens operations.
pub type FormResult<T> = Result<T, FormError>;

/// Errors that can occur while resolving a block graph.
#[derive(Error, Debug)]
pub enum FormError {
    /// A relationship points at a block id that is not in the index.
    ///
    /// This indicates a malformed or truncated input graph, never a
    /// legitimately blank field.
    #[error("block '{target}' referenced by '{referenced_by}' is not in the index")]
    DanglingReference {
        /// Id of the block holding the relationship.
        referenced_by: String,
        /// The target id that failed to resolve.
        target: String,
    },

    /// A key block has no usable VALUE relationship.
    #[error("key block '{key_id}' has no VALUE relationship")]
    MissingValueRelationship {
        /// Id of the offending key block.
        key_id: String,
    },

    /// A VALUE relationship resolves to a block that is not a value block.
    #[error("VALUE target '{target}' of key block '{key_id}' is not a value block")]
    MisclassifiedValueTarget {
        /// Id of the key block holding the VALUE relationship.
        key_id: String,
        /// The target id that resolved to a non-value block.
        target: String,
    },

    /// Search pattern failed to compile.
    #[error("invalid search pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// Document analysis provider failed.
    #[error("analysis error: {message}")]
    Analysis {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration error.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// JSON serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl FormError {
    /// Create an analysis error without an underlying source.
    pub fn analysis(message: impl Into<String>) -> Self {
        Self::Analysis {
            message: message.into(),
            source: None,
        }
    }

    /// Create an analysis error wrapping an underlying source.
    pub fn analysis_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Analysis {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dangling_reference_display() {
        let err = FormError::DanglingReference {
            referenced_by: "key-1".to_string(),
            target: "value-9".to_string(),
        };
        assert!(err.to_string().contains("value-9"));
        assert!(err.to_string().contains("key-1"));
    }

    #[test]
    fn test_analysis_error_with_source() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = FormError::analysis_with_source("provider failed", io);
        assert!(err.to_string().contains("provider failed"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
