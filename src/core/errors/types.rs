//! Core error types for the redaction pipeline.
//!
//! The geometric pipeline itself is total over its inputs and constructs no
//! errors: empty pages, missing labels, and unmatched values are ordinary
//! results. Errors exist at the boundaries, where configuration is rejected
//! and where the external OCR engine fails.

use thiserror::Error;

/// Failure classification for the external OCR engine collaborator.
///
/// The engine is the only external call the crate touches; its failures are
/// expressed as tagged variants so retry decisions key on the classification
/// instead of inspecting error strings.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The backend rejected the call due to rate limiting; retryable with
    /// exponential backoff.
    #[error("OCR backend rate limited: {message}")]
    RateLimited {
        /// Backend-provided detail.
        message: String,
    },

    /// The backend failed transiently (5xx-class faults); retryable after a
    /// fixed delay.
    #[error("OCR backend transient failure: {message}")]
    TransientServer {
        /// Backend-provided detail.
        message: String,
    },

    /// The call cannot succeed by retrying (bad credentials, malformed input,
    /// unsupported image).
    #[error("OCR engine failure: {message}")]
    Fatal {
        /// Description of the failure.
        message: String,
        /// The underlying error, when one exists.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl EngineError {
    /// Creates a fatal error without an underlying source.
    pub fn fatal(message: impl Into<String>) -> Self {
        Self::Fatal {
            message: message.into(),
            source: None,
        }
    }

    /// Creates a fatal error wrapping an underlying cause.
    pub fn fatal_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Fatal {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Returns true when a retry may succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            EngineError::RateLimited { .. } | EngineError::TransientServer { .. }
        )
    }
}

/// Top-level error type for pipeline construction and engine-backed entry
/// points.
#[derive(Debug, Error)]
pub enum RedactError {
    /// The anonymizer configuration was rejected.
    #[error("configuration: {0}")]
    Config(#[from] crate::core::config::ConfigError),

    /// The external OCR engine failed and retries (if any) were exhausted.
    #[error("ocr engine: {0}")]
    Engine(#[from] EngineError),
}

/// Convenience alias for results carrying [`RedactError`].
pub type RedactResult<T> = Result<T, RedactError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryability_classification() {
        assert!(
            EngineError::RateLimited {
                message: "429".into()
            }
            .is_retryable()
        );
        assert!(
            EngineError::TransientServer {
                message: "500".into()
            }
            .is_retryable()
        );
        assert!(!EngineError::fatal("bad credentials").is_retryable());
    }

    #[test]
    fn test_fatal_preserves_source() {
        let io = std::io::Error::new(std::io::ErrorKind::InvalidData, "truncated");
        let err = EngineError::fatal_with_source("decode failed", io);
        let source = std::error::Error::source(&err).expect("source");
        assert!(source.to_string().contains("truncated"));
    }
}
