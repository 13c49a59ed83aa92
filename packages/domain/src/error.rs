//! Unified error for all facade operations.
use thiserror::Error;

/// Top-level error covering every service the facade delegates to.
#[derive(Debug, Clone, Error)]
pub enum ServiceError {
    /// Recognition completed but heard nothing.
    ///
    /// Surfaced as its own condition so callers never score a reading
    /// against an empty transcript by accident.
    #[error("no speech detected in the submitted audio")]
    NoSpeechDetected,
    /// Configuration-related failure reason.
    #[error("configuration: {0}")]
    Configuration(String),
    /// Malformed or incomplete client request.
    #[error("invalid request: {0}")]
    InvalidRequest(String),
    /// An upstream service answered with a non-success status.
    #[error("upstream {service} error (status {status}): {message}")]
    Upstream {
        /// Which cloud service failed.
        service: &'static str,
        /// HTTP status returned by the service.
        status: u16,
        /// Error message extracted from the response body.
        message: String,
    },
}
