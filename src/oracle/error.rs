use thiserror::Error;

#[derive(Debug, Error)]
/// Errors returned by oracle calls.
pub enum OracleError {
    /// Request could not be sent or the connection failed.
    #[error("oracle request to '{endpoint}' failed: {source}")]
    Transport {
        /// Endpoint URL.
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// Oracle answered with a non-success status.
    #[error("oracle returned {status} for '{endpoint}': {body}")]
    Status {
        /// Endpoint URL.
        endpoint: String,
        /// HTTP status code.
        status: u16,
        /// Response body (possibly truncated).
        body: String,
    },

    /// Response body did not have the expected shape.
    #[error("malformed oracle payload from '{endpoint}': {reason}")]
    MalformedPayload {
        /// Endpoint URL.
        endpoint: String,
        /// Parse failure.
        reason: String,
    },

    /// Call did not finish within the per-call deadline.
    #[error("oracle call timed out after {after_ms}ms")]
    Timeout {
        /// Deadline in milliseconds.
        after_ms: u64,
    },

    /// Oracle refused the call (used by test doubles and for unsupported operations).
    #[error("oracle unavailable: {reason}")]
    Unavailable {
        /// Reason.
        reason: String,
    },

    /// Client could not be built from the given settings.
    #[error("invalid oracle configuration: {reason}")]
    InvalidConfig {
        /// Reason.
        reason: String,
    },
}

impl OracleError {
    /// Short machine-readable kind, used in batch results and logs.
    pub fn kind(&self) -> &'static str {
        match self {
            OracleError::Transport { .. } => "transport",
            OracleError::Status { .. } => "status",
            OracleError::MalformedPayload { .. } => "malformed_payload",
            OracleError::Timeout { .. } => "timeout",
            OracleError::Unavailable { .. } => "unavailable",
            OracleError::InvalidConfig { .. } => "invalid_config",
        }
    }
}
