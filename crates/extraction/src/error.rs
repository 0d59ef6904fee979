use thiserror::Error;

/// Failure at the extraction boundary.
///
/// All variants surface to the caller as a generic processing failure;
/// none of them is retried.
#[derive(Debug, Error)]
pub enum ExtractionError {
    /// No provider API key was configured at startup.
    #[error("extraction provider is not configured")]
    NotConfigured,

    /// Transport-level failure talking to the provider.
    #[error("provider request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The provider answered with a non-success status.
    #[error("provider returned status {status}: {detail}")]
    Provider { status: u16, detail: String },

    /// The provider answered 2xx but carried no message content.
    #[error("provider response carried no content")]
    MissingContent,

    /// The provider content held no schema-valid extraction object.
    #[error("unparsable extraction payload: {0}")]
    Malformed(String),
}
