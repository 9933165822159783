use thiserror::Error;

/// Errors raised by publisher HTTP calls.
///
/// Internal to this crate's modules: every publisher catches these at its
/// own boundary and converts them into a failed
/// [`hivecast_core::PublishResult`], and never propagate to the
/// orchestrator.
#[derive(Debug, Error)]
pub enum PublishError {
    /// Network or TLS failure, timeout, or non-2xx status.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The provider answered 2xx but the payload is unusable.
    #[error("API error: {0}")]
    Api(String),

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}
