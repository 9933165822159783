use thiserror::Error;

/// Errors returned by the chat-completion client.
///
/// These never escape [`crate::ContentGenerator::generate`]: the generator
/// converts every variant into the fallback-content path.
#[derive(Debug, Error)]
pub enum ContentError {
    /// Network or TLS failure, timeout, or non-2xx status from the provider.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The provider answered 2xx but the payload is unusable.
    #[error("completion API error: {0}")]
    Api(String),

    /// The response body could not be deserialized into the expected shape.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}
