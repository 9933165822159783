//! Platform publishers: one independent client per target platform.
//!
//! Each publisher holds its own HTTP client and optional credential. A
//! missing credential is a normal disabled state; `publish` returns a
//! `not configured` result without touching the network. Call failures of
//! any kind (network, non-2xx, malformed body) are caught at the publisher
//! boundary and reported as failed [`hivecast_core::PublishResult`]s;
//! publishers never raise past `publish`.

use std::time::Duration;

use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;

mod error;
mod pinterest;
mod threads;
mod twitter;

pub use error::PublishError;
pub use pinterest::PinterestPublisher;
pub use threads::ThreadsPublisher;
pub use twitter::TwitterPublisher;

pub(crate) fn build_http_client(timeout_secs: u64) -> Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .connect_timeout(Duration::from_secs(10))
        .user_agent("hivecast/0.1 (content-automation)")
        .build()
}

/// Normalise and parse a base URL so that `join` appends endpoint paths
/// rather than replacing the last path segment.
pub(crate) fn parse_base_url(base_url: &str) -> Result<Url, PublishError> {
    let normalised = format!("{}/", base_url.trim_end_matches('/'));
    Url::parse(&normalised)
        .map_err(|e| PublishError::Api(format!("invalid base URL '{base_url}': {e}")))
}

pub(crate) fn endpoint(base_url: &Url, path: &str) -> Result<Url, PublishError> {
    base_url
        .join(path)
        .map_err(|e| PublishError::Api(format!("invalid endpoint '{path}': {e}")))
}

/// Sends a POST with a JSON body, asserts a 2xx HTTP status, and parses the
/// response body into `T`. `bearer_token` is attached as an Authorization
/// header when present (the Threads API carries its token in the body
/// instead).
pub(crate) async fn post_json<T: DeserializeOwned>(
    client: &Client,
    url: Url,
    bearer_token: Option<&str>,
    body: &impl Serialize,
    context: &str,
) -> Result<T, PublishError> {
    let mut request = client.post(url).json(body);
    if let Some(token) = bearer_token {
        request = request.bearer_auth(token);
    }

    let response = request.send().await?;
    let response = response.error_for_status()?;
    let text = response.text().await?;

    serde_json::from_str(&text).map_err(|e| PublishError::Deserialize {
        context: context.to_string(),
        source: e,
    })
}

/// Append the hashtag line to post text, skipping the separator when there
/// are no hashtags.
pub(crate) fn with_hashtags(text: &str, hashtags: &[String]) -> String {
    if hashtags.is_empty() {
        text.to_string()
    } else {
        format!("{text}\n\n{}", hashtags.join(" "))
    }
}
