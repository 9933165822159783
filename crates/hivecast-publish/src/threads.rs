//! Threads threaded-post publisher.

use hivecast_core::{GeneratedContent, ImageReference, Platform, PublishResult, ThreadPost};
use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};

use crate::error::PublishError;
use crate::{build_http_client, endpoint, parse_base_url, post_json, with_hashtags};

const DEFAULT_BASE_URL: &str = "https://graph.threads.net/v1.0";

#[derive(Debug, Serialize)]
struct CreateThreadRequest<'a> {
    access_token: &'a str,
    media_type: &'static str,
    image_url: &'a str,
    text: String,
}

#[derive(Debug, Serialize)]
struct PublishThreadRequest<'a> {
    access_token: &'a str,
    creation_id: &'a str,
}

#[derive(Debug, Deserialize)]
struct ThreadIdResponse {
    id: String,
}

/// Publishes posts via the Threads graph API.
///
/// Two sequential, dependent calls: a create call that returns a creation
/// token, then a publish call that finalises it. If the create call fails
/// or returns no usable token, the publish call is never attempted.
pub struct ThreadsPublisher {
    client: Client,
    base_url: Url,
    access_token: Option<String>,
}

impl ThreadsPublisher {
    /// Creates a publisher pointed at the production Threads API.
    ///
    /// # Errors
    ///
    /// Returns [`PublishError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(access_token: Option<String>, timeout_secs: u64) -> Result<Self, PublishError> {
        Self::with_base_url(access_token, timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a publisher with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`PublishError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`PublishError::Api`] if `base_url` is not
    /// a valid URL.
    pub fn with_base_url(
        access_token: Option<String>,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, PublishError> {
        Ok(Self {
            client: build_http_client(timeout_secs)?,
            base_url: parse_base_url(base_url)?,
            access_token,
        })
    }

    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.access_token.is_some()
    }

    /// Publish the thread copy for one run. Never raises past this boundary.
    pub async fn publish(
        &self,
        content: &GeneratedContent,
        image: &ImageReference,
    ) -> PublishResult {
        let Some(token) = self.access_token.as_deref() else {
            return PublishResult::not_configured(Platform::Threads);
        };

        let creation_id = match self.create_container(token, &content.threads, image).await {
            Ok(id) => id,
            Err(e) => {
                tracing::warn!(error = %e, "threads create step failed");
                return PublishResult::failure(Platform::Threads, e.to_string());
            }
        };

        match self.publish_container(token, &creation_id).await {
            Ok(id) => {
                tracing::info!(thread_id = %id, "published thread");
                PublishResult::success(Platform::Threads, id)
            }
            Err(e) => {
                tracing::warn!(error = %e, "threads publish step failed");
                PublishResult::failure(Platform::Threads, e.to_string())
            }
        }
    }

    async fn create_container(
        &self,
        token: &str,
        copy: &ThreadPost,
        image: &ImageReference,
    ) -> Result<String, PublishError> {
        let url = endpoint(&self.base_url, "me/threads")?;
        let request = CreateThreadRequest {
            access_token: token,
            media_type: "IMAGE",
            image_url: &image.url,
            text: with_hashtags(&copy.text, &copy.hashtags),
        };

        let response: ThreadIdResponse = post_json(
            &self.client,
            url,
            None,
            &request,
            "thread create response",
        )
        .await?;

        if response.id.is_empty() {
            return Err(PublishError::Api(
                "create step returned no creation id".to_string(),
            ));
        }
        Ok(response.id)
    }

    async fn publish_container(
        &self,
        token: &str,
        creation_id: &str,
    ) -> Result<String, PublishError> {
        let url = endpoint(&self.base_url, "me/threads_publish")?;
        let request = PublishThreadRequest {
            access_token: token,
            creation_id,
        };

        let response: ThreadIdResponse = post_json(
            &self.client,
            url,
            None,
            &request,
            "thread publish response",
        )
        .await?;

        Ok(response.id)
    }
}
