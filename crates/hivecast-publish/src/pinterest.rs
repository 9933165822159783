//! Pinterest pin publisher.

use hivecast_core::{GeneratedContent, ImageReference, PinCopy, Platform, PublishResult};
use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};

use crate::error::PublishError;
use crate::{build_http_client, endpoint, parse_base_url, post_json, with_hashtags};

const DEFAULT_BASE_URL: &str = "https://api.pinterest.com/v5";

#[derive(Debug, Serialize)]
struct PinRequest<'a> {
    title: &'a str,
    description: String,
    link: &'a str,
    media_source: MediaSource<'a>,
    alt_text: &'a str,
}

#[derive(Debug, Serialize)]
struct MediaSource<'a> {
    source_type: &'static str,
    url: &'a str,
}

#[derive(Debug, Deserialize)]
struct PinResponse {
    id: String,
}

/// Publishes pins via the Pinterest v5 API.
///
/// One POST per publish: pin creation with the image reference inline. The
/// destination link every pin points at is campaign configuration.
pub struct PinterestPublisher {
    client: Client,
    base_url: Url,
    access_token: Option<String>,
    destination_link: String,
}

impl PinterestPublisher {
    /// Creates a publisher pointed at the production Pinterest API.
    ///
    /// # Errors
    ///
    /// Returns [`PublishError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(
        access_token: Option<String>,
        destination_link: String,
        timeout_secs: u64,
    ) -> Result<Self, PublishError> {
        Self::with_base_url(access_token, destination_link, timeout_secs, DEFAULT_BASE_URL)
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
        destination_link: String,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, PublishError> {
        Ok(Self {
            client: build_http_client(timeout_secs)?,
            base_url: parse_base_url(base_url)?,
            access_token,
            destination_link,
        })
    }

    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.access_token.is_some()
    }

    /// Publish the pin copy for one run.
    ///
    /// Never raises: a missing credential yields the `not configured`
    /// result with no network call, and every call failure is converted to
    /// a failed result here.
    pub async fn publish(
        &self,
        content: &GeneratedContent,
        image: &ImageReference,
    ) -> PublishResult {
        let Some(token) = self.access_token.as_deref() else {
            return PublishResult::not_configured(Platform::Pinterest);
        };

        match self.create_pin(token, &content.pinterest, image).await {
            Ok(id) => {
                tracing::info!(pin_id = %id, "published pin");
                PublishResult::success(Platform::Pinterest, id)
            }
            Err(e) => {
                tracing::warn!(error = %e, "pinterest publish failed");
                PublishResult::failure(Platform::Pinterest, e.to_string())
            }
        }
    }

    async fn create_pin(
        &self,
        token: &str,
        copy: &PinCopy,
        image: &ImageReference,
    ) -> Result<String, PublishError> {
        let url = endpoint(&self.base_url, "pins")?;
        let request = PinRequest {
            title: &copy.title,
            description: with_hashtags(&copy.description, &copy.hashtags),
            link: &self.destination_link,
            media_source: MediaSource {
                source_type: "image_url",
                url: &image.url,
            },
            alt_text: &image.alt,
        };

        let response: PinResponse = post_json(
            &self.client,
            url,
            Some(token),
            &request,
            "pin creation response",
        )
        .await?;

        Ok(response.id)
    }
}
