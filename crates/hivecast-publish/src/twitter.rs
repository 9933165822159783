//! Twitter/X microblog publisher.

use hivecast_core::{GeneratedContent, ImageReference, MicroPost, Platform, PublishResult};
use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};

use crate::error::PublishError;
use crate::{build_http_client, endpoint, parse_base_url, post_json, with_hashtags};

const DEFAULT_BASE_URL: &str = "https://api.twitter.com";

#[derive(Debug, Serialize)]
struct MediaUploadRequest<'a> {
    media_url: &'a str,
    alt_text: &'a str,
}

#[derive(Debug, Deserialize)]
struct MediaUploadResponse {
    media_id: String,
}

#[derive(Debug, Serialize)]
struct TweetRequest {
    text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    media: Option<TweetMedia>,
}

#[derive(Debug, Serialize)]
struct TweetMedia {
    media_ids: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct TweetResponse {
    data: TweetData,
}

#[derive(Debug, Deserialize)]
struct TweetData {
    id: String,
}

/// Publishes posts via the Twitter v2 API.
///
/// Two steps: media upload, then post creation referencing the uploaded
/// media. The upload is best-effort: if it fails the post goes out
/// text-only, and only the post-creation call decides the publish outcome.
pub struct TwitterPublisher {
    client: Client,
    base_url: Url,
    access_token: Option<String>,
}

impl TwitterPublisher {
    /// Creates a publisher pointed at the production Twitter API.
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

    /// Publish the microblog copy for one run.
    ///
    /// Never raises past this boundary; see the type-level docs for the
    /// media best-effort rule.
    pub async fn publish(
        &self,
        content: &GeneratedContent,
        image: &ImageReference,
    ) -> PublishResult {
        let Some(token) = self.access_token.as_deref() else {
            return PublishResult::not_configured(Platform::Twitter);
        };

        let media_id = match self.upload_media(token, image).await {
            Ok(id) => Some(id),
            Err(e) => {
                tracing::warn!(error = %e, "media upload failed; posting text-only");
                None
            }
        };

        match self
            .create_post(token, &content.twitter, media_id.as_deref())
            .await
        {
            Ok(id) => {
                tracing::info!(post_id = %id, "published post");
                PublishResult::success(Platform::Twitter, id)
            }
            Err(e) => {
                tracing::warn!(error = %e, "twitter publish failed");
                PublishResult::failure(Platform::Twitter, e.to_string())
            }
        }
    }

    async fn upload_media(
        &self,
        token: &str,
        image: &ImageReference,
    ) -> Result<String, PublishError> {
        let url = endpoint(&self.base_url, "2/media/upload")?;
        let request = MediaUploadRequest {
            media_url: &image.url,
            alt_text: &image.alt,
        };

        let response: MediaUploadResponse = post_json(
            &self.client,
            url,
            Some(token),
            &request,
            "media upload response",
        )
        .await?;

        if response.media_id.is_empty() {
            return Err(PublishError::Api(
                "media upload returned no media id".to_string(),
            ));
        }
        Ok(response.media_id)
    }

    async fn create_post(
        &self,
        token: &str,
        copy: &MicroPost,
        media_id: Option<&str>,
    ) -> Result<String, PublishError> {
        let url = endpoint(&self.base_url, "2/tweets")?;
        let request = TweetRequest {
            text: with_hashtags(&copy.text, &copy.hashtags),
            media: media_id.map(|id| TweetMedia {
                media_ids: vec![id.to_string()],
            }),
        };

        let response: TweetResponse = post_json(
            &self.client,
            url,
            Some(token),
            &request,
            "post creation response",
        )
        .await?;

        Ok(response.data.id)
    }
}
