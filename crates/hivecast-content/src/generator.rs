//! Theme-to-copy generation with a deterministic fallback path.

use hivecast_core::{
    EnabledPlatforms, GeneratedContent, MicroPost, PinCopy, Platform, Theme, ThreadPost,
};
use serde::Deserialize;

use crate::client::DeepseekClient;
use crate::error::ContentError;

const SYSTEM_PERSONA: &str = "You are a viral social media marketing copywriter.";
const TEMPERATURE: f32 = 0.85;
const MAX_TOKENS: u32 = 800;

const FALLBACK_PIN_HASHTAGS: &[&str] = &["#honey", "#health", "#wellness"];
const FALLBACK_TWITTER_HASHTAGS: &[&str] = &["#honey", "#wellness"];
const FALLBACK_THREADS_HASHTAGS: &[&str] = &["#honey", "#naturalhealth"];

/// Which JSON shape the provider is asked for, and validated against.
///
/// A single enabled platform gets the flat object; anything else gets the
/// nested per-platform object. A response that does not match the requested
/// shape is a parse failure and triggers fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ContentShape {
    Single(Platform),
    Multi,
}

/// Flat single-platform response: `{title, description, hashtags}`.
#[derive(Debug, Deserialize)]
struct FlatCopy {
    title: String,
    description: String,
    hashtags: Vec<String>,
}

/// Produces platform-tailored copy for a theme.
///
/// Every invocation issues a fresh completion call; there is no caching of
/// prior theme-to-copy mappings. The generate operation itself cannot fail:
/// with no client configured, or on any provider error, it returns
/// [`ContentGenerator::fallback_content`].
pub struct ContentGenerator {
    client: Option<DeepseekClient>,
    destination_link: String,
}

impl ContentGenerator {
    #[must_use]
    pub fn new(client: Option<DeepseekClient>, destination_link: String) -> Self {
        Self {
            client,
            destination_link,
        }
    }

    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.client.is_some()
    }

    /// Generate copy for `theme`, tailored to the enabled platforms.
    pub async fn generate(&self, theme: &Theme, enabled: EnabledPlatforms) -> GeneratedContent {
        let shape = shape_for(enabled);

        let Some(client) = &self.client else {
            tracing::debug!(theme = %theme.name, "no completion credential; using fallback content");
            return self.fallback_content(theme);
        };

        let prompt = build_prompt(theme, shape);
        let raw = match client
            .chat_completion(SYSTEM_PERSONA, &prompt, TEMPERATURE, MAX_TOKENS)
            .await
        {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(theme = %theme.name, error = %e, "content generation failed; using fallback");
                return self.fallback_content(theme);
            }
        };

        match self.parse_response(&raw, shape, theme) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!(theme = %theme.name, error = %e, "completion did not match requested shape; using fallback");
                self.fallback_content(theme)
            }
        }
    }

    /// Deterministic templated copy assembled from the theme fields alone.
    ///
    /// Guarantees the pipeline never stalls on a provider failure: the hook
    /// and primary keyword land directly in the title/text fields and every
    /// platform gets a fixed, non-empty hashtag set.
    #[must_use]
    pub fn fallback_content(&self, theme: &Theme) -> GeneratedContent {
        let link = &self.destination_link;
        GeneratedContent {
            pinterest: PinCopy {
                title: format!("{} | Free Honey Book", theme.hook),
                description: format!(
                    "Discover {}! FREE Honey Book → {link}",
                    theme.primary_keyword
                ),
                hashtags: owned(FALLBACK_PIN_HASHTAGS),
            },
            twitter: MicroPost {
                text: format!("{} The secret: {}. {link}", theme.hook, theme.primary_keyword),
                hashtags: owned(FALLBACK_TWITTER_HASHTAGS),
            },
            threads: ThreadPost {
                text: format!(
                    "{}\n\nEverything we learned about {} in one free book: {link}",
                    theme.hook, theme.primary_keyword
                ),
                hashtags: owned(FALLBACK_THREADS_HASHTAGS),
            },
        }
    }

    fn parse_response(
        &self,
        raw: &str,
        shape: ContentShape,
        theme: &Theme,
    ) -> Result<GeneratedContent, ContentError> {
        let stripped = strip_code_fence(raw);
        match shape {
            ContentShape::Multi => {
                serde_json::from_str::<GeneratedContent>(stripped).map_err(|e| {
                    ContentError::Deserialize {
                        context: "multi-platform content".to_string(),
                        source: e,
                    }
                })
            }
            ContentShape::Single(platform) => {
                let flat: FlatCopy =
                    serde_json::from_str(stripped).map_err(|e| ContentError::Deserialize {
                        context: "single-platform content".to_string(),
                        source: e,
                    })?;
                Ok(self.merge_single(platform, flat, theme))
            }
        }
    }

    /// Fill the one enabled platform's slot from the flat response; the
    /// remaining slots keep fallback copy (their publishers are disabled, so
    /// it is never sent anywhere).
    fn merge_single(&self, platform: Platform, flat: FlatCopy, theme: &Theme) -> GeneratedContent {
        let mut content = self.fallback_content(theme);
        match platform {
            Platform::Pinterest => {
                content.pinterest = PinCopy {
                    title: flat.title,
                    description: flat.description,
                    hashtags: flat.hashtags,
                };
            }
            Platform::Twitter => {
                content.twitter = MicroPost {
                    text: flat.description,
                    hashtags: flat.hashtags,
                };
            }
            Platform::Threads => {
                content.threads = ThreadPost {
                    text: flat.description,
                    hashtags: flat.hashtags,
                };
            }
        }
        content
    }
}

fn shape_for(enabled: EnabledPlatforms) -> ContentShape {
    enabled.single().map_or(ContentShape::Multi, ContentShape::Single)
}

fn build_prompt(theme: &Theme, shape: ContentShape) -> String {
    let mut prompt = format!(
        "Create social media copy for the marketing theme \"{}\".\nHook: {}\nPrimary SEO keyword: {}\n",
        theme.name, theme.hook, theme.primary_keyword
    );
    if !theme.secondary_keywords.is_empty() {
        prompt.push_str(&format!(
            "Secondary keywords: {}\n",
            theme.secondary_keywords.join(", ")
        ));
    }

    match shape {
        ContentShape::Multi => prompt.push_str(
            "Write platform-tailored copy for Pinterest, Twitter, and Threads.\n\
             Return ONLY JSON, exactly this shape:\n\
             {\"pinterest\": {\"title\": \"...\", \"description\": \"...\", \"hashtags\": [\"...\"]}, \
             \"twitter\": {\"text\": \"...\", \"hashtags\": [\"...\"]}, \
             \"threads\": {\"text\": \"...\", \"hashtags\": [\"...\"]}}",
        ),
        ContentShape::Single(platform) => prompt.push_str(&format!(
            "Write copy tailored to {platform}.\n\
             Return ONLY JSON, exactly this shape:\n\
             {{\"title\": \"...\", \"description\": \"...\", \"hashtags\": [\"...\"]}}"
        )),
    }

    prompt
}

/// Models often wrap the requested JSON in a markdown code fence; tolerate
/// that one decoration before parsing.
fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    let rest = rest.strip_suffix("```").unwrap_or(rest);
    rest.trim()
}

fn owned(hashtags: &[&str]) -> Vec<String> {
    hashtags.iter().map(|&h| h.to_string()).collect()
}
