use serde::{Deserialize, Serialize};

/// Pinterest pin copy: a short title plus longer description text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PinCopy {
    pub title: String,
    pub description: String,
    pub hashtags: Vec<String>,
}

/// Microblog post copy, length-limited by the platform.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MicroPost {
    pub text: String,
    pub hashtags: Vec<String>,
}

/// Threads post copy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThreadPost {
    pub text: String,
    pub hashtags: Vec<String>,
}

/// Platform-tailored copy produced for one automation run.
///
/// Immutable once produced; every slot is always populated so publishers
/// never need to handle a missing one (disabled platforms simply never
/// read theirs).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedContent {
    pub pinterest: PinCopy,
    pub twitter: MicroPost,
    pub threads: ThreadPost,
}

/// Resolved placeholder image, shared read-only by all publishers in a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageReference {
    pub url: String,
    pub alt: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Pinterest,
    Twitter,
    Threads,
}

impl Platform {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Pinterest => "pinterest",
            Platform::Twitter => "twitter",
            Platform::Threads => "threads",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which publishers hold a credential this process. Drives both the
/// content-generation prompt shape and the control surface's stats view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnabledPlatforms {
    pub pinterest: bool,
    pub twitter: bool,
    pub threads: bool,
}

impl EnabledPlatforms {
    /// The single enabled platform, or `None` when zero or several are
    /// enabled.
    #[must_use]
    pub fn single(self) -> Option<Platform> {
        let mut only = None;
        for (enabled, platform) in [
            (self.pinterest, Platform::Pinterest),
            (self.twitter, Platform::Twitter),
            (self.threads, Platform::Threads),
        ] {
            if enabled {
                if only.is_some() {
                    return None;
                }
                only = Some(platform);
            }
        }
        only
    }
}

/// Outcome of one publish attempt against one platform.
///
/// `id` is present only on success; `error` only on failure, including the
/// normal disabled state (`"not configured"`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublishResult {
    pub platform: Platform,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PublishResult {
    #[must_use]
    pub fn success(platform: Platform, id: String) -> Self {
        Self {
            platform,
            success: true,
            id: Some(id),
            error: None,
        }
    }

    #[must_use]
    pub fn failure(platform: Platform, error: String) -> Self {
        Self {
            platform,
            success: false,
            id: None,
            error: Some(error),
        }
    }

    /// The platform's credential is absent. A normal disabled state, not an
    /// error to propagate.
    #[must_use]
    pub fn not_configured(platform: Platform) -> Self {
        Self::failure(platform, "not configured".to_string())
    }
}
