//! The run pipeline: select a theme, generate copy, resolve the image,
//! fan out to every publisher, aggregate.

use chrono::Utc;
use hivecast_content::{resolve_image, ContentGenerator, DeepseekClient};
use hivecast_core::{AppConfig, EnabledPlatforms, PublishResult, ThemeCatalog};
use hivecast_publish::{PinterestPublisher, ThreadsPublisher, TwitterPublisher};
use serde::Serialize;

use crate::stats::{RunStats, StatsSnapshot};
use crate::AutomationError;

/// Result of one automation run, as returned to the control surface.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub theme: String,
    pub results: Vec<PublishResult>,
    pub stats: StatsSnapshot,
}

/// Owns the whole pipeline and the process-lifetime counters.
///
/// Share it behind an `Arc`: the scheduler, the startup run, and the HTTP
/// trigger are independent callers of [`Automation::run_once`], and
/// overlapping runs are allowed; each produces and publishes its own
/// content, and counter updates are atomic.
pub struct Automation {
    catalog: ThemeCatalog,
    generator: ContentGenerator,
    pinterest: PinterestPublisher,
    twitter: TwitterPublisher,
    threads: ThreadsPublisher,
    stats: RunStats,
}

impl Automation {
    /// Assemble the pipeline from application configuration.
    ///
    /// # Errors
    ///
    /// Returns [`AutomationError`] if the theme catalog fails to load or
    /// validate, or an HTTP client cannot be constructed. These are the
    /// only run-level failures in the system; they happen at startup.
    pub fn from_config(config: &AppConfig) -> Result<Self, AutomationError> {
        let catalog = ThemeCatalog::load(&config.themes_path)?;

        let client = config
            .deepseek_api_key
            .as_deref()
            .map(|key| DeepseekClient::new(key, &config.llm_model, config.request_timeout_secs))
            .transpose()?;
        let generator = ContentGenerator::new(client, config.destination_link.clone());

        let pinterest = PinterestPublisher::new(
            config.pinterest_access_token.clone(),
            config.destination_link.clone(),
            config.request_timeout_secs,
        )?;
        let twitter = TwitterPublisher::new(
            config.twitter_access_token.clone(),
            config.request_timeout_secs,
        )?;
        let threads = ThreadsPublisher::new(
            config.threads_access_token.clone(),
            config.request_timeout_secs,
        )?;

        Ok(Self::new(catalog, generator, pinterest, twitter, threads))
    }

    #[must_use]
    pub fn new(
        catalog: ThemeCatalog,
        generator: ContentGenerator,
        pinterest: PinterestPublisher,
        twitter: TwitterPublisher,
        threads: ThreadsPublisher,
    ) -> Self {
        Self {
            catalog,
            generator,
            pinterest,
            twitter,
            threads,
            stats: RunStats::new(),
        }
    }

    #[must_use]
    pub fn enabled_platforms(&self) -> EnabledPlatforms {
        EnabledPlatforms {
            pinterest: self.pinterest.is_configured(),
            twitter: self.twitter.is_configured(),
            threads: self.threads.is_configured(),
        }
    }

    #[must_use]
    pub fn stats(&self) -> StatsSnapshot {
        self.stats.snapshot()
    }

    /// Execute one complete run.
    ///
    /// Content generation always completes (fallback on provider failure)
    /// before the publishers start. The three publish calls run
    /// concurrently and the run waits for all of them: a slow platform
    /// delays the summary, it does not get dropped. Individual platform
    /// failures land in the results list, never escalate.
    pub async fn run_once(&self) -> RunSummary {
        let theme = self.catalog.pick_random().clone();
        tracing::info!(theme = %theme.name, "starting automation run");

        let content = self.generator.generate(&theme, self.enabled_platforms()).await;
        let image = resolve_image(&theme);

        let (pin, post, thread) = tokio::join!(
            self.pinterest.publish(&content, &image),
            self.twitter.publish(&content, &image),
            self.threads.publish(&content, &image),
        );
        let results = vec![pin, post, thread];

        self.stats.record_run(&results, Utc::now());

        let succeeded = results.iter().filter(|r| r.success).count();
        tracing::info!(
            theme = %theme.name,
            succeeded,
            attempted = results.len(),
            "automation run complete"
        );

        RunSummary {
            theme: theme.name,
            results,
            stats: self.stats.snapshot(),
        }
    }
}
