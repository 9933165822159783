//! Automation orchestrator: one run = theme selection, content generation,
//! image resolution, concurrent publish fan-out, stats update.

use thiserror::Error;

mod pipeline;
mod stats;

pub use pipeline::{Automation, RunSummary};
pub use stats::{RunStats, StatsSnapshot};

/// Startup errors raised while assembling the automation pipeline.
///
/// These are the only failures this crate surfaces: once an [`Automation`]
/// is built, a run cannot fail; every anticipated problem is recovered at
/// the component that caused it.
#[derive(Debug, Error)]
pub enum AutomationError {
    #[error("configuration error: {0}")]
    Config(#[from] hivecast_core::ConfigError),

    #[error("failed to build completion client: {0}")]
    Content(#[from] hivecast_content::ContentError),

    #[error("failed to build publisher: {0}")]
    Publish(#[from] hivecast_publish::PublishError),
}
