//! Process-lifetime run counters.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, PoisonError};

use chrono::{DateTime, Utc};
use hivecast_core::{Platform, PublishResult};
use serde::Serialize;

/// In-memory automation counters. Reset on restart; never persisted.
///
/// Increments are atomic per field so that overlapping runs (a scheduled
/// run racing a manual trigger) cannot lose updates. Counters are
/// monotonically non-decreasing for the process lifetime.
#[derive(Debug, Default)]
pub struct RunStats {
    total_runs: AtomicU64,
    pinterest_posts: AtomicU64,
    twitter_posts: AtomicU64,
    threads_posts: AtomicU64,
    last_run_at: Mutex<Option<DateTime<Utc>>>,
}

/// Serializable point-in-time view of [`RunStats`] for the control surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatsSnapshot {
    pub total_runs: u64,
    pub pinterest_posts: u64,
    pub twitter_posts: u64,
    pub threads_posts: u64,
    pub last_run_at: Option<DateTime<Utc>>,
}

impl RunStats {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one completed run.
    ///
    /// `last_run_at` is updated on every completed run regardless of how
    /// many publishes succeeded; per-platform counters move only for
    /// successful results.
    pub fn record_run(&self, results: &[PublishResult], completed_at: DateTime<Utc>) {
        self.total_runs.fetch_add(1, Ordering::Relaxed);

        for result in results.iter().filter(|r| r.success) {
            let counter = match result.platform {
                Platform::Pinterest => &self.pinterest_posts,
                Platform::Twitter => &self.twitter_posts,
                Platform::Threads => &self.threads_posts,
            };
            counter.fetch_add(1, Ordering::Relaxed);
        }

        let mut last = self
            .last_run_at
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        *last = Some(completed_at);
    }

    #[must_use]
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            total_runs: self.total_runs.load(Ordering::Relaxed),
            pinterest_posts: self.pinterest_posts.load(Ordering::Relaxed),
            twitter_posts: self.twitter_posts.load(Ordering::Relaxed),
            threads_posts: self.threads_posts.load(Ordering::Relaxed),
            last_run_at: *self
                .last_run_at
                .lock()
                .unwrap_or_else(PoisonError::into_inner),
        }
    }
}
