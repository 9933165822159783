//! Background job scheduler.
//!
//! Initialises a [`JobScheduler`] at server startup and registers the
//! recurring automation run on the configured cron cadence.

use std::sync::Arc;

use hivecast_automation::Automation;
use tokio_cron_scheduler::{Job, JobScheduler, JobSchedulerError};

/// Builds and starts the background job scheduler.
///
/// Registers the recurring automation job and starts the scheduler.
/// Returns the running [`JobScheduler`] handle, which must be kept alive
/// for the lifetime of the process — dropping it shuts down all jobs.
///
/// # Errors
///
/// Returns [`JobSchedulerError`] if the scheduler cannot be initialised,
/// the cron expression does not parse, or the scheduler fails to start.
pub async fn build_scheduler(
    automation: Arc<Automation>,
    schedule: &str,
) -> Result<JobScheduler, JobSchedulerError> {
    let scheduler = JobScheduler::new().await?;

    register_automation_job(&scheduler, automation, schedule).await?;

    scheduler.start().await?;
    Ok(scheduler)
}

/// Register the recurring content-automation run.
///
/// The default cadence is every three hours; the scheduled run, the
/// startup run, and the HTTP trigger are independent callers of the same
/// `run_once` entry point.
async fn register_automation_job(
    scheduler: &JobScheduler,
    automation: Arc<Automation>,
    schedule: &str,
) -> Result<(), JobSchedulerError> {
    let job = Job::new_async(schedule, move |_uuid, _lock| {
        let automation = Arc::clone(&automation);

        Box::pin(async move {
            tracing::info!("scheduler: starting automation run");
            let summary = automation.run_once().await;
            let succeeded = summary.results.iter().filter(|r| r.success).count();
            tracing::info!(
                theme = %summary.theme,
                succeeded,
                "scheduler: automation run complete"
            );
        })
    })?;

    scheduler.add(job).await?;
    Ok(())
}
