use std::sync::Arc;
use std::time::Duration;

use chrono::{Local, NaiveDateTime, NaiveTime};
use tokio::task::JoinHandle;
use tracing::{error, info};

use crate::service::DigestService;

/// Time left from `now` until the next occurrence of `at`. A run due exactly
/// now is scheduled for the following day.
pub fn next_run_delay(now: NaiveDateTime, at: NaiveTime) -> Duration {
    let mut next = now.date().and_time(at);
    if next <= now {
        next += chrono::Duration::days(1);
    }
    (next - now).to_std().unwrap_or(Duration::ZERO)
}

/// Generates today's digest once a day at a fixed local time.
#[derive(Debug)]
pub struct DailyScheduler {
    service: Arc<DigestService>,
    at: NaiveTime,
}

impl DailyScheduler {
    pub fn new(service: Arc<DigestService>, at: NaiveTime) -> Self {
        Self { service, at }
    }

    /// Spawns the scheduling loop. Failed runs are logged and retried at the
    /// next scheduled time.
    pub fn start(self: Arc<Self>) -> JoinHandle<()> {
        info!(at = %self.at.format("%H:%M"), "⏰ Daily digest scheduler started");

        tokio::spawn(async move {
            loop {
                let delay = next_run_delay(Local::now().naive_local(), self.at);
                info!(in_secs = delay.as_secs(), "Next digest run scheduled");
                tokio::time::sleep(delay).await;
                self.run_once().await;
            }
        })
    }

    pub async fn run_once(&self) {
        match self.service.today_outcome().await {
            Ok(outcome) if outcome.generated => info!(
                date = %outcome.digest.date,
                items = outcome.digest.items.len(),
                skipped = outcome.skipped.len(),
                "Scheduled digest generated"
            ),
            Ok(outcome) => info!(date = %outcome.digest.date, "Digest already present, nothing to do"),
            Err(e) => error!(error = %e, "Scheduled digest generation failed"),
        }
    }
}
