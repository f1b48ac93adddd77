use crate::board::RecordBuilder;
use crate::broadcast::BroadcastHub;
use crate::scheduler::cycle::{CycleError, CycleReport, CycleStage};
use crate::scheduler::settings::{SHUTDOWN_POLL, SchedulerSettings};
use crate::shutdown::ShutdownSignal;
use crate::snapshot::{Snapshot, SnapshotStore};
use crate::source::{FetchError, Fetcher, MarkupExtractor};
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tokio::time::Instant;

/// Drives fetch, parse, build and publish on a fixed interval.
///
/// This is the only writer of the [`SnapshotStore`]. A failed cycle commits
/// nothing, so readers keep the last good snapshot.
pub struct UpdateScheduler {
    settings: SchedulerSettings,
    fetcher: Arc<dyn Fetcher>,
    extractor: Arc<dyn MarkupExtractor>,
    builder: RecordBuilder<'static>,
    store: Arc<SnapshotStore>,
    hub: BroadcastHub,
}

impl UpdateScheduler {
    pub fn new(
        settings: SchedulerSettings,
        fetcher: Arc<dyn Fetcher>,
        extractor: Arc<dyn MarkupExtractor>,
        builder: RecordBuilder<'static>,
        store: Arc<SnapshotStore>,
        hub: BroadcastHub,
    ) -> Self {
        Self {
            settings,
            fetcher,
            extractor,
            builder,
            store,
            hub,
        }
    }

    pub fn spawn(self, shutdown: ShutdownSignal) -> JoinHandle<()> {
        tokio::spawn(self.run(shutdown))
    }

    /// Run cycles until shutdown.
    ///
    /// The first cycle starts immediately. A cycle in flight is abandoned when
    /// shutdown fires; nothing from it is committed.
    pub async fn run(mut self, mut shutdown: ShutdownSignal) {
        tracing::info!(
            url = %self.settings.url,
            interval_secs = self.settings.interval.as_secs(),
            "update loop started"
        );

        while !shutdown.is_triggered() {
            let result = tokio::select! {
                result = self.run_cycle() => result,
                _ = shutdown.wait() => break,
            };

            match result {
                Ok(report) => tracing::info!(
                    epoch = report.epoch,
                    lines = report.lines,
                    subscribers = report.delivered,
                    "update complete"
                ),
                Err(e) => tracing::error!(
                    stage = e.stage().as_str(),
                    error = %e,
                    "update failed"
                ),
            }

            if !pause(self.settings.interval, &mut shutdown).await {
                break;
            }
        }

        tracing::info!("update loop stopped");
    }

    /// One fetch-parse-build-publish pass.
    pub async fn run_cycle(&mut self) -> Result<CycleReport, CycleError> {
        let result = self.cycle().await;
        enter(CycleStage::Idle);
        result
    }

    async fn cycle(&self) -> Result<CycleReport, CycleError> {
        //--------------------------------------------------------------------------
        // Fetch (bounded)
        //--------------------------------------------------------------------------
        enter(CycleStage::Fetching);
        let url = self.settings.url.as_str();
        let timeout = self.settings.fetch_timeout;
        let page = tokio::time::timeout(timeout, self.fetcher.fetch(url))
            .await
            .map_err(|_| FetchError::timeout(url, timeout))??;
        let fetched_at = now(self.settings.timezone);

        //--------------------------------------------------------------------------
        // Parse
        //--------------------------------------------------------------------------
        enter(CycleStage::Parsing);
        let rows = self.extractor.extract(&page)?;

        //--------------------------------------------------------------------------
        // Build and encode; nothing is visible yet
        //--------------------------------------------------------------------------
        enter(CycleStage::Building);
        let lines = self.builder.assemble(rows);
        let frame = self.store.prepare(Snapshot::live(lines, fetched_at))?;

        //--------------------------------------------------------------------------
        // Commit and fan out
        //--------------------------------------------------------------------------
        enter(CycleStage::Publishing);
        let frame = self.store.commit(frame);
        let delivered = self.hub.publish(&frame);

        Ok(CycleReport {
            epoch: frame.epoch,
            lines: frame.snapshot.lines.len(),
            delivered,
        })
    }

}

fn enter(stage: CycleStage) {
    tracing::trace!(stage = %stage, "cycle stage");
}

pub(crate) fn now(tz: Tz) -> DateTime<Tz> {
    Utc::now().with_timezone(&tz)
}

/// Sleep for `interval`, waking at least every [`SHUTDOWN_POLL`].
///
/// Returns false if shutdown fired first.
async fn pause(interval: std::time::Duration, shutdown: &mut ShutdownSignal) -> bool {
    let deadline = Instant::now() + interval;

    loop {
        if shutdown.is_triggered() {
            return false;
        }

        let remaining = deadline.saturating_duration_since(Instant::now());
        if remaining.is_zero() {
            return true;
        }

        tokio::select! {
            _ = tokio::time::sleep(remaining.min(SHUTDOWN_POLL)) => {}
            _ = shutdown.wait() => return false,
        }
    }
}
