//! Trigger plumbing: startup one-shot, fixed interval, change events.

use std::sync::Arc;
use std::time::Duration;

use tokio::time::{self, MissedTickBehavior};

use crate::ports::clock::Clock;
use crate::ports::page::{TaskListChange, TaskPage};
use crate::snapshot;
use crate::uploader::Uploader;

/// Delay before the one-shot pass fired right after startup.
pub const STARTUP_DELAY: Duration = Duration::from_secs(5);

/// Delay between a task-list change and the pass it triggers, giving the
/// renderer time to settle.
pub const SETTLE_DELAY: Duration = Duration::from_secs(1);

/// Drives extract-then-upload passes from timer and change-event triggers.
///
/// Triggers never coalesce: each one spawns an independent pass, and
/// overlapping uploads may finish in any order. Near-identical snapshots from
/// racing triggers are uploaded twice; deduplication is the collector's
/// concern.
#[derive(Clone)]
pub struct Scheduler {
    page: Arc<dyn TaskPage>,
    clock: Arc<dyn Clock>,
    uploader: Uploader,
    upload_interval: Duration,
}

impl Scheduler {
    /// Creates a scheduler over the given page, clock, and uploader.
    #[must_use]
    pub fn new(
        page: Arc<dyn TaskPage>,
        clock: Arc<dyn Clock>,
        uploader: Uploader,
        upload_interval: Duration,
    ) -> Self {
        Self { page, clock, uploader, upload_interval }
    }

    /// Runs one extract-then-upload pass.
    ///
    /// Nothing is uploaded when the page yields no snapshot or the board
    /// parses to zero tasks.
    pub async fn pass(&self) {
        let Some(snapshot) = snapshot::extract(self.page.as_ref(), self.clock.as_ref()) else {
            return;
        };
        if snapshot.tasks.is_empty() {
            log::debug!("board parsed to zero tasks, nothing to upload");
            return;
        }
        self.uploader.upload(&snapshot).await;
    }

    /// Runs the trigger loop until the surrounding runtime shuts down.
    ///
    /// The loop itself never uploads inline: every trigger spawns its own
    /// pass, so a slow collector cannot delay the next trigger.
    pub async fn run(&self) {
        let mut changes = self.page.subscribe();

        let startup = self.clone();
        tokio::spawn(async move {
            time::sleep(STARTUP_DELAY).await;
            startup.pass().await;
        });

        let mut ticker = time::interval(self.upload_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // Swallow the immediate first tick so periodic passes start one full
        // period in.
        ticker.tick().await;

        loop {
            tokio::select! {
                _ = ticker.tick() => self.spawn_pass(),
                Some(TaskListChange) = changes.recv() => {
                    let scheduler = self.clone();
                    tokio::spawn(async move {
                        time::sleep(SETTLE_DELAY).await;
                        scheduler.pass().await;
                    });
                }
            }
        }
    }

    fn spawn_pass(&self) {
        let scheduler = self.clone();
        tokio::spawn(async move { scheduler.pass().await });
    }
}
