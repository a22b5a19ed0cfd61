//! Snapshot upload with terminal success/failure logging.

use std::sync::Arc;

use uuid::Uuid;

use crate::ports::transport::SnapshotTransport;
use crate::snapshot::TaskSnapshot;

/// Posts snapshots through the transport, logging each outcome.
///
/// Every attempt is terminal: failures are logged and dropped, never retried
/// or queued. With the enablement flag off, uploads are logged no-ops and the
/// transport is never touched.
#[derive(Clone)]
pub struct Uploader {
    enabled: bool,
    transport: Arc<dyn SnapshotTransport>,
}

impl Uploader {
    /// Creates an uploader gated by `enabled`.
    #[must_use]
    pub fn new(enabled: bool, transport: Arc<dyn SnapshotTransport>) -> Self {
        Self { enabled, transport }
    }

    /// Whether uploads will touch the network.
    #[must_use]
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Uploads one snapshot and logs the outcome.
    ///
    /// Overlapping attempts may finish out of order; the attempt id ties log
    /// lines of one attempt together.
    pub async fn upload(&self, snapshot: &TaskSnapshot) {
        if !self.enabled {
            log::debug!("uploading disabled, dropping snapshot of {} tasks", snapshot.total_count);
            return;
        }

        let attempt = Uuid::new_v4();
        log::info!(
            "[{attempt}] uploading {} tasks for {}",
            snapshot.total_count,
            snapshot.user_name
        );
        match self.transport.post(snapshot).await {
            Ok(receipt) => {
                log::info!("[{attempt}] collector answered {}: {}", receipt.status, receipt.body);
            }
            Err(err) => log::error!("[{attempt}] upload failed: {err}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use chrono::{TimeZone, Utc};

    use crate::ports::transport::{TransportFuture, UploadReceipt};
    use crate::snapshot::{TaskKind, TaskRecord};

    #[derive(Default)]
    struct CapturingTransport {
        sent: Mutex<Vec<TaskSnapshot>>,
    }

    impl SnapshotTransport for CapturingTransport {
        fn post(&self, snapshot: &TaskSnapshot) -> TransportFuture<'_> {
            self.sent.lock().unwrap().push(snapshot.clone());
            Box::pin(async { Ok(UploadReceipt { status: 200, body: "ok".into() }) })
        }
    }

    struct FailingTransport;

    impl SnapshotTransport for FailingTransport {
        fn post(&self, _snapshot: &TaskSnapshot) -> TransportFuture<'_> {
            Box::pin(async { Err("connection refused".into()) })
        }
    }

    fn snapshot() -> TaskSnapshot {
        TaskSnapshot {
            tasks: vec![TaskRecord {
                kind: TaskKind::Milking,
                name: "Cow Field".into(),
                full_name: "Milking - Cow Field".into(),
                progress: "Progress: 0/50".into(),
            }],
            user_name: "fennel".into(),
            total_count: 1,
            timestamp: Utc.with_ymd_and_hms(2024, 6, 15, 10, 30, 0).unwrap(),
            location: "board.html".into(),
        }
    }

    #[tokio::test]
    async fn enabled_uploader_posts_the_snapshot() {
        let transport = Arc::new(CapturingTransport::default());
        let uploader = Uploader::new(true, Arc::clone(&transport) as _);

        uploader.upload(&snapshot()).await;

        let sent = transport.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0], snapshot());
    }

    #[tokio::test]
    async fn disabled_uploader_never_touches_the_transport() {
        let transport = Arc::new(CapturingTransport::default());
        let uploader = Uploader::new(false, Arc::clone(&transport) as _);

        uploader.upload(&snapshot()).await;

        assert!(transport.sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn transport_failure_is_terminal() {
        let uploader = Uploader::new(true, Arc::new(FailingTransport));
        // Failure is logged and swallowed; a second attempt is independent.
        uploader.upload(&snapshot()).await;
        uploader.upload(&snapshot()).await;
    }
}
