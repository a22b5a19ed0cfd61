//! End-to-end relay flow: a DOM-backed page driving the scheduler into a
//! capturing transport, with virtual time.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::{DateTime, TimeZone, Utc};
use tokio::time;

use taskrelay::adapters::live::page::DomPage;
use taskrelay::ports::clock::Clock;
use taskrelay::ports::transport::{SnapshotTransport, TransportFuture, UploadReceipt};
use taskrelay::scheduler::Scheduler;
use taskrelay::snapshot::TaskSnapshot;
use taskrelay::uploader::Uploader;

const EMPTY_PAGE: &str = r#"<html><body>
    <div class="CharacterName_name__1amXp">fennel</div>
    <div class="TasksPanel_taskList__2xh4k"></div>
</body></html>"#;

const ONE_TASK_PAGE: &str = r#"<html><body>
    <div class="CharacterName_name__1amXp">fennel</div>
    <div class="TasksPanel_taskList__2xh4k">
        <div class="RandomTask_randomTask__3B9fA">
            <div class="RandomTask_name__1hl1b">Milking - Cow Field</div>
            <div>Progress: 12/50</div>
        </div>
    </div>
</body></html>"#;

struct FixedClock;

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 10, 30, 0).unwrap()
    }
}

/// Captures the wire payload of every post as parsed JSON.
#[derive(Default)]
struct CapturingTransport {
    sent: Mutex<Vec<serde_json::Value>>,
}

impl CapturingTransport {
    fn count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

impl SnapshotTransport for CapturingTransport {
    fn post(&self, snapshot: &TaskSnapshot) -> TransportFuture<'_> {
        let payload = serde_json::to_value(snapshot).expect("snapshot serializes");
        self.sent.lock().unwrap().push(payload);
        Box::pin(async { Ok(UploadReceipt { status: 200, body: "ok".into() }) })
    }
}

struct Harness {
    page: Arc<DomPage>,
    transport: Arc<CapturingTransport>,
    driver: tokio::task::JoinHandle<()>,
}

impl Harness {
    /// Spawns a scheduler over `initial_html` with a 30 s upload interval and
    /// waits until it has subscribed to the page.
    async fn start(initial_html: &str, enabled: bool) -> Self {
        let page = Arc::new(DomPage::new("harness://board", initial_html));
        let transport = Arc::new(CapturingTransport::default());
        let scheduler = Scheduler::new(
            Arc::clone(&page) as _,
            Arc::new(FixedClock),
            Uploader::new(enabled, Arc::clone(&transport) as _),
            Duration::from_secs(30),
        );
        let driver = tokio::spawn(async move { scheduler.run().await });
        // One virtual millisecond lets the driver subscribe before the test
        // mutates the page.
        time::sleep(Duration::from_millis(1)).await;
        Self { page, transport, driver }
    }
}

impl Drop for Harness {
    fn drop(&mut self) {
        self.driver.abort();
    }
}

#[tokio::test(start_paused = true)]
async fn a_mutation_batch_triggers_exactly_one_delayed_pass() {
    let harness = Harness::start(EMPTY_PAGE, true).await;

    harness.page.update(ONE_TASK_PAGE);

    // Settle delay is one second; just before it nothing has happened.
    time::sleep(Duration::from_millis(998)).await;
    assert_eq!(harness.transport.count(), 0);

    time::sleep(Duration::from_millis(4)).await;
    assert_eq!(harness.transport.count(), 1);

    // No further triggers before the startup one-shot at five seconds.
    time::sleep(Duration::from_secs(3)).await;
    assert_eq!(harness.transport.count(), 1);
}

#[tokio::test(start_paused = true)]
async fn the_captured_payload_matches_the_wire_format() {
    let harness = Harness::start(EMPTY_PAGE, true).await;

    harness.page.update(ONE_TASK_PAGE);
    time::sleep(Duration::from_millis(1002)).await;

    let sent = harness.transport.sent.lock().unwrap();
    assert_eq!(sent.len(), 1);
    let payload = &sent[0];
    assert_eq!(payload["userName"], "fennel");
    assert_eq!(payload["totalCount"], 1);
    assert_eq!(payload["location"], "harness://board");
    assert_eq!(payload["timestamp"], "2024-06-15T10:30:00Z");
    assert_eq!(payload["tasks"][0]["type"], "milking");
    assert_eq!(payload["tasks"][0]["name"], "Cow Field");
    assert_eq!(payload["tasks"][0]["fullName"], "Milking - Cow Field");
    assert_eq!(payload["tasks"][0]["progress"], "Progress: 12/50");
}

#[tokio::test(start_paused = true)]
async fn an_empty_board_never_uploads() {
    let harness = Harness::start(EMPTY_PAGE, true).await;

    // Through the startup one-shot and two timer periods: nothing to send.
    time::sleep(Duration::from_secs(65)).await;
    assert_eq!(harness.transport.count(), 0);
}

#[tokio::test(start_paused = true)]
async fn a_disabled_relay_never_touches_the_transport() {
    let harness = Harness::start(ONE_TASK_PAGE, false).await;

    harness.page.update(EMPTY_PAGE);
    harness.page.update(ONE_TASK_PAGE);
    time::sleep(Duration::from_secs(65)).await;
    assert_eq!(harness.transport.count(), 0);
}

#[tokio::test(start_paused = true)]
async fn overlapping_triggers_each_upload_without_coalescing() {
    let harness = Harness::start(ONE_TASK_PAGE, true).await;

    // Startup one-shot at 5 s.
    time::sleep(Duration::from_secs(6)).await;
    assert_eq!(harness.transport.count(), 1);

    // A mutation lands just before the 30 s timer tick: the settle pass
    // (29.5 s + 1 s) and the timer pass (30 s) both fire.
    time::sleep(Duration::from_millis(23_500)).await;
    harness.page.update(EMPTY_PAGE);
    harness.page.update(ONE_TASK_PAGE);
    time::sleep(Duration::from_millis(1_200)).await;
    assert_eq!(harness.transport.count(), 3);
}
