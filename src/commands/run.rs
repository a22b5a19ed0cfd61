//! `taskrelay run` command: watch the page and relay snapshots.

use std::sync::Arc;

use crate::adapters::live::page::DomPage;
use crate::adapters::live::source::{PageLoader, PageSource};
use crate::config::Config;
use crate::context::ServiceContext;
use crate::scheduler::Scheduler;

/// Execute the `run` command: refresh the page from `source` on the
/// configured interval and drive the scheduler until interrupted.
///
/// # Errors
///
/// Returns an error if the initial page load fails. Later refresh and upload
/// failures are logged and the loop keeps going.
pub async fn run(ctx: &ServiceContext, config: &Config, source: &str) -> Result<(), String> {
    let source = PageSource::parse(source);
    let loader = PageLoader::new();

    let html = loader.load(&source).await?;
    let page = Arc::new(DomPage::new(source.location(), html));
    log::info!(
        "watching {} (refresh {}ms, upload every {}ms)",
        source.location(),
        config.refresh_interval_ms,
        config.upload_interval_ms
    );

    // The refresh loop plays the renderer: each reload is one mutation batch,
    // and the page itself decides whether subscribers hear about it.
    let refresher_page = Arc::clone(&page);
    let refresh_interval = config.refresh_interval();
    tokio::spawn(async move {
        loop {
            tokio::time::sleep(refresh_interval).await;
            match loader.load(&source).await {
                Ok(html) => refresher_page.update(html),
                Err(err) => log::warn!("page refresh failed: {err}"),
            }
        }
    });

    let scheduler = Scheduler::new(
        page,
        Arc::clone(&ctx.clock),
        ctx.uploader(config),
        config.upload_interval(),
    );
    scheduler.run().await;
    Ok(())
}
