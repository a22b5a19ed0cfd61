//! `taskrelay once` command: one extract-then-upload pass.

use crate::adapters::live::page::DomPage;
use crate::adapters::live::source::{PageLoader, PageSource};
use crate::config::Config;
use crate::context::ServiceContext;
use crate::snapshot;

/// Execute the `once` command.
///
/// The upload outcome is reported through the log only, matching the
/// scheduler's passes; a failed delivery does not fail the command.
///
/// # Errors
///
/// Returns an error if the page cannot be loaded.
pub async fn run(ctx: &ServiceContext, config: &Config, source: &str) -> Result<(), String> {
    let source = PageSource::parse(source);
    let html = PageLoader::new().load(&source).await?;
    let page = DomPage::new(source.location(), html);

    let Some(snapshot) = snapshot::extract(&page, ctx.clock.as_ref()) else {
        println!("No task board found");
        return Ok(());
    };
    if snapshot.tasks.is_empty() {
        println!("Task board parsed to zero tasks, nothing to upload");
        return Ok(());
    }

    ctx.uploader(config).upload(&snapshot).await;
    Ok(())
}
