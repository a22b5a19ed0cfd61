//! `taskrelay peek` command: print the extracted snapshot without uploading.

use crate::adapters::live::page::DomPage;
use crate::adapters::live::source::{PageLoader, PageSource};
use crate::context::ServiceContext;
use crate::snapshot;

/// Execute the `peek` command.
///
/// # Errors
///
/// Returns an error if the page cannot be loaded or the snapshot cannot be
/// serialized.
pub async fn run(ctx: &ServiceContext, source: &str) -> Result<(), String> {
    let source = PageSource::parse(source);
    let html = PageLoader::new().load(&source).await?;
    let page = DomPage::new(source.location(), html);

    let Some(snapshot) = snapshot::extract(&page, ctx.clock.as_ref()) else {
        println!("No task board found");
        return Ok(());
    };

    let json = serde_json::to_string_pretty(&snapshot)
        .map_err(|e| format!("Failed to serialize snapshot: {e}"))?;
    println!("{json}");
    Ok(())
}
