//! Command dispatch and handlers.

pub mod once;
pub mod peek;
pub mod run;

use crate::cli::{Cli, Command};
use crate::config::Config;
use crate::context::ServiceContext;

/// Dispatch a parsed command to its handler.
///
/// # Errors
///
/// Returns an error string if configuration loading or the selected command
/// handler fails.
pub async fn dispatch(cli: &Cli) -> Result<(), String> {
    let config = Config::load(cli.config.as_deref())?;
    if config.enabled && config.upload_url.is_empty() {
        log::warn!("no upload_url configured, uploads are disabled");
    }
    let ctx = ServiceContext::live(&config);

    match &cli.command {
        Command::Run { source } => run::run(&ctx, &config, source).await,
        Command::Once { source } => once::run(&ctx, &config, source).await,
        Command::Peek { source } => peek::run(&ctx, source).await,
    }
}
