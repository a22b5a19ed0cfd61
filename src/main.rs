//! Binary entrypoint for the `taskrelay` CLI.

use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // .env first so RUST_LOG and the TASKRELAY_* overrides are visible.
    let _ = dotenvy::dotenv();
    pretty_env_logger::init();

    match taskrelay::run(std::env::args()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
