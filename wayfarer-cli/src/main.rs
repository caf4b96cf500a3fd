//! Entry point for the `wayfarer` command-line interface.
#![forbid(unsafe_code)]

use tracing_subscriber::{layer::SubscriberExt as _, util::SubscriberInitExt as _};
use wayfarer_cli::CliError;

fn main() -> eyre::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match wayfarer_cli::run() {
        Ok(()) => Ok(()),
        // Help and version requests surface as clap errors with their own exit codes.
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => Err(err.into()),
    }
}
