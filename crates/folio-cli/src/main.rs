//! folio - CLI portfolio builder.
//!
//! This is a thin presentation layer over the `folio-core` and
//! `folio-store` libraries: it holds the login session and maps commands
//! onto repository and identity operations.

mod cli;
mod commands;
mod output;
mod session;

use anyhow::Result;
use clap::Parser;
use folio_store::FileStore;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose, cli.json_logs);

    let store_root = session::store_root(cli.store.as_deref())?;
    tracing::debug!(store = %store_root.display(), "Using store root");
    let store = FileStore::new(&store_root);

    commands::handle(cli.command, store)
}

fn init_logging(verbosity: u8, json: bool) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(false))
            .init();
    }
}
