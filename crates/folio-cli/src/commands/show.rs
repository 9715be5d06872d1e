//! Show portfolio command implementation.

use anyhow::{Context, Result, bail};
use clap::Args;

use folio_core::{PortfolioId, PortfolioRepository};
use folio_store::FileStore;

use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Portfolio id
    pub id: String,
}

pub fn run(args: ShowArgs, store: FileStore) -> Result<()> {
    let stored = session::require_session()?;
    let user_id = stored.user_id()?;

    let id = PortfolioId::new(&args.id).context("Invalid portfolio id")?;

    // Listing scopes to the session user, so foreign records are invisible.
    let repo = PortfolioRepository::new(store);
    let Some(portfolio) = repo.list(Some(&user_id)).into_iter().find(|p| p.id == id) else {
        bail!("Portfolio '{}' not found", args.id);
    };

    output::json_pretty(&portfolio)?;

    Ok(())
}
