//! Publish portfolio command implementation.

use anyhow::{Context, Result, bail};
use clap::Args;

use folio_core::{PortfolioId, PortfolioRepository};
use folio_store::FileStore;

use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct PublishArgs {
    /// Portfolio id
    pub id: String,
}

pub fn run(args: PublishArgs, store: FileStore) -> Result<()> {
    let stored = session::require_session()?;
    let user_id = stored.user_id()?;

    let id = PortfolioId::new(&args.id).context("Invalid portfolio id")?;

    let repo = PortfolioRepository::new(store);
    if !repo.list(Some(&user_id)).iter().any(|p| p.id == id) {
        bail!("Portfolio '{}' not found", args.id);
    }

    let url = repo.publish(&id).context("Failed to publish portfolio")?;

    // Output the minted shareable url
    println!("{}", url);
    output::success(&format!("Published: {}", url));

    Ok(())
}
