//! List portfolios command implementation.

use anyhow::Result;
use clap::Args;

use folio_core::PortfolioRepository;
use folio_store::FileStore;

use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct ListArgs {}

pub fn run(_args: ListArgs, store: FileStore) -> Result<()> {
    let stored = session::require_session()?;
    let user_id = stored.user_id()?;

    let repo = PortfolioRepository::new(store);
    let portfolios = repo.list(Some(&user_id));

    if portfolios.is_empty() {
        println!("No portfolios found.");
        return Ok(());
    }

    for portfolio in &portfolios {
        output::json(portfolio)?;
    }

    Ok(())
}
