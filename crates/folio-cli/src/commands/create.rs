//! Create portfolio command implementation.

use anyhow::{Context, Result};
use clap::Args;

use folio_core::{PortfolioRepository, Template};
use folio_store::FileStore;

use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Template tag (professional, modern, minimal, creative, 3d-interactive)
    pub template: String,
}

pub fn run(args: CreateArgs, store: FileStore) -> Result<()> {
    let stored = session::require_session()?;
    let user_id = stored.user_id()?;

    let template: Template = args.template.parse().context("Invalid template")?;

    let repo = PortfolioRepository::new(store);
    let portfolio = repo
        .create(Some(&user_id), template)
        .context("Failed to create portfolio")?;

    // Output the created portfolio's id
    println!("{}", portfolio.id);
    output::success(&format!("Created {} portfolio: {}", template, portfolio.id));

    Ok(())
}
