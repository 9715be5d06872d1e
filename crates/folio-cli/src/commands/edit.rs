//! Edit portfolio command implementation.

use std::io::{self, Read};

use anyhow::{Context, Result, bail};
use clap::Args;

use folio_core::{Portfolio, PortfolioId, PortfolioRepository};
use folio_store::FileStore;

use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct EditArgs {
    /// Portfolio id
    pub id: String,

    /// JSON file with the full edited portfolio (use - for stdin)
    #[arg(long)]
    pub json: String,
}

pub fn run(args: EditArgs, store: FileStore) -> Result<()> {
    let stored = session::require_session()?;
    let user_id = stored.user_id()?;

    let id = PortfolioId::new(&args.id).context("Invalid portfolio id")?;

    let content = if args.json == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read from stdin")?;
        buf
    } else {
        std::fs::read_to_string(&args.json).context("Failed to read JSON file")?
    };

    let mut draft: Portfolio = serde_json::from_str(&content).context("Invalid portfolio JSON")?;

    let repo = PortfolioRepository::new(store);
    let Some(existing) = repo.list(Some(&user_id)).into_iter().find(|p| p.id == id) else {
        bail!("Portfolio '{}' not found", args.id);
    };

    // Identity and ownership are immutable; the draft cannot move a record.
    draft.id = existing.id;
    draft.user_id = existing.user_id;

    let updated = repo.update(&draft).context("Failed to update portfolio")?;

    output::success(&format!("Updated portfolio: {}", updated.id));

    Ok(())
}
