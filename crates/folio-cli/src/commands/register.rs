//! Register command implementation.

use anyhow::{Context, Result};
use clap::Args;

use folio_core::Identity;
use folio_store::FileStore;

use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct RegisterArgs {
    /// Account email address
    #[arg(long)]
    pub email: String,

    /// Display name
    #[arg(long)]
    pub name: String,

    /// Password (falls back to the FOLIO_PASSWORD environment variable)
    #[arg(long)]
    pub password: Option<String>,
}

pub fn run(args: RegisterArgs, store: FileStore) -> Result<()> {
    let password = args
        .password
        .or_else(|| std::env::var("FOLIO_PASSWORD").ok())
        .context("Password is required (use --password or FOLIO_PASSWORD)")?;

    let identity = Identity::new(store);
    let account = identity
        .register(&args.email, &args.name, &password)
        .context("Failed to register account")?;

    session::save_session(&account).context("Failed to save session")?;

    output::field("user id", account.id.as_str());
    output::field("email", &account.email);
    output::success(&format!("Registered and logged in as {}", account.name));

    Ok(())
}
