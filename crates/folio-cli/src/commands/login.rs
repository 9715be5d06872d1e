//! Login command implementation.

use anyhow::{Context, Result};
use clap::Args;

use folio_core::Identity;
use folio_store::FileStore;

use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct LoginArgs {
    /// Account email address
    #[arg(long)]
    pub email: String,

    /// Account password
    #[arg(long)]
    pub password: String,
}

pub fn run(args: LoginArgs, store: FileStore) -> Result<()> {
    let identity = Identity::new(store);
    let account = identity
        .login(&args.email, &args.password)
        .context("Login failed")?;

    session::save_session(&account).context("Failed to save session")?;

    output::field("user id", account.id.as_str());
    output::success(&format!("Logged in successfully as {}", account.name));

    Ok(())
}
