//! Whoami command implementation.

use anyhow::Result;
use clap::Args;

use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct WhoamiArgs {}

pub fn run(_args: WhoamiArgs) -> Result<()> {
    let stored = session::require_session()?;

    output::field("user id", &stored.user_id);
    output::field("email", &stored.email);
    output::field("name", &stored.name);

    Ok(())
}
