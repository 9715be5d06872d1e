//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands::{
    create::CreateArgs, edit::EditArgs, list::ListArgs, login::LoginArgs, logout::LogoutArgs,
    publish::PublishArgs, register::RegisterArgs, show::ShowArgs, whoami::WhoamiArgs,
};

/// Local-first portfolio builder.
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// Store directory (defaults to the platform data dir)
    #[arg(long, global = true, value_name = "PATH")]
    pub store: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Register a new account and start a session
    Register(RegisterArgs),

    /// Start a session for an existing account
    Login(LoginArgs),

    /// End the active session
    Logout(LogoutArgs),

    /// Display the active session
    Whoami(WhoamiArgs),

    /// Create a new portfolio from a template
    Create(CreateArgs),

    /// List your portfolios
    List(ListArgs),

    /// Show one portfolio as JSON
    Show(ShowArgs),

    /// Replace a portfolio with an edited draft
    Edit(EditArgs),

    /// Publish a portfolio under a shareable url
    Publish(PublishArgs),
}
