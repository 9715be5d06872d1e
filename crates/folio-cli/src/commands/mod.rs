//! Command implementations.

pub mod create;
pub mod edit;
pub mod list;
pub mod login;
pub mod logout;
pub mod publish;
pub mod register;
pub mod show;
pub mod whoami;

use anyhow::Result;
use folio_store::FileStore;

use crate::cli::Commands;

pub fn handle(command: Commands, store: FileStore) -> Result<()> {
    match command {
        Commands::Register(args) => register::run(args, store),
        Commands::Login(args) => login::run(args, store),
        Commands::Logout(args) => logout::run(args),
        Commands::Whoami(args) => whoami::run(args),
        Commands::Create(args) => create::run(args, store),
        Commands::List(args) => list::run(args, store),
        Commands::Show(args) => show::run(args, store),
        Commands::Edit(args) => edit::run(args, store),
        Commands::Publish(args) => publish::run(args, store),
    }
}
