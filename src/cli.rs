mod auroravision;
mod authenticate;
mod fetch;

use clap::{Parser, Subcommand};

use crate::{
    cli::{authenticate::AuthenticateArgs, fetch::FetchArgs},
    prelude::*,
};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Main command: fetch the daily production and print it as a table.
    #[clap(name = "fetch")]
    Fetch(Box<FetchArgs>),

    /// Test Aurora Vision API connectivity and credentials.
    #[clap(name = "authenticate")]
    Authenticate(Box<AuthenticateArgs>),
}

impl Command {
    pub fn run(self) -> Result {
        match self {
            Self::Fetch(args) => args.run(),
            Self::Authenticate(args) => args.run(),
        }
    }
}
