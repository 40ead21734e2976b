#![allow(clippy::module_name_repetitions)]

use clap::Parser;
use color_eyre::Result;

mod board;
mod cli;
mod command;
mod heading;
mod repl;
mod replay;
mod simulator;

use cli::Cli;

fn main() -> Result<()> {
    color_eyre::install()?;
    Cli::parse().run()
}
