//! tasklens: interpret free-text task descriptions from the command line.

use anyhow::Result;
use clap::Parser as _;
use cli::Cli;

mod cli;
mod handlers;
mod render;

fn main() -> Result<()> {
    handlers::run(Cli::parse())
}
