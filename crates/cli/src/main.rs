//! Terminal front end for jotlist
//!
//! Opens the task or note store in the data directory, applies one command
//! and prints the result.

mod cli;
mod config;
mod render;

use clap::Parser;

fn main() -> anyhow::Result<()> {
    cli::Cli::parse().run()
}
