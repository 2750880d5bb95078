//! CLI entry point for the tile-pattern configurator preview tool

use calepin::io::cli::Cli;
use clap::Parser;

fn main() -> calepin::Result<()> {
    Cli::parse().run()
}
