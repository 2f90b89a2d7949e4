// src/bin/cli.rs
use clap::Parser;
use dino_stats::cli::{self, Cli};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    cli::run(Cli::parse())?;
    Ok(())
}
