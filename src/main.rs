use anyhow::Context;
use clap::Parser;
use state_weather::cli::{run, Cli};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    run(cli).context("state-weather failed")
}
