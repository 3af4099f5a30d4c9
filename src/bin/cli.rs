// src/bin/cli.rs
use clap::Parser;
use kol_runs::cli::{self, Args};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    env_logger::Builder::new()
        .parse_filters(&args.log_level)
        .parse_default_env()
        .init();

    cli::run(&args)?;
    Ok(())
}
