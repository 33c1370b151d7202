//! `lesmat` entry point.

#![warn(clippy::all)]
#![forbid(unsafe_code)]

use std::io::Write;

use clap::Parser;
use lesmat_cli::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_level.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    lesmat_cli::run(cli, &mut out)?;
    out.flush()?;
    Ok(())
}
