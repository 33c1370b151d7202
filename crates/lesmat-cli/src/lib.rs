//! # lesmat-cli
//!
//! The `lesmat` command: search a course material export the way the
//! overview page does, inspect facet counts, show a material with its
//! previous/next neighbours, and build shareable filter URLs.
//!
//! Every command writes to a caller-supplied [`Write`], so [`run`] can be
//! driven from tests as well as from `main`.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

use std::io::Write;

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_handlers;
pub mod error;

pub use cli::{Cli, Command};
pub use config::LesmatConfig;
pub use error::{Error, Result};

use commands::Session;
use lesmat_core::ConfigManager;

/// Execute a parsed command line.
pub fn run(cli: Cli, out: &mut dyn Write) -> Result<()> {
    let config_path = cli.config.as_deref();
    match cli.command {
        Command::Config { action } => {
            config_handlers::handle_config_command(config_path, action, out)
        }
        Command::Url(args) => commands::url(&args, out),
        Command::Search(args) => {
            let config = LesmatConfig::load(config_path)?;
            let session = Session::open(&args.catalog, &config)?;
            commands::search(&session, &args, &config, out)
        }
        Command::Facets(args) => {
            let config = LesmatConfig::load(config_path)?;
            let session = Session::open(&args.catalog, &config)?;
            commands::facets(&session, &args, out)
        }
        Command::Show(args) => {
            let config = LesmatConfig::load(config_path)?;
            let session = Session::open(&args.catalog, &config)?;
            commands::show(&session, &args, out)
        }
    }
}
