//! siteconf - resolve and validate static site configuration.

#![allow(dead_code)]

mod cli;
mod config;
mod extension;
mod logger;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::ConfigError;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    let result = match &cli.command {
        Commands::Check { args } => cli::check::check_config(&cli, args),
        Commands::Show { args, pretty } => cli::show::show_config(&cli, args, *pretty),
        Commands::Init { name, dry } => cli::init::new_site(name.as_deref(), *dry),
    };

    // Resolution failures get the field diagnostic instead of anyhow's chain
    if let Err(err) = &result
        && let Some(ConfigError::Resolve(err)) = err.downcast_ref::<ConfigError>()
    {
        eprintln!("{}", err.diagnostic());
        std::process::exit(1);
    }
    result
}
