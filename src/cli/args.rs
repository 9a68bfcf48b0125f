//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Resolve and validate static site configuration
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path, searched upward from the current directory
    #[arg(short = 'C', long, global = true, default_value = crate::config::CONFIG_FILE, value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Resolve the configuration and report the first problem found
    #[command(visible_alias = "c")]
    Check {
        #[command(flatten)]
        args: ResolveArgs,
    },

    /// Print the resolved configuration as JSON
    #[command(visible_alias = "s")]
    Show {
        #[command(flatten)]
        args: ResolveArgs,

        /// Pretty-print JSON output
        #[arg(short, long)]
        pretty: bool,
    },

    /// Write a starter configuration file
    #[command(visible_alias = "i")]
    Init {
        /// Site directory (relative to current directory)
        #[arg(value_hint = clap::ValueHint::DirPath)]
        name: Option<PathBuf>,

        /// Print the template instead of writing it
        #[arg(long)]
        dry: bool,
    },
}

/// Shared arguments for commands that resolve the config
#[derive(clap::Args, Debug, Clone)]
pub struct ResolveArgs {
    /// Override `site` for this run.
    ///
    /// Useful for CI/CD deployments where the production URL differs from
    /// the committed one:
    ///   siteconf check --site-url "https://example.github.io/project"
    #[arg(short = 'U', long = "site-url", value_hint = clap::ValueHint::Url)]
    pub site_url: Option<String>,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long)]
    pub verbose: bool,
}
