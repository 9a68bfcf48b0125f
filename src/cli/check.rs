//! `check` command.

use super::{Cli, ResolveArgs, common::resolve_from_cli};
use crate::config::SiteConfiguration;
use crate::log;
use anyhow::Result;

pub fn check_config(cli: &Cli, args: &ResolveArgs) -> Result<()> {
    let (path, config) = resolve_from_cli(cli, args)?;
    let file = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    log!("check"; "{}: {}", file, summary(&config));
    Ok(())
}

/// One-line summary: `https://x.dev (1 build plugin, 2 integrations)`
fn summary(config: &SiteConfiguration) -> String {
    format!(
        "{} ({}, {})",
        config.site(),
        plural_count(config.build_plugins().len(), "build plugin"),
        plural_count(config.integrations().len(), "integration")
    )
}

fn plural_count(count: usize, noun: &str) -> String {
    format!("{} {}{}", count, noun, if count == 1 { "" } else { "s" })
}
