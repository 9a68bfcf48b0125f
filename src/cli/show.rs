//! `show` command.

use super::{Cli, ResolveArgs, common::resolve_from_cli};
use crate::config::SiteConfiguration;
use anyhow::Result;

pub fn show_config(cli: &Cli, args: &ResolveArgs, pretty: bool) -> Result<()> {
    let (_, config) = resolve_from_cli(cli, args)?;
    println!("{}", to_json(&config, pretty)?);
    Ok(())
}

fn to_json(config: &SiteConfiguration, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(config)
    } else {
        serde_json::to_string(config)
    }
}
