//! Config loading shared by `check` and `show`.

use super::{Cli, ResolveArgs};
use crate::config::{self, ConfigError, ConfigResolver, SiteConfiguration};
use crate::{debug, logger};
use std::path::PathBuf;

/// Locate, read and resolve the config named on the command line.
///
/// Resolution failures come back as [`ConfigError::Resolve`]; `main` turns
/// them into a diagnostic and exit status 1.
pub fn resolve_from_cli(
    cli: &Cli,
    args: &ResolveArgs,
) -> Result<(PathBuf, SiteConfiguration), ConfigError> {
    logger::set_verbose(args.verbose);

    let path = config::locate(&cli.config)?;
    debug!("config"; "using {}", path.display());

    let resolved = config::load(&path, args.site_url.as_deref(), &ConfigResolver::default())?;
    Ok((path, resolved))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Commands;
    use crate::config::{CONFIG_FILE, ErrorKind};
    use clap::Parser;
    use std::fs;

    fn cli_for(path: &std::path::Path, extra: &[&str]) -> (Cli, ResolveArgs) {
        let mut argv = vec!["siteconf", "-C", path.to_str().unwrap(), "check"];
        argv.extend_from_slice(extra);
        let cli = Cli::try_parse_from(argv).unwrap();
        let args = match &cli.command {
            Commands::Check { args } => args.clone(),
            _ => unreachable!(),
        };
        (cli, args)
    }

    #[test]
    fn test_bad_extension_reports_field() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(
            &path,
            "site = \"https://jimmyli.us\"\nintegrations = [\"sitemap\", 7]\n",
        )
        .unwrap();

        let (cli, args) = cli_for(&path, &[]);
        match resolve_from_cli(&cli, &args) {
            Err(ConfigError::Resolve(err)) => {
                assert_eq!(err.kind(), ErrorKind::InvalidExtensionHandle);
                assert_eq!(err.field().as_str(), "integrations[1]");
            }
            other => panic!("expected resolve error, got {other:?}"),
        }
    }

    #[test]
    fn test_site_url_flag_overrides_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "site = \"/relative\"\n").unwrap();

        let (cli, args) = cli_for(&path, &[]);
        let err = resolve_from_cli(&cli, &args).unwrap_err();
        assert!(matches!(err, ConfigError::Resolve(ref e) if e.field().as_str() == "site"));

        let (cli, args) = cli_for(&path, &["--site-url", "https://example.github.io/project/"]);
        let (found, config) = resolve_from_cli(&cli, &args).unwrap();
        assert_eq!(found, path);
        assert_eq!(config.site().as_str(), "https://example.github.io/project");
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let (cli, args) = cli_for(&dir.path().join("absent.toml"), &[]);
        assert!(matches!(
            resolve_from_cli(&cli, &args),
            Err(ConfigError::NotFound(_))
        ));
    }
}
