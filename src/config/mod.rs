//! Site configuration for `site.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── resolve    # RawFields -> SiteConfiguration
//! ├── site       # SiteUrl normalization
//! ├── types/     # Errors, diagnostics, field paths
//! ├── util       # Config file lookup
//! └── mod.rs     # File loading (this file)
//! ```
//!
//! # File layout
//!
//! ```toml
//! site = "https://jimmyli.us"
//! integrations = ["sitemap"]
//!
//! [vite]
//! plugins = ["tailwindcss"]
//! ```

mod resolve;
mod site;
pub mod types;
mod util;

pub use resolve::{ConfigResolver, RawFields, RawHandle, SiteConfiguration, resolve};
pub use site::SiteUrl;
pub use types::{
    ConfigDiagnostic, ConfigError, ConfigurationError, ErrorKind, FieldPath, HandleProblem,
    SiteUrlProblem,
};
pub use util::{expand_config_path, find_config_file};

use crate::{debug, log};
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Default config filename
pub const CONFIG_FILE: &str = "site.toml";

// ============================================================================
// file layout
// ============================================================================

/// `site.toml` as written. Values stay loosely typed so that the resolver,
/// not the TOML deserializer, reports what is wrong with them.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigFile {
    site: Option<toml::Value>,
    vite: ViteSection,
    integrations: Vec<toml::Value>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ViteSection {
    plugins: Vec<toml::Value>,
}

impl From<ConfigFile> for RawFields {
    fn from(file: ConfigFile) -> Self {
        Self {
            site: file.site,
            build_plugins: file.vite.plugins.into_iter().map(RawHandle::Value).collect(),
            integrations: file.integrations.into_iter().map(RawHandle::Value).collect(),
        }
    }
}

impl ConfigFile {
    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), toml::de::Error> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let file = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((file, ignored))
    }
}

// ============================================================================
// loading
// ============================================================================

/// Locate the config file, searching upward from the current directory.
pub fn locate(config: &Path) -> Result<PathBuf, ConfigError> {
    let config = expand_config_path(config);
    let cwd = std::env::current_dir().map_err(|err| ConfigError::Io(PathBuf::from("."), err))?;
    find_config_file(&config, &cwd).ok_or(ConfigError::NotFound(config))
}

/// Parse config file content into raw fields.
///
/// Unknown keys are reported as warnings; `path` is only used for display.
pub fn parse_raw(content: &str, path: &Path) -> Result<RawFields, ConfigError> {
    let (file, ignored) = ConfigFile::parse_with_ignored(content)?;
    if !ignored.is_empty() {
        print_unknown_fields_warning(&ignored, path);
    }
    Ok(file.into())
}

/// Read a config file into raw fields.
pub fn read_raw(path: &Path) -> Result<RawFields, ConfigError> {
    let content =
        fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
    parse_raw(&content, path)
}

/// Read and resolve a config file.
///
/// `site_override` replaces the file's `site` before resolution, as
/// `--site-url` does.
pub fn load(
    path: &Path,
    site_override: Option<&str>,
    resolver: &ConfigResolver,
) -> Result<SiteConfiguration, ConfigError> {
    let mut raw = read_raw(path)?;
    if let Some(url) = site_override {
        debug!("config"; "site overridden from command line: {}", url);
        raw.override_site(url);
    }
    Ok(resolver.resolve(&raw)?)
}

fn print_unknown_fields_warning(fields: &[String], path: &Path) {
    let display_path = path
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_else(|| path.to_string_lossy());
    log!("warning"; "unknown fields in {}, ignoring:", display_path);
    for field in fields {
        eprintln!("- {}", field);
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse and resolve a config snippet with the built-in registry.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_resolve(content: &str) -> Result<SiteConfiguration, ConfigurationError> {
    let (file, ignored) = ConfigFile::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    ConfigResolver::default().resolve(&file.into())
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_toml() {
        let result = ConfigFile::parse_with_ignored("[vite\nplugins = []");
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_file_has_no_site() {
        let raw = parse_raw("", Path::new("site.toml")).unwrap();
        assert!(raw.site.is_none());
        assert!(raw.build_plugins.is_empty());
        assert!(raw.integrations.is_empty());
        let err = ConfigResolver::default().resolve(&raw).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidSiteUrl);
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content = r#"
site = "https://example.com"
output = "dist"

[vite]
plugins = []
server = { port = 3000 }
"#;
        let (file, ignored) = ConfigFile::parse_with_ignored(content).unwrap();
        assert!(file.site.is_some());
        assert!(ignored.iter().any(|f| f == "output"), "{ignored:?}");
        assert!(ignored.iter().any(|f| f.contains("server")), "{ignored:?}");
    }

    #[test]
    fn test_no_unknown_fields() {
        let content = "site = \"https://example.com\"\nintegrations = [\"sitemap\"]\n[vite]\nplugins = [\"tailwindcss\"]";
        let (_, ignored) = ConfigFile::parse_with_ignored(content).unwrap();
        assert!(ignored.is_empty());
    }

    #[test]
    fn test_array_of_tables() {
        let config = test_resolve(
            r#"
site = "https://example.com"

[[integrations]]
name = "robots"
hooks = ["build:done"]

[integrations.options]
policy = "allow"

[[integrations]]
name = "search"
"#,
        )
        .unwrap();
        assert_eq!(config.integrations().len(), 2);
        assert_eq!(config.integrations()[0].name(), "robots");
        assert!(config.integrations()[0].options().is_some());
        assert_eq!(config.integrations()[1].name(), "search");
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(
            &path,
            "site = \"https://jimmyli.us\"\nintegrations = [\"sitemap\"]\n[vite]\nplugins = [\"tailwindcss\"]\n",
        )
        .unwrap();

        let config = load(&path, None, &ConfigResolver::default()).unwrap();
        assert_eq!(config.site().as_str(), "https://jimmyli.us");
        assert_eq!(config.build_plugins().len(), 1);
        assert_eq!(config.integrations().len(), 1);
    }

    #[test]
    fn test_load_errors() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.toml");
        assert!(matches!(
            load(&missing, None, &ConfigResolver::default()),
            Err(ConfigError::Io(..))
        ));

        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "site = \"/blog\"").unwrap();
        match load(&path, None, &ConfigResolver::default()) {
            Err(ConfigError::Resolve(err)) => assert_eq!(err.kind(), ErrorKind::InvalidSiteUrl),
            other => panic!("expected resolve error, got {other:?}"),
        }

        let config = load(&path, Some("https://example.com/blog"), &ConfigResolver::default())
            .unwrap();
        assert_eq!(config.base(), "blog");
    }
}
