//! `init` command: write a starter `site.toml`.

use crate::config::CONFIG_FILE;
use crate::log;
use anyhow::{Context, Result, bail};
use std::{fs, path::Path};

/// Generate `site.toml` content with comments
pub fn generate_config_template() -> String {
    format!(
        r#"# siteconf configuration file (v{version})

# Canonical origin, used for absolute links and sitemap entries.
# A path component (https://user.github.io/project) becomes the base path.
site = "https://example.com"

# Site-generation integrations, run in order.
# A string names a built-in factory; a table declares an instance:
#   {{ name = "robots", hooks = ["build:done"], options = {{ policy = "allow" }} }}
integrations = ["sitemap"]

[vite]
# Build plugins, applied in order.
plugins = ["tailwindcss"]
"#,
        version = env!("CARGO_PKG_VERSION")
    )
}

/// Create `site.toml` in `name` (or the current directory).
///
/// An existing config file is never overwritten.
pub fn new_site(name: Option<&Path>, dry_run: bool) -> Result<()> {
    if dry_run {
        print!("{}", generate_config_template());
        return Ok(());
    }

    let cwd = std::env::current_dir().context("Failed to get current working directory")?;
    let root = match name {
        Some(name) => cwd.join(name),
        None => cwd,
    };
    let path = write_config(&root)?;

    log!("init"; "wrote {}", path.display());
    Ok(())
}

fn write_config(root: &Path) -> Result<std::path::PathBuf> {
    let path = root.join(CONFIG_FILE);
    if path.exists() {
        bail!("'{}' already exists", path.display());
    }

    fs::create_dir_all(root)
        .with_context(|| format!("Failed to create directory '{}'", root.display()))?;
    fs::write(&path, generate_config_template())
        .with_context(|| format!("Failed to write config file '{}'", path.display()))?;
    Ok(path)
}
