//! Configuration file lookup.

use std::path::{Path, PathBuf};

/// Expand a leading `~` in a user-supplied config path.
pub fn expand_config_path(path: &Path) -> PathBuf {
    match path.to_str() {
        Some(s) => PathBuf::from(shellexpand::tilde(s).into_owned()),
        None => path.to_path_buf(),
    }
}

/// Find config file by searching upward from `start`
///
/// Returns the path to the first `config_name` found, or `None` once the
/// filesystem root is reached.
///
/// # Example
/// ```text
/// /home/user/site/src/pages/  ← start
/// /home/user/site/site.toml   ← found!
/// ```
pub fn find_config_file(config_name: &Path, start: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    start
        .ancestors()
        .map(|dir| dir.join(config_name))
        .find(|candidate| candidate.is_file())
}
