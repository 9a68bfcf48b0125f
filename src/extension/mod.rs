//! Extension capability contract.
//!
//! Build plugins and integrations are opaque to the resolver beyond a small
//! shape: a non-empty name and the lifecycle hooks they subscribe to.
//!
//! | Module     | Purpose                                        |
//! |------------|------------------------------------------------|
//! | `hook`     | Lifecycle hooks and where they may be used     |
//! | `handle`   | Factories and instances passed in from code    |
//! | `declared` | Instances declared as tables in the config     |
//! | `registry` | Named factories for string entries             |
//! | `builtin`  | `tailwindcss` and `sitemap`                    |

pub mod builtin;
mod declared;
mod handle;
mod hook;
mod registry;

pub use declared::DeclaredExtension;
pub use handle::{ExtensionFactory, ExtensionHandle};
pub use hook::Hook;
pub use registry::ExtensionRegistry;

use serde::Serialize;
use std::fmt;

/// A build plugin or integration instance.
pub trait Extension: fmt::Debug + Send + Sync {
    fn name(&self) -> &str;

    /// Hooks this extension subscribes to, in no particular order.
    fn hooks(&self) -> &[Hook] {
        &[]
    }

    /// Extension-specific options, forwarded to the host untouched.
    fn options(&self) -> Option<&toml::Table> {
        None
    }
}

/// Which ordered list an extension lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExtensionList {
    /// `vite.plugins`
    BuildPlugins,
    /// `integrations`
    Integrations,
}

impl ExtensionList {
    pub const ALL: [Self; 2] = [Self::BuildPlugins, Self::Integrations];

    /// Config key of the list.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BuildPlugins => "vite.plugins",
            Self::Integrations => "integrations",
        }
    }

    pub const fn noun(self) -> &'static str {
        match self {
            Self::BuildPlugins => "build plugin",
            Self::Integrations => "integration",
        }
    }
}

impl fmt::Display for ExtensionList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Serializable view of an extension instance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtensionSummary<'a> {
    pub name: &'a str,
    pub hooks: &'a [Hook],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<&'a toml::Table>,
}

impl<'a> ExtensionSummary<'a> {
    pub fn of(extension: &'a dyn Extension) -> Self {
        Self {
            name: extension.name(),
            hooks: extension.hooks(),
            options: extension.options(),
        }
    }
}
