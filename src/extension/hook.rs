//! Lifecycle hooks an extension can subscribe to.

use super::ExtensionList;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Hook {
    #[serde(rename = "config:setup")]
    ConfigSetup,
    #[serde(rename = "config:done")]
    ConfigDone,
    #[serde(rename = "build:start")]
    BuildStart,
    #[serde(rename = "transform")]
    Transform,
    #[serde(rename = "build:done")]
    BuildDone,
    #[serde(rename = "server:setup")]
    ServerSetup,
}

impl Hook {
    pub const ALL: [Self; 6] = [
        Self::ConfigSetup,
        Self::ConfigDone,
        Self::BuildStart,
        Self::Transform,
        Self::BuildDone,
        Self::ServerSetup,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ConfigSetup => "config:setup",
            Self::ConfigDone => "config:done",
            Self::BuildStart => "build:start",
            Self::Transform => "transform",
            Self::BuildDone => "build:done",
            Self::ServerSetup => "server:setup",
        }
    }

    /// Whether an extension in `list` may subscribe to this hook.
    ///
    /// `transform` runs inside the asset pipeline, `config:*` and
    /// `server:setup` inside site generation. Build start/end fire for both.
    pub const fn allowed_in(self, list: ExtensionList) -> bool {
        match self {
            Self::Transform => matches!(list, ExtensionList::BuildPlugins),
            Self::ConfigSetup | Self::ConfigDone | Self::ServerSetup => {
                matches!(list, ExtensionList::Integrations)
            }
            Self::BuildStart | Self::BuildDone => true,
        }
    }

    /// Human readable scope, used in diagnostics.
    pub const fn scope(self) -> &'static str {
        match self {
            Self::Transform => "build plugins",
            Self::ConfigSetup | Self::ConfigDone | Self::ServerSetup => "integrations",
            Self::BuildStart | Self::BuildDone => "all extensions",
        }
    }
}

impl fmt::Display for Hook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Hook {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|hook| hook.as_str() == s)
            .ok_or(())
    }
}
