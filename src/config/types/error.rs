//! Configuration error types.

use super::FieldPath;
use crate::extension::{ExtensionList, Hook};
use owo_colors::{OwoColorize, Stream, Style};
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// ConfigError
// ============================================================================

/// Errors raised while loading a config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("config file `{0}` not found, run `siteconf init` to create one")]
    NotFound(PathBuf),

    #[error("Config file parsing error")]
    Toml(#[from] toml::de::Error),

    #[error(transparent)]
    Resolve(#[from] ConfigurationError),
}

// ============================================================================
// ConfigurationError
// ============================================================================

/// Coarse classification of a [`ConfigurationError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidSiteUrl,
    InvalidExtensionHandle,
}

/// A raw field that could not be resolved.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("invalid site URL: {problem}")]
    InvalidSiteUrl {
        /// Offending value as written, `None` when the field is missing.
        value: Option<String>,
        problem: SiteUrlProblem,
    },

    #[error("invalid {noun} at `{list}[{index}]`: {problem}", noun = .list.noun())]
    InvalidExtensionHandle {
        list: ExtensionList,
        index: usize,
        problem: HandleProblem,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SiteUrlProblem {
    #[error("field is missing")]
    Missing,
    #[error("expected a string, found {0}")]
    NotAString(&'static str),
    #[error("value is empty")]
    Empty,
    #[error("not an absolute URL")]
    Relative,
    #[error("{0}")]
    Malformed(url::ParseError),
    #[error("URL has no host")]
    NoHost,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HandleProblem {
    #[error("expected a factory name or a table with `name`, found {0}")]
    NotAHandle(&'static str),
    #[error("table has no `name`")]
    MissingName,
    #[error("`name` must be a string, found {0}")]
    NameNotAString(&'static str),
    #[error("`name` is empty")]
    EmptyName,
    #[error("unknown key `{0}`")]
    UnknownKey(String),
    #[error("no factory named `{name}`")]
    UnknownFactory { name: String, known: Vec<String> },
    #[error("`{name}` is registered as {article} {noun}", article = article(.registered.noun()), noun = .registered.noun())]
    WrongList {
        name: String,
        registered: ExtensionList,
    },
    #[error("`hooks` must be an array of strings")]
    MalformedHooks,
    #[error("unknown hook `{0}`")]
    UnknownHook(String),
    #[error("hook `{0}` is only available to {scope}", scope = .0.scope())]
    HookNotAllowed(Hook),
    #[error("`options` must be a table")]
    MalformedOptions,
}

fn article(noun: &str) -> &'static str {
    if noun.starts_with(['a', 'e', 'i', 'o', 'u']) {
        "an"
    } else {
        "a"
    }
}

impl ConfigurationError {
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidSiteUrl { .. } => ErrorKind::InvalidSiteUrl,
            Self::InvalidExtensionHandle { .. } => ErrorKind::InvalidExtensionHandle,
        }
    }

    /// Path of the field that failed.
    pub fn field(&self) -> FieldPath {
        match self {
            Self::InvalidSiteUrl { .. } => FieldPath::SITE,
            Self::InvalidExtensionHandle { list, index, .. } => {
                FieldPath::indexed(list.as_str(), *index)
            }
        }
    }

    pub fn hint(&self) -> Option<String> {
        match self {
            Self::InvalidSiteUrl { problem, value } => match problem {
                SiteUrlProblem::Missing | SiteUrlProblem::Empty => {
                    Some("set `site = \"https://example.com\"`".into())
                }
                SiteUrlProblem::NotAString(_) => Some("quote the URL".into()),
                SiteUrlProblem::Relative => Some(format!(
                    "use a full origin such as `https://example.com{}`",
                    value
                        .as_deref()
                        .filter(|v| v.starts_with('/'))
                        .unwrap_or_default()
                )),
                SiteUrlProblem::NoHost => Some("include the scheme, e.g. `https://`".into()),
                SiteUrlProblem::Malformed(_) => None,
            },
            Self::InvalidExtensionHandle { list, problem, .. } => match problem {
                HandleProblem::MissingName => Some("add `name = \"...\"` to the table".into()),
                HandleProblem::UnknownFactory { known, .. } if known.is_empty() => Some(format!(
                    "no {} factories are registered",
                    list.noun()
                )),
                HandleProblem::UnknownFactory { known, .. } => {
                    Some(format!("available: {}", known.join(", ")))
                }
                HandleProblem::WrongList { registered, .. } => {
                    Some(format!("move it to `{}`", registered.as_str()))
                }
                HandleProblem::UnknownHook(_) => Some(format!(
                    "known hooks: {}",
                    Hook::ALL.map(Hook::as_str).join(", ")
                )),
                HandleProblem::UnknownKey(_) => {
                    Some("allowed keys are `name`, `hooks` and `options`".into())
                }
                _ => None,
            },
        }
    }

    /// Render as a user-facing diagnostic.
    pub fn diagnostic(&self) -> ConfigDiagnostic {
        let message = match self {
            Self::InvalidSiteUrl { problem, .. } => format!("invalid site URL: {problem}"),
            Self::InvalidExtensionHandle { list, problem, .. } => {
                format!("invalid {}: {problem}", list.noun())
            }
        };
        let diag = ConfigDiagnostic::new(self.field(), message);
        match self.hint() {
            Some(hint) => diag.with_hint(hint),
            None => diag,
        }
    }
}

// ============================================================================
// ConfigDiagnostic
// ============================================================================

/// A single configuration diagnostic
#[derive(Debug, Clone)]
pub struct ConfigDiagnostic {
    pub field: FieldPath,
    pub message: String,
    pub hint: Option<String>,
}

impl ConfigDiagnostic {
    pub fn new(field: FieldPath, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
            hint: None,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl fmt::Display for ConfigDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let title = "config validation failed:";
        writeln!(
            f,
            "{}\n",
            title.if_supports_color(Stream::Stderr, |t| t.style(Style::new().red().bold()))
        )?;
        writeln!(
            f,
            "{}{}{}",
            "[".if_supports_color(Stream::Stderr, |t| t.dimmed()),
            self.field.as_str().if_supports_color(Stream::Stderr, |t| t.cyan()),
            "]".if_supports_color(Stream::Stderr, |t| t.dimmed())
        )?;
        write!(
            f,
            "{} {}",
            "→".if_supports_color(Stream::Stderr, |t| t.red()),
            self.message
        )?;
        if let Some(hint) = &self.hint {
            write!(
                f,
                "\n  {} {}",
                "hint:".if_supports_color(Stream::Stderr, |t| t.yellow()),
                hint
            )?;
        }
        Ok(())
    }
}
