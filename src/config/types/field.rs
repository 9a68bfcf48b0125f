//! Config field paths used in diagnostics.

use owo_colors::{OwoColorize, Stream};
use std::borrow::Cow;
use std::fmt;

/// Dotted path of a config field, optionally indexed into a list.
///
/// ```ignore
/// FieldPath::SITE                               // `site`
/// FieldPath::indexed("vite.plugins", 0)         // `vite.plugins[0]`
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPath(Cow<'static, str>);

impl FieldPath {
    pub const SITE: Self = Self::new("site");

    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(Cow::Borrowed(path))
    }

    /// Path of one entry in an ordered list field.
    pub fn indexed(list: &str, index: usize) -> Self {
        Self(Cow::Owned(format!("{list}[{index}]")))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let quoted = format!("`{}`", self.0);
        write!(
            f,
            "{}",
            quoted.if_supports_color(Stream::Stderr, |t| t.bright_blue())
        )
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indexed_path() {
        assert_eq!(FieldPath::indexed("integrations", 2).as_str(), "integrations[2]");
        assert_eq!(FieldPath::SITE.as_str(), "site");
    }

    #[test]
    fn test_display_plain_when_color_disabled() {
        owo_colors::set_override(false);
        assert_eq!(FieldPath::indexed("vite.plugins", 0).to_string(), "`vite.plugins[0]`");
    }
}
