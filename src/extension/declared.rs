//! Extensions declared inline in the config file.
//!
//! ```toml
//! [[integrations]]
//! name = "robots"
//! hooks = ["build:done"]
//! options = { policy = "allow" }
//! ```

use super::{Extension, Hook};
use crate::config::HandleProblem;

const KEYS: [&str; 3] = ["name", "hooks", "options"];

/// An extension instance described by a TOML table.
#[derive(Debug, Clone, PartialEq)]
pub struct DeclaredExtension {
    name: String,
    hooks: Vec<Hook>,
    options: Option<toml::Table>,
}

impl DeclaredExtension {
    pub fn new(name: impl Into<String>, hooks: Vec<Hook>) -> Self {
        Self {
            name: name.into(),
            hooks,
            options: None,
        }
    }

    /// Check the table shape and build the instance.
    ///
    /// Hook scope is not checked here; the resolver applies the same
    /// capability check to every instance regardless of where it came from.
    pub fn from_table(table: &toml::Table) -> Result<Self, HandleProblem> {
        if let Some(key) = table.keys().find(|key| !KEYS.contains(&key.as_str())) {
            return Err(HandleProblem::UnknownKey(key.clone()));
        }

        let name = match table.get("name") {
            None => return Err(HandleProblem::MissingName),
            Some(toml::Value::String(name)) => name.clone(),
            Some(other) => return Err(HandleProblem::NameNotAString(other.type_str())),
        };

        let hooks = match table.get("hooks") {
            None => Vec::new(),
            Some(toml::Value::Array(items)) => items
                .iter()
                .map(|item| match item {
                    toml::Value::String(s) => s
                        .parse::<Hook>()
                        .map_err(|()| HandleProblem::UnknownHook(s.clone())),
                    _ => Err(HandleProblem::MalformedHooks),
                })
                .collect::<Result<_, _>>()?,
            Some(_) => return Err(HandleProblem::MalformedHooks),
        };

        let options = match table.get("options") {
            None => None,
            Some(toml::Value::Table(options)) => Some(options.clone()),
            Some(_) => return Err(HandleProblem::MalformedOptions),
        };

        Ok(Self {
            name,
            hooks,
            options,
        })
    }
}

impl Extension for DeclaredExtension {
    fn name(&self) -> &str {
        &self.name
    }

    fn hooks(&self) -> &[Hook] {
        &self.hooks
    }

    fn options(&self) -> Option<&toml::Table> {
        self.options.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(content: &str) -> toml::Table {
        toml::from_str(content).unwrap()
    }

    #[test]
    fn test_full_table() {
        let ext = DeclaredExtension::from_table(&table(
            r#"
name = "robots"
hooks = ["config:done", "build:done"]
options = { policy = "allow" }
"#,
        ))
        .unwrap();
        assert_eq!(ext.name(), "robots");
        assert_eq!(ext.hooks(), &[Hook::ConfigDone, Hook::BuildDone]);
        assert_eq!(
            ext.options().and_then(|o| o.get("policy")).and_then(|v| v.as_str()),
            Some("allow")
        );
    }

    #[test]
    fn test_name_only() {
        let ext = DeclaredExtension::from_table(&table(r#"name = "plain""#)).unwrap();
        assert!(ext.hooks().is_empty());
        assert!(ext.options().is_none());
    }

    #[test]
    fn test_missing_name() {
        let err = DeclaredExtension::from_table(&table(r#"hooks = ["build:done"]"#)).unwrap_err();
        assert_eq!(err, HandleProblem::MissingName);
    }

    #[test]
    fn test_name_wrong_type() {
        let err = DeclaredExtension::from_table(&table("name = 3")).unwrap_err();
        assert_eq!(err, HandleProblem::NameNotAString("integer"));
    }

    #[test]
    fn test_unknown_hook() {
        let err = DeclaredExtension::from_table(&table(
            r#"name = "x"
hooks = ["build:finish"]"#,
        ))
        .unwrap_err();
        assert_eq!(err, HandleProblem::UnknownHook("build:finish".into()));
    }

    #[test]
    fn test_malformed_fields() {
        let err = DeclaredExtension::from_table(&table(
            r#"name = "x"
hooks = "build:done""#,
        ))
        .unwrap_err();
        assert_eq!(err, HandleProblem::MalformedHooks);

        let err = DeclaredExtension::from_table(&table(
            r#"name = "x"
options = 1"#,
        ))
        .unwrap_err();
        assert_eq!(err, HandleProblem::MalformedOptions);
    }

    #[test]
    fn test_unknown_key() {
        let err = DeclaredExtension::from_table(&table(
            r#"name = "x"
hook = ["build:done"]"#,
        ))
        .unwrap_err();
        assert_eq!(err, HandleProblem::UnknownKey("hook".into()));
    }
}
