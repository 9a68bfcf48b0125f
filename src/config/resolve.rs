//! Raw fields to validated [`SiteConfiguration`].
//!
//! Resolution is pure apart from invoking extension factories, and stops at
//! the first malformed field:
//!
//! ```text
//! site ─────────► SiteUrl::parse
//! vite.plugins ─► entry shape ─► capability check ─► Arc<dyn Extension>
//! integrations ─► entry shape ─► capability check ─► Arc<dyn Extension>
//! ```

use super::{ConfigurationError, HandleProblem, SiteUrl, SiteUrlProblem};
use crate::extension::{
    DeclaredExtension, Extension, ExtensionFactory, ExtensionHandle, ExtensionList,
    ExtensionRegistry, ExtensionSummary,
};
use crate::{debug, log};
use rustc_hash::FxHashSet;
use serde::ser::{Serialize, SerializeStruct, Serializer};
use std::sync::Arc;
use url::Url;

// ============================================================================
// raw input
// ============================================================================

/// One unvalidated entry of `vite.plugins` or `integrations`.
#[derive(Debug, Clone)]
pub enum RawHandle {
    /// As written in the config file: a factory name or an instance table.
    Value(toml::Value),
    /// Handed over by code.
    Handle(ExtensionHandle),
}

impl From<toml::Value> for RawHandle {
    fn from(value: toml::Value) -> Self {
        Self::Value(value)
    }
}

impl From<&str> for RawHandle {
    fn from(name: &str) -> Self {
        Self::Value(toml::Value::String(name.into()))
    }
}

impl From<ExtensionHandle> for RawHandle {
    fn from(handle: ExtensionHandle) -> Self {
        Self::Handle(handle)
    }
}

/// Unvalidated configuration fields.
#[derive(Debug, Clone, Default)]
pub struct RawFields {
    pub site: Option<toml::Value>,
    pub build_plugins: Vec<RawHandle>,
    pub integrations: Vec<RawHandle>,
}

impl RawFields {
    pub fn new(site: impl Into<String>) -> Self {
        Self {
            site: Some(toml::Value::String(site.into())),
            ..Self::default()
        }
    }

    pub fn with_plugin(mut self, handle: impl Into<RawHandle>) -> Self {
        self.build_plugins.push(handle.into());
        self
    }

    pub fn with_integration(mut self, handle: impl Into<RawHandle>) -> Self {
        self.integrations.push(handle.into());
        self
    }

    /// Replace `site`, e.g. from `--site-url`.
    pub fn override_site(&mut self, site: impl Into<String>) {
        self.site = Some(toml::Value::String(site.into()));
    }
}

// ============================================================================
// resolved configuration
// ============================================================================

/// Validated, immutable site configuration.
#[derive(Debug, Clone)]
pub struct SiteConfiguration {
    site: SiteUrl,
    build_plugins: Vec<Arc<dyn Extension>>,
    integrations: Vec<Arc<dyn Extension>>,
}

impl SiteConfiguration {
    pub fn site(&self) -> &SiteUrl {
        &self.site
    }

    /// Path prefix for subdirectory deployments, derived from `site`.
    pub fn base(&self) -> &str {
        self.site.base_path()
    }

    /// Build plugins in application order.
    pub fn build_plugins(&self) -> &[Arc<dyn Extension>] {
        &self.build_plugins
    }

    /// Integrations in execution order.
    pub fn integrations(&self) -> &[Arc<dyn Extension>] {
        &self.integrations
    }

    /// Absolute URL for a site-relative path.
    pub fn absolute_url(&self, path: &str) -> Result<Url, url::ParseError> {
        self.site.join(path)
    }

    fn summaries(list: &[Arc<dyn Extension>]) -> Vec<ExtensionSummary<'_>> {
        list.iter().map(|ext| ExtensionSummary::of(ext.as_ref())).collect()
    }
}

/// Field-for-field: same site, and the same extension names, hooks and
/// options in the same order.
impl PartialEq for SiteConfiguration {
    fn eq(&self, other: &Self) -> bool {
        self.site == other.site
            && Self::summaries(&self.build_plugins) == Self::summaries(&other.build_plugins)
            && Self::summaries(&self.integrations) == Self::summaries(&other.integrations)
    }
}

impl Serialize for SiteConfiguration {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("SiteConfiguration", 4)?;
        state.serialize_field("site", &self.site)?;
        state.serialize_field("base", self.base())?;
        state.serialize_field("buildPlugins", &Self::summaries(&self.build_plugins))?;
        state.serialize_field("integrations", &Self::summaries(&self.integrations))?;
        state.end()
    }
}

// ============================================================================
// resolver
// ============================================================================

/// Validates raw fields against an extension registry.
#[derive(Debug, Clone)]
pub struct ConfigResolver {
    registry: ExtensionRegistry,
}

impl Default for ConfigResolver {
    /// Resolver backed by the built-in factories.
    fn default() -> Self {
        Self::new(ExtensionRegistry::builtin())
    }
}

impl ConfigResolver {
    pub const fn new(registry: ExtensionRegistry) -> Self {
        Self { registry }
    }

    pub const fn registry(&self) -> &ExtensionRegistry {
        &self.registry
    }

    /// Validate and normalize `raw`.
    ///
    /// Idempotent as long as the referenced factories are.
    pub fn resolve(&self, raw: &RawFields) -> Result<SiteConfiguration, ConfigurationError> {
        let site = Self::resolve_site(raw.site.as_ref())?;
        let build_plugins = self.resolve_list(ExtensionList::BuildPlugins, &raw.build_plugins)?;
        let integrations = self.resolve_list(ExtensionList::Integrations, &raw.integrations)?;

        debug!(
            "config";
            "resolved {} with {} build plugin(s), {} integration(s)",
            site,
            build_plugins.len(),
            integrations.len()
        );

        Ok(SiteConfiguration {
            site,
            build_plugins,
            integrations,
        })
    }

    fn resolve_site(value: Option<&toml::Value>) -> Result<SiteUrl, ConfigurationError> {
        let invalid = |value: Option<String>, problem| ConfigurationError::InvalidSiteUrl {
            value,
            problem,
        };

        match value {
            None => Err(invalid(None, SiteUrlProblem::Missing)),
            Some(toml::Value::String(s)) => {
                SiteUrl::parse(s).map_err(|problem| invalid(Some(s.clone()), problem))
            }
            Some(other) => Err(invalid(
                Some(other.to_string()),
                SiteUrlProblem::NotAString(other.type_str()),
            )),
        }
    }

    fn resolve_list(
        &self,
        list: ExtensionList,
        entries: &[RawHandle],
    ) -> Result<Vec<Arc<dyn Extension>>, ConfigurationError> {
        let resolved = entries
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                self.resolve_entry(list, entry).map_err(|problem| {
                    ConfigurationError::InvalidExtensionHandle {
                        list,
                        index,
                        problem,
                    }
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        warn_duplicates(list, &resolved);
        Ok(resolved)
    }

    fn resolve_entry(
        &self,
        list: ExtensionList,
        entry: &RawHandle,
    ) -> Result<Arc<dyn Extension>, HandleProblem> {
        let extension: Arc<dyn Extension> = match entry {
            RawHandle::Handle(handle) => handle.instantiate(),
            RawHandle::Value(toml::Value::String(name)) => self.lookup(list, name)?.invoke(),
            RawHandle::Value(toml::Value::Table(table)) => {
                Arc::new(DeclaredExtension::from_table(table)?)
            }
            RawHandle::Value(other) => return Err(HandleProblem::NotAHandle(other.type_str())),
        };

        check_capability(list, extension.as_ref())?;
        Ok(extension)
    }

    fn lookup(
        &self,
        list: ExtensionList,
        name: &str,
    ) -> Result<&ExtensionFactory, HandleProblem> {
        if let Some(factory) = self.registry.get(list, name) {
            return Ok(factory);
        }
        Err(match self.registry.list_of(name) {
            Some(registered) => HandleProblem::WrongList {
                name: name.to_string(),
                registered,
            },
            None => HandleProblem::UnknownFactory {
                name: name.to_string(),
                known: self.registry.names(list),
            },
        })
    }
}

/// Structural check every instance must pass, however it was produced.
fn check_capability(list: ExtensionList, extension: &dyn Extension) -> Result<(), HandleProblem> {
    if extension.name().trim().is_empty() {
        return Err(HandleProblem::EmptyName);
    }
    if let Some(hook) = extension.hooks().iter().find(|hook| !hook.allowed_in(list)) {
        return Err(HandleProblem::HookNotAllowed(*hook));
    }
    Ok(())
}

/// The host would run a repeated extension twice; allowed, but worth a warning.
fn warn_duplicates(list: ExtensionList, extensions: &[Arc<dyn Extension>]) {
    let mut seen = FxHashSet::default();
    for ext in extensions {
        if !seen.insert(ext.name()) {
            log!("warning"; "{} `{}` is listed more than once in `{}`", list.noun(), ext.name(), list);
        }
    }
}

/// Resolve with the built-in registry.
pub fn resolve(raw: &RawFields) -> Result<SiteConfiguration, ConfigurationError> {
    ConfigResolver::default().resolve(raw)
}

// ============================================================================
// tests
// ============================================================================
