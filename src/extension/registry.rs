//! Named factories referenced by string entries in the config file.

use super::builtin::{SitemapIntegration, TailwindPlugin};
use super::{ExtensionFactory, ExtensionList};
use rustc_hash::FxHashMap;

/// Factories available to string entries, one namespace per list.
#[derive(Debug, Clone, Default)]
pub struct ExtensionRegistry {
    plugins: FxHashMap<String, ExtensionFactory>,
    integrations: FxHashMap<String, ExtensionFactory>,
}

impl ExtensionRegistry {
    /// Registry with the built-in `tailwindcss` plugin and `sitemap` integration.
    pub fn builtin() -> Self {
        let mut registry = Self::default();
        registry.register(
            ExtensionList::BuildPlugins,
            "tailwindcss",
            ExtensionFactory::new(|| TailwindPlugin),
        );
        registry.register(
            ExtensionList::Integrations,
            "sitemap",
            ExtensionFactory::new(SitemapIntegration::default),
        );
        registry
    }

    /// Register a factory, returning the one it replaced.
    pub fn register(
        &mut self,
        list: ExtensionList,
        name: impl Into<String>,
        factory: ExtensionFactory,
    ) -> Option<ExtensionFactory> {
        self.map_mut(list).insert(name.into(), factory)
    }

    pub fn get(&self, list: ExtensionList, name: &str) -> Option<&ExtensionFactory> {
        self.map(list).get(name)
    }

    /// Sorted factory names for `list`.
    pub fn names(&self, list: ExtensionList) -> Vec<String> {
        let mut names: Vec<_> = self.map(list).keys().cloned().collect();
        names.sort_unstable();
        names
    }

    /// The list a name is registered under, if any.
    pub fn list_of(&self, name: &str) -> Option<ExtensionList> {
        ExtensionList::ALL
            .into_iter()
            .find(|list| self.map(*list).contains_key(name))
    }

    fn map(&self, list: ExtensionList) -> &FxHashMap<String, ExtensionFactory> {
        match list {
            ExtensionList::BuildPlugins => &self.plugins,
            ExtensionList::Integrations => &self.integrations,
        }
    }

    fn map_mut(&mut self, list: ExtensionList) -> &mut FxHashMap<String, ExtensionFactory> {
        match list {
            ExtensionList::BuildPlugins => &mut self.plugins,
            ExtensionList::Integrations => &mut self.integrations,
        }
    }
}
