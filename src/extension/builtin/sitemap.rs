//! Sitemap integration handle.
//!
//! Writing the sitemap belongs to the generation pipeline. What the
//! integration needs from the resolved config is the site origin, which every
//! `<loc>` entry is built from.

use crate::config::SiteConfiguration;
use crate::extension::{Extension, Hook};
use url::Url;

const HOOKS: &[Hook] = &[Hook::ConfigDone, Hook::BuildDone];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SitemapIntegration {
    filename: String,
}

impl Default for SitemapIntegration {
    fn default() -> Self {
        Self {
            filename: "sitemap-index.xml".into(),
        }
    }
}

impl SitemapIntegration {
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Absolute `<loc>` for a site-relative route.
    pub fn entry_url(
        &self,
        config: &SiteConfiguration,
        route: &str,
    ) -> Result<Url, url::ParseError> {
        config.absolute_url(route)
    }

    /// Public URL of the sitemap file itself.
    pub fn location(&self, config: &SiteConfiguration) -> Result<Url, url::ParseError> {
        config.absolute_url(&self.filename)
    }
}

impl Extension for SitemapIntegration {
    fn name(&self) -> &str {
        "sitemap"
    }

    fn hooks(&self) -> &[Hook] {
        HOOKS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_resolve;

    #[test]
    fn test_entries_keep_base_path() {
        let config = test_resolve(r#"site = "https://example.github.io/project/""#).unwrap();
        let sitemap = SitemapIntegration::default();
        assert_eq!(
            sitemap.entry_url(&config, "/posts/hello/").unwrap().as_str(),
            "https://example.github.io/project/posts/hello/"
        );
        assert_eq!(
            sitemap.location(&config).unwrap().as_str(),
            "https://example.github.io/project/sitemap-index.xml"
        );
    }

    #[test]
    fn test_root_entry() {
        let config = test_resolve(r#"site = "https://jimmyli.us""#).unwrap();
        let sitemap = SitemapIntegration::default();
        assert_eq!(
            sitemap.entry_url(&config, "/").unwrap().as_str(),
            "https://jimmyli.us/"
        );
    }
}
