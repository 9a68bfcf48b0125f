//! Built-in extension factories.
//!
//! - `tailwindcss`: Tailwind CSS build plugin
//! - `sitemap`: sitemap integration

mod sitemap;
mod tailwind;

pub use sitemap::SitemapIntegration;
pub use tailwind::TailwindPlugin;
