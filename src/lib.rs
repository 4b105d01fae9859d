//! brutal-ssg: SEO-first static pages for a JSON-sourced blog
//!
//! Reads `assets/data/posts.json` under a project root and writes one static
//! page per post, skeleton pages per category, `sitemap.xml` and
//! `robots.txt`. Shared header/footer and listings are filled in at view
//! time by the site's scripts; generated pages only declare mount points.

pub mod commands;
pub mod config;
pub mod content;
pub mod generator;
pub mod helpers;
pub mod render;
pub mod schema;

use anyhow::Result;
use std::path::Path;

/// A site project rooted at a directory
#[derive(Debug, Clone)]
pub struct Project {
    /// Run configuration
    pub config: config::BuildConfig,
}

impl Project {
    /// Open a project at `root`, reading `_config.yml` when present
    pub fn new<P: AsRef<Path>>(root: P, site_url: &str) -> Result<Self> {
        let root = root.as_ref();
        let settings = config::SiteSettings::load_or_default(root)?;
        Ok(Self {
            config: config::BuildConfig::new(site_url, root, settings),
        })
    }

    /// Generate every output
    pub fn generate(&self) -> Result<generator::GenerateReport> {
        commands::generate::run(self)
    }
}
