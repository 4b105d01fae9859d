//! Content loader - reads the JSON content source into a sorted collection

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use super::{derive_categories, Category, ContentError, ContentSource, Post};
use crate::config::BuildConfig;

/// Everything one run renders, loaded once and never mutated
#[derive(Debug, Clone)]
pub struct Content {
    /// Display name used in titles and structured data
    pub site_name: String,
    /// Posts sorted by date, newest first
    pub posts: Vec<Post>,
    /// Explicit categories followed by post categories, de-duplicated
    pub categories: Vec<Category>,
}

impl Content {
    /// Build the collection from a parsed source
    pub fn from_source(source: ContentSource, default_site_name: &str) -> Self {
        // An explicit empty name is kept; only a missing one is defaulted
        let site_name = source
            .site
            .name
            .unwrap_or_else(|| default_site_name.to_string());

        let mut posts = source.posts;
        // Stable: posts sharing a date keep their authored order
        posts.sort_by(|a, b| b.date.cmp(&a.date));

        warn_duplicate_slugs(&posts);
        warn_unparsed_dates(&posts);

        let categories = derive_categories(&source.categories, &posts);

        Self {
            site_name,
            posts,
            categories,
        }
    }

    /// Parse a content source from JSON text
    pub fn from_json(
        json: &str,
        path: &Path,
        default_site_name: &str,
    ) -> Result<Self, ContentError> {
        let source: ContentSource =
            serde_json::from_str(json).map_err(|source| ContentError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Self::from_source(source, default_site_name))
    }
}

/// Loads the content source named by the build config
pub struct ContentLoader<'a> {
    config: &'a BuildConfig,
}

impl<'a> ContentLoader<'a> {
    /// Create a new content loader
    pub fn new(config: &'a BuildConfig) -> Self {
        Self { config }
    }

    /// Read and parse the content source
    pub fn load(&self) -> Result<Content, ContentError> {
        let path = self.config.content_path();
        if !path.exists() {
            return Err(ContentError::NotFound(path));
        }

        let json = fs::read_to_string(&path).map_err(|source| ContentError::Read {
            path: path.clone(),
            source,
        })?;

        let content = Content::from_json(&json, &path, &self.config.settings.default_site_name)?;

        tracing::info!(
            "Loaded {} posts in {} categories from {:?}",
            content.posts.len(),
            content.categories.len(),
            path
        );

        Ok(content)
    }
}

fn warn_duplicate_slugs(posts: &[Post]) {
    let mut seen = HashSet::new();
    for post in posts {
        if !seen.insert(post.slug.as_str()) {
            tracing::warn!("Duplicate post slug {:?}; a later page will overwrite it", post.slug);
        }
    }
}

fn warn_unparsed_dates(posts: &[Post]) {
    for post in posts.iter().filter(|p| p.parsed_date().is_none()) {
        tracing::warn!(
            "Post {:?} has a non-ISO date {:?}; it will be shown verbatim",
            post.slug,
            post.date
        );
    }
}
