//! Generator module - writes post pages, category skeletons, sitemap and robots
//!
//! A run is a single synchronous pass. Post pages, `sitemap.xml` and
//! `robots.txt` are rewritten every time; category skeletons are only
//! created when missing.

mod category;
mod head;
mod plan;
mod post;
mod robots;
mod sitemap;
mod writer;

pub use category::render_category_skeleton;
pub use head::{base_head, HeadMeta};
pub use plan::{plan_skeletons, SkeletonPlan};
pub use post::{render_post, PostContext, RELATED_LIMIT};
pub use robots::render_robots;
pub use sitemap::{Sitemap, UrlEntry, CATEGORY_PRIORITY, FIXED_PAGES, POST_PRIORITY};
pub use writer::OutputWriter;

use anyhow::Result;
use std::collections::HashSet;

use crate::config::BuildConfig;
use crate::content::Content;
use crate::render::IconProvider;

/// Counts of what one run wrote
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateReport {
    pub posts: usize,
    pub skeletons_created: usize,
    pub skeletons_kept: usize,
    pub sitemap_urls: usize,
}

/// Static page generator for one project root
pub struct Generator<I: IconProvider> {
    config: BuildConfig,
    icon: I,
    writer: OutputWriter,
}

impl<I: IconProvider> Generator<I> {
    /// Create a new generator
    pub fn new(config: BuildConfig, icon: I) -> Self {
        let writer = OutputWriter::new(&config.root);
        Self {
            config,
            icon,
            writer,
        }
    }

    /// Generate every output for `content`
    pub fn generate(&self, content: &Content) -> Result<GenerateReport> {
        let (skeletons_created, skeletons_kept) = self.generate_category_skeletons(content)?;
        let posts = self.generate_post_pages(content)?;
        let sitemap_urls = self.generate_sitemap(content)?;
        self.generate_robots()?;

        Ok(GenerateReport {
            posts,
            skeletons_created,
            skeletons_kept,
            sitemap_urls,
        })
    }

    /// Create missing category skeletons; existing files are left untouched
    fn generate_category_skeletons(&self, content: &Content) -> Result<(usize, usize)> {
        // Checked per page: slugs may contain `/` or be empty
        let existing: HashSet<String> = content
            .categories
            .iter()
            .filter(|category| self.writer.exists(&category.path()))
            .map(|category| category.slug.clone())
            .collect();
        let plan = plan_skeletons(&content.categories, &existing);

        for category in &plan.create {
            let html = render_category_skeleton(&self.config, &content.site_name, category);
            self.writer.write(&category.path(), &html)?;
            tracing::info!("Created category skeleton: {}", category.slug);
        }
        for category in &plan.keep {
            tracing::debug!("Keeping existing category page: {}", category.slug);
        }

        Ok((plan.create.len(), plan.keep.len()))
    }

    /// Generate individual post pages
    fn generate_post_pages(&self, content: &Content) -> Result<usize> {
        let icon = self.icon.author_icon();
        let ctx = PostContext {
            config: &self.config,
            site_name: &content.site_name,
            icon: &icon,
            posts: &content.posts,
        };

        for post in &content.posts {
            let html = render_post(&ctx, post)?;
            self.writer.write(&post.path(), &html)?;
        }

        tracing::info!("Generated {} post pages", content.posts.len());
        Ok(content.posts.len())
    }

    fn generate_sitemap(&self, content: &Content) -> Result<usize> {
        let sitemap = Sitemap::build(&self.config.site_url, &content.categories, &content.posts);
        self.writer.write("sitemap.xml", &sitemap.to_xml())?;
        tracing::info!("Generated sitemap.xml ({} urls)", sitemap.urls.len());
        Ok(sitemap.urls.len())
    }

    fn generate_robots(&self) -> Result<()> {
        self.writer
            .write("robots.txt", &render_robots(&self.config.site_url))?;
        tracing::info!("Generated robots.txt");
        Ok(())
    }
}
