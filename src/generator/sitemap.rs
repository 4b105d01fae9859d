//! Sitemap generation.
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//!   <url>
//!     <loc>https://example.com/</loc>
//!     <priority>1.0</priority>
//!   </url>
//! </urlset>
//! ```
//!
//! There is no `lastmod`: posts carry a single date and no modification
//! tracking.

use std::collections::BTreeSet;

use crate::content::{Category, Post};
use crate::helpers::{escape_xml, full_url};

/// XML namespace for sitemap
const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Top-level pages that are always listed, with their priorities
pub const FIXED_PAGES: [(&str, &str); 4] = [
    ("/", "1.0"),
    ("/about.html", "0.7"),
    ("/contact.html", "0.7"),
    ("/card-comparisons.html", "0.5"),
];

pub const CATEGORY_PRIORITY: &str = "0.8";
pub const POST_PRIORITY: &str = "0.9";

/// Single URL entry in the sitemap
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlEntry {
    /// Full URL location
    pub loc: String,
    /// Relative weight, as written into the XML
    pub priority: &'static str,
}

/// Sitemap data structure
#[derive(Debug, Clone)]
pub struct Sitemap {
    pub urls: Vec<UrlEntry>,
}

impl Sitemap {
    /// Fixed pages, then categories by label, then posts in collection order
    pub fn build(site_url: &str, categories: &[Category], posts: &[Post]) -> Self {
        let mut urls: Vec<UrlEntry> = FIXED_PAGES
            .iter()
            .map(|&(path, priority)| UrlEntry {
                loc: full_url(site_url, path),
                priority,
            })
            .collect();

        let by_label: BTreeSet<&Category> = categories.iter().collect();
        urls.extend(by_label.into_iter().map(|category| UrlEntry {
            loc: full_url(site_url, &category.path()),
            priority: CATEGORY_PRIORITY,
        }));

        urls.extend(posts.iter().map(|post| UrlEntry {
            loc: full_url(site_url, &post.path()),
            priority: POST_PRIORITY,
        }));

        Self { urls }
    }

    /// Generate sitemap XML string.
    pub fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(128 * (self.urls.len() + 1));

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        xml.push('\n');
        xml.push_str(&format!(r#"<urlset xmlns="{SITEMAP_NS}">"#));
        xml.push('\n');

        for entry in &self.urls {
            xml.push_str("  <url>\n");
            xml.push_str(&format!("    <loc>{}</loc>\n", escape_xml(&entry.loc)));
            xml.push_str(&format!("    <priority>{}</priority>\n", entry.priority));
            xml.push_str("  </url>\n");
        }

        xml.push_str("</urlset>\n");
        xml
    }
}
