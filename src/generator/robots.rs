//! robots.txt

use crate::helpers::full_url;

/// Allow-all policy pointing crawlers at the sitemap
pub fn render_robots(site_url: &str) -> String {
    format!(
        "User-agent: *\nAllow: /\n\nSitemap: {}\n",
        full_url(site_url, "/sitemap.xml")
    )
}
