//! Category skeleton pages
//!
//! A skeleton carries head metadata and an empty `categoryMount`; the
//! listing itself is filled in by `category.js` when the page is viewed.

use super::head::{base_head, HeadMeta};
use crate::config::BuildConfig;
use crate::content::Category;
use crate::helpers::html_escape;

/// Render the skeleton document for one category
pub fn render_category_skeleton(config: &BuildConfig, site_name: &str, category: &Category) -> String {
    let title = format!("{} | {}", category.label, site_name);
    let description = format!("Browse all posts in {}.", category.label);
    let path = category.path();

    let head = base_head(
        config,
        &HeadMeta {
            title: &title,
            description: &description,
            path: &path,
            og_type: "website",
            image: None,
        },
    );

    format!(
        r#"<!doctype html>
<html lang="en" class="bg-grid">
<head>
{head}
</head>
<body>
  <div class="shell">
    <div id="siteHeader"></div>
    <main id="main">
      <div class="wrap">
        <section class="hero">
          <div class="kicker"><span class="dot"></span>Category</div>
          <h1 id="categoryTitle">{label}</h1>
          <p class="muted"><span id="categorySub">0 posts</span> • {tagline}</p>
        </section>
        <div class="section" id="categoryMount" aria-label="Category posts"></div>
      </div>
    </main>
    <div id="siteFooter"></div>
  </div>
  <script defer src="/assets/js/pages/category.js"></script>
</body>
</html>
"#,
        label = html_escape(&category.label),
        tagline = html_escape(&config.settings.category_tagline),
    )
}
