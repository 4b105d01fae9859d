//! Post page composition

use anyhow::{Context, Result};

use super::head::{base_head, HeadMeta};
use crate::config::BuildConfig;
use crate::content::{category_path, Post};
use crate::helpers::{format_post_date, full_url, html_escape};
use crate::render::{render_author, render_avatar, render_faqs, render_related, render_sources};
use crate::schema;

/// Maximum number of related posts listed under a post
pub const RELATED_LIMIT: usize = 3;

/// Inputs shared by every post page in a run
pub struct PostContext<'a> {
    pub config: &'a BuildConfig,
    pub site_name: &'a str,
    /// Author-profile icon markup
    pub icon: &'a str,
    /// Full collection, newest first
    pub posts: &'a [Post],
}

/// Render the complete HTML document for one post
///
/// Only structured-data serialization can fail; missing optional fields
/// are already defaulted on the post.
pub fn render_post(ctx: &PostContext<'_>, post: &Post) -> Result<String> {
    let config = ctx.config;
    let path = post.path();
    let canonical = full_url(&config.site_url, &path);
    let title = format!("{} | {}", post.title, ctx.site_name);
    let description = if post.excerpt.is_empty() {
        config.settings.fallback_description.as_str()
    } else {
        post.excerpt.as_str()
    };

    let head = base_head(
        config,
        &HeadMeta {
            title: &title,
            description,
            path: &path,
            og_type: "article",
            image: Some(post.thumbnail.as_str()),
        },
    );

    let article = schema::article(post, ctx.site_name, &canonical, &config.logo_url());
    let mut ld_blocks = vec![schema::script_block(&article)
        .with_context(|| format!("Failed to serialize Article data for {:?}", post.slug))?];
    if let Some(faq_page) = schema::faq_page(&post.faqs) {
        ld_blocks.push(
            schema::script_block(&faq_page)
                .with_context(|| format!("Failed to serialize FAQ data for {:?}", post.slug))?,
        );
    }

    let related = post.related(ctx.posts, RELATED_LIMIT);

    Ok(format!(
        r##"<!doctype html>
<html lang="en" class="bg-grid">
<head>
{head}
{ld}
</head>
<body>
  <div class="shell">
    <div id="siteHeader"></div>

    <main id="main">
      <div class="wrap">
        <div class="section">
          <a class="category-label tap" href="{cat_url}">{cat}</a>
        </div>

        <article class="post-hero">
          <div class="thumb">
            <img src="{thumb}" alt="" width="1200" height="750" decoding="async">
          </div>
          <div class="content">
            <h1>{post_title}</h1>
            <div class="meta-row">
              <div class="meta-date">{date}</div>
              <a class="author-link" id="authorJump" href="#author" aria-label="Jump to author section">
                {avatar}
                <span>By: {author}</span>
              </a>
            </div>
          </div>
        </article>

        <div class="post-body" id="postBody">
          {body}
        </div>

        <div class="end-sections">
          <div class="end-title">FAQs</div>
          {faqs}

          <div class="end-title" id="author">Author</div>
          {author_box}

          <div class="end-title">Sources</div>
          {sources}

          <div class="end-title">Related Posts</div>
          <div class="related">
            {related}
          </div>
        </div>
      </div>
    </main>

    <div id="siteFooter"></div>
  </div>

  <script defer src="/assets/js/pages/post-interactions.js"></script>
</body>
</html>
"##,
        ld = ld_blocks.join("\n"),
        cat_url = html_escape(&category_path(&post.category)),
        cat = html_escape(&post.category),
        thumb = html_escape(&post.thumbnail),
        post_title = html_escape(&post.title),
        date = html_escape(&format_post_date(&post.date)),
        avatar = render_avatar(&post.author),
        author = html_escape(&post.author.name),
        body = post.body_html,
        faqs = render_faqs(&post.faqs),
        author_box = render_author(&post.author, ctx.icon),
        sources = render_sources(&post.sources),
        related = render_related(&related),
    ))
}
