//! Fragment renderers for the end-of-post sections
//!
//! Each function is total: empty input yields a placeholder fragment and the
//! surrounding markup keeps the same shape. Every user-supplied string is
//! escaped here; callers pass raw content.

use crate::content::{Author, Faq, Post, Source};
use crate::helpers::{external_link, format_post_date, html_escape};

/// Render the FAQ accordion; the first item starts expanded
pub fn render_faqs(faqs: &[Faq]) -> String {
    if faqs.is_empty() {
        return r#"<div class="muted">No FAQs for this post yet.</div>"#.to_string();
    }

    let items: Vec<String> = faqs
        .iter()
        .enumerate()
        .map(|(i, faq)| {
            let open_cls = if i == 0 { " is-open" } else { "" };
            format!(
                r#"<div class="acc-item{open_cls}">
  <button class="acc-btn" type="button">
    <span>{}</span>
    <span aria-hidden="true">⌄</span>
  </button>
  <div class="acc-panel"><div class="inner">{}</div></div>
</div>"#,
                html_escape(&faq.question),
                html_escape(&faq.answer),
            )
        })
        .collect();

    format!(
        "<div class=\"accordion\" role=\"region\" aria-label=\"FAQs\">\n{}\n</div>",
        items.join("\n")
    )
}

/// Render the numbered source list inside an always-open disclosure
pub fn render_sources(sources: &[Source]) -> String {
    let body = if sources.is_empty() {
        r#"<div class="muted">No sources listed yet.</div>"#.to_string()
    } else {
        let items: String = sources
            .iter()
            .map(|s| format!("<li>{}</li>", external_link(&s.url, &html_escape(&s.label), "")))
            .collect();
        format!("<ol>\n{}\n</ol>", items)
    };

    format!(
        r#"<details class="sources" open>
  <summary>Sources <span aria-hidden="true">⌄</span></summary>
  <div class="body">{}</div>
</details>"#,
        body
    )
}

/// Render the author box with a profile link wrapping `icon`
///
/// `icon` is trusted markup from an [`IconProvider`](super::IconProvider).
pub fn render_author(author: &Author, icon: &str) -> String {
    format!(
        r#"<section class="author-box">
  <div>
    <h3>{}</h3>
    <p>{}</p>
  </div>
  <div class="author-actions">
    <a class="small-icon-link" href="{}" target="_blank" rel="noopener noreferrer" aria-label="Author LinkedIn">
      {}
    </a>
  </div>
</section>"#,
        html_escape(&author.name),
        html_escape(&author.bio),
        html_escape(&author.linkedin),
        icon
    )
}

/// Avatar for the byline; an empty marker keeps the layout when absent
pub fn render_avatar(author: &Author) -> String {
    if author.avatar.is_empty() {
        r#"<span class="avatar"></span>"#.to_string()
    } else {
        format!(
            r#"<span class="avatar"><img src="{}" alt="" width="80" height="80" decoding="async"></span>"#,
            html_escape(&author.avatar)
        )
    }
}

/// Render links to related posts
pub fn render_related(related: &[&Post]) -> String {
    if related.is_empty() {
        return r#"<div class="muted">No related posts yet.</div>"#.to_string();
    }

    related
        .iter()
        .map(|p| {
            format!(
                r#"<a class="tap" href="/posts/{}.html" target="_blank" rel="noopener noreferrer">
  <div class="title">{}</div>
  <div class="meta">{} • {}</div>
</a>"#,
                html_escape(&p.slug),
                html_escape(&p.title),
                html_escape(&format_post_date(&p.date)),
                html_escape(&p.category)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
