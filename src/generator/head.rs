//! `<head>` metadata shared by post pages and category skeletons

use crate::config::BuildConfig;
use crate::helpers::{full_url, html_escape, meta_name, meta_property};

/// Per-page inputs to the head
#[derive(Debug, Clone)]
pub struct HeadMeta<'a> {
    /// Full `<title>` text
    pub title: &'a str,
    pub description: &'a str,
    /// Site-relative page path; the canonical URL is built from it
    pub path: &'a str,
    /// Open Graph type (`article`, `website`)
    pub og_type: &'a str,
    /// Preview image; the site logo when `None`
    pub image: Option<&'a str>,
}

/// Render the head tags for one page, one tag per line
pub fn base_head(config: &BuildConfig, meta: &HeadMeta<'_>) -> String {
    let settings = &config.settings;
    let canonical = full_url(&config.site_url, meta.path);
    let logo = config.logo_url();
    let image = meta.image.filter(|img| !img.is_empty()).unwrap_or(logo.as_str());

    let mut tags = vec![
        r#"<meta charset="utf-8">"#.to_string(),
        r#"<meta name="viewport" content="width=device-width, initial-scale=1">"#.to_string(),
        meta_name("theme-color", &settings.theme_color),
        format!("<title>{}</title>", html_escape(meta.title)),
        meta_name("description", meta.description),
        meta_name("robots", "index,follow"),
        format!(r#"<link rel="canonical" href="{}">"#, html_escape(&canonical)),
        format!(
            r#"<link rel="icon" href="{}" type="image/svg+xml">"#,
            html_escape(&settings.favicon_path)
        ),
        format!(
            r#"<link rel="apple-touch-icon" href="{}">"#,
            html_escape(&settings.favicon_path)
        ),
        meta_property("og:title", meta.title),
        meta_property("og:description", meta.description),
        meta_property("og:type", meta.og_type),
        meta_property("og:url", &canonical),
        meta_property("og:image", image),
        meta_name("twitter:card", "summary_large_image"),
        meta_name("twitter:title", meta.title),
        meta_name("twitter:description", meta.description),
        meta_name("twitter:image", image),
        r#"<link rel="preload" href="/assets/css/styles.css" as="style">"#.to_string(),
        r#"<link rel="stylesheet" href="/assets/css/styles.css">"#.to_string(),
        r#"<script defer src="/assets/js/site.js"></script>"#.to_string(),
    ];

    if let Some(origin) = &settings.preconnect {
        tags.push(format!(
            r#"<link rel="preconnect" href="{}">"#,
            html_escape(origin)
        ));
    }

    tags.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteSettings;

    fn config() -> BuildConfig {
        BuildConfig::new("https://example.com/", "/site", SiteSettings::default())
    }

    #[test]
    fn test_base_head_tags() {
        let head = base_head(
            &config(),
            &HeadMeta {
                title: "Cards & Co | Site",
                description: "Desc",
                path: "/posts/a.html",
                og_type: "article",
                image: Some("https://img/a.jpg"),
            },
        );
        assert!(head.starts_with(r#"<meta charset="utf-8">"#));
        assert!(head.contains("<title>Cards &amp; Co | Site</title>"));
        assert!(head.contains(r#"<link rel="canonical" href="https://example.com/posts/a.html">"#));
        assert!(head.contains(r#"<meta property="og:url" content="https://example.com/posts/a.html">"#));
        assert!(head.contains(r#"<meta property="og:type" content="article">"#));
        assert!(head.contains(r#"<meta name="twitter:image" content="https://img/a.jpg">"#));
        assert!(head.ends_with(r#"<link rel="preconnect" href="https://picsum.photos">"#));
    }

    #[test]
    fn test_base_head_logo_fallback() {
        let logo = r#"<meta property="og:image" content="https://example.com/assets/images/logo-round.svg">"#;
        for image in [None, Some("")] {
            let head = base_head(
                &config(),
                &HeadMeta {
                    title: "T",
                    description: "D",
                    path: "/categories/x.html",
                    og_type: "website",
                    image,
                },
            );
            assert!(head.contains(logo));
        }
    }

    #[test]
    fn test_base_head_without_preconnect() {
        let mut settings = SiteSettings::default();
        settings.preconnect = None;
        let config = BuildConfig::new("https://example.com", "/site", settings);
        let head = base_head(
            &config,
            &HeadMeta {
                title: "T",
                description: "D",
                path: "/",
                og_type: "website",
                image: None,
            },
        );
        assert!(!head.contains("preconnect"));
    }
}
