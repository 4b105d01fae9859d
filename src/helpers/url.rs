//! URL helper functions

/// Join the site URL and a site-relative path
///
/// # Examples
/// ```ignore
/// full_url("https://example.com", "/posts/a.html") // -> "https://example.com/posts/a.html"
/// full_url("https://example.com", "")              // -> "https://example.com/"
/// ```
pub fn full_url(site_url: &str, path: &str) -> String {
    let base = site_url.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    format!("{}/{}", base, path)
}
