//! Icon provider for the author-profile link
//!
//! The icon lives in the hand-authored footer partial. It is pulled out once
//! per run; when the partial or the snippet is missing the built-in fallback
//! is used so page layout never depends on partial-file formatting.

use lazy_static::lazy_static;
use regex::Regex;
use std::borrow::Cow;
use std::fs;
use std::path::Path;

/// Used when the footer partial offers no LinkedIn icon
pub const FALLBACK_ICON: &str = r#"<svg class="icon" viewBox="0 0 24 24" aria-hidden="true"><path d="M6 9v11" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round"/></svg>"#;

lazy_static! {
    static ref LINKEDIN_ICON: Regex =
        Regex::new(r#"(?s)aria-label="LinkedIn"[^>]*>\s*(<svg class="icon".*?</svg>)"#).unwrap();
}

/// Supplies the icon fragment placed inside the author-profile link
pub trait IconProvider {
    /// A trusted SVG fragment, embedded verbatim
    fn author_icon(&self) -> Cow<'_, str>;
}

/// Always the built-in fallback
#[derive(Debug, Clone, Copy, Default)]
pub struct FallbackIcon;

impl IconProvider for FallbackIcon {
    fn author_icon(&self) -> Cow<'_, str> {
        Cow::Borrowed(FALLBACK_ICON)
    }
}

/// Icon taken from the shared footer partial
#[derive(Debug, Clone)]
pub struct FooterIcon {
    svg: Option<String>,
}

impl FooterIcon {
    /// Extract the icon from partial markup
    pub fn from_markup(markup: &str) -> Self {
        let svg = LINKEDIN_ICON
            .captures(markup)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string());
        Self { svg }
    }

    /// Read the partial at `path`; a missing file degrades to the fallback
    pub fn load<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(markup) => {
                let icon = Self::from_markup(&markup);
                if icon.svg.is_none() {
                    tracing::warn!("No LinkedIn icon in {:?}, using fallback", path);
                }
                icon
            }
            Err(e) => {
                tracing::warn!("Cannot read footer partial {:?}: {}; using fallback icon", path, e);
                Self { svg: None }
            }
        }
    }

    /// Whether the partial supplied the icon
    pub fn is_extracted(&self) -> bool {
        self.svg.is_some()
    }
}

impl IconProvider for FooterIcon {
    fn author_icon(&self) -> Cow<'_, str> {
        match &self.svg {
            Some(svg) => Cow::Borrowed(svg.as_str()),
            None => Cow::Borrowed(FALLBACK_ICON),
        }
    }
}
