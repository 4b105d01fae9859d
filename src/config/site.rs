//! Build configuration and presentation settings (_config.yml)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Content source, relative to the project root
pub const CONTENT_FILE: &str = "assets/data/posts.json";

/// Shared footer partial holding the author-profile icon
pub const FOOTER_PARTIAL: &str = "assets/partials/footer.html";

/// Optional presentation overrides, relative to the project root
pub const CONFIG_FILE: &str = "_config.yml";

/// Presentation settings shared by every generated document.
///
/// Every field has a default, so `_config.yml` only needs to name the
/// values it overrides.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSettings {
    /// Meta description used when a post has no excerpt
    pub fallback_description: String,
    /// Site logo, relative to the site URL
    pub logo_path: String,
    /// Favicon, relative to the site root
    pub favicon_path: String,
    /// Tagline shown under a category title
    pub category_tagline: String,
    /// Value of the `theme-color` meta tag
    pub theme_color: String,
    /// Origin warmed up with a `preconnect` hint
    pub preconnect: Option<String>,
    /// Site name used when the content source does not name the site
    pub default_site_name: String,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            fallback_description:
                "Brutal clarity for better decisions\u{2014}cards, banking hacks, and personal finance."
                    .to_string(),
            logo_path: "/assets/images/logo-round.svg".to_string(),
            favicon_path: "/assets/images/favicon.svg".to_string(),
            category_tagline: "Brutal clarity for better decisions.".to_string(),
            theme_color: "#000000".to_string(),
            preconnect: Some("https://picsum.photos".to_string()),
            default_site_name: "AmpereHour".to_string(),
        }
    }
}

impl SiteSettings {
    /// Load settings from a YAML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {:?}", path))?;
        let settings: SiteSettings = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config {:?}", path))?;
        Ok(settings)
    }

    /// Load `_config.yml` from the project root, or fall back to defaults
    pub fn load_or_default<P: AsRef<Path>>(root: P) -> Result<Self> {
        let path = root.as_ref().join(CONFIG_FILE);
        if path.exists() {
            tracing::debug!("Loading settings from {:?}", path);
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }
}

/// Settings for one generation run
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Production site URL, without a trailing slash
    pub site_url: String,
    /// Project root; every input and output path hangs off it
    pub root: PathBuf,
    /// Presentation settings
    pub settings: SiteSettings,
}

impl BuildConfig {
    /// Create a config for `root`, normalising the site URL
    pub fn new<P: AsRef<Path>>(site_url: &str, root: P, settings: SiteSettings) -> Self {
        Self {
            site_url: normalize_site_url(site_url),
            root: root.as_ref().to_path_buf(),
            settings,
        }
    }

    /// Path of the JSON content source
    pub fn content_path(&self) -> PathBuf {
        self.root.join(CONTENT_FILE)
    }

    /// Path of the shared footer partial
    pub fn footer_partial_path(&self) -> PathBuf {
        self.root.join(FOOTER_PARTIAL)
    }

    /// Absolute URL of the site logo
    pub fn logo_url(&self) -> String {
        format!("{}{}", self.site_url, self.settings.logo_path)
    }
}

/// Strip trailing slashes so paths can be appended with a single `/`
pub fn normalize_site_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}
