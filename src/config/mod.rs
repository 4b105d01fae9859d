//! Configuration module

mod site;

pub use site::normalize_site_url;
pub use site::BuildConfig;
pub use site::SiteSettings;
pub use site::{CONFIG_FILE, CONTENT_FILE, FOOTER_PARTIAL};
