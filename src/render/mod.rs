//! HTML fragment renderers

mod fields;
mod icon;

pub use fields::{render_author, render_avatar, render_faqs, render_related, render_sources};
pub use icon::{FallbackIcon, FooterIcon, IconProvider, FALLBACK_ICON};
