//! Content module - the JSON content source and the records derived from it

mod category;
mod error;
pub mod loader;
mod post;

pub use category::{cat_slug, category_path, derive_categories, Category};
pub use error::ContentError;
pub use loader::{Content, ContentLoader};
pub use post::{Author, ContentSource, Faq, Post, SiteInfo, Source};
