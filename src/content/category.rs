//! Categories derived from the content source

use indexmap::{IndexMap, IndexSet};

use super::Post;

/// A category label and its page slug
///
/// Ordering is by label.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Category {
    pub label: String,
    pub slug: String,
}

impl Category {
    pub fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
            slug: cat_slug(label),
        }
    }

    /// Site-relative path of the category page
    pub fn path(&self) -> String {
        category_path(&self.label)
    }
}

/// Slug for a category label: lowercased, trimmed, spaces replaced by hyphens
///
/// # Examples
/// ```ignore
/// cat_slug("Credit Cards") // -> "credit-cards"
/// ```
pub fn cat_slug(label: &str) -> String {
    label.to_lowercase().trim().replace(' ', "-")
}

/// Site-relative path of the page for a category label
pub fn category_path(label: &str) -> String {
    format!("/categories/{}.html", cat_slug(label))
}

/// Union of the explicit category list and every post's category
///
/// Explicit labels come first in their authored order, then labels that
/// only appear on posts, in post order. Duplicates keep their first
/// position.
pub fn derive_categories(explicit: &[String], posts: &[Post]) -> Vec<Category> {
    let labels: IndexSet<&str> = explicit
        .iter()
        .map(String::as_str)
        .chain(posts.iter().map(|p| p.category.as_str()))
        .collect();

    let categories: Vec<Category> = labels.into_iter().map(Category::new).collect();
    warn_slug_collisions(&categories);
    categories
}

/// Distinct labels that map to the same slug would share one page
fn warn_slug_collisions(categories: &[Category]) {
    let mut by_slug: IndexMap<&str, &str> = IndexMap::new();
    for category in categories {
        if let Some(first) = by_slug.insert(&category.slug, &category.label) {
            tracing::warn!(
                "Categories {:?} and {:?} share the slug {:?}",
                first,
                category.label,
                category.slug
            );
        }
    }
}
