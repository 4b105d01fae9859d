//! Post, author and site models
//!
//! Optional fields are resolved to their defaults while deserializing, so a
//! field that is absent and a field that is `null` read the same way.
//! Rendering code never has to check for missing data.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// A blog post
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// URL-safe identifier, unique across the collection
    pub slug: String,

    /// Post title
    pub title: String,

    /// Short summary, empty when not authored
    #[serde(default, deserialize_with = "nullable")]
    pub excerpt: String,

    /// Publication date as written in the source (ISO-8601 expected)
    pub date: String,

    /// Free-text category label
    pub category: String,

    /// Hero image URL
    #[serde(default, deserialize_with = "nullable")]
    pub thumbnail: String,

    /// Pre-rendered trusted HTML, embedded verbatim
    #[serde(default, deserialize_with = "nullable")]
    pub body_html: String,

    #[serde(default, deserialize_with = "nullable")]
    pub author: Author,

    /// Ordered; the first entry is rendered expanded
    #[serde(default, deserialize_with = "nullable")]
    pub faqs: Vec<Faq>,

    /// Ordered; rendered as a numbered list
    #[serde(default, deserialize_with = "nullable")]
    pub sources: Vec<Source>,
}

impl Post {
    /// Parse the publication date, `None` if it is not a calendar date
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d").ok()
    }

    /// Site-relative path of the generated page
    pub fn path(&self) -> String {
        format!("/posts/{}.html", self.slug)
    }

    /// Posts in the same category, newest first, at most `limit`
    ///
    /// `posts` is the full collection; the post itself is skipped by slug.
    /// Ties on date keep collection order.
    pub fn related<'a>(&self, posts: &'a [Post], limit: usize) -> Vec<&'a Post> {
        let mut related: Vec<&Post> = posts
            .iter()
            .filter(|p| p.category == self.category && p.slug != self.slug)
            .collect();
        related.sort_by(|a, b| b.date.cmp(&a.date));
        related.truncate(limit);
        related
    }
}

/// Post author, embedded in each post
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Author {
    #[serde(deserialize_with = "nullable_name")]
    pub name: String,
    #[serde(deserialize_with = "nullable")]
    pub bio: String,
    /// Avatar URL, empty when absent
    #[serde(deserialize_with = "nullable")]
    pub avatar: String,
    /// Profile URL
    #[serde(deserialize_with = "nullable_link")]
    pub linkedin: String,
}

impl Default for Author {
    fn default() -> Self {
        Self {
            name: default_author_name(),
            bio: String::new(),
            avatar: String::new(),
            linkedin: default_link(),
        }
    }
}

/// A question and its answer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Faq {
    #[serde(rename = "q", alias = "question", deserialize_with = "nullable")]
    pub question: String,
    #[serde(rename = "a", alias = "answer", deserialize_with = "nullable")]
    pub answer: String,
}

/// A cited source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Source {
    #[serde(deserialize_with = "nullable_label")]
    pub label: String,
    #[serde(deserialize_with = "nullable_link")]
    pub url: String,
}

impl Default for Source {
    fn default() -> Self {
        Self {
            label: "Source".to_string(),
            url: default_link(),
        }
    }
}

/// Site-wide identity from the content source
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteInfo {
    /// Display name; `None` lets the configured default apply
    pub name: Option<String>,
}

/// The whole content source as authored
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContentSource {
    #[serde(default, deserialize_with = "nullable")]
    pub site: SiteInfo,
    /// Explicit category order; post categories are appended after these
    #[serde(default, deserialize_with = "nullable")]
    pub categories: Vec<String>,
    pub posts: Vec<Post>,
}

fn default_author_name() -> String {
    "Author".to_string()
}

fn default_link() -> String {
    "#".to_string()
}

/// Treat `null` the same as a missing field
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn nullable_name<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(default_author_name))
}

fn nullable_label<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(|| "Source".to_string()))
}

fn nullable_link<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(default_link))
}
