//! Structured data (schema.org JSON-LD) for post pages
//!
//! Records are plain `Serialize` structs, so field order in the emitted JSON
//! is fixed and regeneration is byte-stable.

use serde::Serialize;

use crate::content::{Faq, Post};
use crate::helpers::script_safe_json;

const CONTEXT: &str = "https://schema.org";

/// An `Article` record describing one post
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub headline: String,
    pub description: String,
    pub image: Vec<String>,
    pub date_published: String,
    /// No modification tracking; always equals `date_published`
    pub date_modified: String,
    pub author: Person,
    pub publisher: Organization,
    pub main_entity_of_page: WebPage,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Person {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Organization {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: String,
    pub logo: ImageObject,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageObject {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WebPage {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    #[serde(rename = "@id")]
    pub id: String,
}

/// A `FAQPage` record listing a post's questions in order
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FaqPage {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub main_entity: Vec<Question>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: String,
    pub accepted_answer: Answer,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Answer {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub text: String,
}

/// Build the `Article` record for a post
///
/// `canonical_url` identifies the page; `logo_url` is the publisher logo.
pub fn article(post: &Post, site_name: &str, canonical_url: &str, logo_url: &str) -> Article {
    Article {
        context: CONTEXT,
        kind: "Article",
        headline: post.title.clone(),
        description: post.excerpt.clone(),
        image: vec![post.thumbnail.clone()],
        date_published: post.date.clone(),
        date_modified: post.date.clone(),
        author: Person {
            kind: "Person",
            name: post.author.name.clone(),
        },
        publisher: Organization {
            kind: "Organization",
            name: site_name.to_string(),
            logo: ImageObject {
                kind: "ImageObject",
                url: logo_url.to_string(),
            },
        },
        main_entity_of_page: WebPage {
            kind: "WebPage",
            id: canonical_url.to_string(),
        },
    }
}

/// Build the `FAQPage` record, or `None` when there are no FAQs
pub fn faq_page(faqs: &[Faq]) -> Option<FaqPage> {
    if faqs.is_empty() {
        return None;
    }

    let main_entity = faqs
        .iter()
        .map(|faq| Question {
            kind: "Question",
            name: faq.question.clone(),
            accepted_answer: Answer {
                kind: "Answer",
                text: faq.answer.clone(),
            },
        })
        .collect();

    Some(FaqPage {
        context: CONTEXT,
        kind: "FAQPage",
        main_entity,
    })
}

/// Serialize a record into a `<script type="application/ld+json">` block
pub fn script_block<T: Serialize>(record: &T) -> serde_json::Result<String> {
    let json = serde_json::to_string(record)?;
    Ok(format!(
        r#"<script type="application/ld+json">{}</script>"#,
        script_safe_json(&json)
    ))
}
