//! Newsletter data model.
//!
//! Mirrors the backend payload: a newsletter is an ordered list of
//! categories, each holding an ordered list of articles. Category order and
//! article order both determine the rendering order of the final issue.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One aggregated article inside a newsletter category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    /// Stable backend identifier.
    pub id: String,
    pub title: String,
    /// Source URL the article was aggregated from.
    pub link: String,
    #[serde(default)]
    pub description: String,
    /// Identifier of the owning category. An article belongs to exactly one
    /// category; moves between categories go through the board reducer.
    pub category_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// A named, ordered group of articles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    /// Human-facing label. Also doubles as the drop-target identifier for the
    /// category surface itself, so names must be unique within a newsletter.
    pub name: String,
    #[serde(default)]
    pub articles: Vec<Article>,
}

impl Category {
    /// Index of an article within this category, if present.
    pub fn position_of(&self, article_id: &str) -> Option<usize> {
        self.articles.iter().position(|a| a.id == article_id)
    }

    pub fn contains(&self, article_id: &str) -> bool {
        self.position_of(article_id).is_some()
    }
}

/// Lifecycle state of a newsletter issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum NewsletterStatus {
    Draft,
    Sent,
    Failed,
}

impl NewsletterStatus {
    pub fn label(&self) -> &'static str {
        match self {
            NewsletterStatus::Draft => "DRAFT",
            NewsletterStatus::Sent => "SENT",
            NewsletterStatus::Failed => "FAILED",
        }
    }
}

/// One issue of the newsletter as fetched from the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Newsletter {
    pub id: String,
    pub status: NewsletterStatus,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub send_at: Option<DateTime<Utc>>,
}
