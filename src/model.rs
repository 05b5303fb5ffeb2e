//! Domain records surfaced to templates.
//!
//! These mirror what the backing blog storage exposes; the tags only read
//! them and hand them to the template context as serialized values.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Publication state of a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    Draft,
    Public,
}

/// A blog post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: u64,
    pub title: String,
    pub slug: String,
    pub body: String,
    /// Taxonomy tags, used for related-post ranking.
    #[serde(default)]
    pub tags: Vec<String>,
    pub status: PostStatus,
    pub published_at: DateTime<Utc>,
}

impl Post {
    /// Whether the post is eligible for public listing at `now`: publicly
    /// visible and past its publish time.
    pub fn is_published(&self, now: DateTime<Utc>) -> bool {
        self.status == PostStatus::Public && self.published_at <= now
    }
}

/// A blog category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: u64,
    pub title: String,
    pub slug: String,
}

/// An entry in the blogroll.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogrollLink {
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub description: Option<String>,
}
