//! Repository interfaces over blog storage.
//!
//! The tags never touch storage directly; each one is handed the narrowest
//! repository trait it needs. [`InMemoryStore`] is the reference
//! implementation and the one the test suite runs against. The traits return
//! plain values: the queries issued here are read-only and any backend
//! failure handling belongs to the backend, not to the tags.

use std::collections::HashSet;

use chrono::Utc;

use crate::model::{BlogrollLink, Category, Post};

pub trait PostRepository {
    /// Published posts, newest first, truncated to `limit`.
    fn latest(&self, limit: usize) -> Vec<Post>;

    /// Other posts sharing at least one tag with `post`, ordered by number
    /// of shared tags descending. Ties order by ascending post id.
    fn related_to(&self, post: &Post) -> Vec<Post>;
}

pub trait CategoryRepository {
    /// All categories, in storage order.
    fn categories(&self) -> Vec<Category>;
}

pub trait BlogrollRepository {
    /// All blogroll entries, in storage order.
    fn blogroll(&self) -> Vec<BlogrollLink>;
}

/// Everything the template tags collectively need from storage.
pub trait BlogStore: PostRepository + CategoryRepository + BlogrollRepository {}

impl<T> BlogStore for T where T: PostRepository + CategoryRepository + BlogrollRepository {}

/// In-memory storage backend.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    posts: Vec<Post>,
    categories: Vec<Category>,
    blogroll: Vec<BlogrollLink>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_posts(mut self, posts: Vec<Post>) -> Self {
        self.posts = posts;
        self
    }

    pub fn with_categories(mut self, categories: Vec<Category>) -> Self {
        self.categories = categories;
        self
    }

    pub fn with_blogroll(mut self, blogroll: Vec<BlogrollLink>) -> Self {
        self.blogroll = blogroll;
        self
    }
}

impl PostRepository for InMemoryStore {
    fn latest(&self, limit: usize) -> Vec<Post> {
        let now = Utc::now();
        let mut published: Vec<Post> = self
            .posts
            .iter()
            .filter(|post| post.is_published(now))
            .cloned()
            .collect();
        published.sort_by(|a, b| b.published_at.cmp(&a.published_at));
        published.truncate(limit);
        published
    }

    fn related_to(&self, post: &Post) -> Vec<Post> {
        let own: HashSet<&str> = post.tags.iter().map(String::as_str).collect();
        let mut scored: Vec<(usize, &Post)> = self
            .posts
            .iter()
            .filter(|candidate| candidate.id != post.id)
            .filter_map(|candidate| {
                let shared = candidate
                    .tags
                    .iter()
                    .filter(|tag| own.contains(tag.as_str()))
                    .count();
                (shared > 0).then_some((shared, candidate))
            })
            .collect();
        scored.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| a.1.id.cmp(&b.1.id)));
        scored.into_iter().map(|(_, post)| post.clone()).collect()
    }
}

impl CategoryRepository for InMemoryStore {
    fn categories(&self) -> Vec<Category> {
        self.categories.clone()
    }
}

impl BlogrollRepository for InMemoryStore {
    fn blogroll(&self) -> Vec<BlogrollLink> {
        self.blogroll.clone()
    }
}
