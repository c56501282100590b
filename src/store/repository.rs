//! Store traits behind which the search service talks to persistence.
//!
//! Handlers and the search engine only see these traits, so the backing
//! implementation can be swapped without touching request handling.

use async_trait::async_trait;
use thiserror::Error;

use crate::store::types::{Announcement, Course, Note, Post, SearchHistoryEntry, UserProfile};

/// Errors surfaced by a store backend.
///
/// The search path treats every variant the same way: log it and serve
/// an empty slice for the affected entity. Callers never bubble these
/// into the HTTP response.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(String),
    #[error("store query failed: {0}")]
    Query(String),
}

/// Read and append operations the search service needs from storage.
///
/// All `search_*` methods perform case-insensitive substring matching
/// over the fields listed per method, exclude records the platform
/// hides (invisible or deleted posts, private notes, inactive
/// announcements), and return at most `limit` rows ordered newest
/// first with ties broken by id. That ordering is part of the
/// contract: callers rely on it for stable results between requests.
#[async_trait]
pub trait CommunityStore: Send + Sync {
    /// Posts matching `query` in title, content, or any tag.
    async fn search_posts(&self, query: &str, limit: usize) -> Result<Vec<Post>, StoreError>;

    /// Profiles matching `query` in display name or username.
    async fn search_users(
        &self,
        query: &str,
        limit: usize,
    ) -> Result<Vec<UserProfile>, StoreError>;

    /// Public notes matching `query` in title or content.
    async fn search_notes(&self, query: &str, limit: usize) -> Result<Vec<Note>, StoreError>;

    /// Courses matching `query` in name or code.
    async fn search_courses(&self, query: &str, limit: usize) -> Result<Vec<Course>, StoreError>;

    /// Active announcements matching `query` in title or content.
    async fn search_announcements(
        &self,
        query: &str,
        limit: usize,
    ) -> Result<Vec<Announcement>, StoreError>;

    /// Posts whose title alone matches `query`, for autocomplete.
    async fn posts_by_title(&self, query: &str, limit: usize) -> Result<Vec<Post>, StoreError>;

    /// Most viewed searchable posts created at or after `since`.
    async fn top_recent_posts(&self, since: u64, limit: usize) -> Result<Vec<Post>, StoreError>;

    /// Raw query strings logged at or after `since`, newest first.
    async fn recent_queries(&self, since: u64, limit: usize) -> Result<Vec<String>, StoreError>;

    /// Appends one search to the history log.
    async fn log_search(&self, entry: SearchHistoryEntry) -> Result<(), StoreError>;
}

/// Maps bearer tokens to user ids.
///
/// Search works without a session; resolution only decides whether the
/// query is worth recording in history.
#[async_trait]
pub trait SessionResolver: Send + Sync {
    /// Returns the user id behind `token`, or `None` for an unknown token.
    async fn resolve(&self, token: &str) -> Result<Option<String>, StoreError>;
}
