//! In-memory store backend, keyed by record id.
//!
//! This is the default backend for development and tests. Matching is
//! done with a full scan per request, which is fine at the data sizes
//! the fetch caps allow, and every read sorts newest first with id as
//! tiebreak so repeated requests see identical orderings.

use async_trait::async_trait;
use dashmap::DashMap;

use crate::store::repository::{CommunityStore, SessionResolver, StoreError};
use crate::store::types::{
    Announcement, Course, Note, Post, SearchHistoryEntry, Snapshot, UserProfile,
};

#[derive(Default)]
pub struct MemoryStore {
    posts: DashMap<String, Post>,
    users: DashMap<String, UserProfile>,
    notes: DashMap<String, Note>,
    courses: DashMap<String, Course>,
    announcements: DashMap<String, Announcement>,
    history: DashMap<String, SearchHistoryEntry>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_post(&self, post: Post) {
        self.posts.insert(post.id.clone(), post);
    }

    pub fn add_user(&self, user: UserProfile) {
        self.users.insert(user.id.clone(), user);
    }

    pub fn add_note(&self, note: Note) {
        self.notes.insert(note.id.clone(), note);
    }

    pub fn add_course(&self, course: Course) {
        self.courses.insert(course.id.clone(), course);
    }

    pub fn add_announcement(&self, announcement: Announcement) {
        self.announcements.insert(announcement.id.clone(), announcement);
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Every logged entry, newest first.
    pub fn history_entries(&self) -> Vec<SearchHistoryEntry> {
        let mut rows = matching(&self.history, |_| true);
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at).then_with(|| a.id.cmp(&b.id)));
        rows
    }

    /// Loads every section of a snapshot into the store.
    pub fn load_snapshot(&self, snapshot: &Snapshot) {
        for post in &snapshot.posts {
            self.add_post(post.clone());
        }
        for user in &snapshot.users {
            self.add_user(user.clone());
        }
        for note in &snapshot.notes {
            self.add_note(note.clone());
        }
        for course in &snapshot.courses {
            self.add_course(course.clone());
        }
        for announcement in &snapshot.announcements {
            self.add_announcement(announcement.clone());
        }
        for entry in &snapshot.history {
            self.history.insert(entry.id.clone(), entry.clone());
        }
        tracing::info!(
            "Snapshot loaded: {} posts, {} users, {} notes, {} courses, {} announcements, {} history entries",
            snapshot.posts.len(),
            snapshot.users.len(),
            snapshot.notes.len(),
            snapshot.courses.len(),
            snapshot.announcements.len(),
            snapshot.history.len()
        );
    }
}

/// Collects every value matching the predicate. Order is whatever the
/// map yields; callers sort before truncating.
fn matching<V: Clone>(map: &DashMap<String, V>, matches: impl Fn(&V) -> bool) -> Vec<V> {
    map.iter()
        .filter(|entry| matches(entry.value()))
        .map(|entry| entry.value().clone())
        .collect()
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

fn post_searchable(post: &Post) -> bool {
    post.visible && !post.deleted
}

#[async_trait]
impl CommunityStore for MemoryStore {
    async fn search_posts(&self, query: &str, limit: usize) -> Result<Vec<Post>, StoreError> {
        let needle = query.to_lowercase();
        let mut rows = matching(&self.posts, |post| {
            post_searchable(post)
                && (contains_ci(&post.title, &needle)
                    || contains_ci(&post.content, &needle)
                    || post.tags.iter().any(|tag| contains_ci(tag, &needle)))
        });
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at).then_with(|| a.id.cmp(&b.id)));
        rows.truncate(limit);
        Ok(rows)
    }

    async fn search_users(
        &self,
        query: &str,
        limit: usize,
    ) -> Result<Vec<UserProfile>, StoreError> {
        let needle = query.to_lowercase();
        let mut rows = matching(&self.users, |user| {
            contains_ci(&user.name, &needle) || contains_ci(&user.username, &needle)
        });
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at).then_with(|| a.id.cmp(&b.id)));
        rows.truncate(limit);
        Ok(rows)
    }

    async fn search_notes(&self, query: &str, limit: usize) -> Result<Vec<Note>, StoreError> {
        let needle = query.to_lowercase();
        let mut rows = matching(&self.notes, |note| {
            note.public
                && (contains_ci(&note.title, &needle) || contains_ci(&note.content, &needle))
        });
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at).then_with(|| a.id.cmp(&b.id)));
        rows.truncate(limit);
        Ok(rows)
    }

    async fn search_courses(&self, query: &str, limit: usize) -> Result<Vec<Course>, StoreError> {
        let needle = query.to_lowercase();
        let mut rows = matching(&self.courses, |course| {
            contains_ci(&course.name, &needle) || contains_ci(&course.code, &needle)
        });
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at).then_with(|| a.id.cmp(&b.id)));
        rows.truncate(limit);
        Ok(rows)
    }

    async fn search_announcements(
        &self,
        query: &str,
        limit: usize,
    ) -> Result<Vec<Announcement>, StoreError> {
        let needle = query.to_lowercase();
        let mut rows = matching(&self.announcements, |announcement| {
            announcement.active
                && (contains_ci(&announcement.title, &needle)
                    || contains_ci(&announcement.content, &needle))
        });
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at).then_with(|| a.id.cmp(&b.id)));
        rows.truncate(limit);
        Ok(rows)
    }

    async fn posts_by_title(&self, query: &str, limit: usize) -> Result<Vec<Post>, StoreError> {
        let needle = query.to_lowercase();
        let mut rows = matching(&self.posts, |post| {
            post_searchable(post) && contains_ci(&post.title, &needle)
        });
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at).then_with(|| a.id.cmp(&b.id)));
        rows.truncate(limit);
        Ok(rows)
    }

    async fn top_recent_posts(&self, since: u64, limit: usize) -> Result<Vec<Post>, StoreError> {
        let mut rows = matching(&self.posts, |post| {
            post_searchable(post) && post.created_at >= since
        });
        rows.sort_by(|a, b| b.view_count.cmp(&a.view_count).then_with(|| a.id.cmp(&b.id)));
        rows.truncate(limit);
        Ok(rows)
    }

    async fn recent_queries(&self, since: u64, limit: usize) -> Result<Vec<String>, StoreError> {
        let mut rows = matching(&self.history, |entry| entry.created_at >= since);
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at).then_with(|| a.id.cmp(&b.id)));
        rows.truncate(limit);
        Ok(rows.into_iter().map(|entry| entry.query).collect())
    }

    async fn log_search(&self, entry: SearchHistoryEntry) -> Result<(), StoreError> {
        self.history.insert(entry.id.clone(), entry);
        Ok(())
    }
}

/// In-memory session table for the default backend.
#[derive(Default)]
pub struct MemorySessions {
    sessions: DashMap<String, String>,
}

impl MemorySessions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_session(&self, token: String, user_id: String) {
        self.sessions.insert(token, user_id);
    }
}

#[async_trait]
impl SessionResolver for MemorySessions {
    async fn resolve(&self, token: &str) -> Result<Option<String>, StoreError> {
        Ok(self.sessions.get(token).map(|entry| entry.value().clone()))
    }
}
