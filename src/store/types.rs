//! Record types held by the community store.
//!
//! Every record carries its creation time as epoch milliseconds so the
//! scoring and trending layers can reason about age without a date crate.
//! Wire names follow the camelCase convention of the platform API.

use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// One day in milliseconds. Freshness windows are multiples of this.
pub const DAY_MS: u64 = 24 * 60 * 60 * 1000;

/// A community post written by a student.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub content: String,
    /// Free-form topic tags, matched alongside title and content.
    #[serde(default)]
    pub tags: Vec<String>,
    pub author_id: String,
    pub created_at: u64,
    #[serde(default)]
    pub view_count: u64,
    /// Posts hidden by their author stay stored but never surface in search.
    #[serde(default = "default_true")]
    pub visible: bool,
    /// Soft-deleted posts are retained for moderation and excluded everywhere.
    #[serde(default)]
    pub deleted: bool,
}

/// A student profile. Profiles have no view counter.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    /// Display name, e.g. "Ada Lovelace".
    pub name: String,
    /// Unique handle without the leading `@`.
    pub username: String,
    pub created_at: u64,
}

/// A shared study note attached to a course.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub content: String,
    pub course_id: String,
    pub created_at: u64,
    #[serde(default)]
    pub view_count: u64,
    /// Only notes shared publicly are searchable.
    #[serde(default = "default_true")]
    pub public: bool,
}

/// A course offered at the university.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: String,
    pub name: String,
    /// Short course code, e.g. "MATH201".
    pub code: String,
    pub created_at: u64,
}

/// A campus-wide announcement.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Announcement {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub content: String,
    pub created_at: u64,
    /// Expired announcements are kept but excluded from search.
    #[serde(default = "default_true")]
    pub active: bool,
}

/// One logged search, the raw material for trending queries.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchHistoryEntry {
    pub id: String,
    pub user_id: String,
    /// The query as the user typed it, trimmed but not case-folded.
    pub query: String,
    pub created_at: u64,
}

impl SearchHistoryEntry {
    pub fn new(user_id: String, query: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            user_id,
            query,
            created_at: now_ms(),
        }
    }
}

/// A session token seed, mapping a bearer token to its user.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSeed {
    pub token: String,
    pub user_id: String,
}

/// A full data snapshot, loadable from JSON at startup.
///
/// Every section is optional so partial fixtures stay valid.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Snapshot {
    pub posts: Vec<Post>,
    pub users: Vec<UserProfile>,
    pub notes: Vec<Note>,
    pub courses: Vec<Course>,
    pub announcements: Vec<Announcement>,
    pub history: Vec<SearchHistoryEntry>,
    pub sessions: Vec<SessionSeed>,
}

fn default_true() -> bool {
    true
}

/// Returns the current time in milliseconds since the Unix epoch.
pub fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}
