//! Query aggregation and ranking.
//!
//! One search fans out into at most five store lookups, one per entity
//! collection. The lookups run concurrently and fail independently: a
//! broken collection degrades to an empty slice while the others still
//! return. Scoring and ranking happen in memory once every fetch has
//! settled.

use std::cmp::Reverse;
use std::future::Future;

use crate::search::scorer::{Searchable, score};
use crate::search::types::{EntityKind, Scored, SearchResponse, SortMode, TypeFilter};
use crate::store::repository::{CommunityStore, StoreError};
use crate::store::types::{Announcement, Course, Note, Post, UserProfile, now_ms};

/// Pre-score fetch caps. Bounding the candidate sets bounds scoring
/// cost no matter how much a collection matches.
pub const POST_FETCH_CAP: usize = 50;
pub const ENTITY_FETCH_CAP: usize = 20;

/// Display caps applied after ranking.
pub const POST_DISPLAY_CAP: usize = 20;
pub const ENTITY_DISPLAY_CAP: usize = 10;

/// Unscored candidates per entity collection, as fetched.
pub struct CandidateSet {
    pub posts: Vec<Post>,
    pub users: Vec<UserProfile>,
    pub notes: Vec<Note>,
    pub courses: Vec<Course>,
    pub announcements: Vec<Announcement>,
}

/// Runs the full pipeline: fetch, score, sort, truncate.
pub async fn search(
    store: &dyn CommunityStore,
    query: &str,
    filter: TypeFilter,
    sort: SortMode,
) -> SearchResponse {
    let now = now_ms();
    let found = aggregate(store, query, filter).await;

    SearchResponse {
        posts: rank(found.posts, query, sort, now, POST_DISPLAY_CAP),
        users: rank(found.users, query, sort, now, ENTITY_DISPLAY_CAP),
        notes: rank(found.notes, query, sort, now, ENTITY_DISPLAY_CAP),
        courses: rank(found.courses, query, sort, now, ENTITY_DISPLAY_CAP),
        announcements: rank(found.announcements, query, sort, now, ENTITY_DISPLAY_CAP),
    }
}

/// Fetches bounded candidate lists for every collection the filter
/// enables. Disabled collections are never queried at all.
pub async fn aggregate(
    store: &dyn CommunityStore,
    query: &str,
    filter: TypeFilter,
) -> CandidateSet {
    let (posts, users, notes, courses, announcements) = tokio::join!(
        guarded(EntityKind::Post, filter.includes(EntityKind::Post), || store
            .search_posts(query, POST_FETCH_CAP)),
        guarded(EntityKind::User, filter.includes(EntityKind::User), || store
            .search_users(query, ENTITY_FETCH_CAP)),
        guarded(EntityKind::Note, filter.includes(EntityKind::Note), || store
            .search_notes(query, ENTITY_FETCH_CAP)),
        guarded(EntityKind::Course, filter.includes(EntityKind::Course), || {
            store.search_courses(query, ENTITY_FETCH_CAP)
        }),
        guarded(
            EntityKind::Announcement,
            filter.includes(EntityKind::Announcement),
            || store.search_announcements(query, ENTITY_FETCH_CAP)
        ),
    );

    CandidateSet {
        posts,
        users,
        notes,
        courses,
        announcements,
    }
}

/// Runs one collection fetch, degrading failures to an empty slice so
/// sibling lookups are never aborted.
async fn guarded<T, F, Fut>(kind: EntityKind, enabled: bool, fetch: F) -> Vec<T>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<Vec<T>, StoreError>>,
{
    if !enabled {
        return Vec::new();
    }
    match fetch().await {
        Ok(rows) => rows,
        Err(err) => {
            tracing::warn!("{} lookup failed, serving empty slice: {}", kind.label(), err);
            Vec::new()
        }
    }
}

/// Scores candidates and orders them by the requested mode.
///
/// Relevance is the default: descending score with ties keeping fetch
/// order. Date and popularity modes ignore the score entirely and sort
/// strictly by creation time or view count. The score field still
/// appears on every result either way.
pub fn rank<R: Searchable>(
    candidates: Vec<R>,
    query: &str,
    sort: SortMode,
    now: u64,
    cap: usize,
) -> Vec<Scored<R>> {
    let mut ranked: Vec<Scored<R>> = candidates
        .into_iter()
        .map(|record| Scored {
            score: score(&record, query, now),
            record,
        })
        .collect();

    match sort {
        SortMode::Relevance => ranked.sort_by(|a, b| b.score.total_cmp(&a.score)),
        SortMode::Date => ranked.sort_by_key(|item| Reverse(item.record.created_at())),
        SortMode::Popularity => {
            ranked.sort_by_key(|item| Reverse(item.record.view_count().unwrap_or(0)))
        }
    }

    ranked.truncate(cap);
    ranked
}
