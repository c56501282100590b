//! Autocomplete and trending, the lightweight sibling of the main
//! search pipeline. No scoring happens here; store order is kept.

use std::collections::HashMap;

use crate::search::types::{TrendingPost, TrendingResponse};
use crate::store::repository::CommunityStore;
use crate::store::types::DAY_MS;

/// At most this many users and this many post titles per autocomplete.
pub const AUTOCOMPLETE_CAP: usize = 3;

/// Trending looks back over the last week.
pub const TRENDING_WINDOW_MS: u64 = 7 * DAY_MS;
pub const TRENDING_POST_CAP: usize = 5;
pub const TRENDING_QUERY_CAP: usize = 5;

/// How many raw history rows feed the frequency count.
pub const HISTORY_SCAN_CAP: usize = 100;

/// Builds the flat autocomplete list for a typed prefix: user display
/// names first, then `@handle` entries for the same users, then post
/// titles. A failed lookup contributes nothing.
pub async fn autocomplete(store: &dyn CommunityStore, query: &str) -> Vec<String> {
    let (users, posts) = tokio::join!(
        store.search_users(query, AUTOCOMPLETE_CAP),
        store.posts_by_title(query, AUTOCOMPLETE_CAP),
    );

    let users = match users {
        Ok(rows) => rows,
        Err(err) => {
            tracing::warn!("user suggestions unavailable: {}", err);
            Vec::new()
        }
    };
    let posts = match posts {
        Ok(rows) => rows,
        Err(err) => {
            tracing::warn!("post suggestions unavailable: {}", err);
            Vec::new()
        }
    };

    let mut suggestions = Vec::with_capacity(users.len() * 2 + posts.len());
    suggestions.extend(users.iter().map(|user| user.name.clone()));
    suggestions.extend(users.iter().map(|user| format!("@{}", user.username)));
    suggestions.extend(posts.into_iter().map(|post| post.title));
    suggestions
}

/// Computes the trending panel: the most viewed posts of the last week
/// and the most repeated query strings from recent search history.
/// Either half degrades to empty on store failure.
pub async fn trending(store: &dyn CommunityStore, now: u64) -> TrendingResponse {
    let since = now.saturating_sub(TRENDING_WINDOW_MS);
    let (posts, queries) = tokio::join!(
        store.top_recent_posts(since, TRENDING_POST_CAP),
        store.recent_queries(since, HISTORY_SCAN_CAP),
    );

    let trending_posts = match posts {
        Ok(rows) => rows
            .into_iter()
            .map(|post| TrendingPost {
                title: post.title,
                tags: post.tags,
                views: post.view_count,
            })
            .collect(),
        Err(err) => {
            tracing::warn!("trending posts unavailable: {}", err);
            Vec::new()
        }
    };

    let trending = match queries {
        Ok(raw) => top_queries(raw),
        Err(err) => {
            tracing::warn!("search history unavailable: {}", err);
            Vec::new()
        }
    };

    TrendingResponse {
        trending,
        trending_posts,
    }
}

/// Ranks distinct query strings by how often they repeat. Matching is
/// exact, no case folding. Ties keep first-seen order, which is newest
/// first given how the store returns history.
fn top_queries(recent: Vec<String>) -> Vec<String> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut distinct: Vec<String> = Vec::new();

    for query in recent {
        match counts.get_mut(&query) {
            Some(count) => *count += 1,
            None => {
                counts.insert(query.clone(), 1);
                distinct.push(query);
            }
        }
    }

    distinct.sort_by(|a, b| {
        let count_a = counts.get(a).copied().unwrap_or(0);
        let count_b = counts.get(b).copied().unwrap_or(0);
        count_b.cmp(&count_a)
    });
    distinct.truncate(TRENDING_QUERY_CAP);
    distinct
}
