//! Relevance scoring shared by every entity type.
//!
//! The score is an additive point total computed fresh per request from
//! the query, the record, and the current time. It is never persisted.

use crate::store::types::{Announcement, Course, DAY_MS, Note, Post, UserProfile};

const EXACT_TITLE: f64 = 100.0;
const TITLE_PREFIX: f64 = 50.0;
const TITLE_CONTAINS: f64 = 20.0;
const CONTENT_CONTAINS: f64 = 5.0;
const TERM_IN_TITLE: f64 = 5.0;
const TERM_IN_CONTENT: f64 = 1.0;
const FRESH_WINDOW_MS: u64 = 7 * DAY_MS;
const FRESH_BOOST: f64 = 5.0;
const RECENT_WINDOW_MS: u64 = 30 * DAY_MS;
const RECENT_BOOST: f64 = 2.0;
const VIEWS_PER_POINT: f64 = 100.0;
const POPULARITY_CAP: f64 = 10.0;

/// Minimum term length for per-term boosts. Shorter fragments are mostly
/// articles and stopwords and would add noise.
const MIN_TERM_LEN: usize = 3;

/// A record the scorer can rank.
///
/// Field names differ per entity (users expose name and handle, courses
/// expose name and code), so each entity maps itself onto one title-like
/// and one content-like string.
pub trait Searchable {
    fn title(&self) -> &str;
    fn content(&self) -> &str;
    fn created_at(&self) -> u64;
    /// Entities without a view counter return `None` and get no
    /// popularity boost.
    fn view_count(&self) -> Option<u64>;
}

/// Computes the relevance score of `record` for `query` at time `now`.
///
/// Point sources, all additive:
/// - title tiers, mutually exclusive: exact match +100, prefix +50,
///   substring +20
/// - content contains the full query: +5
/// - per term (whitespace-split, three or more chars): +5 if in title,
///   +1 if in content
/// - age under a week: +5, else under a month: +2
/// - views divided by 100, capped at 10
///
/// All text checks are case-insensitive. Callers guarantee a non-empty
/// query; handlers short-circuit blank queries long before scoring.
pub fn score<R: Searchable + ?Sized>(record: &R, query: &str, now: u64) -> f64 {
    let query = query.trim().to_lowercase();
    let title = record.title().to_lowercase();
    let content = record.content().to_lowercase();

    let mut total = 0.0;

    if title == query {
        total += EXACT_TITLE;
    } else if title.starts_with(&query) {
        total += TITLE_PREFIX;
    } else if title.contains(&query) {
        total += TITLE_CONTAINS;
    }

    if content.contains(&query) {
        total += CONTENT_CONTAINS;
    }

    for term in query_terms(&query) {
        if title.contains(&term) {
            total += TERM_IN_TITLE;
        }
        if content.contains(&term) {
            total += TERM_IN_CONTENT;
        }
    }

    let age = now.saturating_sub(record.created_at());
    if age < FRESH_WINDOW_MS {
        total += FRESH_BOOST;
    } else if age < RECENT_WINDOW_MS {
        total += RECENT_BOOST;
    }

    if let Some(views) = record.view_count() {
        total += (views as f64 / VIEWS_PER_POINT).min(POPULARITY_CAP);
    }

    total
}

/// Splits a query into lowercased terms eligible for per-term boosts.
pub fn query_terms(query: &str) -> Vec<String> {
    query
        .to_lowercase()
        .split_whitespace()
        .filter(|term| term.len() >= MIN_TERM_LEN)
        .map(str::to_string)
        .collect()
}

impl Searchable for Post {
    fn title(&self) -> &str {
        &self.title
    }

    fn content(&self) -> &str {
        &self.content
    }

    fn created_at(&self) -> u64 {
        self.created_at
    }

    fn view_count(&self) -> Option<u64> {
        Some(self.view_count)
    }
}

impl Searchable for UserProfile {
    fn title(&self) -> &str {
        &self.name
    }

    fn content(&self) -> &str {
        &self.username
    }

    fn created_at(&self) -> u64 {
        self.created_at
    }

    fn view_count(&self) -> Option<u64> {
        None
    }
}

impl Searchable for Note {
    fn title(&self) -> &str {
        &self.title
    }

    fn content(&self) -> &str {
        &self.content
    }

    fn created_at(&self) -> u64 {
        self.created_at
    }

    fn view_count(&self) -> Option<u64> {
        Some(self.view_count)
    }
}

impl Searchable for Course {
    fn title(&self) -> &str {
        &self.name
    }

    fn content(&self) -> &str {
        &self.code
    }

    fn created_at(&self) -> u64 {
        self.created_at
    }

    fn view_count(&self) -> Option<u64> {
        None
    }
}

impl Searchable for Announcement {
    fn title(&self) -> &str {
        &self.title
    }

    fn content(&self) -> &str {
        &self.content
    }

    fn created_at(&self) -> u64 {
        self.created_at
    }

    fn view_count(&self) -> Option<u64> {
        None
    }
}
