//! Request parameters and response bodies for the search endpoints.

use serde::{Deserialize, Serialize};

use crate::store::types::{Announcement, Course, Note, Post, UserProfile};

/// Query string parameters for `GET /search`.
///
/// Unrecognized values never reject a request: an unknown `type`
/// matches no entity and an unknown `sort` falls back to relevance.
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
    /// Entity filter, `all` when absent or empty.
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// One of `relevance`, `date`, `popularity`.
    pub sort: Option<String>,
}

/// Query string parameters for `GET /search/suggestions`.
#[derive(Debug, Default, Deserialize)]
pub struct SuggestParams {
    pub q: Option<String>,
}

/// The five searchable entity collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Post,
    User,
    Note,
    Course,
    Announcement,
}

impl EntityKind {
    /// Plural label as it appears in the API, also used in logs.
    pub fn label(&self) -> &'static str {
        match self {
            EntityKind::Post => "posts",
            EntityKind::User => "users",
            EntityKind::Note => "notes",
            EntityKind::Course => "courses",
            EntityKind::Announcement => "announcements",
        }
    }
}

/// Which entity collections a search touches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeFilter {
    All,
    Only(EntityKind),
    /// An unrecognized `type` value. Matches nothing, so every slice in
    /// the response comes back empty rather than the request failing.
    Unknown,
}

impl TypeFilter {
    pub fn from_param(raw: Option<&str>) -> Self {
        match raw.unwrap_or("") {
            "" | "all" => TypeFilter::All,
            "posts" => TypeFilter::Only(EntityKind::Post),
            "users" => TypeFilter::Only(EntityKind::User),
            "notes" => TypeFilter::Only(EntityKind::Note),
            "courses" => TypeFilter::Only(EntityKind::Course),
            "announcements" => TypeFilter::Only(EntityKind::Announcement),
            _ => TypeFilter::Unknown,
        }
    }

    pub fn includes(&self, kind: EntityKind) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Only(only) => *only == kind,
            TypeFilter::Unknown => false,
        }
    }
}

/// Result ordering requested by the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    #[default]
    Relevance,
    Date,
    Popularity,
}

impl SortMode {
    pub fn from_param(raw: Option<&str>) -> Self {
        match raw.unwrap_or("") {
            "date" => SortMode::Date,
            "popularity" => SortMode::Popularity,
            _ => SortMode::Relevance,
        }
    }
}

/// A record plus its ephemeral relevance score.
///
/// Serialization flattens the record, so the score rides along as one
/// extra field on the entity's own JSON shape.
#[derive(Debug, Serialize)]
pub struct Scored<T> {
    #[serde(flatten)]
    pub record: T,
    pub score: f64,
}

/// Combined body for `GET /search`.
///
/// Every entity key is always present. Slices excluded by the type
/// filter are empty arrays, not omitted keys.
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub posts: Vec<Scored<Post>>,
    pub users: Vec<Scored<UserProfile>>,
    pub notes: Vec<Scored<Note>>,
    pub courses: Vec<Scored<Course>>,
    pub announcements: Vec<Scored<Announcement>>,
}

/// Body returned when the search query is blank.
#[derive(Debug, Default, Serialize)]
pub struct EmptyQueryResponse {
    /// Always an empty array; kept typed so the wire shape is explicit.
    pub results: Vec<serde_json::Value>,
}

/// Autocomplete body for `GET /search/suggestions?q=...`.
#[derive(Debug, Serialize)]
pub struct SuggestionsResponse {
    /// User names first, then `@handle` entries, then post titles.
    pub suggestions: Vec<String>,
}

/// Trending body for `GET /search/suggestions` without a query.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendingResponse {
    /// Most frequent recent query strings, most frequent first.
    pub trending: Vec<String>,
    pub trending_posts: Vec<TrendingPost>,
}

/// Compact post projection shown on the trending panel.
#[derive(Debug, Serialize)]
pub struct TrendingPost {
    pub title: String,
    pub tags: Vec<String>,
    pub views: u64,
}
