use std::sync::Arc;

use axum::extract::Query;
use axum::http::HeaderMap;
use axum::http::header::AUTHORIZATION;
use axum::response::{IntoResponse, Response};
use axum::{Extension, Json};

use crate::search::engine;
use crate::search::suggest;
use crate::search::types::{
    EmptyQueryResponse, SearchParams, SortMode, SuggestParams, SuggestionsResponse, TypeFilter,
};
use crate::store::repository::{CommunityStore, SessionResolver};
use crate::store::types::{SearchHistoryEntry, now_ms};

pub async fn handle_search(
    Query(params): Query<SearchParams>,
    headers: HeaderMap,
    Extension(store): Extension<Arc<dyn CommunityStore>>,
    Extension(sessions): Extension<Arc<dyn SessionResolver>>,
) -> Response {
    let query = params.q.as_deref().unwrap_or("").trim();
    if query.is_empty() {
        return Json(EmptyQueryResponse::default()).into_response();
    }

    let filter = TypeFilter::from_param(params.kind.as_deref());
    let sort = SortMode::from_param(params.sort.as_deref());

    let results = engine::search(store.as_ref(), query, filter, sort).await;

    if let Some(user_id) = resolve_user(&headers, sessions.as_ref()).await {
        // The response never waits on the history write.
        let _ = record_search(store.clone(), user_id, query.to_string());
    }

    Json(results).into_response()
}

pub async fn handle_suggestions(
    Query(params): Query<SuggestParams>,
    Extension(store): Extension<Arc<dyn CommunityStore>>,
) -> Response {
    let query = params.q.as_deref().unwrap_or("").trim();
    if query.is_empty() {
        return Json(suggest::trending(store.as_ref(), now_ms()).await).into_response();
    }

    let suggestions = suggest::autocomplete(store.as_ref(), query).await;
    Json(SuggestionsResponse { suggestions }).into_response()
}

/// Appends one search to history on a detached task. A failed write is
/// logged and otherwise invisible to the caller.
pub(crate) fn record_search(
    store: Arc<dyn CommunityStore>,
    user_id: String,
    query: String,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let entry = SearchHistoryEntry::new(user_id, query);
        if let Err(err) = store.log_search(entry).await {
            tracing::warn!("Failed to record search history: {}", err);
        }
    })
}

/// Resolves the bearer token to a user id. Anything short of a
/// successful match, including resolver errors, means the search runs
/// anonymously.
async fn resolve_user(headers: &HeaderMap, sessions: &dyn SessionResolver) -> Option<String> {
    let token = bearer_token(headers)?;
    match sessions.resolve(token).await {
        Ok(user) => user,
        Err(err) => {
            tracing::warn!("Session lookup failed, treating search as anonymous: {}", err);
            None
        }
    }
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}
