//! Relevance Search Module
//!
//! The component behind `GET /search` and `GET /search/suggestions`.
//!
//! ## Overview
//! This module turns a raw query string into a scored, per-entity result
//! set. It bridges the HTTP API layer with the community data store and
//! owns every piece of ranking logic in the service.
//!
//! ## Responsibilities
//! - **Scoring**: Assigning each candidate an additive relevance score
//!   from text-match tiers, freshness, and view counts.
//! - **Aggregation**: Fanning one query out into bounded, concurrent,
//!   failure-isolated lookups across the five entity collections.
//! - **Ranking**: Ordering scored candidates by relevance, date, or
//!   popularity and truncating to display caps.
//! - **Suggestions**: Autocomplete over names and titles, plus trending
//!   queries and posts derived from recent activity.
//! - **API**: Exposing both endpoints via Axum handlers.
//!
//! ## Submodules
//! - **`engine`**: The aggregate/score/rank pipeline.
//! - **`handlers`**: HTTP request handlers for the Axum web server.
//! - **`scorer`**: The scoring function and the `Searchable` seam.
//! - **`suggest`**: Autocomplete and trending computations.
//! - **`types`**: Request parameters and response bodies.

pub mod engine;
pub mod handlers;
pub mod scorer;
pub mod suggest;
pub mod types;
