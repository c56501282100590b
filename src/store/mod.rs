//! Community Data Store Module
//!
//! Persistence boundary for the search service.
//!
//! ## Core Concepts
//! - **Traits first**: Handlers and the engine depend on `CommunityStore` and
//!   `SessionResolver`, never on a concrete backend.
//! - **Lenient reads**: Backends filter out hidden content (invisible or deleted
//!   posts, private notes, inactive announcements) so callers never re-check.
//! - **Deterministic order**: Every read returns newest-first rows with id as
//!   tiebreak, which keeps result ordering stable across identical requests.
//!
//! ## Submodules
//! - **`memory`**: The default `DashMap`-backed in-memory backend.
//! - **`repository`**: The store traits and `StoreError`.
//! - **`types`**: Record types and the startup `Snapshot` format.

pub mod memory;
pub mod repository;
pub mod types;
