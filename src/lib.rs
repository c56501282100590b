//! Campus Community Search Library
//!
//! This library crate defines the modules behind the community search
//! service. It serves as the foundation for the binary executable
//! (`main.rs`).
//!
//! ## Architecture Modules
//! The service is composed of three loosely coupled subsystems:
//!
//! - **`config`**: Environment-driven runtime configuration (bind port,
//!   optional startup snapshot).
//! - **`search`**: The relevance engine. Scores candidates with an
//!   additive point system, fans queries out across entity collections
//!   with per-collection failure isolation, ranks and truncates the
//!   results, and serves autocomplete plus trending suggestions.
//! - **`store`**: The persistence boundary. Trait-based access to the
//!   community data (posts, users, notes, courses, announcements,
//!   search history) with an in-memory default backend.

pub mod config;
pub mod search;
pub mod store;
