//! Application state.
//!
//! Shared state for all request handlers.

use labdocs_site::Site;

/// Application state shared across all handlers.
pub(crate) struct AppState {
    /// Site resolving slugs to rendered pages.
    pub(crate) site: Site,
    /// Application version, mixed into page `ETag`s.
    pub(crate) version: String,
}
