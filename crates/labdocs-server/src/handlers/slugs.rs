//! Slug enumeration endpoint, used to pre-render every page.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use labdocs_storage::Slug;
use serde::Serialize;

use crate::state::AppState;

/// Response for GET /api/slugs.
#[derive(Serialize)]
pub(crate) struct SlugsResponse {
    /// Slugs as segment arrays, e.g. `["modules", "module-01-kpi-lab"]`.
    slugs: Vec<Slug>,
    /// Matching routes, e.g. `/docs/modules/module-01-kpi-lab`.
    routes: Vec<String>,
}

/// Handle GET /api/slugs.
pub(crate) async fn get_slugs(State(state): State<Arc<AppState>>) -> Json<SlugsResponse> {
    let slugs = state.site.slugs();
    let routes = slugs.iter().map(Slug::route).collect();
    Json(SlugsResponse { slugs, routes })
}
