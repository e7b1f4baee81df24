//! Navigation API endpoints.
//!
//! Serves the static sidebar tree and resolves which item a route highlights.

use axum::Json;
use axum::extract::Query;
use labdocs_nav::{NavItem, NavSection, find_item_by_path, navigation, section_of_item};
use labdocs_storage::Slug;
use serde::{Deserialize, Serialize};

use crate::error::ServerError;

/// Response for GET /api/navigation.
#[derive(Serialize)]
pub(crate) struct NavigationResponse {
    sections: &'static [NavSection],
}

/// Handle GET /api/navigation.
pub(crate) async fn get_navigation() -> Json<NavigationResponse> {
    Json(NavigationResponse {
        sections: navigation(),
    })
}

#[derive(Deserialize)]
pub(crate) struct ActiveQuery {
    /// Current route, e.g. `/docs/PROGRESS`.
    path: String,
}

/// Section summary attached to the active item.
#[derive(Serialize)]
struct SectionRef {
    id: &'static str,
    title: &'static str,
}

/// Response for GET /api/navigation/active.
#[derive(Serialize)]
pub(crate) struct ActiveResponse {
    item: &'static NavItem,
    section: SectionRef,
}

/// Handle GET /api/navigation/active?path=...
///
/// The route is normalised through [`Slug`] (doubled or trailing slashes
/// dropped), then matched exactly, as the sidebar does when highlighting.
pub(crate) async fn get_active(
    Query(query): Query<ActiveQuery>,
) -> Result<Json<ActiveResponse>, ServerError> {
    let Some(route) = Slug::from_route(&query.path)
        .filter(Slug::is_valid)
        .map(|slug| slug.route())
    else {
        return Err(ServerError::NavigationItemNotFound(query.path));
    };
    let (Some(item), Some(section)) = (find_item_by_path(&route), section_of_item(&route)) else {
        return Err(ServerError::NavigationItemNotFound(query.path));
    };

    Ok(Json(ActiveResponse {
        item,
        section: SectionRef {
            id: section.id,
            title: section.title,
        },
    }))
}
