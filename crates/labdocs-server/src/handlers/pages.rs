//! Pages API endpoint.
//!
//! Renders the document behind a slug and returns it as JSON together with
//! the header data shown above it.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use labdocs_site::{Category, Page};
use labdocs_storage::Slug;
use md5::{Digest, Md5};
use serde::Serialize;

use crate::error::ServerError;
use crate::state::AppState;

/// Response for GET /api/pages/{slug}.
#[derive(Serialize)]
struct PageResponse {
    meta: PageMeta,
    /// Header trail, e.g. `["Data Science Lab", "Modules"]`.
    breadcrumbs: Vec<String>,
    /// Rendered HTML fragment.
    content: String,
}

/// Page metadata.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PageMeta {
    title: String,
    /// Route of the page (`/docs/...`).
    path: String,
    category: Category,
    category_label: &'static str,
    /// Minutes.
    reading_time: usize,
    word_count: usize,
    /// Front-matter keys, omitted when the document declares none.
    #[serde(skip_serializing_if = "Option::is_none")]
    front_matter: Option<serde_json::Value>,
}

impl PageResponse {
    fn from_page(page: Page) -> Self {
        let front_matter =
            (!page.front_matter.is_empty()).then(|| page.front_matter.into_value());
        Self {
            meta: PageMeta {
                title: page.title,
                path: page.slug.route(),
                category: page.category,
                category_label: page.category.label(),
                reading_time: page.reading_time,
                word_count: page.word_count,
                front_matter,
            },
            breadcrumbs: page.breadcrumbs,
            content: page.html,
        }
    }
}

/// Handle GET /api/pages/{*slug}.
pub(crate) async fn get_page(
    Path(path): Path<String>,
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Response, ServerError> {
    let slug = Slug::from_path(&path);
    let page = state
        .site
        .page(&slug)
        .ok_or_else(|| ServerError::PageNotFound(slug.route()))?;

    let etag = compute_etag(&state.version, &page.html);

    if let Some(if_none_match) = headers.get(header::IF_NONE_MATCH)
        && if_none_match.as_bytes() == etag.as_bytes()
    {
        return Ok(StatusCode::NOT_MODIFIED.into_response());
    }

    Ok((
        [
            (header::ETAG, etag),
            (header::CACHE_CONTROL, "no-cache".to_owned()),
        ],
        Json(PageResponse::from_page(page)),
    )
        .into_response())
}

/// Compute `ETag` from version and rendered HTML.
///
/// MD5 truncated to 64 bits (16 hex chars).
fn compute_etag(version: &str, html: &str) -> String {
    let hash = Md5::digest(format!("{version}:{html}").as_bytes());
    format!("\"{}\"", &hex::encode(hash)[..16])
}

#[cfg(test)]
mod tests {
    use labdocs_storage::FrontMatter;
    use pretty_assertions::assert_eq;

    use super::*;

    fn page(front_matter: FrontMatter) -> Page {
        Page {
            slug: Slug::new(["modules", "module-01-kpi-lab"]),
            title: "KPI Lab".to_owned(),
            html: "<h1>KPI Lab</h1>".to_owned(),
            front_matter,
            breadcrumbs: vec!["Data Science Lab".to_owned(), "Modules".to_owned()],
            category: Category::Modules,
            reading_time: 1,
            word_count: 3,
        }
    }

    #[test]
    fn test_compute_etag_format() {
        let etag = compute_etag("0.1.0", "content");

        assert!(etag.starts_with('"'));
        assert!(etag.ends_with('"'));
        assert_eq!(etag.len(), 18);
    }

    #[test]
    fn test_compute_etag_varies_with_version_and_content() {
        assert_ne!(compute_etag("0.1.0", "a"), compute_etag("0.1.1", "a"));
        assert_ne!(compute_etag("0.1.0", "a"), compute_etag("0.1.0", "b"));
        assert_eq!(compute_etag("0.1.0", "a"), compute_etag("0.1.0", "a"));
    }

    #[test]
    fn test_page_response_serialization() {
        let json = serde_json::to_value(PageResponse::from_page(page(FrontMatter::default())))
            .unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "meta": {
                    "title": "KPI Lab",
                    "path": "/docs/modules/module-01-kpi-lab",
                    "category": "modules",
                    "categoryLabel": "模組規格",
                    "readingTime": 1,
                    "wordCount": 3,
                },
                "breadcrumbs": ["Data Science Lab", "Modules"],
                "content": "<h1>KPI Lab</h1>",
            })
        );
    }

    #[test]
    fn test_page_response_includes_front_matter() {
        let front_matter = FrontMatter::parse("status: draft").unwrap();

        let json = serde_json::to_value(PageResponse::from_page(page(front_matter))).unwrap();

        assert_eq!(json["meta"]["frontMatter"]["status"], "draft");
    }
}
