//! Error types for the HTTP server.

use std::net::AddrParseError;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Server error type.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// No document exists for the requested slug.
    #[error("Page not found: {0}")]
    PageNotFound(String),

    /// No navigation item links to the requested route.
    #[error("Navigation item not found: {0}")]
    NavigationItemNotFound(String),

    /// Host and port do not form a socket address.
    #[error("Invalid listen address: {0}")]
    Address(#[from] AddrParseError),

    /// I/O error while binding or serving.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::PageNotFound(path) => (
                StatusCode::NOT_FOUND,
                json!({"error": "Page not found", "path": path}),
            ),
            Self::NavigationItemNotFound(path) => (
                StatusCode::NOT_FOUND,
                json!({"error": "Navigation item not found", "path": path}),
            ),
            Self::Address(_) | Self::Io(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({"error": self.to_string()}),
            ),
        };

        (status, axum::Json(body)).into_response()
    }
}
