//! Slug type: ordered URL path segments identifying a document.
//!
//! # Path Convention
//!
//! - `["guide"]` → `guide.md` at the content root
//! - `["modules", "kpi-lab"]` → `modules/kpi-lab.md`
//! - `["a", "b", "c"]` → `a/b/c.md`

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Route prefix under which documents are served.
const ROUTE_PREFIX: &str = "/docs";

/// Ordered sequence of URL path segments identifying a document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Slug(Vec<String>);

impl Slug {
    /// Create a slug from path segments.
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(segments.into_iter().map(Into::into).collect())
    }

    /// Parse a slash-separated URL path (`"modules/kpi-lab"`, `"/docs/guide"` is not stripped).
    ///
    /// Empty segments produced by leading, trailing or doubled slashes are dropped.
    #[must_use]
    pub fn from_path(path: &str) -> Self {
        Self::new(path.split('/').filter(|s| !s.is_empty()))
    }

    /// Parse a site route (`"/docs/modules/kpi-lab"`), stripping the `/docs` prefix.
    ///
    /// Returns `None` if the route is not under `/docs`.
    #[must_use]
    pub fn from_route(route: &str) -> Option<Self> {
        let rest = route.strip_prefix(ROUTE_PREFIX)?;
        if !rest.is_empty() && !rest.starts_with('/') {
            return None;
        }
        Some(Self::from_path(rest))
    }

    /// Path segments in order.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// Number of segments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when the slug has no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// First segment (the subdirectory for nested documents).
    #[must_use]
    pub fn first(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }

    /// Last segment (the file stem).
    #[must_use]
    pub fn last(&self) -> Option<&str> {
        self.0.last().map(String::as_str)
    }

    /// True when the slug names a file below the content root.
    ///
    /// Rejects empty slugs and segments that are empty, `.`, `..`, or
    /// contain a path separator, so a slug can never escape the root.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.0.is_empty()
            && self.0.iter().all(|s| {
                !s.is_empty() && s != "." && s != ".." && !s.contains(['/', '\\', '\0'])
            })
    }

    /// Relative file path for this slug (`a/b/c.md`).
    ///
    /// Returns `None` for invalid slugs.
    #[must_use]
    pub fn relative_path(&self) -> Option<PathBuf> {
        if !self.is_valid() {
            return None;
        }
        let (last, dirs) = self.0.split_last()?;
        let mut path: PathBuf = dirs.iter().collect();
        path.push(format!("{last}.md"));
        Some(path)
    }

    /// Site route for this slug (`/docs/a/b`).
    #[must_use]
    pub fn route(&self) -> String {
        if self.0.is_empty() {
            ROUTE_PREFIX.to_owned()
        } else {
            format!("{ROUTE_PREFIX}/{self}")
        }
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join("/"))
    }
}

impl From<Vec<String>> for Slug {
    fn from(segments: Vec<String>) -> Self {
        Self(segments)
    }
}

impl From<&[&str]> for Slug {
    fn from(segments: &[&str]) -> Self {
        Self::new(segments.iter().copied())
    }
}
