//! Mock document store for testing.
//!
//! Provides [`MockDocumentStore`] for unit testing without filesystem access.

use std::io;

use crate::document::{Document, parse_document};
use crate::slug::Slug;
use crate::storage::{DocumentStore, StorageError};

#[derive(Debug)]
enum Entry {
    Raw(String),
    Unreadable,
}

/// Mock document store for testing.
///
/// Keeps raw file text in memory, in insertion order. Use the builder methods
/// to configure the mock with test data.
///
/// # Example
///
/// ```ignore
/// use labdocs_storage::{DocumentStore, MockDocumentStore, Slug};
///
/// let store = MockDocumentStore::new()
///     .with_document(["guide"], "# User Guide\n\nContent.")
///     .with_unreadable(["modules", "broken"]);
///
/// assert_eq!(store.list_all_slugs().len(), 2);
/// ```
#[derive(Debug, Default)]
pub struct MockDocumentStore {
    entries: Vec<(Slug, Entry)>,
}

impl MockDocumentStore {
    /// Create a new empty mock store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a document with the given slug segments and raw file text.
    #[must_use]
    pub fn with_document<I, S>(mut self, segments: I, raw: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.entries
            .push((Slug::new(segments), Entry::Raw(raw.into())));
        self
    }

    /// Add a document that is listed but fails to read.
    #[must_use]
    pub fn with_unreadable<I, S>(mut self, segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.entries.push((Slug::new(segments), Entry::Unreadable));
        self
    }
}

impl DocumentStore for MockDocumentStore {
    fn list_all_slugs(&self) -> Vec<Slug> {
        self.entries.iter().map(|(slug, _)| slug.clone()).collect()
    }

    fn try_load(&self, slug: &Slug) -> Result<Option<Document>, StorageError> {
        let Some((_, entry)) = self.entries.iter().find(|(s, _)| s == slug) else {
            return Ok(None);
        };
        match entry {
            Entry::Raw(raw) => parse_document(slug.clone(), raw).map(Some),
            Entry::Unreadable => Err(StorageError::io(
                io::Error::new(io::ErrorKind::PermissionDenied, "unreadable mock document"),
                slug.to_string(),
            )),
        }
    }
}
