//! Document store trait and error types.
//!
//! # Failure Policy
//!
//! [`DocumentStore::try_load`] reports read and parse failures as errors.
//! [`DocumentStore::load_document`] logs them and reports the document as absent,
//! so a single broken file never takes a page request down with it.

use std::io;
use std::path::PathBuf;

use crate::document::Document;
use crate::front_matter::FrontMatterError;
use crate::slug::Slug;

/// Reason a document could not be listed or loaded.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Slug has no segments or a segment that would leave the content root.
    #[error("Invalid slug \"{0}\"")]
    InvalidSlug(Slug),

    /// File exists but its front-matter block is not a YAML mapping.
    #[error("Malformed front-matter in {slug}: {source}")]
    FrontMatter {
        slug: Slug,
        #[source]
        source: FrontMatterError,
    },

    /// File or directory exists but cannot be read (permissions, non-UTF-8 bytes).
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl StorageError {
    /// Wrap an I/O error with the path it concerns.
    #[must_use]
    pub fn io(source: io::Error, path: impl Into<PathBuf>) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether the underlying file content is not valid UTF-8.
    #[must_use]
    pub fn is_encoding(&self) -> bool {
        matches!(self, Self::Io { source, .. } if source.kind() == io::ErrorKind::InvalidData)
    }
}

/// Document store abstraction.
///
/// Resolves slugs to Markdown documents and enumerates every slug the site
/// can serve. Implementations read fresh on every call; nothing is cached.
pub trait DocumentStore: Send + Sync {
    /// Enumerate every document slug.
    ///
    /// Never fails: an unreadable content root yields an empty list and is
    /// logged by the implementation.
    fn list_all_slugs(&self) -> Vec<Slug>;

    /// Load a document, reporting read and parse failures.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(document))` - File exists and was parsed
    /// - `Ok(None)` - No file exists for this slug
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the slug cannot name a file below the
    /// content root, or the file exists but cannot be read or its
    /// front-matter is malformed.
    fn try_load(&self, slug: &Slug) -> Result<Option<Document>, StorageError>;

    /// Load a document, treating every failure as absence.
    ///
    /// Read and parse errors are logged and reported as `None`.
    fn load_document(&self, slug: &Slug) -> Option<Document> {
        self.try_load(slug)
            .inspect_err(|e| {
                tracing::warn!(slug = %slug, error = %e, "Failed to load document");
            })
            .ok()
            .flatten()
    }
}
