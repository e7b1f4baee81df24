//! Filesystem storage implementation for the lab documentation site.
//!
//! This crate provides [`FsDocumentStore`], a filesystem-based implementation
//! of the [`DocumentStore`](labdocs_storage::DocumentStore) trait. It handles:
//!
//! - Slug enumeration over the content root and its one-level subdirectories
//! - Slug-to-file resolution (`["modules", "kpi"]` → `modules/kpi.md`)
//! - Front-matter parsing and title derivation on every read
//!
//! Nothing is cached; every call reads the filesystem afresh.
//!
//! # Example
//!
//! ```ignore
//! use labdocs_storage::{DocumentStore, Slug};
//! use labdocs_storage_fs::FsDocumentStore;
//!
//! let store = FsDocumentStore::new("public/data-science-lab");
//! for slug in store.list_all_slugs() {
//!     if let Some(doc) = store.load_document(&slug) {
//!         println!("{slug}: {}", doc.title);
//!     }
//! }
//! ```

mod scanner;

use std::fs;
use std::path::{Path, PathBuf};

use labdocs_storage::{Document, DocumentStore, Slug, StorageError, parse_document};
use scanner::Scanner;

/// Subdirectories listed when none are configured.
pub const DEFAULT_SUBDIRECTORIES: &[&str] = &["modules", "tutorial"];

/// Filesystem-backed document store.
pub struct FsDocumentStore {
    root: PathBuf,
    scanner: Scanner,
}

impl FsDocumentStore {
    /// Create a store over `root` listing the default subdirectories.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let subdirectories: Vec<String> = DEFAULT_SUBDIRECTORIES
            .iter()
            .map(|s| (*s).to_owned())
            .collect();
        Self::with_subdirectories(root, &subdirectories)
    }

    /// Create a store over `root` listing the given subdirectories in order.
    #[must_use]
    pub fn with_subdirectories(root: impl Into<PathBuf>, subdirectories: &[String]) -> Self {
        let root = root.into();
        let scanner = Scanner::new(root.clone(), subdirectories.to_vec());
        Self { root, scanner }
    }

    /// Content root directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl DocumentStore for FsDocumentStore {
    fn list_all_slugs(&self) -> Vec<Slug> {
        match self.scanner.scan() {
            Ok(slugs) => slugs,
            Err(e) => {
                tracing::error!(root = %self.root.display(), error = %e, "Failed to list documents");
                Vec::new()
            }
        }
    }

    fn try_load(&self, slug: &Slug) -> Result<Option<Document>, StorageError> {
        let Some(relative) = slug.relative_path() else {
            return Err(StorageError::InvalidSlug(slug.clone()));
        };
        let path = self.root.join(relative);

        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(StorageError::io(e, path)),
        };

        tracing::debug!(slug = %slug, path = %path.display(), "Loaded document");
        parse_document(slug.clone(), &raw).map(Some)
    }
}
