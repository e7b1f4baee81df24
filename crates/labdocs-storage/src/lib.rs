//! Document store abstraction for the labdocs documentation site.
//!
//! This crate provides a [`DocumentStore`] trait for resolving slugs to
//! Markdown documents and enumerating every slug the site can serve. This enables:
//!
//! - **Unit testing** without touching the real filesystem
//! - **Clean separation** between page assembly and I/O operations
//!
//! # Architecture
//!
//! The crate provides:
//! - [`Slug`]: ordered URL path segments identifying a document
//! - [`Document`]: body, front-matter and derived title of a loaded file
//! - [`DocumentStore`] trait with `list_all_slugs()`, `try_load()` and `load_document()`
//! - [`parse_document`]: front-matter splitting and title derivation shared by backends
//! - [`MockDocumentStore`] for testing (behind `mock` feature flag)
//!
//! The filesystem backend lives in `labdocs-storage-fs`.
//!
//! # Example
//!
//! ```ignore
//! use labdocs_storage::{DocumentStore, Slug};
//!
//! for slug in store.list_all_slugs() {
//!     if let Some(doc) = store.load_document(&slug) {
//!         println!("{slug}: {}", doc.title);
//!     }
//! }
//! ```

mod document;
mod front_matter;
#[cfg(feature = "mock")]
mod mock;
mod slug;
mod storage;

pub use document::{Document, UNTITLED, derive_title, parse_document};
pub use front_matter::{FrontMatter, FrontMatterError, split_front_matter};
#[cfg(feature = "mock")]
pub use mock::MockDocumentStore;
pub use slug::Slug;
pub use storage::{DocumentStore, StorageError};
