//! Page assembly for the data science lab documentation site.
//!
//! [`Site`] resolves a [`Slug`](labdocs_storage::Slug) to a [`Page`]: it loads
//! the document from a store, renders the body, and derives the header data
//! shown above it (breadcrumbs, category, reading time, word count).
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//!
//! use labdocs_renderer::MarkdownRenderer;
//! use labdocs_site::Site;
//! use labdocs_storage::Slug;
//! use labdocs_storage_fs::FsDocumentStore;
//!
//! let site = Site::new(Arc::new(FsDocumentStore::new("public/data-science-lab")), MarkdownRenderer::new());
//! if let Some(page) = site.page(&Slug::new(["modules", "module-01-kpi-lab"])) {
//!     println!("{} ({} min)", page.title, page.reading_time);
//! }
//! ```

mod page;
mod site;

pub use page::{Category, Page, SITE_TITLE, breadcrumbs, reading_time, word_count};
pub use site::Site;
