//! Slug-to-page resolution.
//!
//! [`Site`] ties a [`DocumentStore`] to a [`MarkdownRenderer`]. Every call
//! reads from the store; nothing is cached between requests.

use std::sync::Arc;
use std::time::Instant;

use labdocs_renderer::MarkdownRenderer;
use labdocs_storage::{DocumentStore, Slug};

use crate::page::{Category, Page, breadcrumbs, reading_time, word_count};

fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}

/// Documentation site: resolves slugs to rendered pages.
pub struct Site {
    store: Arc<dyn DocumentStore>,
    renderer: MarkdownRenderer,
}

impl Site {
    /// Create a new site.
    ///
    /// # Arguments
    ///
    /// * `store` - Document store to read from
    /// * `renderer` - Renderer applied to every document body
    #[must_use]
    pub fn new(store: Arc<dyn DocumentStore>, renderer: MarkdownRenderer) -> Self {
        Self { store, renderer }
    }

    /// Load and render the page for `slug`.
    ///
    /// Returns `None` when the document does not exist or cannot be loaded.
    #[must_use]
    pub fn page(&self, slug: &Slug) -> Option<Page> {
        let start = Instant::now();
        let document = self.store.load_document(slug)?;
        let html = self.renderer.render(&document.content);

        tracing::debug!(
            slug = %slug,
            bytes = document.content.len(),
            escaped = self.renderer.escapes_html(),
            elapsed_ms = elapsed_ms(start),
            "Rendered page"
        );

        Some(Page {
            breadcrumbs: breadcrumbs(slug),
            category: Category::of(slug),
            reading_time: reading_time(&document.content),
            word_count: word_count(&document.content),
            slug: document.slug,
            title: document.title,
            html,
            front_matter: document.front_matter,
        })
    }

    /// Every slug the site can serve.
    #[must_use]
    pub fn slugs(&self) -> Vec<Slug> {
        self.store.list_all_slugs()
    }

    /// Route (`/docs/...`) for every slug the site can serve.
    #[must_use]
    pub fn static_routes(&self) -> Vec<String> {
        self.slugs().iter().map(Slug::route).collect()
    }
}
