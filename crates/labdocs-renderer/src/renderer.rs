use std::borrow::Cow;

use crate::escape::escape_html;
use crate::rules::pipeline;

/// Markdown to HTML renderer for lab documents.
///
/// Rendering is a pure function of the input: the same Markdown always yields
/// the same HTML, and no input can make it fail. The output is a fragment
/// meant to be embedded as-is, so by default nothing in the source is escaped.
///
/// # Example
///
/// ```
/// use labdocs_renderer::MarkdownRenderer;
///
/// let html = MarkdownRenderer::new().render("**bold** and *italic*");
/// assert!(html.contains("<strong"));
/// assert!(html.contains("<em"));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MarkdownRenderer {
    escape: bool,
}

impl MarkdownRenderer {
    /// Create a renderer that passes raw HTML in the source through.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Escape `&`, `<` and `>` in the source before any rule runs.
    #[must_use]
    pub fn with_escaping(mut self) -> Self {
        self.escape = true;
        self
    }

    /// Whether source HTML is escaped.
    #[must_use]
    pub fn escapes_html(&self) -> bool {
        self.escape
    }

    /// Render Markdown to an HTML fragment.
    #[must_use]
    pub fn render(&self, markdown: &str) -> String {
        let mut html = if self.escape {
            escape_html(markdown)
        } else {
            markdown.to_owned()
        };
        for rule in pipeline() {
            if let Cow::Owned(next) = rule.apply(&html) {
                html = next;
            }
        }
        html
    }
}
