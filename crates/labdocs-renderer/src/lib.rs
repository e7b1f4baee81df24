//! Markdown to HTML rendering for lab documents.
//!
//! This crate provides [`MarkdownRenderer`], which converts a Markdown subset
//! into a Tailwind-styled HTML fragment by running a fixed, ordered list of
//! rewrite rules (see [`pipeline`]):
//!
//! 1. Headings `#` to `####`
//! 2. Fenced code blocks, then inline code
//! 3. Unordered and ordered list lines
//! 4. Bold, then italic
//! 5. Links and horizontal rules
//! 6. Paragraph breaks on blank lines
//! 7. Status glyphs (✅ ⭐ 🟡) in unordered list items
//!
//! This is not a CommonMark parser. Each rule is a single textual pass, so
//! constructs nest only as far as the rule order allows.
//!
//! # Example
//!
//! ```
//! use labdocs_renderer::MarkdownRenderer;
//!
//! let html = MarkdownRenderer::new().render("# Hello\n\n- done ✅");
//! assert!(html.starts_with("<h1"));
//! ```

mod escape;
mod renderer;
mod rules;
mod styles;

pub use escape::escape_html;
pub use renderer::MarkdownRenderer;
pub use rules::{Rule, pipeline};
pub use styles::{GLYPH_STYLES, GlyphStyle, HEADING_STYLES, HeadingStyle};
