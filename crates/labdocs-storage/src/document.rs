//! Loaded document type and title derivation.

use std::sync::LazyLock;

use regex::Regex;

use crate::front_matter::{FrontMatter, split_front_matter};
use crate::slug::Slug;
use crate::storage::StorageError;

/// Fallback title when neither front-matter nor a level-1 heading provides one.
pub const UNTITLED: &str = "Untitled";

/// First level-1 heading in a Markdown body.
static H1_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?mR)^#\s+(.+)$").expect("invalid h1 regex"));

/// A Markdown document read from storage.
///
/// Documents are read fresh on every load and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    /// Slug the document was loaded for.
    pub slug: Slug,
    /// Markdown body with the front-matter block removed.
    pub content: String,
    /// Key-value pairs from the front-matter block.
    pub front_matter: FrontMatter,
    /// Resolved title (front-matter `title` > first H1 > "Untitled").
    pub title: String,
}

/// Derive a document title.
///
/// Precedence: front-matter `title`, then the text of the first `# ` heading
/// in the body, then [`UNTITLED`]. Heading text is taken verbatim, trailing
/// whitespace included; only the line break is excluded.
#[must_use]
pub fn derive_title(front_matter: &FrontMatter, body: &str) -> String {
    if let Some(title) = front_matter.title() {
        return title;
    }
    H1_PATTERN
        .captures(body)
        .map_or_else(|| UNTITLED.to_owned(), |caps| caps[1].to_owned())
}

/// Parse raw file text into a [`Document`].
///
/// # Errors
///
/// Returns [`StorageError::FrontMatter`] if the front-matter block
/// is malformed.
pub fn parse_document(slug: Slug, raw: &str) -> Result<Document, StorageError> {
    let (yaml, body) = split_front_matter(raw);
    let front_matter = match yaml {
        Some(yaml) => FrontMatter::parse(yaml).map_err(|source| StorageError::FrontMatter {
            slug: slug.clone(),
            source,
        })?,
        None => FrontMatter::default(),
    };
    let title = derive_title(&front_matter, body);

    Ok(Document {
        slug,
        content: body.to_owned(),
        front_matter,
        title,
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn slug() -> Slug {
        Slug::new(["guide"])
    }

    #[test]
    fn test_title_from_front_matter() {
        let doc = parse_document(slug(), "---\ntitle: From Meta\n---\n# From Heading\n").unwrap();
        assert_eq!(doc.title, "From Meta");
    }

    #[test]
    fn test_front_matter_title_wins_over_heading() {
        let raw = "---\ntitle: Declared\n---\n\n# Heading One\n\nText";
        let doc = parse_document(slug(), raw).unwrap();
        assert_eq!(doc.title, "Declared");
        assert_eq!(doc.content, "\n# Heading One\n\nText");
    }

    #[test]
    fn test_title_from_first_h1() {
        let doc = parse_document(slug(), "Intro\n\n# First\n\n# Second").unwrap();
        assert_eq!(doc.title, "First");
    }

    #[test]
    fn test_title_ignores_h2() {
        let doc = parse_document(slug(), "## Not a title\n\nText").unwrap();
        assert_eq!(doc.title, UNTITLED);
    }

    #[test]
    fn test_title_requires_space_after_hash() {
        let doc = parse_document(slug(), "#hashtag\n").unwrap();
        assert_eq!(doc.title, UNTITLED);
    }

    #[test]
    fn test_title_excludes_crlf() {
        let doc = parse_document(slug(), "# Windows Title\r\n\r\nBody").unwrap();
        assert_eq!(doc.title, "Windows Title");
    }

    #[test]
    fn test_title_keeps_heading_text_verbatim() {
        let doc = parse_document(slug(), "# Title  \n\nBody").unwrap();
        assert_eq!(doc.title, "Title  ");

        let doc = parse_document(slug(), "#   ").unwrap();
        assert_eq!(doc.title, " ");
    }

    #[test]
    fn test_zero_front_matter_title_falls_back_to_heading() {
        let doc = parse_document(slug(), "---\ntitle: 0\n---\n# Real\n").unwrap();
        assert_eq!(doc.title, "Real");
    }

    #[test]
    fn test_prose_between_rules_is_not_an_error() {
        let doc = parse_document(slug(), "---\nSome intro text\n---\n# Title").unwrap();
        assert!(doc.front_matter.is_empty());
        assert_eq!(doc.title, "Title");
        assert_eq!(doc.content, "# Title");
    }

    #[test]
    fn test_untitled_fallback() {
        let doc = parse_document(slug(), "plain text").unwrap();
        assert_eq!(doc.title, "Untitled");
    }

    #[test]
    fn test_empty_front_matter_title_falls_back_to_heading() {
        let doc = parse_document(slug(), "---\ntitle: ''\n---\n# Heading").unwrap();
        assert_eq!(doc.title, "Heading");
    }

    #[test]
    fn test_front_matter_is_kept() {
        let doc = parse_document(slug(), "---\nstatus: done\n---\nBody").unwrap();
        assert_eq!(
            doc.front_matter.get("status"),
            Some(&serde_json::json!("done"))
        );
        assert_eq!(doc.content, "Body");
    }

    #[test]
    fn test_malformed_front_matter_is_error() {
        let err = parse_document(slug(), "---\ntitle: [oops\n---\nBody").unwrap_err();
        assert!(matches!(err, StorageError::FrontMatter { .. }));
        assert!(err.to_string().contains("guide"));
    }

    #[test]
    fn test_parse_is_deterministic() {
        let raw = "---\ntitle: Same\nn: 1\n---\n# Body\n";
        assert_eq!(
            parse_document(slug(), raw).unwrap(),
            parse_document(slug(), raw).unwrap()
        );
    }
}
