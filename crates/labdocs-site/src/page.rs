//! Rendered page and the header data derived from it.

use labdocs_storage::{FrontMatter, Slug};
use serde::Serialize;

/// Root breadcrumb shown on every page.
pub const SITE_TITLE: &str = "Data Science Lab";

/// Characters of body text read per minute.
const CHARS_PER_MINUTE: usize = 1000;

/// Content category, decided by the first slug segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Module specifications (`modules/...`).
    Modules,
    /// Tutorial material (`tutorial/...`).
    Tutorial,
    /// Everything else.
    Main,
}

impl Category {
    /// Categorise a slug.
    #[must_use]
    pub fn of(slug: &Slug) -> Self {
        match slug.first() {
            Some("modules") => Self::Modules,
            Some("tutorial") => Self::Tutorial,
            _ => Self::Main,
        }
    }

    /// Display label shown in the page header.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Modules => "模組規格",
            Self::Tutorial => "教學材料",
            Self::Main => "主要文檔",
        }
    }
}

/// A document rendered for display.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub slug: Slug,
    pub title: String,
    /// Rendered HTML fragment.
    pub html: String,
    pub front_matter: FrontMatter,
    /// Header trail: the site title, then the section for nested pages.
    pub breadcrumbs: Vec<String>,
    pub category: Category,
    /// Estimated reading time in minutes.
    pub reading_time: usize,
    pub word_count: usize,
}

/// Estimated reading time in whole minutes, rounded up.
///
/// Length is measured in UTF-16 code units, so an empty body reads in zero
/// minutes and a single character in one.
#[must_use]
pub fn reading_time(body: &str) -> usize {
    body.encode_utf16().count().div_ceil(CHARS_PER_MINUTE)
}

/// Number of pieces left when the body is split on runs of whitespace.
///
/// Leading or trailing whitespace contributes an empty piece, and an empty
/// body counts as one.
#[must_use]
pub fn word_count(body: &str) -> usize {
    let mut count = 1;
    let mut in_whitespace = false;
    for c in body.chars() {
        let is_whitespace = c.is_whitespace();
        if is_whitespace && !in_whitespace {
            count += 1;
        }
        in_whitespace = is_whitespace;
    }
    count
}

/// Breadcrumb trail for a slug.
#[must_use]
pub fn breadcrumbs(slug: &Slug) -> Vec<String> {
    let mut trail = vec![SITE_TITLE.to_owned()];
    if slug.len() > 1
        && let Some(section) = slug.first()
    {
        trail.push(capitalize(section));
    }
    trail
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
