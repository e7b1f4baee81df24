//! Slug discovery by directory listing.
//!
//! Only the content root and a fixed set of one-level subdirectories are
//! listed; deeper directories are never visited.

use std::fs;
use std::path::{Path, PathBuf};

use labdocs_storage::{Slug, StorageError};

/// Markdown file suffix.
const MD_SUFFIX: &str = ".md";

/// Discovers document slugs under a content root.
pub(crate) struct Scanner {
    root: PathBuf,
    subdirectories: Vec<String>,
}

impl Scanner {
    /// Create a new Scanner.
    ///
    /// # Arguments
    ///
    /// * `root` - Content root directory
    /// * `subdirectories` - One-level subdirectories to list after the root
    pub(crate) fn new(root: PathBuf, subdirectories: Vec<String>) -> Self {
        Self {
            root,
            subdirectories,
        }
    }

    /// List slugs: root files first, then each subdirectory in configured order.
    ///
    /// Missing subdirectories are skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if the root or an existing subdirectory cannot be listed.
    pub(crate) fn scan(&self) -> Result<Vec<Slug>, StorageError> {
        let mut slugs: Vec<Slug> = list_markdown_stems(&self.root)?
            .into_iter()
            .map(|stem| Slug::new([stem]))
            .collect();

        for subdir in &self.subdirectories {
            let dir = self.root.join(subdir);
            if !dir.is_dir() {
                tracing::debug!(dir = %dir.display(), "Subdirectory not present, skipping");
                continue;
            }
            slugs.extend(
                list_markdown_stems(&dir)?
                    .into_iter()
                    .map(|stem| Slug::new([subdir.clone(), stem])),
            );
        }

        Ok(slugs)
    }
}

/// List the stems of `*.md` files directly inside `dir`, sorted by name.
///
/// Hidden files, directories and non-UTF-8 names are skipped, as are stems
/// that could not be loaded back through a [`Slug`] (e.g. `a\b.md`).
fn list_markdown_stems(dir: &Path) -> Result<Vec<String>, StorageError> {
    let entries = fs::read_dir(dir).map_err(|e| StorageError::io(e, dir))?;

    let mut stems: Vec<String> = entries
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_ok_and(|t| !t.is_dir()))
        .filter_map(|e| e.file_name().into_string().ok())
        .filter(|name| !name.starts_with('.'))
        .filter_map(|name| name.strip_suffix(MD_SUFFIX).map(str::to_owned))
        .filter(|stem| {
            let loadable = Slug::new([stem.as_str()]).is_valid();
            if !loadable {
                tracing::debug!(
                    dir = %dir.display(),
                    stem = %stem,
                    "Skipping file not addressable by a slug"
                );
            }
            loadable
        })
        .collect();

    stems.sort();
    Ok(stems)
}
