//! CLI command implementations.

pub(crate) mod render;
pub(crate) mod serve;
pub(crate) mod slugs;

use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;
use labdocs_config::{CliSettings, Config, ConfigError};
use labdocs_renderer::MarkdownRenderer;
use labdocs_site::Site;
use labdocs_storage_fs::FsDocumentStore;

pub(crate) use render::RenderArgs;
pub(crate) use serve::ServeArgs;
pub(crate) use slugs::SlugsArgs;

/// Options shared by every command that reads documents.
#[derive(Args, Debug)]
pub(crate) struct SourceArgs {
    /// Path to configuration file (default: auto-discover labdocs.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Documentation source directory (overrides config).
    #[arg(short, long, env = "LABDOCS_SOURCE_DIR")]
    source_dir: Option<PathBuf>,
}

impl SourceArgs {
    /// Load the config, applying `settings` plus the source directory override.
    pub(crate) fn load_config(self, settings: CliSettings) -> Result<Config, ConfigError> {
        let settings = CliSettings {
            source_dir: self.source_dir,
            ..settings
        };
        let config = Config::load(self.config.as_deref(), Some(&settings))?;
        tracing::debug!(
            config_file = ?config.config_path,
            source_dir = %config.docs_resolved.source_dir.display(),
            subdirectories = ?config.docs_resolved.subdirectories,
            escape_html = config.render.escape_html,
            "Resolved configuration"
        );
        Ok(config)
    }
}

/// Build the site described by `config`.
pub(crate) fn open_site(config: &Config) -> Site {
    let store = FsDocumentStore::with_subdirectories(
        config.docs_resolved.source_dir.clone(),
        &config.docs_resolved.subdirectories,
    );
    let renderer = if config.render.escape_html {
        MarkdownRenderer::new().with_escaping()
    } else {
        MarkdownRenderer::new()
    };
    Site::new(Arc::new(store), renderer)
}
