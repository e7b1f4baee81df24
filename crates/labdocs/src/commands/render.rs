//! `labdocs render` command implementation.

use clap::Args;
use labdocs_config::CliSettings;
use labdocs_site::Site;
use labdocs_storage::Slug;

use super::{SourceArgs, open_site};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the render command.
#[derive(Args, Debug)]
pub(crate) struct RenderArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Slug segments, e.g. `modules module-01-kpi-lab` or `modules/module-01-kpi-lab`.
    #[arg(required = true, num_args = 1..)]
    slug: Vec<String>,

    /// Escape raw HTML in the document (overrides config).
    #[arg(long)]
    escape: bool,
}

impl RenderArgs {
    /// Render one document to stdout.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or the document does not exist.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let settings = CliSettings {
            escape_html: self.escape.then_some(true),
            ..Default::default()
        };
        let config = self.source.load_config(settings)?;
        let site = open_site(&config);

        output.print(&render_html(&site, &self.slug)?)?;
        Ok(())
    }
}

fn render_html(site: &Site, segments: &[String]) -> Result<String, CliError> {
    let slug = Slug::from_path(&segments.join("/"));
    let Some(page) = site.page(&slug) else {
        tracing::debug!(slug = %slug, "No document to render");
        return Err(CliError::PageNotFound(slug.route()));
    };
    tracing::debug!(slug = %slug, title = %page.title, bytes = page.html.len(), "Rendered document");
    Ok(page.html)
}
