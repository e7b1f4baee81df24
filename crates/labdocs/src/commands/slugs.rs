//! `labdocs slugs` command implementation.

use clap::Args;
use labdocs_config::CliSettings;
use labdocs_site::Site;

use super::{SourceArgs, open_site};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the slugs command.
#[derive(Args, Debug)]
pub(crate) struct SlugsArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Print `/docs/...` routes instead of slugs.
    #[arg(long)]
    routes: bool,
}

impl SlugsArgs {
    /// Print every slug, one per line.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or stdout is closed.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = self.source.load_config(CliSettings::default())?;

        let lines = listing(&open_site(&config), self.routes);
        tracing::debug!(count = lines.len(), routes = self.routes, "Listed documents");
        for line in lines {
            output.print(&line)?;
        }
        Ok(())
    }
}

fn listing(site: &Site, routes: bool) -> Vec<String> {
    if routes {
        site.static_routes()
    } else {
        site.slugs().iter().map(ToString::to_string).collect()
    }
}
