//! `labdocs serve` command implementation.

use clap::Args;
use labdocs_config::CliSettings;
use labdocs_server::{run_server, server_config_from_config};

use super::SourceArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the serve command.
#[derive(Args, Debug)]
pub(crate) struct ServeArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Host to bind to (overrides config).
    #[arg(long)]
    host: Option<String>,

    /// Port to bind to (overrides config).
    #[arg(short, long)]
    port: Option<u16>,

    /// Escape raw HTML in documents (overrides config).
    #[arg(long)]
    escape_html: bool,

    /// Enable verbose output (request and render timing logs).
    #[arg(short, long)]
    pub verbose: bool,
}

impl ServeArgs {
    /// Execute the serve command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or the server fails to start.
    pub(crate) async fn execute(self, version: &str) -> Result<(), CliError> {
        let output = Output::new();

        let settings = CliSettings {
            host: self.host,
            port: self.port,
            escape_html: self.escape_html.then_some(true),
            ..Default::default()
        };
        let config = self.source.load_config(settings)?;

        output.highlight(&format!(
            "Serving on http://{}:{}",
            config.server.host, config.server.port
        ));
        output.info(&format!(
            "Source directory: {}",
            config.docs_resolved.source_dir.display()
        ));
        output.info(&format!(
            "Subdirectories: {}",
            config.docs_resolved.subdirectories.join(", ")
        ));
        if config.render.escape_html {
            output.info("HTML escaping: enabled");
        }

        run_server(server_config_from_config(&config, version.to_owned())).await?;

        Ok(())
    }
}
