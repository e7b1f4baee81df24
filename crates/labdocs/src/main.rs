//! Labdocs CLI - data science lab documentation site.
//!
//! Provides commands for:
//! - `serve`: Start the documentation API server
//! - `slugs`: List every document slug (or route)
//! - `render`: Render one document to HTML on stdout

mod commands;
mod error;
mod output;

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{RenderArgs, ServeArgs, SlugsArgs};
use error::CliError;
use output::Output;

/// Application version from Cargo.toml.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Labdocs - data science lab documentation site.
#[derive(Parser)]
#[command(name = "labdocs", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the documentation server.
    Serve(ServeArgs),
    /// List every document slug.
    Slugs(SlugsArgs),
    /// Render one document to HTML.
    Render(RenderArgs),
}

fn run(command: Commands) -> Result<(), CliError> {
    match command {
        Commands::Serve(args) => {
            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(args.execute(VERSION))
        }
        Commands::Slugs(args) => args.execute(),
        Commands::Render(args) => args.execute(),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise RUST_LOG decides
    let verbose = matches!(&cli.command, Commands::Serve(args) if args.verbose);
    let filter = if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            output.error(&format!("Error: {err}"));
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_serve() {
        let cli = Cli::try_parse_from(["labdocs", "serve", "--port", "8080", "--verbose"]).unwrap();

        assert!(matches!(cli.command, Commands::Serve(ref args) if args.verbose));
    }

    #[test]
    fn test_parse_render_requires_slug() {
        assert!(Cli::try_parse_from(["labdocs", "render"]).is_err());
        assert!(Cli::try_parse_from(["labdocs", "render", "modules", "kpi", "--escape"]).is_ok());
    }

    #[test]
    fn test_parse_slugs_with_source_dir() {
        let cli = Cli::try_parse_from(["labdocs", "slugs", "--routes", "-s", "lab"]).unwrap();

        assert!(matches!(cli.command, Commands::Slugs(_)));
    }
}
