//! Configuration management for labdocs.
//!
//! Parses `labdocs.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ```toml
//! [server]
//! host = "127.0.0.1"
//! port = 7979
//!
//! [docs]
//! source_dir = "public/data-science-lab"
//! subdirectories = ["modules", "tutorial"]
//!
//! [render]
//! escape_html = false
//! ```
//!
//! ## Environment Variable Expansion
//!
//! `server.host` and `docs.source_dir` support `${VAR}` (error if unset) and
//! `${VAR:-default}`.

mod expand;

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "labdocs.toml";

/// Default content root, relative to the config file or the working directory.
pub const DEFAULT_SOURCE_DIR: &str = "public/data-science-lab";

/// Subdirectories listed when `docs.subdirectories` is not set.
const DEFAULT_SUBDIRECTORIES: [&str; 2] = ["modules", "tutorial"];

/// CLI settings that override configuration file values.
///
/// Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub source_dir: Option<PathBuf>,
    pub escape_html: Option<bool>,
}

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Server configuration.
    pub server: ServerConfig,
    /// Documentation configuration as written in TOML.
    docs: DocsConfigRaw,
    /// Rendering configuration.
    pub render: RenderConfig,

    /// Resolved docs configuration (set after loading).
    #[serde(skip)]
    pub docs_resolved: DocsConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Server configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Server host address.
    pub host: String,
    /// Server port.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 7979,
        }
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct DocsConfigRaw {
    source_dir: Option<String>,
    subdirectories: Option<Vec<String>>,
}

/// Resolved documentation configuration.
#[derive(Debug, Default)]
pub struct DocsConfig {
    /// Content root holding the Markdown files.
    pub source_dir: PathBuf,
    /// One-level subdirectories enumerated after the root, in order.
    pub subdirectories: Vec<String>,
}

/// Rendering configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Escape `&`, `<` and `>` in document sources before rendering.
    pub escape_html: bool,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`server.host`").
        field: String,
        /// Error message (e.g., "${`LAB_HOST`} not set").
        message: String,
    },
}

/// Require a directory name that stays one level below the content root.
fn require_single_component(name: &str, field: &str) -> Result<(), ConfigError> {
    if name.is_empty() || name == "." || name == ".." || name.contains(['/', '\\']) {
        return Err(ConfigError::Validation(format!(
            "{field} entries must be plain directory names, got {name:?}"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration, then apply CLI settings on top.
    ///
    /// An explicit `config_path` must exist. Without one, the nearest
    /// `labdocs.toml` in the current directory or an ancestor is used; if
    /// there is none, defaults resolve against the current directory.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, the file cannot
    /// be parsed or expanded, or the merged values fail validation.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let file = match config_path {
            Some(path) if !path.is_file() => {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Some(path) => Some(path.to_path_buf()),
            None => std::env::current_dir()
                .ok()
                .and_then(|cwd| find_config_file(&cwd)),
        };

        let mut config = match file {
            Some(path) => Self::from_file(&path)?,
            None => Self::default_with_base(&std::env::current_dir().unwrap_or_default()),
        };
        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }
        config.validate()?;

        Ok(config)
    }

    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        let CliSettings {
            host,
            port,
            source_dir,
            escape_html,
        } = settings;

        if let Some(host) = host {
            self.server.host.clone_from(host);
        }
        self.server.port = port.unwrap_or(self.server.port);
        if let Some(dir) = source_dir {
            self.docs_resolved.source_dir.clone_from(dir);
        }
        self.render.escape_html = escape_html.unwrap_or(self.render.escape_html);
    }

    fn default_with_base(base: &Path) -> Self {
        Self {
            server: ServerConfig::default(),
            docs: DocsConfigRaw::default(),
            render: RenderConfig::default(),
            docs_resolved: DocsConfig {
                source_dir: base.join(DEFAULT_SOURCE_DIR),
                subdirectories: default_subdirectories(),
            },
            config_path: None,
        }
    }

    /// Parse, expand and resolve `path`. Validation is left to the caller.
    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let mut config: Self = toml::from_str(&std::fs::read_to_string(path)?)?;
        config.expand_env_vars()?;
        config.resolve_paths(path.parent().unwrap_or(Path::new(".")));
        config.config_path = Some(path.to_path_buf());
        Ok(config)
    }

    /// Check the merged values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.host.trim().is_empty() {
            return Err(ConfigError::Validation("server.host is empty".to_owned()));
        }
        if self.server.port == 0 {
            return Err(ConfigError::Validation("server.port must be non-zero".to_owned()));
        }
        self.docs_resolved
            .subdirectories
            .iter()
            .try_for_each(|name| require_single_component(name, "docs.subdirectories"))
    }

    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.server.host = expand::expand_env(&self.server.host, "server.host")?;

        if let Some(ref source_dir) = self.docs.source_dir {
            self.docs.source_dir = Some(expand::expand_env(source_dir, "docs.source_dir")?);
        }

        Ok(())
    }

    /// Resolve the docs section against the config file's directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        self.docs_resolved = DocsConfig {
            source_dir: config_dir.join(
                self.docs
                    .source_dir
                    .as_deref()
                    .unwrap_or(DEFAULT_SOURCE_DIR),
            ),
            subdirectories: self
                .docs
                .subdirectories
                .clone()
                .unwrap_or_else(default_subdirectories),
        };
    }
}

/// Nearest `labdocs.toml` in `start` or one of its ancestors.
fn find_config_file(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join(CONFIG_FILENAME))
        .find(|candidate| candidate.is_file())
}

fn default_subdirectories() -> Vec<String> {
    Vec::from(DEFAULT_SUBDIRECTORIES.map(str::to_owned))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default_with_base(Path::new("/test"));

        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 7979);
        assert_eq!(
            config.docs_resolved.source_dir,
            PathBuf::from("/test/public/data-science-lab")
        );
        assert_eq!(
            config.docs_resolved.subdirectories,
            vec!["modules".to_owned(), "tutorial".to_owned()]
        );
        assert!(!config.render.escape_html);
        assert!(config.config_path.is_none());
    }

    #[test]
    fn test_parse_empty_config() {
        let config: Config = toml::from_str("").unwrap();

        assert_eq!(config.server.port, 7979);
        assert!(config.docs.source_dir.is_none());
        assert!(!config.render.escape_html);
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
[server]
host = "0.0.0.0"
port = 3000

[docs]
source_dir = "public/data-science-lab"
subdirectories = ["modules"]

[render]
escape_html = true
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        config.resolve_paths(Path::new("/project"));

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 3000);
        assert_eq!(
            config.docs_resolved.source_dir,
            PathBuf::from("/project/public/data-science-lab")
        );
        assert_eq!(config.docs_resolved.subdirectories, vec!["modules".to_owned()]);
        assert!(config.render.escape_html);
    }

    #[test]
    fn test_parse_unknown_type_is_error() {
        let result: Result<Config, _> = toml::from_str("[server]\nport = \"high\"\n");

        assert!(result.is_err());
    }

    #[test]
    fn test_validate_rejects_port_zero() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.server.port = 0;

        let err = config.validate().unwrap_err();

        assert!(matches!(err, ConfigError::Validation(ref msg) if msg.contains("server.port")));
    }

    #[test]
    fn test_validate_rejects_blank_host() {
        let mut config = Config::default_with_base(Path::new("/lab"));
        config.server.host = "  ".to_owned();

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_nested_subdirectory() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.docs_resolved.subdirectories = vec!["modules/extra".to_owned()];
        assert!(config.validate().is_err());

        config.docs_resolved.subdirectories = vec!["..".to_owned()];
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_apply_cli_settings() {
        let mut config = Config::default_with_base(Path::new("/test"));
        let overrides = CliSettings {
            port: Some(9000),
            source_dir: Some(PathBuf::from("/custom/docs")),
            escape_html: Some(true),
            ..Default::default()
        };

        config.apply_cli_settings(&overrides);

        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.docs_resolved.source_dir, PathBuf::from("/custom/docs"));
        assert!(config.render.escape_html);
    }

    #[test]
    fn test_load_empty_file_uses_lab_content_root() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("labdocs.toml");
        fs::write(&path, "").unwrap();

        let config = Config::load(Some(&path), None).unwrap();

        assert_eq!(
            config.docs_resolved.source_dir,
            temp_dir.path().join("public").join("data-science-lab")
        );
    }

    #[test]
    fn test_load_explicit_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("labdocs.toml");
        fs::write(&path, "[docs]\nsource_dir = \"content\"\n").unwrap();

        let config = Config::load(Some(&path), None).unwrap();

        assert_eq!(config.docs_resolved.source_dir, temp_dir.path().join("content"));
        assert_eq!(config.config_path.as_deref(), Some(path.as_path()));
    }

    #[test]
    fn test_load_explicit_file_with_cli_override() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("labdocs.toml");
        fs::write(&path, "[server]\nport = 8080\n").unwrap();
        let overrides = CliSettings {
            host: Some("::1".to_owned()),
            ..Default::default()
        };

        let config = Config::load(Some(&path), Some(&overrides)).unwrap();

        assert_eq!(config.server.host, "::1");
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn test_load_validates_cli_overrides() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("labdocs.toml");
        fs::write(&path, "").unwrap();
        let overrides = CliSettings {
            port: Some(0),
            ..Default::default()
        };

        let err = Config::load(Some(&path), Some(&overrides)).unwrap_err();

        assert_eq!(err.to_string(), "Configuration error: server.port must be non-zero");
    }

    #[test]
    fn test_find_config_file_in_ancestor() {
        let temp_dir = tempfile::tempdir().unwrap();
        let nested = temp_dir.path().join("public/data-science-lab");
        fs::create_dir_all(&nested).unwrap();
        fs::write(temp_dir.path().join("labdocs.toml"), "").unwrap();

        assert_eq!(
            find_config_file(&nested),
            Some(temp_dir.path().join("labdocs.toml"))
        );
    }

    #[test]
    fn test_load_missing_file() {
        let err = Config::load(Some(Path::new("/nonexistent/labdocs.toml")), None).unwrap_err();

        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn test_load_invalid_file_fails_validation() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("labdocs.toml");
        fs::write(&path, "[docs]\nsubdirectories = [\"\"]\n").unwrap();

        let err = Config::load(Some(&path), None).unwrap_err();

        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_load_expands_source_dir() {
        // SAFETY: the variable name is unique to this test
        unsafe {
            std::env::set_var("LABDOCS_TEST_CONTENT", "lab");
        }
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("labdocs.toml");
        fs::write(&path, "[docs]\nsource_dir = \"${LABDOCS_TEST_CONTENT}/docs\"\n").unwrap();

        let config = Config::load(Some(&path), None).unwrap();

        assert_eq!(
            config.docs_resolved.source_dir,
            temp_dir.path().join("lab/docs")
        );
        unsafe {
            std::env::remove_var("LABDOCS_TEST_CONTENT");
        }
    }
}
