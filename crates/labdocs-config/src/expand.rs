//! Environment references in the two deployment-specific settings.
//!
//! `server.host` and `docs.source_dir` differ between a laptop checkout and
//! the lab server, so both may name environment variables:
//! `${LAB_HOST}` must be set, `${LAB_ROOT:-public/data-science-lab}` falls
//! back to the text after `:-`.

use std::env::{self, VarError};

use crate::ConfigError;

/// Resolve `${VAR}` references in the value of config field `field`.
///
/// Bare `$` is literal (lab paths such as `notes/$draft` are left alone), so
/// only values containing `${` reach the expander.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    let resolved = shellexpand::env_with_context(value, |name: &str| match env::var(name) {
        Ok(found) => Ok(Some(found)),
        Err(VarError::NotPresent) => Err(format!("${{{name}}} not set")),
        Err(VarError::NotUnicode(_)) => Err(format!("${{{name}}} is not valid UTF-8")),
    })
    .map_err(|e| ConfigError::EnvVar {
        field: field.to_owned(),
        message: e.cause,
    })?;

    Ok(resolved.into_owned())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_expand_set_var() {
        // SAFETY: each test uses its own variable name
        unsafe {
            std::env::set_var("LABDOCS_TEST_HOST", "0.0.0.0");
        }
        assert_eq!(
            expand_env("${LABDOCS_TEST_HOST}", "server.host").unwrap(),
            "0.0.0.0"
        );
        unsafe {
            std::env::remove_var("LABDOCS_TEST_HOST");
        }
    }

    #[test]
    fn test_expand_default_when_unset() {
        // SAFETY: each test uses its own variable name
        unsafe {
            std::env::remove_var("LABDOCS_TEST_UNSET_DIR");
        }
        assert_eq!(
            expand_env("${LABDOCS_TEST_UNSET_DIR:-public/data-science-lab}", "docs.source_dir")
                .unwrap(),
            "public/data-science-lab"
        );
    }

    #[test]
    fn test_expand_embedded_var() {
        // SAFETY: each test uses its own variable name
        unsafe {
            std::env::set_var("LABDOCS_TEST_ROOT", "/srv");
        }
        assert_eq!(
            expand_env("${LABDOCS_TEST_ROOT}/lab/docs", "docs.source_dir").unwrap(),
            "/srv/lab/docs"
        );
        unsafe {
            std::env::remove_var("LABDOCS_TEST_ROOT");
        }
    }

    #[test]
    fn test_expand_missing_var_names_field_and_var() {
        // SAFETY: each test uses its own variable name
        unsafe {
            std::env::remove_var("LABDOCS_TEST_MISSING");
        }
        let err = expand_env("${LABDOCS_TEST_MISSING}", "server.host").unwrap_err();

        assert!(matches!(err, ConfigError::EnvVar { .. }));
        assert_eq!(
            err.to_string(),
            "Environment variable error in server.host: ${LABDOCS_TEST_MISSING} not set"
        );
    }

    #[test]
    fn test_values_without_braces_are_unchanged() {
        assert_eq!(expand_env("localhost", "server.host").unwrap(), "localhost");
        assert_eq!(expand_env("docs/$draft", "docs.source_dir").unwrap(), "docs/$draft");
    }
}
