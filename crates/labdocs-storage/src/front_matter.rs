//! YAML front-matter splitting and parsing.
//!
//! A front-matter block starts on the first line of a file with a `---`
//! delimiter and ends at the next line consisting of `---`. Everything
//! between is YAML; everything after the closing line is the body.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Front-matter delimiter line.
const DELIMITER: &str = "---";

/// Parsed front-matter: key-value pairs from the YAML header.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FrontMatter(Map<String, Value>);

impl FrontMatter {
    /// Parse front-matter from the YAML between the delimiters.
    ///
    /// Empty YAML and any top level other than a mapping (a scalar such as
    /// prose between two `---` rules, a list, `null`) yield an empty map.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML does not parse.
    pub fn parse(yaml: &str) -> Result<Self, FrontMatterError> {
        let trimmed = yaml.trim();
        if trimmed.is_empty() {
            return Ok(Self::default());
        }

        match serde_yaml::from_str::<Value>(trimmed).map_err(FrontMatterError::Yaml)? {
            Value::Object(map) => Ok(Self(map)),
            _ => Ok(Self::default()),
        }
    }

    /// Get a value by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Title declared in front-matter, if it is usable as one.
    ///
    /// Non-empty strings are used as-is and non-zero numbers are rendered as
    /// text. Other values (empty strings, `0`, booleans, lists, maps, null)
    /// are ignored.
    #[must_use]
    pub fn title(&self) -> Option<String> {
        match self.0.get("title")? {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Number(n) if n.as_f64().is_some_and(|f| f.abs() > 0.0) => Some(n.to_string()),
            _ => None,
        }
    }

    /// Number of keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when no keys were declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Convert into a JSON object value.
    #[must_use]
    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

impl From<Map<String, Value>> for FrontMatter {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// Error type for front-matter parsing.
#[derive(Debug, thiserror::Error)]
pub enum FrontMatterError {
    /// YAML that does not parse.
    #[error("Invalid front-matter: {0}")]
    Yaml(#[source] serde_yaml::Error),
}

/// Split raw file text into an optional YAML block and the body.
///
/// A leading byte-order mark is ignored. When the text does not open with a
/// `---` line the whole text is the body. An unterminated block swallows the
/// rest of the file and leaves an empty body. The line break after the
/// closing delimiter does not belong to the body.
#[must_use]
pub fn split_front_matter(text: &str) -> (Option<&str>, &str) {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    let Some(rest) = strip_opening_delimiter(text) else {
        return (None, text);
    };

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == DELIMITER {
            return (Some(&rest[..offset]), &rest[offset + line.len()..]);
        }
        offset += line.len();
    }

    (Some(rest), "")
}

/// Return the text after the opening delimiter line, if the text starts with one.
fn strip_opening_delimiter(text: &str) -> Option<&str> {
    let (first, rest) = text.split_once('\n').unwrap_or((text, ""));
    (first.trim_end() == DELIMITER).then_some(rest)
}
