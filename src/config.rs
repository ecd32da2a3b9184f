//! # Repository Configuration
//!
//! `.gyt/config.json` is a nested JSON object addressed with dotted keys
//! such as `user.name` or `remote.url`. [`RepoConfig`] wraps that object and
//! implements lookup and assignment by key, creating intermediate sections
//! on demand. Key order is preserved so rewrites keep the file stable.
//!
//! ## Example
//!
//! ```
//! use gyt::config::RepoConfig;
//!
//! let mut config = RepoConfig::initial();
//! config.set("user.name", "Ada").unwrap();
//! assert_eq!(config.get_str("user.name").unwrap(), Some("Ada"));
//! assert_eq!(config.remote_url(), None);
//! ```

use std::sync::LazyLock;

use regex::Regex;
use serde_json::{json, Map, Value};

use crate::error::{Error, Result};

/// Allowed characters for a single key segment.
const SEGMENT_PATTERN: &str = r"^[A-Za-z0-9_-]+$";

static SEGMENT_RE: LazyLock<std::result::Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(SEGMENT_PATTERN));

/// Configuration stored in `.gyt/config.json`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RepoConfig {
    root: Map<String, Value>,
}

impl RepoConfig {
    /// The configuration written by `gyt init`.
    pub fn initial() -> Self {
        let value = json!({
            "user": {
                "name": "",
                "email": ""
            },
            "remote": {
                "url": ""
            }
        });
        match value {
            Value::Object(root) => Self { root },
            _ => Self::default(),
        }
    }

    /// Wrap a parsed JSON document. Returns `None` unless it is an object.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(root) => Some(Self { root }),
            _ => None,
        }
    }

    /// The whole configuration as a JSON value.
    pub fn as_value(&self) -> Value {
        Value::Object(self.root.clone())
    }

    /// Pretty-printed JSON with two-space indentation.
    pub fn to_pretty_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.root)?)
    }

    /// Look up a dotted key. Missing keys yield `Ok(None)`.
    pub fn get(&self, key: &str) -> Result<Option<&Value>> {
        let segments = parse_key(key)?;
        let (first, rest) = match segments.split_first() {
            Some(split) => split,
            None => return Ok(None),
        };
        let mut current = match self.root.get(*first) {
            Some(value) => value,
            None => return Ok(None),
        };
        for segment in rest {
            current = match current.get(*segment) {
                Some(value) => value,
                None => return Ok(None),
            };
        }
        Ok(Some(current))
    }

    /// Look up a dotted key that holds a string.
    pub fn get_str(&self, key: &str) -> Result<Option<&str>> {
        Ok(self.get(key)?.and_then(Value::as_str))
    }

    /// Set a dotted key to a string value.
    ///
    /// Intermediate sections are created as needed; an intermediate that is
    /// not an object is replaced by one.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let segments = parse_key(key)?;
        let Some((last, parents)) = segments.split_last() else {
            return Err(invalid_key(key, "key is empty"));
        };

        let mut current = &mut self.root;
        for segment in parents {
            let entry = current
                .entry(segment.to_string())
                .or_insert_with(|| Value::Object(Map::new()));
            if !entry.is_object() {
                log::warn!("Replacing non-object value at '{}' while setting '{}'", segment, key);
                *entry = Value::Object(Map::new());
            }
            current = match entry {
                Value::Object(map) => map,
                _ => return Err(invalid_key(key, "cannot descend into a non-object")),
            };
        }
        current.insert(last.to_string(), Value::String(value.to_string()));
        log::debug!("Config {} set", key);
        Ok(())
    }

    /// The configured remote URL, if set to a non-empty string.
    pub fn remote_url(&self) -> Option<&str> {
        self.root
            .get("remote")
            .and_then(|remote| remote.get("url"))
            .and_then(Value::as_str)
            .filter(|url| !url.trim().is_empty())
    }
}

/// Split a dotted key into validated segments.
pub fn parse_key(key: &str) -> Result<Vec<&str>> {
    if key.is_empty() {
        return Err(invalid_key(key, "key is empty"));
    }
    let segment_re = SEGMENT_RE.as_ref().map_err(Clone::clone)?;
    let segments: Vec<&str> = key.split('.').collect();
    for segment in &segments {
        if segment.is_empty() {
            return Err(invalid_key(key, "empty segment"));
        }
        if !segment_re.is_match(segment) {
            return Err(invalid_key(
                key,
                &format!("segment '{}' may only contain letters, digits, '_' and '-'", segment),
            ));
        }
    }
    Ok(segments)
}

fn invalid_key(key: &str, reason: &str) -> Error {
    Error::InvalidConfigKey {
        key: key.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_key_reuses_compiled_pattern() {
        assert_eq!(parse_key("user.name").unwrap(), vec!["user", "name"]);
        assert!(SEGMENT_RE.as_ref().is_ok());
        assert!(parse_key("user.bad key").is_err());
    }

    #[test]
    fn test_initial_config_layout() {
        let config = RepoConfig::initial();
        assert_eq!(config.get_str("user.name").unwrap(), Some(""));
        assert_eq!(config.get_str("user.email").unwrap(), Some(""));
        assert_eq!(config.get_str("remote.url").unwrap(), Some(""));
    }

    #[test]
    fn test_initial_config_preserves_key_order() {
        let json = RepoConfig::initial().to_pretty_json().unwrap();
        let user = json.find("\"user\"").unwrap();
        let remote = json.find("\"remote\"").unwrap();
        assert!(user < remote);
    }

    #[test]
    fn test_set_existing_key() {
        let mut config = RepoConfig::initial();
        config.set("user.name", "Ada Lovelace").unwrap();
        assert_eq!(config.get_str("user.name").unwrap(), Some("Ada Lovelace"));
    }

    #[test]
    fn test_set_creates_sections() {
        let mut config = RepoConfig::default();
        config.set("core.display.width", "80").unwrap();
        assert_eq!(config.get_str("core.display.width").unwrap(), Some("80"));
        assert!(config.get("core.display").unwrap().unwrap().is_object());
    }

    #[test]
    fn test_set_replaces_non_object_intermediate() {
        let mut config = RepoConfig::initial();
        config.set("user.name", "Ada").unwrap();
        config.set("user.name.first", "Ada").unwrap();
        assert_eq!(config.get_str("user.name.first").unwrap(), Some("Ada"));
    }

    #[test]
    fn test_get_missing_key() {
        let config = RepoConfig::initial();
        assert_eq!(config.get("core.editor").unwrap(), None);
        assert_eq!(config.get("user.name.first").unwrap(), None);
    }

    #[test]
    fn test_get_section_returns_object() {
        let config = RepoConfig::initial();
        let user = config.get("user").unwrap().unwrap();
        assert!(user.is_object());
        assert_eq!(config.get_str("user").unwrap(), None);
    }

    #[test]
    fn test_parse_key_rejects_bad_keys() {
        for key in ["", ".", "user.", ".user", "user..name", "user name", "user.na$me"] {
            assert!(
                matches!(parse_key(key), Err(Error::InvalidConfigKey { .. })),
                "expected '{}' to be rejected",
                key
            );
        }
    }

    #[test]
    fn test_parse_key_splits_segments() {
        assert_eq!(parse_key("remote.url").unwrap(), vec!["remote", "url"]);
        assert_eq!(parse_key("core").unwrap(), vec!["core"]);
        assert_eq!(parse_key("a-b.c_d.9").unwrap(), vec!["a-b", "c_d", "9"]);
    }

    #[test]
    fn test_remote_url_ignores_blank() {
        let mut config = RepoConfig::initial();
        assert_eq!(config.remote_url(), None);
        config.set("remote.url", "  ").unwrap();
        assert_eq!(config.remote_url(), None);
        config.set("remote.url", "https://gythub.example").unwrap();
        assert_eq!(config.remote_url(), Some("https://gythub.example"));
    }

    #[test]
    fn test_from_value_requires_object() {
        assert!(RepoConfig::from_value(json!([])).is_none());
        assert!(RepoConfig::from_value(json!({})).is_some());
    }
}
