//! # Milestones and Commits
//!
//! The two records gyt stores. A [`Milestone`] is a free-text unit of
//! progress that sits in the staging area until it is grouped into a
//! [`Commit`]. Both serialize to the JSON shapes found in
//! `.gyt/staging.json` and `.gyt/commits.json`.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::defaults::COMMIT_HASH_LEN;
use crate::error::{Error, Result};

/// A single milestone entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Milestone {
    pub message: String,
    #[serde(with = "timestamp")]
    pub timestamp: DateTime<Local>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Milestone {
    /// Create a milestone stamped with the current local time.
    ///
    /// The message is trimmed and must not be empty.
    pub fn new(message: &str) -> Result<Self> {
        Self::at(message, Local::now())
    }

    /// Create a milestone with an explicit timestamp.
    pub fn at(message: &str, timestamp: DateTime<Local>) -> Result<Self> {
        let message = message.trim();
        if message.is_empty() {
            return Err(Error::EmptyMessage { what: "Milestone" });
        }
        Ok(Self {
            message: message.to_string(),
            timestamp,
            tags: Vec::new(),
        })
    }

    /// Attach tags, dropping blanks and duplicates while keeping order.
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for tag in tags {
            let tag = tag.as_ref().trim();
            if !tag.is_empty() && !self.tags.iter().any(|t| t == tag) {
                self.tags.push(tag.to_string());
            }
        }
        self
    }
}

/// A commit containing one or more milestones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Commit {
    pub message: String,
    pub milestones: Vec<Milestone>,
    #[serde(with = "timestamp")]
    pub timestamp: DateTime<Local>,
    pub commit_hash: Option<String>,
}

impl Commit {
    /// Create an unhashed commit of `milestones`, stamped now.
    ///
    /// Fails if the message is blank or there is nothing to commit.
    pub fn new(message: &str, milestones: Vec<Milestone>) -> Result<Self> {
        Self::at(message, milestones, Local::now())
    }

    /// Create an unhashed commit with an explicit timestamp.
    pub fn at(
        message: &str,
        milestones: Vec<Milestone>,
        timestamp: DateTime<Local>,
    ) -> Result<Self> {
        let message = message.trim();
        if message.is_empty() {
            return Err(Error::EmptyMessage { what: "Commit" });
        }
        if milestones.is_empty() {
            return Err(Error::NothingStaged);
        }
        Ok(Self {
            message: message.to_string(),
            milestones,
            timestamp,
            commit_hash: None,
        })
    }

    /// Assign the commit hash derived from the timestamp and message.
    pub fn seal(&mut self) -> &str {
        let hash = compute_hash(&self.timestamp, &self.message);
        self.commit_hash.insert(hash)
    }

    /// The hash for display, or a placeholder for legacy unhashed entries.
    pub fn short_hash(&self) -> &str {
        self.commit_hash.as_deref().unwrap_or("--------")
    }
}

/// Derive a commit hash: the first 8 hex digits of
/// `SHA-256(rfc3339(timestamp) ++ message)`.
pub fn compute_hash(timestamp: &DateTime<Local>, message: &str) -> String {
    let input = format!("{}{}", timestamp.to_rfc3339(), message);
    let digest = Sha256::digest(input.as_bytes());
    let hex: String = digest.iter().map(|b| format!("{:02x}", b)).collect();
    hex[..COMMIT_HASH_LEN].to_string()
}

/// Timestamps are written as RFC 3339. Reading also accepts offset-less ISO
/// 8601 (`2024-05-01T09:30:00.123456`), interpreted as local time.
mod timestamp {
    use chrono::{DateTime, Local, NaiveDateTime, TimeZone};
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        value: &DateTime<Local>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_rfc3339())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<DateTime<Local>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).ok_or_else(|| de::Error::custom(format!("invalid timestamp '{}'", raw)))
    }

    fn parse(raw: &str) -> Option<DateTime<Local>> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(dt.with_timezone(&Local));
        }
        let naive = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").ok()?;
        Local.from_local_datetime(&naive).earliest()
    }
}
