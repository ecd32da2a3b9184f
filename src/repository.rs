//! # Repository Storage
//!
//! This module provides [`Repository`], the handle for a `.gyt` directory on
//! disk. It owns the layout of the three state files and every read and
//! write of them:
//!
//! - **`staging.json`**: milestones added with `gyt add` and not yet committed.
//! - **`commits.json`**: the append-only commit history, oldest first.
//! - **`config.json`**: the nested configuration edited with `gyt config`.
//!
//! Files are pretty-printed JSON. Every write goes to a sibling temporary
//! file that is then renamed over the target, so a file is always either
//! the old or the new version.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::RepoConfig;
use crate::defaults::{COMMITS_FILENAME, CONFIG_FILENAME, GYT_DIR_NAME, STAGING_FILENAME};
use crate::error::{Error, Result};
use crate::models::{Commit, Milestone};

/// Handle for the gyt repository rooted at a directory.
#[derive(Debug, Clone)]
pub struct Repository {
    root: PathBuf,
    gyt_dir: PathBuf,
}

impl Repository {
    /// Create a handle for `root`. Nothing is touched on disk.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let gyt_dir = root.join(GYT_DIR_NAME);
        Self { root, gyt_dir }
    }

    /// Open an existing repository, failing if `root` was never initialized.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let repo = Self::new(root);
        if !repo.is_initialized() {
            return Err(Error::NotARepository { path: repo.root });
        }
        Ok(repo)
    }

    /// The directory that contains `.gyt`.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The `.gyt` directory itself.
    pub fn gyt_dir(&self) -> &Path {
        &self.gyt_dir
    }

    fn staging_file(&self) -> PathBuf {
        self.gyt_dir.join(STAGING_FILENAME)
    }

    fn commits_file(&self) -> PathBuf {
        self.gyt_dir.join(COMMITS_FILENAME)
    }

    fn config_file(&self) -> PathBuf {
        self.gyt_dir.join(CONFIG_FILENAME)
    }

    /// Whether the `.gyt` directory exists.
    pub fn is_initialized(&self) -> bool {
        self.gyt_dir.exists()
    }

    /// Initialize the repository.
    ///
    /// Returns `Ok(false)` without modifying anything if `.gyt` already
    /// exists, `Ok(true)` after creating a fresh repository.
    pub fn init(&self) -> Result<bool> {
        if self.is_initialized() {
            debug!("Repository already present at {}", self.gyt_dir.display());
            return Ok(false);
        }

        fs::create_dir_all(&self.gyt_dir)?;
        write_json(&self.staging_file(), &Vec::<Milestone>::new())?;
        write_json(&self.commits_file(), &Vec::<Commit>::new())?;
        write_json(&self.config_file(), &RepoConfig::initial().as_value())?;
        info!("Initialized gyt repository in {}", self.gyt_dir.display());
        Ok(true)
    }

    /// Milestones currently in the staging area, in the order they were added.
    pub fn staged_milestones(&self) -> Result<Vec<Milestone>> {
        Ok(read_json(&self.staging_file())?.unwrap_or_default())
    }

    /// Append a milestone to the staging area.
    pub fn add_milestone(&self, milestone: Milestone) -> Result<()> {
        let mut staged = self.staged_milestones()?;
        staged.push(milestone);
        write_json(&self.staging_file(), &staged)?;
        info!("Staged milestone ({} pending)", staged.len());
        Ok(())
    }

    /// Empty the staging area.
    pub fn clear_staging(&self) -> Result<()> {
        write_json(&self.staging_file(), &Vec::<Milestone>::new())
    }

    /// All commits, oldest first.
    pub fn commits(&self) -> Result<Vec<Commit>> {
        Ok(read_json(&self.commits_file())?.unwrap_or_default())
    }

    /// Seal `commit` with its hash and append it to the history.
    pub fn add_commit(&self, mut commit: Commit) -> Result<Commit> {
        let mut commits = self.commits()?;
        commit.seal();
        commits.push(commit.clone());
        write_json(&self.commits_file(), &commits)?;
        info!("Recorded commit {} ({} total)", commit.short_hash(), commits.len());
        Ok(commit)
    }

    /// Commit everything in the staging area under `message`.
    ///
    /// Fails with [`Error::NothingStaged`] when staging is empty. On success
    /// the staging area is cleared and the sealed commit is returned. If
    /// staging cannot be cleared, the history is restored to its previous
    /// contents so a retry does not record the milestones twice.
    pub fn commit_staged(&self, message: &str) -> Result<Commit> {
        let staged = self.staged_milestones()?;
        if staged.is_empty() {
            return Err(Error::NothingStaged);
        }
        let previous = self.commits()?;
        let commit = self.add_commit(Commit::new(message, staged)?)?;
        if let Err(err) = self.clear_staging() {
            warn!("Could not clear staging, rolling back commit {}", commit.short_hash());
            write_json(&self.commits_file(), &previous)?;
            return Err(err);
        }
        Ok(commit)
    }

    /// The repository configuration. A missing file reads as empty.
    pub fn config(&self) -> Result<RepoConfig> {
        let path = self.config_file();
        match read_json::<serde_json::Value>(&path)? {
            None => Ok(RepoConfig::default()),
            Some(value) => RepoConfig::from_value(value).ok_or_else(|| Error::Corrupt {
                path,
                message: "expected a JSON object".to_string(),
            }),
        }
    }

    /// Set a dotted configuration key and persist the result.
    pub fn set_config(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.config()?;
        config.set(key, value)?;
        write_json(&self.config_file(), &config.as_value())
    }
}

/// Read and parse a JSON file. A missing file yields `Ok(None)`.
fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    if !path.exists() {
        debug!("{} does not exist, treating as empty", path.display());
        return Ok(None);
    }
    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content)
        .map(Some)
        .map_err(|e| Error::Corrupt {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
}

/// Serialize `value` as pretty JSON and atomically replace `path` with it.
fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let content = serde_json::to_string_pretty(value)?;
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, content)?;
    fs::rename(&tmp, path)?;
    debug!("Wrote {}", path.display());
    Ok(())
}
