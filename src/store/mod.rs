//! Alias store backed by a line-oriented text file
//!
//! Every operation reloads the whole file into an ordered list of records.
//! Registration appends a line; unregistration and cleanup rewrite the file
//! through a temporary file that is renamed over the original, so an
//! interrupted write never leaves a truncated store.
//!
//! The store does not lock the file. Two processes writing at the same time
//! can lose updates.

pub mod alias;
pub mod paths;

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, warn};

use crate::error::{GotoError, Result};

pub use alias::{validate_name, Alias};

/// Default store file name inside the base directory
pub const STORE_FILE_NAME: &str = ".goto";

/// Outcome of a successful registration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    /// The record that was appended
    pub alias: Alias,
    /// Other aliases that already pointed at the same directory
    pub same_target: Vec<String>,
}

/// Handle to an alias store file
#[derive(Debug, Clone)]
pub struct AliasStore {
    path: PathBuf,
}

impl AliasStore {
    /// Use `path` as the store file
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Use `<base>/.goto` as the store file
    pub fn in_dir(base: impl AsRef<Path>) -> Self {
        Self::open(base.as_ref().join(STORE_FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the raw store contents; a missing file reads as empty
    fn read_raw(&self) -> Result<String> {
        match fs::read_to_string(&self.path) {
            Ok(content) => Ok(content),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(String::new()),
            Err(e) => Err(GotoError::io(&self.path, e)),
        }
    }

    /// Load all records in store order
    fn load(&self) -> Result<Vec<Alias>> {
        let content = self.read_raw()?;
        let mut aliases = Vec::new();

        for (index, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            match Alias::parse_line(line) {
                Some(alias) => aliases.push(alias),
                None => warn!(
                    store = %self.path.display(),
                    line = index + 1,
                    "skipping malformed alias line"
                ),
            }
        }

        Ok(aliases)
    }

    /// Register `name` for `raw_path`, resolving relative paths against the
    /// process working directory
    pub fn register(&self, name: &str, raw_path: &str) -> Result<Registration> {
        let cwd = std::env::current_dir().map_err(|e| GotoError::io(".", e))?;
        self.register_from(name, raw_path, &cwd)
    }

    /// Register `name` for `raw_path`, resolving relative paths against `cwd`
    pub fn register_from(&self, name: &str, raw_path: &str, cwd: &Path) -> Result<Registration> {
        validate_name(name)?;

        let home = dirs::home_dir();
        let resolved = paths::resolve_directory(raw_path, cwd, home.as_deref())?;

        let entries = self.load()?;
        if entries.iter().any(|a| a.name == name) {
            return Err(GotoError::AliasExists(name.to_string()));
        }

        let same_target = names_for_path(&entries, &resolved);
        let alias = Alias::new(name, resolved);
        self.append(&alias)?;

        debug!(alias = %alias.name, path = %alias.path.display(), "registered alias");

        Ok(Registration { alias, same_target })
    }

    /// Remove every line named `name`, returning the first matching record
    pub fn unregister(&self, name: &str) -> Result<Alias> {
        let removed = self
            .load()?
            .into_iter()
            .find(|a| a.name == name)
            .ok_or_else(|| GotoError::AliasNotFound(name.to_string()))?;

        self.rewrite_without(&[name])?;
        debug!(alias = %name, "unregistered alias");

        Ok(removed)
    }

    /// Path of the first record named exactly `name`
    pub fn resolve(&self, name: &str) -> Result<Option<PathBuf>> {
        Ok(self
            .load()?
            .into_iter()
            .find(|a| a.name == name)
            .map(|a| a.path))
    }

    /// Records whose name starts with `prefix`, in store order
    pub fn find_similar(&self, prefix: &str) -> Result<Vec<Alias>> {
        Ok(self
            .load()?
            .into_iter()
            .filter(|a| a.name.starts_with(prefix))
            .collect())
    }

    /// Names of records pointing at exactly `path`, in store order
    pub fn find_by_path(&self, path: &Path) -> Result<Vec<String>> {
        Ok(names_for_path(&self.load()?, path))
    }

    /// All records in store order
    pub fn list(&self) -> Result<Vec<Alias>> {
        self.load()
    }

    /// Records whose directory no longer exists, without modifying the store
    pub fn stale(&self) -> Result<Vec<Alias>> {
        Ok(self
            .load()?
            .into_iter()
            .filter(|a| !a.path.is_dir())
            .collect())
    }

    /// Unregister every alias whose directory no longer exists
    ///
    /// Staleness is decided on a snapshot taken before any rewrite. Removal
    /// is by name, so a duplicate line sharing the name goes too.
    pub fn cleanup(&self) -> Result<Vec<Alias>> {
        let removed = self.stale()?;
        if removed.is_empty() {
            return Ok(removed);
        }

        let names: Vec<&str> = removed.iter().map(|a| a.name.as_str()).collect();
        self.rewrite_without(&names)?;
        debug!(count = removed.len(), "cleaned up stale aliases");

        Ok(removed)
    }

    fn append(&self, alias: &Alias) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| GotoError::io(parent, e))?;
        }

        let record = alias
            .to_line()
            .ok_or_else(|| GotoError::PathNotFound(alias.path.display().to_string()))?;

        let existing = self.read_raw()?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| GotoError::io(&self.path, e))?;

        let mut line = String::new();
        if !existing.is_empty() && !existing.ends_with('\n') {
            line.push('\n');
        }
        line.push_str(&record);
        line.push('\n');

        file.write_all(line.as_bytes())
            .map_err(|e| GotoError::io(&self.path, e))
    }

    /// Atomically rewrite the store without lines named in `names`
    ///
    /// Lines that do not parse are kept as they are.
    fn rewrite_without(&self, names: &[&str]) -> Result<()> {
        let content = self.read_raw()?;
        let mut kept = String::with_capacity(content.len());

        for line in content.lines() {
            let drop = Alias::parse_line(line).is_some_and(|a| names.contains(&a.name.as_str()));
            if !drop {
                kept.push_str(line);
                kept.push('\n');
            }
        }

        let dir = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        let mut tmp = NamedTempFile::new_in(dir).map_err(|e| GotoError::io(dir, e))?;
        tmp.write_all(kept.as_bytes())
            .and_then(|_| tmp.as_file().sync_all())
            .map_err(|e| GotoError::io(tmp.path(), e))?;

        // Keep the store's mode; the temp file is created 0600
        if let Ok(metadata) = fs::metadata(&self.path) {
            fs::set_permissions(tmp.path(), metadata.permissions())
                .map_err(|e| GotoError::io(tmp.path(), e))?;
        }

        tmp.persist(&self.path)
            .map_err(|e| GotoError::io(&self.path, e.error))?;

        Ok(())
    }
}

fn names_for_path(entries: &[Alias], path: &Path) -> Vec<String> {
    entries
        .iter()
        .filter(|a| a.path.as_os_str() == path.as_os_str())
        .map(|a| a.name.clone())
        .collect()
}
