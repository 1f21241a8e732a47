//! Resolution of user-supplied directory arguments

use std::path::{Component, Path, PathBuf};

use super::alias::storable_path;
use crate::error::{GotoError, Result};

/// Expand a leading `~` to the home directory
pub fn expand_tilde(raw: &str, home: Option<&Path>) -> PathBuf {
    let Some(home) = home else {
        return PathBuf::from(raw);
    };
    if raw == "~" {
        home.to_path_buf()
    } else if let Some(rest) = raw.strip_prefix("~/") {
        home.join(rest)
    } else {
        PathBuf::from(raw)
    }
}

/// Collapse `.` and `..` components without touching the filesystem
///
/// Matches what a shell's logical `cd` does: `..` pops the previous
/// component even when it is a symlink.
pub fn normalize_lexically(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                // Popping past the root is a no-op, as with `cd /..`
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// Resolve a raw directory argument to an absolute, existing directory
pub fn resolve_directory(raw: &str, cwd: &Path, home: Option<&Path>) -> Result<PathBuf> {
    if raw.is_empty() {
        return Err(GotoError::PathNotFound(raw.to_string()));
    }

    let expanded = expand_tilde(raw, home);
    let absolute = if expanded.is_absolute() {
        expanded
    } else {
        cwd.join(expanded)
    };
    let resolved = normalize_lexically(&absolute);

    // The store holds one UTF-8 record per line
    if resolved.is_dir() && storable_path(&resolved).is_some() {
        Ok(resolved)
    } else {
        Err(GotoError::PathNotFound(raw.to_string()))
    }
}
