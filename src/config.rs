//! Store location

use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::store::STORE_FILE_NAME;

/// Environment variable that overrides the store file location
pub const DB_ENV: &str = "GOTO_DB";

/// Get the default alias store file (~/.goto)
pub fn default_db_path() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(STORE_FILE_NAME))
}

/// Pick the store file: an explicit path wins, otherwise ~/.goto
pub fn db_path(explicit: Option<PathBuf>) -> Result<PathBuf> {
    match explicit {
        Some(path) => Ok(path),
        None => default_db_path(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_path_wins() {
        let path = db_path(Some(PathBuf::from("/tmp/aliases"))).unwrap();
        assert_eq!(path, PathBuf::from("/tmp/aliases"));
    }

    #[test]
    fn test_default_path_file_name() {
        // Should not panic even without a home directory
        if let Ok(path) = db_path(None) {
            assert!(path.ends_with(".goto"));
        }
    }
}
