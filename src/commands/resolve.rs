//! Resolve command - Print the directory behind an alias
//!
//! The shell function from `goto init` captures this output and changes
//! directory itself.

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use std::path::PathBuf;

use goto::{Alias, AliasStore, GotoError};

/// Result of looking up an alias
#[derive(Debug)]
pub enum Lookup {
    Found(PathBuf),
    /// Unknown alias, with registered aliases sharing its prefix
    Unknown(Vec<Alias>),
}

/// Look up `name`, falling back to prefix suggestions when it is unknown
pub fn lookup(store: &AliasStore, name: &str) -> Result<Lookup> {
    match store.resolve(name).context("Failed to read aliases")? {
        Some(path) => Ok(Lookup::Found(path)),
        // Suggestions are best effort
        None => Ok(Lookup::Unknown(
            store.find_similar(name).unwrap_or_default(),
        )),
    }
}

/// Execute the resolve command
pub fn execute(store: &AliasStore, name: &str) -> Result<()> {
    match lookup(store, name)? {
        Lookup::Found(path) => {
            println!("{}", path.display());
            Ok(())
        }
        Lookup::Unknown(similar) => {
            if !similar.is_empty() {
                eprintln!("{}", "Did you mean:".yellow());
                for alias in &similar {
                    eprintln!("  {} {}", alias.name.bold(), alias.path.display().dimmed());
                }
            }
            Err(GotoError::AliasNotFound(name.to_string()).into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_lookup_found() {
        let tmp = TempDir::new().unwrap();
        let store = AliasStore::in_dir(tmp.path());
        store.register("proj", tmp.path().to_str().unwrap()).unwrap();

        match lookup(&store, "proj").unwrap() {
            Lookup::Found(path) => assert_eq!(path, tmp.path()),
            other => panic!("expected a path, got {:?}", other),
        }
    }

    #[test]
    fn test_lookup_suggests_prefix_matches() {
        let tmp = TempDir::new().unwrap();
        let store = AliasStore::in_dir(tmp.path());
        let dir = tmp.path().to_str().unwrap();
        store.register("project", dir).unwrap();
        store.register("prototype", dir).unwrap();
        store.register("other", dir).unwrap();

        let Lookup::Unknown(similar) = lookup(&store, "pro").unwrap() else {
            panic!("'pro' is not registered");
        };
        let names: Vec<&str> = similar.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["project", "prototype"]);

        assert!(matches!(
            lookup(&store, "xyz").unwrap(),
            Lookup::Unknown(similar) if similar.is_empty()
        ));
    }

    #[test]
    fn test_execute_unknown_alias_errors() {
        let tmp = TempDir::new().unwrap();
        let store = AliasStore::in_dir(tmp.path());

        let err = execute(&store, "nope").unwrap_err();
        assert!(err.to_string().contains("nope"));
    }
}
