//! Cleanup command - Remove aliases whose directories no longer exist

use anyhow::{Context, Result};
use owo_colors::OwoColorize;

use goto::AliasStore;

/// Execute the cleanup command
pub fn execute(store: &AliasStore, dry_run: bool) -> Result<()> {
    let stale = if dry_run {
        store.stale()
    } else {
        store.cleanup()
    }
    .context("Failed to clean up aliases")?;

    if stale.is_empty() {
        println!("No stale aliases found. Everything is clean!");
        return Ok(());
    }

    let label = if dry_run { "Would remove:" } else { "Removed:" };
    for alias in &stale {
        println!(
            "{} {} ({})",
            label.green(),
            alias.name.bold(),
            alias.path.display().dimmed()
        );
    }

    if dry_run {
        println!("\n{}", "(DRY-RUN) No changes made.".blue());
    } else {
        println!("\nCleaned up {} alias(es)", stale.len().to_string().green());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_dry_run_keeps_store() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("gone");
        fs::create_dir(&dir).unwrap();

        let store = AliasStore::in_dir(tmp.path());
        store.register("gone", dir.to_str().unwrap()).unwrap();
        fs::remove_dir(&dir).unwrap();

        execute(&store, true).unwrap();
        assert_eq!(store.list().unwrap().len(), 1);

        execute(&store, false).unwrap();
        assert!(store.list().unwrap().is_empty());
    }
}
