//! Unregister command - Remove an alias

use anyhow::{Context, Result};
use owo_colors::OwoColorize;

use goto::AliasStore;

/// Execute the unregister command
pub fn execute(store: &AliasStore, name: &str) -> Result<()> {
    let removed = store
        .unregister(name)
        .with_context(|| format!("Failed to unregister alias '{}'", name))?;

    println!(
        "{} {} ({})",
        "Unregistered:".green(),
        removed.name.bold(),
        removed.path.display().dimmed()
    );

    Ok(())
}
