//! Register command - Bookmark a directory under an alias

use anyhow::{Context, Result};
use owo_colors::OwoColorize;

use goto::AliasStore;

/// Execute the register command
pub fn execute(store: &AliasStore, name: &str, path: &str) -> Result<()> {
    let registration = store
        .register(name, path)
        .with_context(|| format!("Failed to register alias '{}'", name))?;

    println!(
        "{} {} -> {}",
        "Registered:".green(),
        registration.alias.name.bold(),
        registration.alias.path.display()
    );

    if !registration.same_target.is_empty() {
        eprintln!(
            "{} {} already point(s) to {}",
            "Note:".yellow(),
            registration.same_target.join(", "),
            registration.alias.path.display()
        );
    }

    Ok(())
}
