//! List command - Show all registered aliases

use anyhow::{Context, Result};
use comfy_table::{presets::UTF8_FULL_CONDENSED, Cell, ContentArrangement, Table};

use goto::{Alias, AliasStore};

/// Options for the list command
pub struct ListOptions {
    /// Print a JSON array instead of a table
    pub json: bool,
}

/// Execute the list command and return formatted output
pub fn execute(store: &AliasStore, options: ListOptions) -> Result<String> {
    let aliases = store.list().context("Failed to read aliases")?;

    if options.json {
        return serde_json::to_string_pretty(&aliases).context("Failed to serialize aliases");
    }

    Ok(format_table(&aliases))
}

/// Render aliases as a table, or a notice when there are none
pub fn format_table(aliases: &[Alias]) -> String {
    if aliases.is_empty() {
        return "No aliases registered.".to_string();
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![Cell::new("Alias"), Cell::new("Path")]);

    for alias in aliases {
        let path = alias.path.display().to_string();
        let path_cell = if alias.path.is_dir() {
            Cell::new(path)
        } else {
            Cell::new(format!("{} (missing)", path))
        };
        table.add_row(vec![Cell::new(&alias.name), path_cell]);
    }

    format!("{}\n\n{} alias(es) registered", table, aliases.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_empty_store() {
        let tmp = TempDir::new().unwrap();
        let store = AliasStore::in_dir(tmp.path());
        let output = execute(&store, ListOptions { json: false }).unwrap();
        assert_eq!(output, "No aliases registered.");
    }

    #[test]
    fn test_table_lists_aliases() {
        let tmp = TempDir::new().unwrap();
        let aliases = vec![
            Alias::new("here", tmp.path()),
            Alias::new("gone", "/nonexistent/goto/dir"),
        ];

        let output = format_table(&aliases);
        assert!(output.contains("here"));
        assert!(output.contains("gone"));
        assert!(output.contains("(missing)"));
        assert!(output.ends_with("2 alias(es) registered"));
    }

    #[test]
    fn test_json_output() {
        let tmp = TempDir::new().unwrap();
        let store = AliasStore::in_dir(tmp.path());
        store.register("tmp", tmp.path().to_str().unwrap()).unwrap();

        let output = execute(&store, ListOptions { json: true }).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        let entries = parsed.as_array().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0]["name"], "tmp");
        assert_eq!(entries[0]["path"], tmp.path().to_str().unwrap());
    }
}
