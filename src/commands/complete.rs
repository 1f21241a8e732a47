//! Complete command - Alias name candidates for shell completion

use anyhow::Result;

use goto::AliasStore;

/// Alias names starting with `prefix`, one per line
pub fn candidates(store: &AliasStore, prefix: &str) -> Result<String> {
    let names: Vec<String> = store
        .find_similar(prefix)?
        .into_iter()
        .map(|a| a.name)
        .collect();
    Ok(names.join("\n"))
}

/// Execute the complete command
pub fn execute(store: &AliasStore, prefix: &str) -> Result<()> {
    let output = candidates(store, prefix)?;
    if !output.is_empty() {
        println!("{}", output);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_candidates() {
        let tmp = TempDir::new().unwrap();
        let store = AliasStore::in_dir(tmp.path());
        let dir = tmp.path().to_str().unwrap();
        store.register("web", dir).unwrap();
        store.register("api", dir).unwrap();
        store.register("webapp", dir).unwrap();

        assert_eq!(candidates(&store, "web").unwrap(), "web\nwebapp");
        assert_eq!(candidates(&store, "").unwrap(), "web\napi\nwebapp");
        assert_eq!(candidates(&store, "zzz").unwrap(), "");
    }
}
