//! Alias records and the on-disk line format
//!
//! Each alias is stored as a single line: `<name> <absolute-path>`.

use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use crate::error::{GotoError, Result};

/// A named bookmark for a directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Alias {
    pub name: String,
    pub path: PathBuf,
}

impl Alias {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }

    /// Parse a store line
    ///
    /// The name ends at the first space and the path is everything after it,
    /// so paths containing spaces survive a round trip. Returns `None` for
    /// blank lines and lines without a separator.
    pub fn parse_line(line: &str) -> Option<Self> {
        let line = line.trim_end_matches('\r');
        let (name, path) = line.split_once(' ')?;
        if name.is_empty() || path.is_empty() {
            return None;
        }
        Some(Self::new(name, path))
    }

    /// Render as a store line (no trailing newline)
    ///
    /// Returns `None` when the path cannot be stored on a single line.
    pub fn to_line(&self) -> Option<String> {
        let path = storable_path(&self.path)?;
        Some(format!("{} {}", self.name, path))
    }
}

/// The path as UTF-8 text, if it fits on one store line
pub fn storable_path(path: &Path) -> Option<&str> {
    path.to_str()
        .filter(|s| !s.is_empty() && !s.contains(['\n', '\r']))
}

impl fmt::Display for Alias {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.path.display())
    }
}

fn name_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[A-Za-z0-9][A-Za-z0-9_-]*$").expect("alias name pattern compiles")
    })
}

/// Check an alias name against the allowed syntax
pub fn validate_name(name: &str) -> Result<()> {
    if name_pattern().is_match(name) {
        Ok(())
    } else {
        Err(GotoError::InvalidName(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_names() {
        for name in ["proj", "a", "9lives", "my-app", "my_app", "A-b_C-1"] {
            assert!(validate_name(name).is_ok(), "{name} should be valid");
        }
    }

    #[test]
    fn test_invalid_names() {
        for name in ["", "-lead", "_lead", "has space", "dot.name", "slash/name", "ü"] {
            assert!(
                matches!(validate_name(name), Err(GotoError::InvalidName(_))),
                "{name:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_parse_line() {
        let alias = Alias::parse_line("proj /home/me/projects").unwrap();
        assert_eq!(alias.name, "proj");
        assert_eq!(alias.path, PathBuf::from("/home/me/projects"));
    }

    #[test]
    fn test_parse_line_keeps_spaces_in_path() {
        let alias = Alias::parse_line("docs /home/me/My Documents").unwrap();
        assert_eq!(alias.name, "docs");
        assert_eq!(alias.path, PathBuf::from("/home/me/My Documents"));
    }

    #[test]
    fn test_parse_line_strips_carriage_return() {
        let alias = Alias::parse_line("proj /tmp/x\r").unwrap();
        assert_eq!(alias.path, PathBuf::from("/tmp/x"));
    }

    #[test]
    fn test_parse_line_rejects_malformed() {
        assert!(Alias::parse_line("").is_none());
        assert!(Alias::parse_line("nospace").is_none());
        assert!(Alias::parse_line(" /leading/space").is_none());
        assert!(Alias::parse_line("trailing ").is_none());
    }

    #[test]
    fn test_to_line() {
        let alias = Alias::new("proj", "/tmp/x");
        assert_eq!(alias.to_line().as_deref(), Some("proj /tmp/x"));
        assert_eq!(alias.to_string(), "proj /tmp/x");
    }

    #[test]
    fn test_to_line_rejects_line_breaks() {
        assert!(Alias::new("proj", "/tmp/a\nevil /etc").to_line().is_none());
        assert!(Alias::new("proj", "/tmp/a\rb").to_line().is_none());
        assert_eq!(storable_path(Path::new("/tmp/My Docs")), Some("/tmp/My Docs"));
    }

    #[cfg(unix)]
    #[test]
    fn test_storable_path_rejects_non_utf8() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let path = Path::new(OsStr::from_bytes(b"/tmp/\xff"));
        assert!(storable_path(path).is_none());
    }
}
