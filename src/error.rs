//! Error types for alias store operations

use std::path::PathBuf;
use thiserror::Error;

/// Errors reported by [`AliasStore`](crate::store::AliasStore) operations
#[derive(Error, Debug)]
pub enum GotoError {
    /// Alias name does not match `^[A-Za-z0-9][A-Za-z0-9_-]*$`
    #[error("Invalid alias name '{0}': use letters, digits, '_' or '-', starting with a letter or digit")]
    InvalidName(String),

    /// Target could not be entered as a directory
    #[error("Path does not exist or is not a directory: {0}")]
    PathNotFound(String),

    /// Alias is already registered
    #[error("Alias '{0}' already exists")]
    AliasExists(String),

    /// Alias is not registered
    #[error("Unregistered alias '{0}'")]
    AliasNotFound(String),

    /// Reading or writing the store file failed
    #[error("Failed to access alias store {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl GotoError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for store operations
pub type Result<T> = std::result::Result<T, GotoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_distinct() {
        let messages = [
            GotoError::InvalidName("x".to_string()).to_string(),
            GotoError::PathNotFound("x".to_string()).to_string(),
            GotoError::AliasExists("x".to_string()).to_string(),
            GotoError::AliasNotFound("x".to_string()).to_string(),
        ];

        for (i, a) in messages.iter().enumerate() {
            for b in messages.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_io_error_mentions_path() {
        let err = GotoError::io(
            "/tmp/store",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        let msg = err.to_string();
        assert!(msg.contains("/tmp/store"));
        assert!(msg.contains("denied"));
    }
}
