//! Error types for tagstrip

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for tagstrip
#[derive(Debug, Error)]
pub enum TagStripError {
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to scan directory: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Invalid tag name: {0}")]
    InvalidTagName(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Pattern error: {0}")]
    Pattern(#[from] regex::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),
}

impl TagStripError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            TagStripError::InvalidTagName(_)
            | TagStripError::Config(_)
            | TagStripError::TomlDeserialize(_) => 2,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            TagStripError::Read { path, source }
                if source.kind() == std::io::ErrorKind::NotFound =>
            {
                format!(
                    "File not found: {}\n\n\
                    Suggestions:\n\
                    • Check the path spelling\n\
                    • Paths are resolved relative to the current directory",
                    path.display()
                )
            }
            TagStripError::InvalidTagName(name) => {
                format!(
                    "Invalid tag name: '{}'\n\n\
                    Tag names start with a letter and may contain letters, digits, '_', '-', '.', ':'\n\n\
                    Examples:\n\
                    tagstrip --tag AppLayout src/pages\n\
                    tagstrip --tag Layout.Root src/App.tsx",
                    name
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using TagStripError
pub type Result<T> = std::result::Result<T, TagStripError>;
