use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Custom error type for the FontInspect application
#[derive(Error, Debug)]
pub enum Error {
    /// IO operations errors
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    /// Unreadable or corrupt font data
    #[error("Font load error: {0}")]
    FontLoad(String),
    /// Invalid file or directory path
    #[error("Invalid path: {}", .0.display())]
    InvalidPath(PathBuf),
    /// No installed font matches the requested family
    #[error("Font not found: {0}")]
    FontNotFound(String),
    /// Malformed or missing resource files
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for FontInspect operations
pub type Result<T> = std::result::Result<T, Error>;
