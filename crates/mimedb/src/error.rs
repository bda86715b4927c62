//! Error types for the mimedb library
//!
//! Mimedb uses a unified error type that wraps errors from both matching
//! subcrates. A construction error always concerns a single type
//! definition; callers loading a database should skip the offending
//! definition and continue, isolating one bad record from the rest.

use thiserror::Error;

/// Main error type for mimedb operations
#[derive(Error, Debug)]
pub enum MimedbError {
    /// Error from magic rule construction
    #[error(transparent)]
    Magic(#[from] mimedb_magic::MagicError),

    /// Error from glob pattern construction
    #[error(transparent)]
    Glob(#[from] mimedb_glob::GlobError),

    /// Database error
    #[error("{0}")]
    Database(String),
}

/// Result type alias for mimedb operations
pub type Result<T> = std::result::Result<T, MimedbError>;

// Convenient conversions for common error types
impl From<String> for MimedbError {
    fn from(s: String) -> Self {
        MimedbError::Database(s)
    }
}

impl From<&str> for MimedbError {
    fn from(s: &str) -> Self {
        MimedbError::Database(s.to_string())
    }
}

// Re-export component error types for users who need them
pub use mimedb_glob::GlobError;
pub use mimedb_magic::MagicError;
