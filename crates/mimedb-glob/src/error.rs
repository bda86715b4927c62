/// Error types for glob pattern construction
use std::fmt;

/// Result type alias for glob operations
pub type Result<T> = std::result::Result<T, GlobError>;

/// Errors raised while building a glob pattern.
///
/// Construction only rejects the empty pattern; malformed bracket
/// expressions are a match-time concern and simply never match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GlobError {
    /// Pattern-related errors
    InvalidPattern(String),
}

impl fmt::Display for GlobError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GlobError::InvalidPattern(msg) => write!(f, "Invalid pattern: {}", msg),
        }
    }
}

impl std::error::Error for GlobError {}
