/// Error types for magic rule construction
use std::fmt;

/// Result type alias for magic rule operations
pub type Result<T> = std::result::Result<T, MagicError>;

/// Errors raised while decoding a single magic rule from its textual form.
///
/// All variants are construction-scoped: a failure invalidates only the one
/// rule being built, never the surrounding database. Evaluation functions
/// are total and never return these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MagicError {
    /// Numeric literal does not parse in the selected base or overflows
    /// its declared width
    MalformedNumber(String),

    /// Offset specification is not a valid `start` or `start:end` pair,
    /// or `end < start`
    MalformedOffset(String),

    /// Mask is missing the `0x` prefix, has an odd hex-digit count, or
    /// differs in length from the value
    MalformedMask(String),

    /// Value cannot be decoded for the declared match type
    MalformedValue(String),
}

impl fmt::Display for MagicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MagicError::MalformedNumber(msg) => write!(f, "Malformed number: {}", msg),
            MagicError::MalformedOffset(msg) => write!(f, "Malformed offset: {}", msg),
            MagicError::MalformedMask(msg) => write!(f, "Malformed mask: {}", msg),
            MagicError::MalformedValue(msg) => write!(f, "Malformed value: {}", msg),
        }
    }
}

impl std::error::Error for MagicError {}
