//! Filename glob matching for MIME type detection
//!
//! Matches filenames against the literal, suffix, and general glob
//! patterns of a Shared MIME-info database, with per-pattern weights and
//! case sensitivity, and ranks every hit so the resolution policy can
//! merge filename evidence with content evidence.

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Error types for pattern construction
pub mod error;
/// Ranked multi-pattern matching
pub mod matcher;
/// Pattern representation and single-pattern matching
pub mod pattern;

pub use error::{GlobError, Result};
pub use matcher::match_name;
pub use pattern::{build_glob_pattern, GlobPattern, DEFAULT_WEIGHT};
