//! Magic byte-matching rules for MIME type detection
//!
//! Implements the content-sniffing half of the freedesktop Shared MIME-info
//! model: decoding textual match rules into typed byte sequences, holding
//! them as immutable rule trees, and evaluating buffers against them.
//!
//! # Pipeline
//!
//! ```text
//! rule text ("string", "\x89PNG", offset "0")
//!     │ value::decode_*            escape expansion, base + endianness
//!     ▼
//! rule::MagicMatchNode             typed value, mask, offset range, children
//!     │ grouped per candidate type
//!     ▼
//! rule::MagicRuleSet               priority + top-level nodes
//!     │ eval::best_magic_candidate(buffer)
//!     ▼
//! Option<(candidate, priority)>
//! ```
//!
//! Rule sets are immutable after construction and hold no shared state, so
//! they can be evaluated concurrently from any number of threads.

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Error types for rule construction
pub mod error;
/// Rule evaluation over byte buffers
pub mod eval;
/// Match node and rule set construction
pub mod rule;
/// Validation for programmatically assembled rule sets
pub mod validation;
/// Textual value decoding (escapes, numeric bases, endianness)
pub mod value;

pub use error::{MagicError, Result};
pub use eval::{best_magic_candidate, evaluate_node, evaluate_rule_set};
pub use rule::{
    build_match_node, build_rule_set, MagicMatchNode, MagicRuleSet, OffsetRange, DEFAULT_PRIORITY,
};
pub use validation::{validate_rule_set, MagicStats, MagicValidationResult};
pub use value::MagicMatchType;
